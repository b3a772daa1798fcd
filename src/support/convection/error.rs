use thiserror::Error;

/// Errors raised by a [`NaturalConvection`](super::NaturalConvection) strategy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CorrelationError {
    /// An input or intermediate value lies outside the correlation's validity range.
    #[error("{quantity} out of range: {value}")]
    OutOfRange { quantity: &'static str, value: f64 },

    /// The evaluation produced a non-finite value.
    #[error("{quantity} is not finite")]
    NonFinite { quantity: &'static str },
}
