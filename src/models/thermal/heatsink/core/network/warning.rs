use std::fmt;

use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

/// Non-fatal conditions attached to a successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// The convection coefficient came from the simplified fallback formula,
    /// so humidity and pressure were ignored.
    FallbackConvection {
        /// Why the property-backed correlation was not used, if it failed.
        reason: Option<String>,
    },

    /// The solved surface temperature rise exceeds the plausibility limit.
    ImplausibleTemperatureRise {
        rise: TemperatureInterval,
        limit: TemperatureInterval,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FallbackConvection { reason: None } => write!(
                f,
                "convection from the fallback formula; humidity and pressure ignored"
            ),
            Self::FallbackConvection {
                reason: Some(reason),
            } => write!(
                f,
                "convection from the fallback formula ({reason}); humidity and pressure ignored"
            ),
            Self::ImplausibleTemperatureRise { rise, limit } => write!(
                f,
                "temperature rise of {:.1} K exceeds the plausible {:.1} K",
                rise.get::<delta_kelvin>(),
                limit.get::<delta_kelvin>()
            ),
        }
    }
}
