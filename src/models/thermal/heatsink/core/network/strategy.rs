use std::{fmt, sync::OnceLock};

use log::{debug, warn};
use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};

#[cfg(feature = "air-properties")]
use crate::support::convection::AirPropertyCorrelation;
use crate::{
    models::thermal::heatsink::core::HeatsinkError,
    support::convection::{
        CorrelationError, FallbackCorrelation, FilmConditions, NaturalConvection,
    },
};

use super::Warning;

/// How the network obtains the convection coefficient.
#[derive(Clone, Copy)]
pub enum ConvectionStrategy<'a> {
    /// Use this correlation, falling back with a warning if it fails.
    Correlation(&'a dyn NaturalConvection),

    /// Always use the fallback formula.
    Fallback,
}

static SESSION: OnceLock<ConvectionStrategy<'static>> = OnceLock::new();

impl ConvectionStrategy<'static> {
    /// The property-backed correlation, if compiled in.
    ///
    /// # Errors
    ///
    /// Returns [`HeatsinkError::MissingOptionalDependency`] when the
    /// `air-properties` feature is disabled.
    pub fn detect() -> Result<Self, HeatsinkError> {
        #[cfg(feature = "air-properties")]
        {
            Ok(Self::Correlation(&AirPropertyCorrelation))
        }
        #[cfg(not(feature = "air-properties"))]
        {
            Err(HeatsinkError::MissingOptionalDependency {
                name: "air-properties",
            })
        }
    }

    /// Strategy shared by the whole process, detected on first use.
    ///
    /// A missing correlation is reported once and the fallback is used from
    /// then on.
    pub fn session() -> Self {
        *SESSION.get_or_init(|| {
            Self::detect().unwrap_or_else(|err| {
                warn!("{err}; natural convection uses the fallback formula");
                Self::Fallback
            })
        })
    }
}

impl ConvectionStrategy<'_> {
    /// Returns `h` and, when the fallback formula produced it, the warning to attach.
    ///
    /// # Errors
    ///
    /// Returns [`HeatsinkError::NumericDegenerate`] if even the fallback
    /// cannot produce a positive finite coefficient.
    pub(super) fn coefficient(
        &self,
        conditions: &FilmConditions,
    ) -> Result<(HeatTransfer, Option<Warning>), HeatsinkError> {
        let reason = match self {
            Self::Correlation(correlation) => match correlation.coefficient(conditions) {
                Ok(h) => return Ok((h, None)),
                Err(err) => {
                    debug!("{} failed ({err}); using fallback", correlation.name());
                    Some(format!("{}: {err}", correlation.name()))
                }
            },
            Self::Fallback => None,
        };

        let h = FallbackCorrelation::default()
            .coefficient(conditions)
            .map_err(degenerate)?;
        Ok((h, Some(Warning::FallbackConvection { reason })))
    }
}

impl fmt::Debug for ConvectionStrategy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correlation(correlation) => {
                f.debug_tuple("Correlation").field(&correlation.name()).finish()
            }
            Self::Fallback => f.write_str("Fallback"),
        }
    }
}

fn degenerate(err: CorrelationError) -> HeatsinkError {
    match err {
        CorrelationError::OutOfRange { quantity, value } => HeatsinkError::NumericDegenerate {
            field: quantity,
            value,
        },
        CorrelationError::NonFinite { quantity } => HeatsinkError::NumericDegenerate {
            field: quantity,
            value: f64::NAN,
        },
    }
}

/// Checks that a coefficient is usable.
pub(super) fn check_coefficient(h: HeatTransfer) -> Result<f64, HeatsinkError> {
    let value = h.get::<watt_per_square_meter_kelvin>();
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(HeatsinkError::NumericDegenerate { field: "h", value })
    }
}
