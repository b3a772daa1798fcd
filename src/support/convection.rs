//! Natural-convection heat transfer coefficients.
//!
//! The resistance network needs a convection coefficient `h` for the
//! heatsink's characteristic length at a given temperature rise. This module
//! defines the [`NaturalConvection`] seam and its two strategies:
//!
//! - [`AirPropertyCorrelation`] (feature `air-properties`, enabled by default):
//!   evaluates moist-air properties at the film temperature, adjusted for
//!   pressure and relative humidity, and applies the Churchill–Chu
//!   vertical-plate correlation.
//! - [`FallbackCorrelation`]: the classical laminar vertical-plate
//!   simplification `h = C·(ΔT/L)^0.25` for air. It ignores humidity and
//!   pressure.
//!
//! Which strategy a process uses is decided once, by the heatsink model's
//! session strategy selection.

#[cfg(feature = "air-properties")]
mod air_properties;
mod error;
mod fallback;
#[cfg(feature = "air-properties")]
mod moist_air;

#[cfg(feature = "air-properties")]
#[cfg_attr(docsrs, doc(cfg(feature = "air-properties")))]
pub use air_properties::AirPropertyCorrelation;
pub use error::CorrelationError;
pub use fallback::FallbackCorrelation;
#[cfg(feature = "air-properties")]
#[cfg_attr(docsrs, doc(cfg(feature = "air-properties")))]
pub use moist_air::{MoistAir, saturation_pressure};

use uom::si::{
    f64::{HeatTransfer, Length, Pressure, TemperatureInterval, ThermodynamicTemperature},
    length::meter,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::constraint::{Constrained, UnitInterval};

/// A natural-convection correlation for air.
///
/// Implementations must be reentrant: the network calls them from pure
/// evaluations and never retries a failed call.
pub trait NaturalConvection: Send + Sync {
    /// Short identifier used in logs and warnings.
    fn name(&self) -> &'static str;

    /// Returns the mean convection coefficient for the given conditions.
    ///
    /// # Errors
    ///
    /// Returns a [`CorrelationError`] if the conditions are outside the
    /// correlation's validity range or produce a non-finite result.
    fn coefficient(&self, conditions: &FilmConditions) -> Result<HeatTransfer, CorrelationError>;
}

/// Conditions at the surface/air boundary layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilmConditions {
    /// Ambient air temperature far from the surface.
    pub ambient: ThermodynamicTemperature,

    /// Surface temperature rise above ambient.
    pub surface_rise: TemperatureInterval,

    /// Length scale of the convecting surface (plate or fin height).
    pub characteristic_length: Length,

    /// Relative humidity of the ambient air as a fraction.
    pub relative_humidity: Constrained<f64, UnitInterval>,

    /// Absolute ambient pressure.
    pub pressure: Pressure,
}

impl FilmConditions {
    /// Mean of the surface and ambient temperatures.
    #[must_use]
    pub fn film_temperature(&self) -> ThermodynamicTemperature {
        self.ambient + self.surface_rise / 2.0
    }

    /// Returns the rise in kelvin and the characteristic length in meters.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError::OutOfRange`] if either is not strictly positive.
    pub(crate) fn rise_and_length(&self) -> Result<(f64, f64), CorrelationError> {
        let rise = self.surface_rise.get::<delta_kelvin>();
        let length = self.characteristic_length.get::<meter>();

        if !(rise > 0.0 && rise.is_finite()) {
            return Err(CorrelationError::OutOfRange {
                quantity: "surface temperature rise",
                value: rise,
            });
        }
        if !(length > 0.0 && length.is_finite()) {
            return Err(CorrelationError::OutOfRange {
                quantity: "characteristic length",
                value: length,
            });
        }
        Ok((rise, length))
    }
}

#[cfg(test)]
pub(crate) fn test_conditions(
    ambient_celsius: f64,
    rise_kelvin: f64,
    length_meters: f64,
    relative_humidity: f64,
) -> FilmConditions {
    use uom::si::{pressure::pascal, thermodynamic_temperature::degree_celsius};

    FilmConditions {
        ambient: ThermodynamicTemperature::new::<degree_celsius>(ambient_celsius),
        surface_rise: TemperatureInterval::new::<delta_kelvin>(rise_kelvin),
        characteristic_length: Length::new::<meter>(length_meters),
        relative_humidity: UnitInterval::new(relative_humidity).unwrap(),
        pressure: Pressure::new::<pascal>(101_325.0),
    }
}
