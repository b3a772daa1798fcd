use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::percent,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::{
    models::thermal::heatsink::core::HeatsinkError,
    support::constraint::{Constrained, UnitInterval},
};

/// Ambient air surrounding the heatsink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub ambient: ThermodynamicTemperature,

    /// Relative humidity as a fraction.
    pub relative_humidity: Constrained<f64, UnitInterval>,

    /// Absolute pressure.
    pub pressure: Pressure,
}

impl Environment {
    /// Sea-level standard atmosphere, in pascals.
    pub const STANDARD_PRESSURE: f64 = 101_325.0;

    /// Constructs a validated environment.
    ///
    /// # Errors
    ///
    /// Returns [`HeatsinkError::InvalidInput`] if the ambient temperature is
    /// not above absolute zero or the pressure is not strictly positive.
    pub fn new(
        ambient: ThermodynamicTemperature,
        relative_humidity: Constrained<f64, UnitInterval>,
        pressure: Pressure,
    ) -> Result<Self, HeatsinkError> {
        let t = ambient.get::<kelvin>();
        if !(t > 0.0 && t.is_finite()) {
            return Err(HeatsinkError::invalid_input(
                "environment.ambient",
                format!("must be above absolute zero, got {t} K"),
            ));
        }
        let p = pressure.get::<pascal>();
        if !(p > 0.0 && p.is_finite()) {
            return Err(HeatsinkError::invalid_input(
                "environment.pressure",
                format!("must be positive, got {p} Pa"),
            ));
        }
        Ok(Self {
            ambient,
            relative_humidity,
            pressure,
        })
    }

    /// Constructs an environment from display units: °C, percent and pascals.
    ///
    /// # Errors
    ///
    /// Returns [`HeatsinkError::InvalidInput`] if the humidity is outside
    /// 0–100 % or any value is unphysical.
    pub fn from_display(
        ambient_celsius: f64,
        humidity_percent: f64,
        pressure_pa: f64,
    ) -> Result<Self, HeatsinkError> {
        let relative_humidity = UnitInterval::new(
            Ratio::new::<percent>(humidity_percent).value,
        )
        .map_err(HeatsinkError::constraint("environment.relative_humidity"))?;

        Self::new(
            ThermodynamicTemperature::new::<degree_celsius>(ambient_celsius),
            relative_humidity,
            Pressure::new::<pascal>(pressure_pa),
        )
    }

    /// Returns a copy at a different ambient temperature.
    ///
    /// # Errors
    ///
    /// See [`Environment::new`].
    pub fn with_ambient(&self, ambient: ThermodynamicTemperature) -> Result<Self, HeatsinkError> {
        Self::new(ambient, self.relative_humidity, self.pressure)
    }

    /// Returns a copy at a different relative humidity.
    #[must_use]
    pub fn with_humidity(&self, relative_humidity: Constrained<f64, UnitInterval>) -> Self {
        Self {
            relative_humidity,
            ..*self
        }
    }

    /// Relative humidity in percent.
    #[must_use]
    pub fn humidity_percent(&self) -> f64 {
        self.relative_humidity.into_inner() * 100.0
    }
}

impl Default for Environment {
    /// 25 °C, 50 % relative humidity, standard pressure.
    fn default() -> Self {
        Self {
            ambient: ThermodynamicTemperature::new::<degree_celsius>(25.0),
            relative_humidity: UnitInterval::half(),
            pressure: Pressure::new::<pascal>(Self::STANDARD_PRESSURE),
        }
    }
}
