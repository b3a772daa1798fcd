use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values in [`uom`] does not
/// yield a [`TemperatureInterval`]; see
/// [#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn surface_rise_above_ambient() {
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let surface = ThermodynamicTemperature::new::<degree_celsius>(65.0);

        assert_relative_eq!(
            surface.minus(ambient).get::<delta_kelvin>(),
            40.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            ambient.minus(surface).get::<delta_kelvin>(),
            -40.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn celsius_and_kelvin_agree() {
        let t_c = ThermodynamicTemperature::new::<degree_celsius>(0.0);
        let t_k = ThermodynamicTemperature::new::<abs_kelvin>(273.15);
        assert_relative_eq!(t_k.minus(t_c).get::<delta_kelvin>(), 0.0, epsilon = 1e-9);
    }
}
