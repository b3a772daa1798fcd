use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};

use super::{CorrelationError, FilmConditions, NaturalConvection};

/// Simplified laminar vertical-plate correlation for air: `h = C·(ΔT/L)^0.25`.
///
/// Uses only the temperature rise and characteristic length. Humidity,
/// pressure and the film temperature have no effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackCorrelation {
    /// Correlation constant `C` in W/(m^1.75·K^1.25).
    pub constant: f64,
}

impl FallbackCorrelation {
    /// Laminar vertical plate in air at roughly atmospheric conditions.
    pub const LAMINAR_VERTICAL_PLATE: Self = Self { constant: 1.42 };

    /// Evaluates the correlation from raw SI values.
    #[must_use]
    pub fn coefficient_raw(&self, rise_kelvin: f64, length_meters: f64) -> f64 {
        self.constant * (rise_kelvin / length_meters).powf(0.25)
    }
}

impl Default for FallbackCorrelation {
    fn default() -> Self {
        Self::LAMINAR_VERTICAL_PLATE
    }
}

impl NaturalConvection for FallbackCorrelation {
    fn name(&self) -> &'static str {
        "laminar vertical plate (fallback)"
    }

    fn coefficient(&self, conditions: &FilmConditions) -> Result<HeatTransfer, CorrelationError> {
        let (rise, length) = conditions.rise_and_length()?;
        Ok(HeatTransfer::new::<watt_per_square_meter_kelvin>(
            self.coefficient_raw(rise, length),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::convection::test_conditions;

    #[test]
    fn matches_hand_calculation() {
        // 1.42 * (40 / 0.02)^0.25 = 1.42 * 2000^0.25
        let h = FallbackCorrelation::default()
            .coefficient(&test_conditions(25.0, 40.0, 0.02, 0.5))
            .unwrap();
        assert_relative_eq!(
            h.get::<watt_per_square_meter_kelvin>(),
            1.42 * 2000_f64.powf(0.25),
            max_relative = 1e-12
        );
    }

    #[test]
    fn humidity_has_no_effect() {
        let corr = FallbackCorrelation::default();
        let dry = corr.coefficient(&test_conditions(25.0, 40.0, 0.05, 0.0)).unwrap();
        let wet = corr.coefficient(&test_conditions(25.0, 40.0, 0.05, 1.0)).unwrap();
        assert_eq!(dry, wet);
    }

    #[test]
    fn rejects_zero_rise() {
        let result = FallbackCorrelation::default().coefficient(&test_conditions(25.0, 0.0, 0.05, 0.5));
        assert!(matches!(
            result,
            Err(CorrelationError::OutOfRange { quantity: "surface temperature rise", .. })
        ));
    }
}
