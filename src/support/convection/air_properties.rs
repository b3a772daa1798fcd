use uom::si::{
    dynamic_viscosity::pascal_second, f64::HeatTransfer,
    heat_transfer::watt_per_square_meter_kelvin, length::meter,
    mass_density::kilogram_per_cubic_meter,
    thermal_conductivity::watt_per_meter_kelvin, thermodynamic_temperature::kelvin,
};

use super::{CorrelationError, FilmConditions, MoistAir, NaturalConvection};

const GRAVITY: f64 = 9.806_65;

/// Upper Rayleigh number of the laminar Churchill–Chu form.
const LAMINAR_RAYLEIGH_LIMIT: f64 = 1e9;

/// Upper Rayleigh number of the full-range Churchill–Chu form.
const MAX_RAYLEIGH: f64 = 1e12;

/// Churchill–Chu vertical-plate correlation with moist-air properties.
///
/// Properties are evaluated at the film temperature. The thermal expansion
/// coefficient is taken as `1/T_film` (ideal gas). For `Ra ≤ 1e9` the laminar
/// form is used:
///
/// `Nu = 0.68 + 0.670·Ra^(1/4) / [1 + (0.492/Pr)^(9/16)]^(4/9)`
///
/// and above it the full-range form, up to `Ra = 1e12`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AirPropertyCorrelation;

impl AirPropertyCorrelation {
    /// Returns the Rayleigh number along with the air properties it was evaluated from.
    ///
    /// # Errors
    ///
    /// Returns a [`CorrelationError`] if the conditions are out of range.
    pub fn rayleigh(&self, conditions: &FilmConditions) -> Result<(f64, MoistAir), CorrelationError> {
        let (rise, length) = conditions.rise_and_length()?;
        let film = conditions.film_temperature();
        let air = MoistAir::at(film, conditions.pressure, conditions.relative_humidity)?;

        let beta = 1.0 / film.get::<kelvin>();
        let rho = air.density.get::<kilogram_per_cubic_meter>();
        let mu = air.viscosity.get::<pascal_second>();
        let grashof = GRAVITY * beta * rise * length.powi(3) * rho * rho / (mu * mu);

        Ok((grashof * air.prandtl, air))
    }
}

impl NaturalConvection for AirPropertyCorrelation {
    fn name(&self) -> &'static str {
        "Churchill-Chu vertical plate (moist air)"
    }

    fn coefficient(&self, conditions: &FilmConditions) -> Result<HeatTransfer, CorrelationError> {
        let (ra, air) = self.rayleigh(conditions)?;
        let pr = air.prandtl;

        if !ra.is_finite() {
            return Err(CorrelationError::NonFinite {
                quantity: "Rayleigh number",
            });
        }
        if ra > MAX_RAYLEIGH {
            return Err(CorrelationError::OutOfRange {
                quantity: "Rayleigh number",
                value: ra,
            });
        }

        let prandtl_factor = 1.0 + (0.492 / pr).powf(9.0 / 16.0);
        let nusselt = if ra <= LAMINAR_RAYLEIGH_LIMIT {
            0.68 + 0.670 * ra.powf(0.25) / prandtl_factor.powf(4.0 / 9.0)
        } else {
            (0.825 + 0.387 * ra.powf(1.0 / 6.0) / prandtl_factor.powf(8.0 / 27.0)).powi(2)
        };

        let length = conditions.characteristic_length.get::<meter>();
        let h = nusselt * air.conductivity.get::<watt_per_meter_kelvin>() / length;
        if !h.is_finite() {
            return Err(CorrelationError::NonFinite {
                quantity: "convection coefficient",
            });
        }

        Ok(HeatTransfer::new::<watt_per_square_meter_kelvin>(h))
    }
}
