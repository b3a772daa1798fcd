//! Moist air transport properties.
//!
//! Dry air and water vapour are treated as an ideal-gas mixture: `ρ = p_a/(R_a·T)
//! + p_v/(R_v·T)`, with the vapour partial pressure `p_v = RH·p_sat(T)` from the
//! Tetens saturation formula. Viscosity and thermal conductivity follow
//! Sutherland's law for dry air.

use uom::si::{
    f64::{DynamicViscosity, MassDensity, Pressure, ThermalConductivity, ThermodynamicTemperature},
    dynamic_viscosity::pascal_second,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::constraint::{Constrained, UnitInterval};

use super::CorrelationError;

const GAS_CONSTANT_DRY_AIR: f64 = 287.058;
const GAS_CONSTANT_WATER_VAPOR: f64 = 461.495;
const CP_AIR: f64 = 1005.0;

const SUTHERLAND_T_REF: f64 = 273.15;
const SUTHERLAND_MU_REF: f64 = 1.716e-5;
const SUTHERLAND_MU_S: f64 = 110.4;
const SUTHERLAND_K_REF: f64 = 0.0241;
const SUTHERLAND_K_S: f64 = 194.0;

/// Transport properties of humid air at one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistAir {
    pub density: MassDensity,
    pub viscosity: DynamicViscosity,
    pub conductivity: ThermalConductivity,
    pub prandtl: f64,
}

impl MoistAir {
    /// Evaluates moist air properties.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError::OutOfRange`] if the temperature is not
    /// above absolute zero, the pressure is not positive, or the vapour
    /// partial pressure reaches the total pressure.
    pub fn at(
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        relative_humidity: Constrained<f64, UnitInterval>,
    ) -> Result<Self, CorrelationError> {
        let t = temperature.get::<kelvin>();
        let p = pressure.get::<pascal>();

        if !(t > 0.0 && t.is_finite()) {
            return Err(CorrelationError::OutOfRange {
                quantity: "film temperature",
                value: t,
            });
        }
        if !(p > 0.0 && p.is_finite()) {
            return Err(CorrelationError::OutOfRange {
                quantity: "pressure",
                value: p,
            });
        }

        let p_vapor = relative_humidity.into_inner() * saturation_pressure(temperature).get::<pascal>();
        if p_vapor >= p {
            return Err(CorrelationError::OutOfRange {
                quantity: "vapour partial pressure",
                value: p_vapor,
            });
        }

        let density = (p - p_vapor) / (GAS_CONSTANT_DRY_AIR * t) + p_vapor / (GAS_CONSTANT_WATER_VAPOR * t);
        let viscosity = sutherland(t, SUTHERLAND_MU_REF, SUTHERLAND_MU_S);
        let conductivity = sutherland(t, SUTHERLAND_K_REF, SUTHERLAND_K_S);

        Ok(Self {
            density: MassDensity::new::<kilogram_per_cubic_meter>(density),
            viscosity: DynamicViscosity::new::<pascal_second>(viscosity),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(conductivity),
            prandtl: CP_AIR * viscosity / conductivity,
        })
    }
}

/// Saturation vapour pressure of water (Tetens form, Alduchov–Eskridge coefficients).
#[must_use]
pub fn saturation_pressure(temperature: ThermodynamicTemperature) -> Pressure {
    let t_c = temperature.get::<degree_celsius>();
    Pressure::new::<pascal>(610.94 * ((17.625 * t_c) / (t_c + 243.04)).exp())
}

fn sutherland(t: f64, reference: f64, s: f64) -> f64 {
    reference * (t / SUTHERLAND_T_REF).powf(1.5) * (SUTHERLAND_T_REF + s) / (t + s)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn air(t_c: f64, rh: f64) -> MoistAir {
        MoistAir::at(
            ThermodynamicTemperature::new::<degree_celsius>(t_c),
            Pressure::new::<pascal>(101_325.0),
            UnitInterval::new(rh).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn dry_air_near_room_temperature() {
        let props = air(25.0, 0.0);
        assert_relative_eq!(
            props.density.get::<kilogram_per_cubic_meter>(),
            1.184,
            max_relative = 5e-3
        );
        assert_relative_eq!(
            props.viscosity.get::<pascal_second>(),
            1.85e-5,
            max_relative = 2e-2
        );
        assert_relative_eq!(
            props.conductivity.get::<watt_per_meter_kelvin>(),
            0.026,
            max_relative = 3e-2
        );
        assert_relative_eq!(props.prandtl, 0.71, max_relative = 3e-2);
    }

    #[test]
    fn humid_air_is_lighter() {
        let dry = air(35.0, 0.0).density;
        let humid = air(35.0, 0.9).density;
        assert!(humid < dry);
    }

    #[test]
    fn saturation_pressure_at_boiling_point() {
        let p = saturation_pressure(ThermodynamicTemperature::new::<degree_celsius>(100.0));
        assert_relative_eq!(p.get::<pascal>(), 101_325.0, max_relative = 5e-2);
    }

    #[test]
    fn rejects_boiling_saturated_air() {
        let result = MoistAir::at(
            ThermodynamicTemperature::new::<degree_celsius>(120.0),
            Pressure::new::<pascal>(101_325.0),
            UnitInterval::new(1.0).unwrap(),
        );
        assert!(matches!(
            result,
            Err(CorrelationError::OutOfRange { quantity: "vapour partial pressure", .. })
        ));
    }
}
