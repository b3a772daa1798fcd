//! Steady-state resistance network: base conduction in series with convection
//! from the exposed base and the fins.

mod config;
mod fin_efficiency;
mod given_load;
mod results;
mod strategy;
mod warning;

pub use config::{LoadSolveConfig, NetworkConfig};
pub use fin_efficiency::fin_efficiency;
pub use results::{Mode, Outcome, ThermalResult};
pub use strategy::ConvectionStrategy;
pub use warning::Warning;

use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer, Power, TemperatureInterval},
    length::meter,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::{
    constraint::{Constrained, UnitIntervalLowerOpen},
    convection::FilmConditions,
    units::{ThermalResistance, kelvin_per_watt},
};

use super::{Environment, GeometrySummary, HeatsinkError, Material};

/// Evaluates a design in the requested mode.
///
/// # Errors
///
/// - [`HeatsinkError::InvalidInput`] for a non-positive target rise or load.
/// - [`HeatsinkError::NumericDegenerate`] if conductivity, convection
///   coefficient, effective area or total resistance is not positive and finite.
/// - [`HeatsinkError::NotConverged`] or [`HeatsinkError::Bisection`] if the
///   given-load solve fails.
pub fn evaluate(
    summary: &GeometrySummary,
    material: &Material,
    environment: &Environment,
    mode: Mode,
    strategy: ConvectionStrategy<'_>,
    config: &NetworkConfig,
) -> Result<ThermalResult, HeatsinkError> {
    let network = Network {
        summary,
        material,
        environment,
        strategy,
    };

    match mode {
        Mode::MaxPower { target } => {
            let rise = target.get::<delta_kelvin>();
            if !(rise > 0.0 && rise.is_finite()) {
                return Err(HeatsinkError::invalid_input(
                    "target_rise",
                    format!("must be positive, got {rise} K"),
                ));
            }
            let resolved = network.resolve(target)?;
            let q_max = Power::new::<watt>(rise / resolved.total.value);
            Ok(resolved.into_result(Outcome::MaxPower { q_max }, Vec::new()))
        }
        Mode::GivenLoad { power } => {
            let watts = power.get::<watt>();
            if !(watts > 0.0 && watts.is_finite()) {
                return Err(HeatsinkError::invalid_input(
                    "load_power",
                    format!("must be positive, got {watts} W"),
                ));
            }
            let (rise, resolved) = given_load::solve_rise(&network, power, config)?;

            let mut warnings = Vec::new();
            if rise > config.plausible_rise {
                warnings.push(Warning::ImplausibleTemperatureRise {
                    rise,
                    limit: config.plausible_rise,
                });
            }
            let surface = environment.ambient + rise;
            Ok(resolved.into_result(Outcome::GivenLoad { rise, surface }, warnings))
        }
    }
}

/// Inputs fixed for one evaluation; only the rise varies.
struct Network<'a> {
    summary: &'a GeometrySummary,
    material: &'a Material,
    environment: &'a Environment,
    strategy: ConvectionStrategy<'a>,
}

/// Network solved at one surface rise.
#[derive(Debug, Clone)]
struct Resolved {
    rise: TemperatureInterval,
    h: HeatTransfer,
    efficiency: Constrained<f64, UnitIntervalLowerOpen>,
    effective_area: Area,
    conduction: ThermalResistance,
    convection: ThermalResistance,
    total: ThermalResistance,
    fallback: Option<Warning>,
}

impl Network<'_> {
    fn resolve(&self, rise: TemperatureInterval) -> Result<Resolved, HeatsinkError> {
        let k = positive(
            "conductivity",
            self.material.conductivity.get::<watt_per_meter_kelvin>(),
        )?;

        let conditions = FilmConditions {
            ambient: self.environment.ambient,
            surface_rise: rise,
            characteristic_length: self.summary.characteristic_length,
            relative_humidity: self.environment.relative_humidity,
            pressure: self.environment.pressure,
        };
        let (h, fallback) = self.strategy.coefficient(&conditions)?;
        let h_value = strategy::check_coefficient(h)?;

        let (efficiency, effective_area) = match &self.summary.fins {
            Some(fins) => {
                let eta = fin_efficiency(h, self.material.conductivity, fins)?;
                let area = self.summary.base_exposed_area + fins.area * eta.into_inner();
                (eta, area)
            }
            None => (UnitIntervalLowerOpen::one(), self.summary.base_exposed_area),
        };
        let a_eff = positive("effective_area", effective_area.get::<square_meter>())?;
        let a_base = positive(
            "base_cross_section",
            self.summary.base_cross_section.get::<square_meter>(),
        )?;

        let r_cond = self.summary.base_thickness.get::<meter>() / (k * a_base);
        let r_conv = 1.0 / (h_value * a_eff);
        let r_total = positive("total_resistance", r_cond + r_conv)?;

        Ok(Resolved {
            rise,
            h,
            efficiency,
            effective_area,
            conduction: kelvin_per_watt(r_cond),
            convection: kelvin_per_watt(r_conv),
            total: kelvin_per_watt(r_total),
            fallback,
        })
    }
}

impl Resolved {
    fn into_result(self, outcome: Outcome, extra: Vec<Warning>) -> ThermalResult {
        let warnings = self.fallback.into_iter().chain(extra).collect();
        ThermalResult {
            h: self.h,
            efficiency: self.efficiency,
            effective_area: self.effective_area,
            conduction: self.conduction,
            convection: self.convection,
            total: self.total,
            outcome,
            warnings,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, HeatsinkError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(HeatsinkError::NumericDegenerate { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermalConductivity, heat_transfer::watt_per_square_meter_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::models::thermal::heatsink::core::{
        ManufacturingLimits, families,
        test_support::{footprint, given_load, max_power, plate_summary, straight_fin_summary},
    };

    fn evaluate_with(
        summary: &GeometrySummary,
        mode: Mode,
        strategy: ConvectionStrategy<'_>,
    ) -> Result<ThermalResult, HeatsinkError> {
        evaluate(
            summary,
            &Material::aluminum(),
            &Environment::default(),
            mode,
            strategy,
            &NetworkConfig::default(),
        )
    }

    #[test]
    fn solid_plate_is_series_conduction_and_convection() {
        let summary = plate_summary(1.0, 100.0);
        let result = evaluate_with(&summary, max_power(40.0), ConvectionStrategy::Fallback).unwrap();

        let h = 1.42 * (40.0_f64 / 0.1).powf(0.25);
        let area = 0.01;
        let expected = 40.0 / (0.001 / (200.0 * area) + 1.0 / (h * area));

        assert_eq!(result.efficiency.into_inner(), 1.0);
        assert_relative_eq!(
            result.h.get::<watt_per_square_meter_kelvin>(),
            h,
            max_relative = 1e-12
        );
        let q = result.q_max().unwrap().get::<watt>();
        assert_relative_eq!(q, expected, max_relative = 1e-12);
        assert_relative_eq!(q, h * area * 40.0, max_relative = 1e-3);
    }

    #[test]
    fn fallback_attaches_warning() {
        let result = evaluate_with(
            &straight_fin_summary(20.0),
            max_power(40.0),
            ConvectionStrategy::Fallback,
        )
        .unwrap();
        assert_eq!(
            result.warnings,
            vec![Warning::FallbackConvection { reason: None }]
        );
    }

    #[test]
    fn fins_beat_bare_base() {
        let strategy = ConvectionStrategy::Fallback;
        let finned = evaluate_with(&straight_fin_summary(20.0), max_power(40.0), strategy).unwrap();
        let eta = finned.efficiency.into_inner();

        assert!(eta > 0.0 && eta < 1.0);
        assert!(finned.effective_area > straight_fin_summary(20.0).base_exposed_area);
        assert_relative_eq!(
            finned.total.value,
            finned.conduction.value + finned.convection.value,
            max_relative = 1e-12
        );
    }

    #[test]
    fn square_pins_use_their_side_as_fin_thickness() {
        let summary = families::crosscut::DESCRIPTOR
            .summarize(
                &families::crosscut::DESCRIPTOR.defaults(),
                &footprint(),
                &ManufacturingLimits::default(),
            )
            .unwrap();
        let result = evaluate_with(&summary, max_power(40.0), ConvectionStrategy::Fallback).unwrap();

        // 3 mm pins, 15 mm tall.
        let h = 1.42 * (40.0_f64 / 0.015).powf(0.25);
        let m = (2.0 * h / (200.0 * 0.003)).sqrt();
        let ml = m * (0.015 + 0.003 / 2.0);

        assert_relative_eq!(
            result.efficiency.into_inner(),
            ml.tanh() / ml,
            max_relative = 1e-12
        );
    }

    #[test]
    fn taller_fins_dissipate_more() {
        let strategy = ConvectionStrategy::session();
        let mut previous = 0.0;
        for height in [5.0, 10.0, 20.0, 30.0, 40.0] {
            let q = evaluate_with(&straight_fin_summary(height), max_power(40.0), strategy)
                .unwrap()
                .q_max()
                .unwrap()
                .get::<watt>();
            assert!(q > previous, "{height} mm: {q} W ≤ {previous} W");
            previous = q;
        }
    }

    #[test]
    fn zero_conductivity_is_degenerate() {
        let material = Material {
            name: "void".into(),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.0),
        };
        let result = evaluate(
            &straight_fin_summary(20.0),
            &material,
            &Environment::default(),
            max_power(40.0),
            ConvectionStrategy::Fallback,
            &NetworkConfig::default(),
        );
        assert!(matches!(
            result,
            Err(HeatsinkError::NumericDegenerate { field: "conductivity", .. })
        ));
    }

    #[test]
    fn rejects_non_positive_target_and_load() {
        let summary = straight_fin_summary(20.0);
        let strategy = ConvectionStrategy::Fallback;

        assert!(matches!(
            evaluate_with(&summary, max_power(0.0), strategy),
            Err(HeatsinkError::InvalidInput { field, .. }) if field == "target_rise"
        ));
        assert!(matches!(
            evaluate_with(&summary, given_load(-5.0), strategy),
            Err(HeatsinkError::InvalidInput { field, .. }) if field == "load_power"
        ));
    }

    #[test]
    fn given_load_is_self_consistent() {
        let result = evaluate_with(
            &straight_fin_summary(20.0),
            given_load(20.0),
            ConvectionStrategy::Fallback,
        )
        .unwrap();

        let rise = result.rise().unwrap().get::<delta_kelvin>();
        assert_relative_eq!(rise, 20.0 * result.total.value, max_relative = 1e-6);

        let Outcome::GivenLoad { surface, .. } = result.outcome else {
            panic!("expected a given-load outcome");
        };
        assert_relative_eq!(surface.get::<degree_celsius>(), 25.0 + rise, epsilon = 1e-9);
    }

    #[test]
    fn given_load_inverts_max_power() {
        let summary = straight_fin_summary(20.0);
        let strategy = ConvectionStrategy::session();

        let q_max = evaluate_with(&summary, max_power(40.0), strategy)
            .unwrap()
            .q_max()
            .unwrap()
            .get::<watt>();
        let loaded = evaluate_with(&summary, given_load(q_max), strategy).unwrap();

        assert_relative_eq!(
            loaded.rise().unwrap().get::<delta_kelvin>(),
            40.0,
            max_relative = 1e-6
        );
    }

    #[test]
    fn implausible_rise_warns_instead_of_failing() {
        let result = evaluate_with(
            &plate_summary(1.0, 20.0),
            given_load(50.0),
            ConvectionStrategy::Fallback,
        )
        .unwrap();

        assert!(result.rise().unwrap().get::<delta_kelvin>() > 150.0);
        assert!(
            result
                .warnings
                .iter()
                .any(|w| matches!(w, Warning::ImplausibleTemperatureRise { .. }))
        );
    }
}
