//! Heatsink models.
//!
//! [`HeatsinkModel`] is a [`twine_core::Model`] that evaluates one design
//! request: a registered heatsink type with its parameters, footprint,
//! material, ambient air and mode. The computational core, including the
//! optimizer and sweep engine, is re-exported from the internal `core`
//! module. Display-unit records for callers live in [`report`].

mod core;
pub mod report;

pub use self::core::*;

use twine_core::Model;

/// One design to evaluate.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignRequest {
    /// Registered type id, e.g. `"straight_fins"`.
    pub type_id: String,

    pub parameters: ParameterSet,
    pub footprint: Footprint,
    pub material: Material,
    pub environment: Environment,
    pub mode: Mode,
}

/// Geometry and thermal result of one design.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignEvaluation {
    pub summary: GeometrySummary,
    pub result: ThermalResult,
}

/// Evaluates single designs against a type registry.
#[derive(Debug, Clone)]
pub struct HeatsinkModel {
    pub registry: TypeRegistry,
    pub limits: ManufacturingLimits,
    pub network: NetworkConfig,
    pub strategy: ConvectionStrategy<'static>,
}

impl HeatsinkModel {
    /// A model over the built-in families using the session convection strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(TypeRegistry::standard())
    }

    #[must_use]
    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self {
            registry,
            limits: ManufacturingLimits::default(),
            network: NetworkConfig::default(),
            strategy: ConvectionStrategy::session(),
        }
    }
}

impl Default for HeatsinkModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for HeatsinkModel {
    type Input = DesignRequest;
    type Output = DesignEvaluation;
    type Error = HeatsinkError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let descriptor = self.registry.get(&input.type_id)?;
        let summary = descriptor.summarize(&input.parameters, &input.footprint, &self.limits)?;
        let result = evaluate(
            &summary,
            &input.material,
            &input.environment,
            input.mode,
            self.strategy,
            &self.network,
        )?;
        Ok(DesignEvaluation { summary, result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, Power, TemperatureInterval},
        length::{meter, millimeter},
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
    };

    fn request(type_id: &str, parameters: ParameterSet, mode: Mode) -> DesignRequest {
        DesignRequest {
            type_id: type_id.to_owned(),
            parameters,
            footprint: Footprint::from_millimeters(120.0, 80.0).unwrap(),
            material: Material::aluminum(),
            environment: Environment::from_display(25.0, 50.0, Environment::STANDARD_PRESSURE)
                .unwrap(),
            mode,
        }
    }

    fn reference_fins() -> ParameterSet {
        ParameterSet::from_millimeters([
            ("fin_thickness", 2.0),
            ("fin_gap", 3.0),
            ("fin_height", 20.0),
            ("base_thickness", 5.0),
        ])
        .unwrap()
    }

    fn max_power() -> Mode {
        Mode::MaxPower {
            target: TemperatureInterval::new::<delta_kelvin>(40.0),
        }
    }

    #[cfg(feature = "air-properties")]
    #[test]
    fn reference_straight_fin_design() {
        let model = HeatsinkModel {
            strategy: ConvectionStrategy::detect().unwrap(),
            ..HeatsinkModel::new()
        };
        let params = reference_fins();

        let evaluation = model
            .call(&request("straight_fins", params.clone(), max_power()))
            .unwrap();
        let fins = evaluation.summary.fins.unwrap();

        let pitch = Length::new::<meter>(families::straight_fins::pitch(&params).unwrap());
        assert_relative_eq!(pitch.get::<millimeter>(), 5.0, max_relative = 1e-12);
        assert_eq!(fins.count, 16);
        assert!(evaluation.result.q_max().unwrap().get::<watt>() > 0.0);
        assert!(evaluation.result.warnings.is_empty());
    }

    #[test]
    fn unknown_type_is_reported() {
        let model = HeatsinkModel::new();
        assert!(matches!(
            model.call(&request("vapor_chamber", reference_fins(), max_power())),
            Err(HeatsinkError::UnknownType { id }) if id == "vapor_chamber"
        ));
    }

    #[test]
    fn every_pitched_type_rejects_tight_pitch() {
        let model = HeatsinkModel::new();
        let cases = [
            ("straight_fins", "fin_gap", 2.5),
            ("crosscut", "groove_width", 2.0),
            ("pin_fin", "pitch_x", 7.5),
            ("pin_fin", "pitch_y", 6.0),
        ];

        for (type_id, field, value) in cases {
            let descriptor = model.registry.get(type_id).unwrap();
            let params = descriptor
                .defaults()
                .with(field, Length::new::<millimeter>(value));

            let result = model.call(&request(type_id, params, max_power()));
            assert!(
                matches!(&result, Err(HeatsinkError::InvalidGeometry { field: f, .. }) if f == field),
                "{type_id}/{field}: {result:?}"
            );
        }
    }

    #[test]
    fn defaults_of_every_type_evaluate() {
        let model = HeatsinkModel {
            strategy: ConvectionStrategy::Fallback,
            ..HeatsinkModel::new()
        };
        for descriptor in model.registry.iter() {
            let evaluation = model
                .call(&request(descriptor.id, descriptor.defaults(), max_power()))
                .unwrap();
            assert!(evaluation.result.q_max().unwrap().get::<watt>() > 0.0, "{}", descriptor.id);
        }
    }

    #[test]
    fn given_load_reports_surface_temperature() {
        let model = HeatsinkModel::new();
        let evaluation = model
            .call(&request(
                "straight_fins",
                reference_fins(),
                Mode::GivenLoad {
                    power: Power::new::<watt>(15.0),
                },
            ))
            .unwrap();

        let rise = evaluation.result.rise().unwrap().get::<delta_kelvin>();
        assert!(rise > 0.0 && rise < 150.0);
    }
}
