//! Performance curves: maximum power while the ambient temperature or the
//! humidity varies.

mod range;

pub use range::{MAX_SWEEP_POINTS, SweepRange, SweepVariable};

use std::collections::BTreeMap;

use log::info;
use uom::si::{
    f64::{Power, TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{Constrained, UnitInterval},
    units::TemperatureDifference,
};

use super::{
    ConvectionStrategy, Environment, GeometrySummary, HeatsinkError, Material, Mode,
    NetworkConfig, Warning, network,
};

/// Surface condition held at every sweep point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepTarget {
    /// The same rise above ambient at every point.
    FixedRise(TemperatureInterval),

    /// A fixed surface temperature; the rise shrinks as ambient climbs.
    SurfaceLimit(ThermodynamicTemperature),
}

/// One evaluated point of a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    /// Swept value in display units (°C or %).
    pub value: f64,
    pub q_max: Power,
    pub warnings: Vec<Warning>,
}

/// A point that could not be evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPoint {
    pub value: f64,
    pub reason: String,
}

/// Collected result of a sweep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepCurve {
    pub points: Vec<SweepPoint>,
    pub skipped: Vec<SkippedPoint>,
}

/// Evaluates one geometry across a [`SweepRange`].
#[derive(Debug, Clone)]
pub struct SweepEngine<'a> {
    pub summary: &'a GeometrySummary,
    pub material: &'a Material,

    /// Conditions for everything the range does not vary.
    pub environment: Environment,

    pub target: SweepTarget,
    pub strategy: ConvectionStrategy<'a>,
    pub config: NetworkConfig,
}

impl<'a> SweepEngine<'a> {
    /// An engine using the session convection strategy and default settings.
    #[must_use]
    pub fn new(
        summary: &'a GeometrySummary,
        material: &'a Material,
        environment: Environment,
        target: SweepTarget,
    ) -> Self {
        Self {
            summary,
            material,
            environment,
            target,
            strategy: ConvectionStrategy::session(),
            config: NetworkConfig::default(),
        }
    }

    /// Lazily evaluates `range` in order.
    ///
    /// Each call returns a fresh iterator, so a curve can be replayed.
    pub fn points<'s>(
        &'s self,
        range: &'s SweepRange,
    ) -> impl Iterator<Item = Result<SweepPoint, SkippedPoint>> + 's {
        range.values().map(move |value| {
            self.point(range.variable(), value)
                .map_err(|err| SkippedPoint {
                    value,
                    reason: err.to_string(),
                })
        })
    }

    /// Evaluates the whole range.
    #[must_use]
    pub fn run(&self, range: &SweepRange) -> SweepCurve {
        let mut curve = SweepCurve::default();
        for outcome in self.points(range) {
            match outcome {
                Ok(point) => curve.points.push(point),
                Err(skipped) => curve.skipped.push(skipped),
            }
        }
        info!(
            "sweep over {:?}: {} points, {} skipped",
            range.variable(),
            curve.points.len(),
            curve.skipped.len()
        );
        curve
    }

    /// One ambient curve per humidity level, keyed `"RH 30%"`.
    ///
    /// # Errors
    ///
    /// Returns [`HeatsinkError::InvalidInput`] if `ambient` does not vary the
    /// ambient temperature or a humidity lies outside 0–100 %.
    pub fn performance_curves(
        &self,
        humidity_percent: &[f64],
        ambient: &SweepRange,
    ) -> Result<BTreeMap<String, SweepCurve>, HeatsinkError> {
        if ambient.variable() != SweepVariable::Ambient {
            return Err(HeatsinkError::invalid_input(
                "sweep.range",
                "performance curves vary the ambient temperature",
            ));
        }

        humidity_percent
            .iter()
            .map(|&rh| -> Result<(String, SweepCurve), HeatsinkError> {
                let environment = self.environment.with_humidity(humidity(rh)?);
                let engine = Self {
                    environment,
                    ..self.clone()
                };
                Ok((format!("RH {rh:.0}%"), engine.run(ambient)))
            })
            .collect()
    }

    fn point(&self, variable: SweepVariable, value: f64) -> Result<SweepPoint, HeatsinkError> {
        let environment = match variable {
            SweepVariable::Ambient => self
                .environment
                .with_ambient(ThermodynamicTemperature::new::<degree_celsius>(value))?,
            SweepVariable::Humidity => self.environment.with_humidity(humidity(value)?),
        };

        let target = match self.target {
            SweepTarget::FixedRise(rise) => rise,
            SweepTarget::SurfaceLimit(surface) => {
                let rise = surface.minus(environment.ambient);
                if rise <= TemperatureInterval::new::<delta_kelvin>(0.0) {
                    return Err(HeatsinkError::invalid_input(
                        "sweep.target",
                        format!(
                            "ambient {:.1} °C is at or above the surface limit",
                            environment.ambient.get::<degree_celsius>()
                        ),
                    ));
                }
                rise
            }
        };

        let result = network::evaluate(
            self.summary,
            self.material,
            &environment,
            Mode::MaxPower { target },
            self.strategy,
            &self.config,
        )?;
        let q_max = result.q_max().ok_or(HeatsinkError::NumericDegenerate {
            field: "q_max",
            value: f64::NAN,
        })?;

        Ok(SweepPoint {
            value,
            q_max,
            warnings: result.warnings,
        })
    }
}

fn humidity(percent: f64) -> Result<Constrained<f64, UnitInterval>, HeatsinkError> {
    UnitInterval::new(percent / 100.0).map_err(HeatsinkError::constraint("relative_humidity"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::power::watt;

    use crate::models::thermal::heatsink::core::test_support::straight_fin_summary;

    fn engine<'a>(
        summary: &'a GeometrySummary,
        material: &'a Material,
        target: SweepTarget,
        strategy: ConvectionStrategy<'a>,
    ) -> SweepEngine<'a> {
        SweepEngine {
            strategy,
            ..SweepEngine::new(summary, material, Environment::default(), target)
        }
    }

    fn fixed_rise(kelvin: f64) -> SweepTarget {
        SweepTarget::FixedRise(TemperatureInterval::new::<delta_kelvin>(kelvin))
    }

    fn watts(curve: &SweepCurve) -> Vec<f64> {
        curve.points.iter().map(|p| p.q_max.get::<watt>()).collect()
    }

    fn assert_non_increasing(values: &[f64]) {
        for pair in values.windows(2) {
            assert!(pair[1] <= pair[0] * (1.0 + 1e-9), "{values:?}");
        }
    }

    #[test]
    fn fixed_rise_power_does_not_grow_with_ambient() {
        let summary = straight_fin_summary(20.0);
        let material = Material::aluminum();
        let engine = engine(&summary, &material, fixed_rise(40.0), ConvectionStrategy::session());

        let curve = engine.run(&SweepRange::ambient(0.0, 80.0, 5.0).unwrap());
        assert_eq!(curve.points.len(), 17);
        assert!(curve.skipped.is_empty());
        assert_non_increasing(&watts(&curve));
    }

    #[test]
    fn surface_limit_skips_points_at_or_above_it() {
        let summary = straight_fin_summary(20.0);
        let material = Material::aluminum();
        let target =
            SweepTarget::SurfaceLimit(ThermodynamicTemperature::new::<degree_celsius>(60.0));
        let engine = engine(&summary, &material, target, ConvectionStrategy::Fallback);

        let curve = engine.run(&SweepRange::ambient(0.0, 80.0, 5.0).unwrap());
        let skipped: Vec<_> = curve.skipped.iter().map(|s| s.value).collect();

        assert_eq!(skipped, vec![60.0, 65.0, 70.0, 75.0, 80.0]);
        assert_eq!(curve.points.len(), 12);
        let q = watts(&curve);
        assert!(q.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn points_can_be_replayed() {
        let summary = straight_fin_summary(20.0);
        let material = Material::aluminum();
        let engine = engine(&summary, &material, fixed_rise(30.0), ConvectionStrategy::Fallback);
        let range = SweepRange::ambient(10.0, 40.0, 10.0).unwrap();

        let first: Vec<_> = engine.points(&range).collect();
        let second: Vec<_> = engine.points(&range).collect();
        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
    }

    #[test]
    fn full_humidity_range_evaluates_every_point() {
        let summary = straight_fin_summary(20.0);
        let material = Material::aluminum();
        let engine = engine(&summary, &material, fixed_rise(40.0), ConvectionStrategy::Fallback);

        // 100/11 does not add back up to 100 exactly.
        let curve = engine.run(&SweepRange::humidity(0.0, 100.0, 100.0 / 11.0).unwrap());

        assert!(curve.skipped.is_empty(), "{:?}", curve.skipped);
        assert_eq!(curve.points.len(), 12);
        assert_eq!(curve.points.last().map(|p| p.value), Some(100.0));
    }

    #[test]
    fn fallback_ignores_humidity() {
        let summary = straight_fin_summary(20.0);
        let material = Material::aluminum();
        let engine = engine(&summary, &material, fixed_rise(40.0), ConvectionStrategy::Fallback);

        let curve = engine.run(&SweepRange::humidity(0.0, 100.0, 25.0).unwrap());
        let q = watts(&curve);

        assert_eq!(q.len(), 5);
        assert!(q.iter().all(|&value| value == q[0]));
        assert!(
            curve
                .points
                .iter()
                .all(|p| p.warnings == vec![Warning::FallbackConvection { reason: None }])
        );
    }

    #[cfg(feature = "air-properties")]
    #[test]
    fn humidity_matters_with_air_properties() {
        let summary = straight_fin_summary(20.0);
        let material = Material::aluminum();
        let engine = engine(
            &summary,
            &material,
            fixed_rise(40.0),
            ConvectionStrategy::detect().unwrap(),
        );

        let curve = engine.run(&SweepRange::humidity(10.0, 90.0, 80.0).unwrap());
        let q = watts(&curve);
        assert_eq!(q.len(), 2);
        assert!(q[0] != q[1]);
        assert!(curve.points.iter().all(|p| p.warnings.is_empty()));
    }

    #[test]
    fn performance_curves_per_humidity() {
        let summary = straight_fin_summary(20.0);
        let material = Material::aluminum();
        let engine = engine(&summary, &material, fixed_rise(40.0), ConvectionStrategy::session());

        let curves = engine
            .performance_curves(&[30.0, 60.0, 90.0], &SweepRange::ambient(0.0, 80.0, 5.0).unwrap())
            .unwrap();

        assert_eq!(
            curves.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["RH 30%", "RH 60%", "RH 90%"]
        );
        assert!(curves.values().all(|curve| curve.points.len() == 17));
    }

    #[test]
    fn performance_curves_need_an_ambient_range() {
        let summary = straight_fin_summary(20.0);
        let material = Material::aluminum();
        let engine = engine(&summary, &material, fixed_rise(40.0), ConvectionStrategy::Fallback);

        assert!(matches!(
            engine.performance_curves(&[50.0], &SweepRange::humidity(0.0, 100.0, 10.0).unwrap()),
            Err(HeatsinkError::InvalidInput { .. })
        ));
        assert!(
            engine
                .performance_curves(&[150.0], &SweepRange::ambient(0.0, 10.0, 5.0).unwrap())
                .is_err()
        );
    }
}
