//! Bounded grid search over every registered heatsink type.
//!
//! The search is planned up front ([`GridPlan`]) so the number of visited
//! points never exceeds the evaluation cap, whatever the inputs. Each point is
//! validated by its family, evaluated by the resistance network and ranked by
//! total resistance (or by temperature rise when a load is given).

mod config;
mod plan;
mod ranking;

pub use config::OptimizerConfig;
pub use plan::{Axis, GridPlan, TypeGrid};
pub use ranking::OptimizationCandidate;

use std::{
    collections::HashSet,
    sync::atomic::{AtomicBool, Ordering},
};

use log::{debug, info};
use uom::si::{
    f64::{Length, Power, TemperatureInterval},
    length::{meter, millimeter},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

use super::{
    ConvectionStrategy, Environment, Footprint, HeatsinkError, Material, Mode, ParameterSet,
    TypeRegistry, network, registry::TypeDescriptor,
};

/// Slack on the total height cap, in meters.
const HEIGHT_EPS: f64 = 1e-9;

/// What to search for.
#[derive(Debug, Clone)]
pub struct OptimizationRequest<'a> {
    pub registry: &'a TypeRegistry,
    pub footprint: Footprint,

    /// Cap on base plus fin height.
    pub max_height: Length,

    /// Surface rise for maximum-power ranking.
    pub target: TemperatureInterval,

    /// When set, candidates are evaluated under this load and ranked by rise.
    pub load: Option<Power>,

    pub material: Material,
    pub environment: Environment,
    pub strategy: ConvectionStrategy<'a>,
    pub config: OptimizerConfig,
}

impl<'a> OptimizationRequest<'a> {
    /// A request with default material, environment, configuration and the
    /// session convection strategy.
    #[must_use]
    pub fn new(registry: &'a TypeRegistry, footprint: Footprint, max_height: Length) -> Self {
        let config = OptimizerConfig::default();
        Self {
            registry,
            footprint,
            max_height,
            target: config.network.default_target,
            load: None,
            material: Material::default(),
            environment: Environment::default(),
            strategy: ConvectionStrategy::session(),
            config,
        }
    }

    fn mode(&self) -> Mode {
        match self.load {
            Some(power) => Mode::GivenLoad { power },
            None => Mode::MaxPower {
                target: self.target,
            },
        }
    }

    fn validate(&self) -> Result<(), HeatsinkError> {
        let height = self.max_height.get::<meter>();
        if !(height > 0.0 && height.is_finite()) {
            return Err(HeatsinkError::invalid_geometry(
                "max_height",
                format!("must be positive, got {} mm", self.max_height.get::<millimeter>()),
            ));
        }
        let target = self.target.get::<delta_kelvin>();
        if !(target > 0.0 && target.is_finite()) {
            return Err(HeatsinkError::invalid_input(
                "target_rise",
                format!("must be positive, got {target} K"),
            ));
        }
        if let Some(load) = self.load {
            let watts = load.get::<watt>();
            if !(watts > 0.0 && watts.is_finite()) {
                return Err(HeatsinkError::invalid_input(
                    "load_power",
                    format!("must be positive, got {watts} W"),
                ));
            }
        }
        Ok(())
    }
}

/// How the visited grid points were disposed of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCounters {
    /// Grid points visited, never more than `cap`.
    pub visited: usize,

    /// Points that reached the resistance network.
    pub evaluated: usize,

    pub skipped_infeasible: usize,
    pub failed_numeric: usize,
    pub duplicates: usize,
    pub cap: usize,
}

/// Ranked candidates, best first.
#[derive(Debug, Clone)]
pub struct OptimizationOutcome {
    pub candidates: Vec<OptimizationCandidate>,
    pub counters: SearchCounters,
    pub plan: GridPlan,

    /// The search stopped early on request; `candidates` ranks what was found.
    pub cancelled: bool,
}

impl OptimizationOutcome {
    #[must_use]
    pub fn best(&self) -> Option<&OptimizationCandidate> {
        self.candidates.first()
    }
}

/// Searches every registered type for the design with the lowest resistance.
///
/// # Errors
///
/// - [`HeatsinkError::InvalidGeometry`] or [`HeatsinkError::InvalidInput`]
///   for an unusable height cap, target or load.
/// - [`HeatsinkError::NoFeasibleConfiguration`] if no candidate survives.
pub fn optimize(request: &OptimizationRequest<'_>) -> Result<OptimizationOutcome, HeatsinkError> {
    optimize_until(request, &AtomicBool::new(false))
}

/// Like [`optimize`], stopping between candidates once `cancel` is set.
///
/// A cancelled search returns whatever it ranked so far, possibly nothing.
///
/// # Errors
///
/// See [`optimize`]; a cancelled search never reports
/// [`HeatsinkError::NoFeasibleConfiguration`].
pub fn optimize_until(
    request: &OptimizationRequest<'_>,
    cancel: &AtomicBool,
) -> Result<OptimizationOutcome, HeatsinkError> {
    request.validate()?;
    let config = &request.config;

    let plan = GridPlan::build(
        request.registry,
        request.max_height,
        &config.limits,
        config.evaluation_cap,
    );

    let mut counters = SearchCounters {
        cap: config.evaluation_cap,
        ..SearchCounters::default()
    };
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    let mut cancelled = false;

    'search: for grid in &plan.grids {
        let descriptor = request.registry.get(grid.type_id)?;
        for params in grid.points() {
            if cancel.load(Ordering::Relaxed) {
                cancelled = true;
                break 'search;
            }
            counters.visited += 1;

            let quantized = params.quantized();
            if !seen.insert((grid.order, quantized.clone())) {
                counters.duplicates += 1;
                continue;
            }

            match assess(request, descriptor, &params) {
                Ok(Some(candidate)) => {
                    counters.evaluated += 1;
                    candidates.push(OptimizationCandidate {
                        order: grid.order,
                        quantized,
                        ..candidate
                    });
                }
                Ok(None) => counters.skipped_infeasible += 1,
                Err(err) => {
                    counters.evaluated += 1;
                    counters.failed_numeric += 1;
                    debug!("{}: candidate dropped: {err}", grid.type_id);
                }
            }
        }
    }

    if candidates.is_empty() && !cancelled {
        return Err(HeatsinkError::NoFeasibleConfiguration {
            evaluated: counters.evaluated,
            skipped: counters.skipped_infeasible,
        });
    }

    ranking::rank(&mut candidates, config.tie_tolerance);
    candidates.truncate(config.keep);

    info!(
        "optimizer: {} visited, {} evaluated, {} infeasible, {} failed, {} duplicates{}",
        counters.visited,
        counters.evaluated,
        counters.skipped_infeasible,
        counters.failed_numeric,
        counters.duplicates,
        if cancelled { " (cancelled)" } else { "" }
    );

    Ok(OptimizationOutcome {
        candidates,
        counters,
        plan,
        cancelled,
    })
}

/// Evaluates one grid point.
///
/// Returns `Ok(None)` for an unbuildable design and `Err` when the network
/// rejects a buildable one.
fn assess(
    request: &OptimizationRequest<'_>,
    descriptor: &TypeDescriptor,
    params: &ParameterSet,
) -> Result<Option<OptimizationCandidate>, HeatsinkError> {
    let height: f64 = descriptor
        .schema
        .iter()
        .filter(|spec| spec.role.is_vertical())
        .filter_map(|spec| params.get(spec.name))
        .map(|value| value.get::<meter>())
        .sum();
    if height > request.max_height.get::<meter>() + HEIGHT_EPS {
        return Ok(None);
    }

    let summary = match descriptor.summarize(params, &request.footprint, &request.config.limits) {
        Ok(summary) => summary,
        Err(err) if err.is_infeasible() => return Ok(None),
        Err(err) => return Err(err),
    };

    let result = network::evaluate(
        &summary,
        &request.material,
        &request.environment,
        request.mode(),
        request.strategy,
        &request.config.network,
    )?;

    let key = match result.rise() {
        Some(rise) => rise.get::<delta_kelvin>(),
        None => result.total.value,
    };

    Ok(Some(OptimizationCandidate {
        type_id: descriptor.id,
        parameters: params.clone(),
        material_volume: summary.material_volume,
        result,
        key,
        order: 0,
        quantized: Vec::new(),
    }))
}
