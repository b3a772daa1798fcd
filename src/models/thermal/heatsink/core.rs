//! Natural-convection heatsink estimation and bounded design search.
//!
//! A design is a registered heatsink family plus a parameter set on a
//! rectangular footprint. The family's area model reduces it to a
//! [`GeometrySummary`], and the resistance network turns that summary into a
//! [`ThermalResult`]. The optimizer and sweep engine drive those two steps
//! over many designs or operating points.

mod error;
pub mod families;
mod geometry;
mod input;
mod network;
mod optimizer;
mod registry;
mod sweep;

#[cfg(test)]
mod test_support;

pub use error::HeatsinkError;
pub use geometry::{FinArray, GeometrySummary};
pub use input::{Environment, Footprint, ManufacturingLimits, Material, ParameterSet};
pub use network::{
    ConvectionStrategy, LoadSolveConfig, Mode, NetworkConfig, Outcome, ThermalResult, Warning,
    evaluate, fin_efficiency,
};
pub use optimizer::{
    Axis, GridPlan, OptimizationCandidate, OptimizationOutcome, OptimizationRequest,
    OptimizerConfig, SearchCounters, TypeGrid, optimize, optimize_until,
};
pub use registry::{
    AreaModelFn, ParameterRole, ParameterSpec, TypeDescriptor, TypeRegistry, ValidatorFn,
};
pub use sweep::{
    MAX_SWEEP_POINTS, SkippedPoint, SweepCurve, SweepEngine, SweepPoint, SweepRange, SweepTarget,
    SweepVariable,
};
