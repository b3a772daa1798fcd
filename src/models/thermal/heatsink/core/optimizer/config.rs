use crate::models::thermal::heatsink::core::{ManufacturingLimits, NetworkConfig};

/// Search settings for the configuration optimizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizerConfig {
    /// Upper bound on grid points visited across all types.
    pub evaluation_cap: usize,

    /// Relative ranking-key difference under which candidates count as tied.
    pub tie_tolerance: f64,

    /// Number of best candidates returned.
    pub keep: usize,

    pub limits: ManufacturingLimits,

    pub network: NetworkConfig,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            evaluation_cap: 20_000,
            tie_tolerance: 1e-3,
            keep: 10,
            limits: ManufacturingLimits::default(),
            network: NetworkConfig::default(),
        }
    }
}
