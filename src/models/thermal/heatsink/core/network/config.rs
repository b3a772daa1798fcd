use twine_solvers::equation::bisection;
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

/// Settings for the resistance network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkConfig {
    /// Surface temperature rise used when a caller asks for maximum power
    /// without naming one.
    pub default_target: TemperatureInterval,

    /// Rises above this attach [`Warning::ImplausibleTemperatureRise`].
    ///
    /// [`Warning::ImplausibleTemperatureRise`]: super::Warning::ImplausibleTemperatureRise
    pub plausible_rise: TemperatureInterval,

    pub load_solve: LoadSolveConfig,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            default_target: TemperatureInterval::new::<delta_kelvin>(40.0),
            plausible_rise: TemperatureInterval::new::<delta_kelvin>(150.0),
            load_solve: LoadSolveConfig::default(),
        }
    }
}

/// Solver configuration for the self-consistent rise under a given load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadSolveConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the rise and on the residual `ΔT − P·R_total(ΔT)`.
    pub rise_tol: TemperatureInterval,

    /// Initial upper end of the rise bracket.
    pub initial_upper: TemperatureInterval,

    /// How many times the upper end may double before giving up.
    pub max_expansions: usize,
}

impl Default for LoadSolveConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            rise_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            initial_upper: TemperatureInterval::new::<delta_kelvin>(100.0),
            max_expansions: 24,
        }
    }
}

impl LoadSolveConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.rise_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.rise_tol.get::<delta_kelvin>(),
        }
    }
}
