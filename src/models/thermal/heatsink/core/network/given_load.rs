//! Self-consistent surface rise under a given heat load.
//!
//! The convection coefficient depends on the rise it produces, so
//! `ΔT = P·R_total(ΔT)` is solved by bisection on the rise.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Power, TemperatureInterval},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::models::thermal::heatsink::core::HeatsinkError;

use super::{Network, NetworkConfig, Resolved};

/// Smallest rise the solve considers, in kelvin.
const MIN_RISE: f64 = 1e-3;

/// Solves for the rise at which the part dissipates `power`.
///
/// # Errors
///
/// - [`HeatsinkError::NumericDegenerate`] if the network is degenerate or no
///   finite rise within the bracket limit balances the load.
/// - [`HeatsinkError::NotConverged`] if bisection hits its iteration limit.
pub(super) fn solve_rise(
    network: &Network<'_>,
    power: Power,
    config: &NetworkConfig,
) -> Result<(TemperatureInterval, Resolved), HeatsinkError> {
    let watts = power.get::<watt>();
    let solve = &config.load_solve;

    // Surface a degenerate network as such rather than as a solver failure.
    network.resolve(config.default_target)?;

    let model = RiseModel { network };
    let problem = LoadProblem { power: watts };

    let lower = model.call(&rise(MIN_RISE))?;
    if problem.residual(&lower) >= 0.0 {
        // The load is too small to lift the surface off the bracket floor.
        let rise = rise(watts * lower.total.value);
        return Ok((rise, lower));
    }

    let mut upper = solve.initial_upper.get::<delta_kelvin>();
    let mut expansions = 0;
    while problem.residual(&model.call(&rise(upper))?) < 0.0 {
        if expansions == solve.max_expansions {
            return Err(HeatsinkError::NumericDegenerate {
                field: "load_power",
                value: watts,
            });
        }
        upper *= 2.0;
        expansions += 1;
    }

    let solution = bisection::solve(
        &model,
        &problem,
        [MIN_RISE, upper],
        &solve.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A failed evaluation sits beyond a usable rise; steer downwards.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(HeatsinkError::NotConverged {
            residual: rise(solution.residual),
            iters: solution.iters,
        });
    }

    let resolved = solution.snapshot.output;
    Ok((resolved.rise, resolved))
}

fn rise(kelvin: f64) -> TemperatureInterval {
    TemperatureInterval::new::<delta_kelvin>(kelvin)
}

/// Network evaluated at a trial rise.
struct RiseModel<'a> {
    network: &'a Network<'a>,
}

impl Model for RiseModel<'_> {
    type Input = TemperatureInterval;
    type Output = Resolved;
    type Error = HeatsinkError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.network.resolve(*input)
    }
}

/// Residual `ΔT − P·R_total(ΔT)` in kelvin.
struct LoadProblem {
    power: f64,
}

impl LoadProblem {
    fn residual(&self, resolved: &Resolved) -> f64 {
        resolved.rise.get::<delta_kelvin>() - self.power * resolved.total.value
    }
}

impl EquationProblem<1> for LoadProblem {
    type Input = TemperatureInterval;
    type Output = Resolved;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(rise(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(output)])
    }
}
