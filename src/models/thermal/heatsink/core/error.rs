use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::TemperatureInterval;

use crate::support::constraint::ConstraintError;

/// Errors raised by the heatsink models.
///
/// Every variant that refers to an input names the offending field.
#[derive(Debug, Error)]
pub enum HeatsinkError {
    /// A parameter is missing, unknown, non-finite or outside its accepted range.
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },

    /// The geometry violates a manufacturing or geometric constraint.
    #[error("invalid geometry `{field}`: {reason}")]
    InvalidGeometry { field: String, reason: String },

    /// No heatsink type is registered under this id.
    #[error("unknown heatsink type `{id}`")]
    UnknownType { id: String },

    /// A heatsink type with this id is already registered.
    #[error("heatsink type `{id}` is already registered")]
    DuplicateType { id: String },

    /// An optional capability is not compiled in.
    ///
    /// Never aborts a calculation; evaluations degrade to fallback formulas.
    #[error("optional dependency `{name}` is not available")]
    MissingOptionalDependency { name: &'static str },

    /// The optimizer found no feasible candidate across all types.
    #[error("no feasible configuration: {evaluated} evaluated, {skipped} infeasible")]
    NoFeasibleConfiguration { evaluated: usize, skipped: usize },

    /// A computation would divide by zero or produce a non-finite value.
    #[error("numerically degenerate `{field}`: {value}")]
    NumericDegenerate { field: &'static str, value: f64 },

    /// The given-load temperature solve hit its iteration limit.
    #[error("temperature rise solve did not converge: residual={residual:?}")]
    NotConverged {
        /// Residual `ΔT − P·R_total(ΔT)` of the best iterate.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),
}

impl HeatsinkError {
    pub(crate) fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_geometry(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Maps a violated construction constraint on `field` to [`HeatsinkError::InvalidInput`].
    pub(crate) fn constraint(field: impl Into<String>) -> impl FnOnce(ConstraintError) -> Self {
        let field = field.into();
        move |err| Self::InvalidInput {
            field,
            reason: err.to_string(),
        }
    }

    /// Returns `true` for errors that reject a candidate as unbuildable.
    #[must_use]
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::InvalidGeometry { .. }
        )
    }
}
