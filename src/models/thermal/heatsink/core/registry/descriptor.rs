use uom::si::length::millimeter;

use crate::models::thermal::heatsink::core::{
    Footprint, GeometrySummary, HeatsinkError, ManufacturingLimits, ParameterSet,
};

use super::{ParameterRole, ParameterSpec};

/// Computes the geometry summary of a schema-valid, family-valid parameter set.
pub type AreaModelFn = fn(&ParameterSet, &Footprint) -> Result<GeometrySummary, HeatsinkError>;

/// Checks the family's geometric and manufacturing rules.
pub type ValidatorFn =
    fn(&ParameterSet, &Footprint, &ManufacturingLimits) -> Result<(), HeatsinkError>;

/// Everything the crate knows about one heatsink family.
#[derive(Debug, Clone, Copy)]
pub struct TypeDescriptor {
    /// Stable identifier, e.g. `"straight_fins"`.
    pub id: &'static str,

    /// Human-readable name.
    pub label: &'static str,

    /// Ordered parameter schema.
    pub schema: &'static [ParameterSpec],

    pub area_model: AreaModelFn,

    pub validator: ValidatorFn,
}

impl TypeDescriptor {
    /// Default parameter set built from the schema.
    #[must_use]
    pub fn defaults(&self) -> ParameterSet {
        self.schema
            .iter()
            .fold(ParameterSet::new(), |set, spec| {
                set.with(spec.name, spec.default_length())
            })
    }

    #[must_use]
    pub fn spec(&self, name: &str) -> Option<&ParameterSpec> {
        self.schema.iter().find(|spec| spec.name == name)
    }

    /// Checks `params` against the schema alone.
    ///
    /// # Errors
    ///
    /// - [`HeatsinkError::InvalidInput`] for an unknown, missing, non-finite,
    ///   non-positive or out-of-range parameter.
    /// - [`HeatsinkError::InvalidGeometry`] for a non-positive height.
    pub fn check_schema(&self, params: &ParameterSet) -> Result<(), HeatsinkError> {
        if let Some((name, _)) = params.iter().find(|(name, _)| self.spec(name).is_none()) {
            return Err(HeatsinkError::invalid_input(
                name,
                format!("not a parameter of `{}`", self.id),
            ));
        }

        for spec in self.schema {
            let value = params
                .get(spec.name)
                .ok_or_else(|| HeatsinkError::invalid_input(spec.name, "missing parameter"))?
                .get::<millimeter>();

            if !value.is_finite() {
                return Err(HeatsinkError::invalid_input(spec.name, "value must be finite"));
            }
            if value <= 0.0 {
                let reason = format!("must be positive, got {value} mm");
                return Err(match spec.role {
                    ParameterRole::Height => HeatsinkError::invalid_geometry(spec.name, reason),
                    _ => HeatsinkError::invalid_input(spec.name, reason),
                });
            }
            // Allow for rounding in the mm -> m -> mm round trip.
            let slack = 1e-9 * spec.max.abs();
            if value < spec.min - slack || value > spec.max + slack {
                return Err(HeatsinkError::invalid_input(
                    spec.name,
                    format!(
                        "{value} mm is outside [{}, {}] {}",
                        spec.min,
                        spec.max,
                        ParameterSpec::UNIT
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Validates `params` and computes the geometry summary.
    ///
    /// Schema checks run first, then the family validator; values are never
    /// clamped.
    ///
    /// # Errors
    ///
    /// Returns [`HeatsinkError::InvalidInput`] or [`HeatsinkError::InvalidGeometry`]
    /// for unbuildable designs.
    pub fn summarize(
        &self,
        params: &ParameterSet,
        footprint: &Footprint,
        limits: &ManufacturingLimits,
    ) -> Result<GeometrySummary, HeatsinkError> {
        self.check_schema(params)?;
        (self.validator)(params, footprint, limits)?;
        (self.area_model)(params, footprint)
    }
}
