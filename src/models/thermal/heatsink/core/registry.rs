//! Catalog of heatsink families.
//!
//! A family is described entirely by its [`TypeDescriptor`]: a parameter
//! schema plus an area model and a validator. Nothing outside the family
//! modules branches on the type id, so a new family is added by registering
//! another descriptor.

mod descriptor;
mod schema;

pub use descriptor::{AreaModelFn, TypeDescriptor, ValidatorFn};
pub use schema::{ParameterRole, ParameterSpec};

use super::{HeatsinkError, families};

/// Ordered catalog of heatsink type descriptors.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    descriptors: Vec<TypeDescriptor>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in families: solid plate, straight fins,
    /// crosscut pins and rectangular pin fins, in that order.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            descriptors: vec![
                families::solid_plate::DESCRIPTOR,
                families::straight_fins::DESCRIPTOR,
                families::crosscut::DESCRIPTOR,
                families::pin_fin::DESCRIPTOR,
            ],
        }
    }

    /// Adds a descriptor after the existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`HeatsinkError::DuplicateType`] if the id is already taken.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> Result<(), HeatsinkError> {
        if self.descriptors.iter().any(|d| d.id == descriptor.id) {
            return Err(HeatsinkError::DuplicateType {
                id: descriptor.id.to_owned(),
            });
        }
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Looks up a descriptor by id.
    ///
    /// # Errors
    ///
    /// Returns [`HeatsinkError::UnknownType`] if nothing is registered under `id`.
    pub fn get(&self, id: &str) -> Result<&TypeDescriptor, HeatsinkError> {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| HeatsinkError::UnknownType { id: id.to_owned() })
    }

    /// Registered ids in registration order.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(|d| d.id).collect()
    }

    /// Iterates over descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.descriptors.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::thermal::heatsink::core::{
        Footprint, GeometrySummary, ManufacturingLimits, ParameterSet, families::solid_plate,
    };

    fn always_ok(
        _params: &ParameterSet,
        _footprint: &Footprint,
        _limits: &ManufacturingLimits,
    ) -> Result<(), HeatsinkError> {
        Ok(())
    }

    fn plate_area(
        params: &ParameterSet,
        footprint: &Footprint,
    ) -> Result<GeometrySummary, HeatsinkError> {
        (solid_plate::DESCRIPTOR.area_model)(params, footprint)
    }

    const CUSTOM: TypeDescriptor = TypeDescriptor {
        id: "skived_plate",
        label: "Skived plate",
        schema: solid_plate::SCHEMA,
        area_model: plate_area,
        validator: always_ok,
    };

    #[test]
    fn standard_order() {
        let registry = TypeRegistry::standard();
        assert_eq!(
            registry.list(),
            vec!["solid_plate", "straight_fins", "crosscut", "pin_fin"]
        );
    }

    #[test]
    fn unknown_type() {
        let registry = TypeRegistry::standard();
        assert!(matches!(
            registry.get("heat_pipe"),
            Err(HeatsinkError::UnknownType { id }) if id == "heat_pipe"
        ));
    }

    #[test]
    fn duplicate_type() {
        let mut registry = TypeRegistry::standard();
        assert!(matches!(
            registry.register(families::straight_fins::DESCRIPTOR),
            Err(HeatsinkError::DuplicateType { id }) if id == "straight_fins"
        ));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn custom_family_is_appended() {
        let mut registry = TypeRegistry::standard();
        registry.register(CUSTOM).unwrap();

        assert_eq!(registry.list().last(), Some(&"skived_plate"));

        let descriptor = registry.get("skived_plate").unwrap();
        let footprint = Footprint::from_millimeters(50.0, 40.0).unwrap();
        let summary = descriptor
            .summarize(&descriptor.defaults(), &footprint, &ManufacturingLimits::default())
            .unwrap();
        assert_eq!(summary.fin_count(), 0);
    }
}
