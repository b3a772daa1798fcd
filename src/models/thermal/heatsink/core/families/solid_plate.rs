//! Flat plate without fins.

use uom::si::area::square_meter;

use crate::models::thermal::heatsink::core::{
    Footprint, GeometrySummary, HeatsinkError, ManufacturingLimits, ParameterSet,
    geometry::{cubic_meters, meters, square_meters},
    registry::{ParameterRole, ParameterSpec, TypeDescriptor},
};

pub const SCHEMA: &[ParameterSpec] = &[ParameterSpec::new(
    "base_thickness",
    ParameterRole::BaseThickness,
    [0.1, 100.0, 10.0],
    "Plate thickness",
)];

pub const DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    id: "solid_plate",
    label: "Solid plate",
    schema: SCHEMA,
    area_model,
    validator,
};

fn validator(
    _params: &ParameterSet,
    _footprint: &Footprint,
    _limits: &ManufacturingLimits,
) -> Result<(), HeatsinkError> {
    Ok(())
}

/// The plate stands vertically, so its longer side sets the boundary layer.
/// Edges are not counted as convecting area.
fn area_model(
    params: &ParameterSet,
    footprint: &Footprint,
) -> Result<GeometrySummary, HeatsinkError> {
    let area = footprint.area().get::<square_meter>();
    let thickness = params.meters("base_thickness")?;

    Ok(GeometrySummary {
        footprint_area: square_meters(area),
        base_exposed_area: square_meters(area),
        base_cross_section: square_meters(area),
        base_thickness: meters(thickness),
        characteristic_length: footprint.longer_side(),
        fins: None,
        material_volume: cubic_meters(area * thickness),
    })
}
