//! Square pins left by milling two perpendicular sets of grooves.

use uom::si::length::meter;

use crate::models::thermal::heatsink::core::{
    Footprint, GeometrySummary, HeatsinkError, ManufacturingLimits, ParameterSet,
    registry::{ParameterRole, ParameterSpec, TypeDescriptor},
};

use super::layout::{self, FinShape};

pub const SCHEMA: &[ParameterSpec] = &[
    ParameterSpec::new(
        "groove_width",
        ParameterRole::Spacing,
        [0.5, 20.0, 3.0],
        "Groove width between pins",
    ),
    ParameterSpec::new(
        "pin_size",
        ParameterRole::FeatureSize,
        [0.5, 15.0, 3.0],
        "Side of the square pin",
    ),
    ParameterSpec::new(
        "pin_height",
        ParameterRole::Height,
        [1.0, 100.0, 15.0],
        "Pin height above the base",
    ),
    ParameterSpec::new(
        "base_thickness",
        ParameterRole::BaseThickness,
        [1.0, 20.0, 5.0],
        "Base plate thickness",
    ),
];

pub const DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    id: "crosscut",
    label: "Crosscut (grid)",
    schema: SCHEMA,
    area_model,
    validator,
};

fn validator(
    params: &ParameterSet,
    footprint: &Footprint,
    limits: &ManufacturingLimits,
) -> Result<(), HeatsinkError> {
    let size = params.meters("pin_size")?;
    let pitch = size + params.meters("groove_width")?;
    let shorter = footprint
        .length()
        .get::<meter>()
        .min(footprint.width().get::<meter>());

    layout::check_feature("pin_size", size, limits)?;
    layout::check_pitch("groove_width", pitch, size, limits)?;
    layout::check_span("pin_size", size, shorter)
}

fn area_model(
    params: &ParameterSet,
    footprint: &Footprint,
) -> Result<GeometrySummary, HeatsinkError> {
    let size = params.meters("pin_size")?;
    let height = params.meters("pin_height")?;
    let pitch = size + params.meters("groove_width")?;

    let layout = [
        layout::count_along(footprint.length().get::<meter>(), size, pitch),
        layout::count_along(footprint.width().get::<meter>(), size, pitch),
    ];

    layout::finned(
        footprint,
        params.meters("base_thickness")?,
        layout,
        &FinShape {
            height,
            covered: size * size,
            area: 4.0 * size * height + size * size,
            thickness: size,
        },
    )
}
