//! Rectangular pins on independent pitches along each footprint axis.
//!
//! Fin efficiency uses the thinner pin side as the thickness.

use uom::si::length::meter;

use crate::models::thermal::heatsink::core::{
    Footprint, GeometrySummary, HeatsinkError, ManufacturingLimits, ParameterSet,
    registry::{ParameterRole, ParameterSpec, TypeDescriptor},
};

use super::layout::{self, FinShape};

pub const SCHEMA: &[ParameterSpec] = &[
    ParameterSpec::new(
        "pin_size_x",
        ParameterRole::FeatureSize,
        [0.5, 15.0, 5.0],
        "Pin size along the footprint length",
    ),
    ParameterSpec::new(
        "pin_size_y",
        ParameterRole::FeatureSize,
        [0.5, 15.0, 5.0],
        "Pin size along the footprint width",
    ),
    ParameterSpec::new(
        "pitch_x",
        ParameterRole::Pitch,
        [1.0, 40.0, 8.0],
        "Pin pitch along the footprint length",
    ),
    ParameterSpec::new(
        "pitch_y",
        ParameterRole::Pitch,
        [1.0, 40.0, 8.0],
        "Pin pitch along the footprint width",
    ),
    ParameterSpec::new(
        "pin_height",
        ParameterRole::Height,
        [1.0, 100.0, 20.0],
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
    id: "pin_fin",
    label: "Pin-fin",
    schema: SCHEMA,
    area_model,
    validator,
};

fn validator(
    params: &ParameterSet,
    footprint: &Footprint,
    limits: &ManufacturingLimits,
) -> Result<(), HeatsinkError> {
    let sx = params.meters("pin_size_x")?;
    let sy = params.meters("pin_size_y")?;

    layout::check_feature("pin_size_x", sx, limits)?;
    layout::check_feature("pin_size_y", sy, limits)?;
    layout::check_pitch("pitch_x", params.meters("pitch_x")?, sx, limits)?;
    layout::check_pitch("pitch_y", params.meters("pitch_y")?, sy, limits)?;
    layout::check_span("pin_size_x", sx, footprint.length().get::<meter>())?;
    layout::check_span("pin_size_y", sy, footprint.width().get::<meter>())
}

fn area_model(
    params: &ParameterSet,
    footprint: &Footprint,
) -> Result<GeometrySummary, HeatsinkError> {
    let sx = params.meters("pin_size_x")?;
    let sy = params.meters("pin_size_y")?;
    let height = params.meters("pin_height")?;

    let layout = [
        layout::count_along(footprint.length().get::<meter>(), sx, params.meters("pitch_x")?),
        layout::count_along(footprint.width().get::<meter>(), sy, params.meters("pitch_y")?),
    ];

    layout::finned(
        footprint,
        params.meters("base_thickness")?,
        layout,
        &FinShape {
            height,
            covered: sx * sy,
            area: 2.0 * (sx + sy) * height + sx * sy,
            thickness: sx.min(sy),
        },
    )
}
