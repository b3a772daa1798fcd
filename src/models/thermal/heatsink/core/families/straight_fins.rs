//! Straight fins milled along the footprint length.

use uom::si::length::meter;

use crate::models::thermal::heatsink::core::{
    Footprint, GeometrySummary, HeatsinkError, ManufacturingLimits, ParameterSet,
    registry::{ParameterRole, ParameterSpec, TypeDescriptor},
};

use super::layout::{self, FinShape};

pub const SCHEMA: &[ParameterSpec] = &[
    ParameterSpec::new(
        "fin_thickness",
        ParameterRole::FeatureSize,
        [0.5, 10.0, 2.0],
        "Fin thickness",
    ),
    ParameterSpec::new(
        "fin_gap",
        ParameterRole::Spacing,
        [0.5, 20.0, 3.0],
        "Clear gap between fins",
    ),
    ParameterSpec::new(
        "fin_height",
        ParameterRole::Height,
        [1.0, 100.0, 20.0],
        "Fin height above the base",
    ),
    ParameterSpec::new(
        "base_thickness",
        ParameterRole::BaseThickness,
        [1.0, 20.0, 5.0],
        "Base plate thickness",
    ),
];

pub const DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    id: "straight_fins",
    label: "Straight milled fins",
    schema: SCHEMA,
    area_model,
    validator,
};

/// Center-to-center fin pitch, `thickness + gap`.
///
/// # Errors
///
/// Returns [`HeatsinkError::InvalidInput`] if either parameter is missing.
pub fn pitch(params: &ParameterSet) -> Result<f64, HeatsinkError> {
    Ok(params.meters("fin_thickness")? + params.meters("fin_gap")?)
}

fn validator(
    params: &ParameterSet,
    footprint: &Footprint,
    limits: &ManufacturingLimits,
) -> Result<(), HeatsinkError> {
    let t = params.meters("fin_thickness")?;
    layout::check_feature("fin_thickness", t, limits)?;
    layout::check_pitch("fin_gap", pitch(params)?, t, limits)?;
    layout::check_span("fin_thickness", t, footprint.width().get::<meter>())
}

fn area_model(
    params: &ParameterSet,
    footprint: &Footprint,
) -> Result<GeometrySummary, HeatsinkError> {
    let t = params.meters("fin_thickness")?;
    let height = params.meters("fin_height")?;
    let run = footprint.length().get::<meter>();
    let count = layout::count_along(footprint.width().get::<meter>(), t, pitch(params)?);

    layout::finned(
        footprint,
        params.meters("base_thickness")?,
        [1, count],
        &FinShape {
            height,
            covered: t * run,
            area: 2.0 * height * run + t * run,
            thickness: t,
        },
    )
}
