use uom::si::{
    area::square_meter,
    length::{meter, millimeter},
};

use crate::models::thermal::heatsink::core::{
    Footprint, GeometrySummary, HeatsinkError, ManufacturingLimits,
    geometry::{FinArray, cubic_meters, meters, square_meters},
};

/// Absorbs floating-point noise in length comparisons, in meters.
const LENGTH_EPS: f64 = 1e-12;

/// One fin or pin, in meters.
pub(super) struct FinShape {
    pub height: f64,

    /// Base area covered by the feature.
    pub covered: f64,

    /// Convecting area of the feature.
    pub area: f64,

    /// Thickness `t` in `m = sqrt(2h/(k·t))`: fin thickness or pin side.
    pub thickness: f64,
}

/// Number of features of `size` at `pitch` that fit in `span`.
///
/// The first feature starts flush with the edge; `floor((span − size)/pitch) + 1`,
/// saturating at `usize::MAX`.
pub(super) fn count_along(span: f64, size: f64, pitch: f64) -> usize {
    let free = ((span - size) / pitch + 1e-9).floor();
    if free.is_finite() && free > 0.0 {
        (free as usize).saturating_add(1)
    } else {
        1
    }
}

/// Rejects a fin or pin thinner than the CNC minimum.
pub(super) fn check_feature(
    field: &str,
    size: f64,
    limits: &ManufacturingLimits,
) -> Result<(), HeatsinkError> {
    let min = limits.min_thickness.get::<meter>();
    if size < min - LENGTH_EPS {
        return Err(HeatsinkError::invalid_geometry(
            field,
            format!(
                "{} mm is below the minimum thickness of {} mm",
                mm(size),
                mm(min)
            ),
        ));
    }
    Ok(())
}

/// Rejects a pitch that does not leave more than the minimum gap between features.
pub(super) fn check_pitch(
    field: &str,
    pitch: f64,
    size: f64,
    limits: &ManufacturingLimits,
) -> Result<(), HeatsinkError> {
    let required = size + limits.min_gap.get::<meter>();
    if pitch <= required + LENGTH_EPS {
        return Err(HeatsinkError::invalid_geometry(
            field,
            format!(
                "pitch of {} mm must exceed thickness plus minimum gap ({} mm)",
                mm(pitch),
                mm(required)
            ),
        ));
    }
    Ok(())
}

/// Rejects a feature wider than the span it must fit in.
pub(super) fn check_span(field: &str, size: f64, span: f64) -> Result<(), HeatsinkError> {
    if size > span + LENGTH_EPS {
        return Err(HeatsinkError::invalid_geometry(
            field,
            format!("{} mm does not fit in a {} mm span", mm(size), mm(span)),
        ));
    }
    Ok(())
}

/// Summary of an array of identical features on a rectangular base.
pub(super) fn finned(
    footprint: &Footprint,
    base_thickness: f64,
    layout: [usize; 2],
    shape: &FinShape,
) -> Result<GeometrySummary, HeatsinkError> {
    let footprint_area = footprint.area().get::<square_meter>();
    let count = layout[0].saturating_mul(layout[1]);
    let n = count as f64;

    let exposed = footprint_area - n * shape.covered;
    if exposed < -LENGTH_EPS {
        return Err(HeatsinkError::invalid_geometry(
            "footprint",
            "features cover more than the base area",
        ));
    }

    Ok(GeometrySummary {
        footprint_area: square_meters(footprint_area),
        base_exposed_area: square_meters(exposed.max(0.0)),
        base_cross_section: square_meters(footprint_area),
        base_thickness: meters(base_thickness),
        characteristic_length: meters(shape.height),
        fins: Some(FinArray {
            count,
            layout,
            height: meters(shape.height),
            thickness: meters(shape.thickness),
            area: square_meters(n * shape.area),
        }),
        material_volume: cubic_meters(
            footprint_area * base_thickness + n * shape.covered * shape.height,
        ),
    })
}

fn mm(value: f64) -> f64 {
    meters(value).get::<millimeter>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_fins_flush_with_edges() {
        // 2 mm fins at 5 mm pitch across 80 mm: positions 0, 5, ..., 75.
        assert_eq!(count_along(0.080, 0.002, 0.005), 16);
        // Exact fit at the far edge.
        assert_eq!(count_along(0.012, 0.002, 0.005), 3);
        // A single feature as wide as the span.
        assert_eq!(count_along(0.002, 0.002, 0.005), 1);
    }

    #[test]
    fn counts_saturate_instead_of_overflowing() {
        assert_eq!(count_along(1e30, 0.002, 0.005), usize::MAX);
        assert_eq!(count_along(f64::INFINITY, 0.002, 0.005), 1);

        let footprint = Footprint::from_millimeters(1.0, 1.0).unwrap();
        let shape = FinShape {
            height: 0.01,
            covered: 0.0,
            area: 1e-6,
            thickness: 0.002,
        };
        let summary = finned(&footprint, 0.005, [usize::MAX, 2], &shape).unwrap();
        assert_eq!(summary.fins.unwrap().count, usize::MAX);
    }

    #[test]
    fn pitch_must_strictly_exceed_thickness_plus_gap() {
        let limits = ManufacturingLimits::default();
        assert!(check_pitch("fin_gap", 0.0045, 0.002, &limits).is_err());
        assert!(check_pitch("fin_gap", 0.0040, 0.002, &limits).is_err());
        assert!(check_pitch("fin_gap", 0.0050, 0.002, &limits).is_ok());
    }

    #[test]
    fn thickness_minimum() {
        let limits = ManufacturingLimits::default();
        assert!(check_feature("fin_thickness", 0.0019, &limits).is_err());
        assert!(check_feature("fin_thickness", 0.002, &limits).is_ok());
    }
}
