use uom::si::{f64::Length, length::millimeter};

/// CNC manufacturing minimums applied by every family validator.
///
/// A fin or pin must be at least `min_thickness` thick, and the pitch between
/// neighbours must strictly exceed `thickness + min_gap` so the cutter has
/// clearance and neighbouring features never overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManufacturingLimits {
    /// Minimum fin or pin thickness.
    pub min_thickness: Length,

    /// Minimum clearance between neighbouring fins or pins.
    pub min_gap: Length,
}

impl Default for ManufacturingLimits {
    /// 2.0 mm fins and 2.5 mm clearance: the stock 3 mm slot cut by a 3 mm end
    /// mill between 2 mm fins (5 mm pitch) is accepted.
    fn default() -> Self {
        Self {
            min_thickness: Length::new::<millimeter>(2.0),
            min_gap: Length::new::<millimeter>(2.5),
        }
    }
}
