//! Geometric summary consumed by the resistance network.

use uom::si::{
    area::square_meter,
    f64::{Area, Length, Volume},
    length::meter,
    volume::cubic_meter,
};

/// Fin or pin array standing on the base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinArray {
    /// Total number of fins or pins.
    pub count: usize,

    /// Features counted along the footprint length and width.
    pub layout: [usize; 2],

    pub height: Length,

    /// Fin thickness, or pin side (the thinner side for rectangular pins),
    /// used by the fin-efficiency formula.
    pub thickness: Length,

    /// Lateral plus tip area of the whole array.
    pub area: Area,
}

impl FinArray {
    /// Corrected fin length `H + t/2` accounting for tip convection.
    #[must_use]
    pub fn corrected_length(&self) -> Length {
        self.height + self.thickness / 2.0
    }
}

/// Areas, lengths and volume of one concrete heatsink design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySummary {
    pub footprint_area: Area,

    /// Base area left exposed between fins.
    pub base_exposed_area: Area,

    /// Area conducting heat through the base.
    pub base_cross_section: Area,

    pub base_thickness: Length,

    /// Convecting height passed to the natural-convection correlation.
    pub characteristic_length: Length,

    /// `None` for a solid plate.
    pub fins: Option<FinArray>,

    /// Metal left after machining.
    pub material_volume: Volume,
}

impl GeometrySummary {
    #[must_use]
    pub fn fin_count(&self) -> usize {
        self.fins.map_or(0, |fins| fins.count)
    }

    /// Base plus fin height.
    #[must_use]
    pub fn overall_height(&self) -> Length {
        self.fins
            .map_or(self.base_thickness, |fins| self.base_thickness + fins.height)
    }

    /// Exposed base plus full fin area, before fin efficiency.
    #[must_use]
    pub fn total_area(&self) -> Area {
        self.fins
            .map_or(self.base_exposed_area, |fins| self.base_exposed_area + fins.area)
    }
}

pub(crate) fn square_meters(value: f64) -> Area {
    Area::new::<square_meter>(value)
}

pub(crate) fn cubic_meters(value: f64) -> Volume {
    Volume::new::<cubic_meter>(value)
}

pub(crate) fn meters(value: f64) -> Length {
    Length::new::<meter>(value)
}
