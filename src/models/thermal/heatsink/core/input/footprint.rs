use uom::si::{
    area::square_meter,
    f64::{Area, Length},
    length::{meter, millimeter},
};

use crate::{
    models::thermal::heatsink::core::HeatsinkError, support::constraint::StrictlyPositive,
};

/// Rectangular base footprint.
///
/// Straight fins run along the `length` and are spaced across the `width`.
/// Pin arrays count their `x` axis along the length and `y` along the width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    length: Length,
    width: Length,
}

impl Footprint {
    /// Constructs a validated footprint.
    ///
    /// # Errors
    ///
    /// Returns [`HeatsinkError::InvalidGeometry`] if either side is not
    /// strictly positive and finite.
    pub fn new(length: Length, width: Length) -> Result<Self, HeatsinkError> {
        for (field, side) in [("footprint.length", length), ("footprint.width", width)] {
            let side = StrictlyPositive::new(side)
                .map_err(|err| HeatsinkError::invalid_geometry(field, err.to_string()))?;
            if !side.as_ref().get::<meter>().is_finite() {
                return Err(HeatsinkError::invalid_geometry(field, "must be finite"));
            }
        }
        Ok(Self { length, width })
    }

    /// Constructs a footprint from display units.
    ///
    /// # Errors
    ///
    /// See [`Footprint::new`].
    pub fn from_millimeters(length_mm: f64, width_mm: f64) -> Result<Self, HeatsinkError> {
        Self::new(
            Length::new::<millimeter>(length_mm),
            Length::new::<millimeter>(width_mm),
        )
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    #[must_use]
    pub fn width(&self) -> Length {
        self.width
    }

    #[must_use]
    pub fn area(&self) -> Area {
        Area::new::<square_meter>(self.length.get::<meter>() * self.width.get::<meter>())
    }

    /// The longer side, used as the convecting height of a plate.
    #[must_use]
    pub fn longer_side(&self) -> Length {
        if self.length >= self.width {
            self.length
        } else {
            self.width
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn area_in_square_meters() {
        let footprint = Footprint::from_millimeters(120.0, 80.0).unwrap();
        assert_relative_eq!(footprint.area().get::<square_meter>(), 0.0096, max_relative = 1e-12);
        assert_eq!(footprint.longer_side(), footprint.length());
    }

    #[test]
    fn rejects_non_positive_sides() {
        assert!(matches!(
            Footprint::from_millimeters(0.0, 80.0),
            Err(HeatsinkError::InvalidGeometry { field, .. }) if field == "footprint.length"
        ));
        assert!(matches!(
            Footprint::from_millimeters(120.0, -1.0),
            Err(HeatsinkError::InvalidGeometry { field, .. }) if field == "footprint.width"
        ));
        assert!(Footprint::from_millimeters(f64::NAN, 10.0).is_err());
    }
}
