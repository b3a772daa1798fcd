use uom::si::{f64::Length, length::millimeter};

/// How the optimizer and validators treat a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterRole {
    /// Fin or pin height; counts towards the total height cap.
    Height,

    /// Base plate thickness; counts towards the total height cap.
    BaseThickness,

    /// Fin or pin thickness; bounded below by the CNC minimum thickness.
    FeatureSize,

    /// Clear gap between features; must exceed the CNC minimum gap.
    Spacing,

    /// Center-to-center pitch; must exceed the feature size plus the minimum gap.
    Pitch,
}

impl ParameterRole {
    /// Returns `true` for roles that add to the overall part height.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Height | Self::BaseThickness)
    }
}

/// One entry of a family's parameter schema.
///
/// Bounds and default are in millimeters. The bounds are the accepted input
/// range and the optimizer's search range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub role: ParameterRole,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub description: &'static str,
}

impl ParameterSpec {
    /// Display unit of every schema value.
    pub const UNIT: &'static str = "mm";

    #[must_use]
    pub const fn new(
        name: &'static str,
        role: ParameterRole,
        [min, max, default]: [f64; 3],
        description: &'static str,
    ) -> Self {
        Self {
            name,
            role,
            min,
            max,
            default,
            description,
        }
    }

    #[must_use]
    pub fn min_length(&self) -> Length {
        Length::new::<millimeter>(self.min)
    }

    #[must_use]
    pub fn max_length(&self) -> Length {
        Length::new::<millimeter>(self.max)
    }

    #[must_use]
    pub fn default_length(&self) -> Length {
        Length::new::<millimeter>(self.default)
    }
}
