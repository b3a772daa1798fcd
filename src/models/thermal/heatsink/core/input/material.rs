use std::borrow::Cow;

use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};

use crate::{
    models::thermal::heatsink::core::HeatsinkError,
    support::constraint::{Constrained, StrictlyPositive},
};

/// Heatsink material.
///
/// The resistance network rejects non-positive conductivity with
/// [`HeatsinkError::NumericDegenerate`]; use [`Material::new`] at input
/// boundaries to reject it earlier.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: Cow<'static, str>,
    pub conductivity: ThermalConductivity,
}

impl Material {
    /// Constructs a validated material.
    ///
    /// # Errors
    ///
    /// Returns [`HeatsinkError::InvalidInput`] if the conductivity is not
    /// strictly positive.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        conductivity: ThermalConductivity,
    ) -> Result<Self, HeatsinkError> {
        let conductivity = StrictlyPositive::new(conductivity)
            .map_err(HeatsinkError::constraint("material.conductivity"))?;
        Ok(Self::from_constrained(name, conductivity))
    }

    /// Constructs a material from a pre-validated conductivity.
    #[must_use]
    pub fn from_constrained(
        name: impl Into<Cow<'static, str>>,
        conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    ) -> Self {
        Self {
            name: name.into(),
            conductivity: conductivity.into_inner(),
        }
    }

    /// Common extrusion/milling aluminium alloy, 200 W/(m·K).
    #[must_use]
    pub fn aluminum() -> Self {
        Self {
            name: Cow::Borrowed("aluminum alloy"),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(200.0),
        }
    }

    /// Electrolytic copper, 390 W/(m·K).
    #[must_use]
    pub fn copper() -> Self {
        Self {
            name: Cow::Borrowed("copper"),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(390.0),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::aluminum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_conductivity() {
        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(0.0);
        assert!(matches!(
            Material::new("foam", k),
            Err(HeatsinkError::InvalidInput { field, .. }) if field == "material.conductivity"
        ));
    }

    #[test]
    fn accepts_custom_alloy() {
        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(167.0);
        let material = Material::new("6061-T6", k).unwrap();
        assert_eq!(material.name, "6061-T6");
        assert_eq!(material.conductivity, k);
    }

    #[test]
    fn default_is_aluminum() {
        assert_eq!(Material::default(), Material::aluminum());
    }
}
