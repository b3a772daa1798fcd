use std::collections::BTreeMap;

use uom::si::{
    f64::Length,
    length::{meter, micrometer, millimeter},
};

use crate::models::thermal::heatsink::core::HeatsinkError;

/// Named geometric parameters of one heatsink design, stored in SI.
///
/// Display units only appear at the boundary: [`ParameterSet::from_millimeters`]
/// converts on the way in and [`ParameterSet::to_millimeters`] on the way out.
/// A set is never mutated; [`ParameterSet::with`] returns a new set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    values: BTreeMap<String, Length>,
}

impl ParameterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `(name, millimeters)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`HeatsinkError::InvalidInput`] if a value is not finite or a
    /// name appears twice.
    pub fn from_millimeters<'a>(
        values: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Result<Self, HeatsinkError> {
        let mut set = BTreeMap::new();
        for (name, mm) in values {
            if !mm.is_finite() {
                return Err(HeatsinkError::invalid_input(name, "value must be finite"));
            }
            if set.insert(name.to_owned(), Length::new::<millimeter>(mm)).is_some() {
                return Err(HeatsinkError::invalid_input(name, "given more than once"));
            }
        }
        Ok(Self { values: set })
    }

    /// Returns a copy of this set with `name` set to `value`.
    #[must_use]
    pub fn with(&self, name: &str, value: Length) -> Self {
        let mut values = self.values.clone();
        values.insert(name.to_owned(), value);
        Self { values }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Length> {
        self.values.get(name).copied()
    }

    /// Returns the named value in meters.
    ///
    /// # Errors
    ///
    /// Returns [`HeatsinkError::InvalidInput`] if the parameter is missing.
    pub fn meters(&self, name: &str) -> Result<f64, HeatsinkError> {
        self.get(name)
            .map(|value| value.get::<meter>())
            .ok_or_else(|| HeatsinkError::invalid_input(name, "missing parameter"))
    }

    /// Iterates over parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Length)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Converts back to display units.
    #[must_use]
    pub fn to_millimeters(&self) -> BTreeMap<String, f64> {
        self.values
            .iter()
            .map(|(name, value)| (name.clone(), value.get::<millimeter>()))
            .collect()
    }

    /// Values rounded to whole micrometers, in name order.
    ///
    /// Two sets with the same key describe the same manufacturable part.
    pub(crate) fn quantized(&self) -> Vec<(String, i64)> {
        self.values
            .iter()
            .map(|(name, value)| {
                let microns = value.get::<micrometer>().round() as i64;
                (name.clone(), microns)
            })
            .collect()
    }
}
