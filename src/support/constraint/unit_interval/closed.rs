use std::{cmp::Ordering, marker::PhantomData};

use crate::support::constraint::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value lies in the closed unit interval: `0 ≤ x ≤ 1`.
///
/// Relative humidity is stored as a fraction constrained this way.
///
/// # Examples
///
/// ```
/// use heatsink_models::support::constraint::UnitInterval;
/// use uom::si::{f64::Ratio, ratio::ratio};
///
/// let dry = UnitInterval::zero::<f64>();
/// assert_eq!(dry.into_inner(), 0.0);
///
/// let humid = UnitInterval::new(Ratio::new::<ratio>(0.5)).unwrap();
/// assert_eq!(humid.as_ref().get::<ratio>(), 0.5);
///
/// assert!(UnitInterval::new(1.2).is_err());
/// assert!(UnitInterval::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if 0 ≤ value ≤ 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }

    /// Returns the lower bound (zero) as a constrained value.
    #[must_use]
    pub fn zero<T: UnitBounds>() -> Constrained<T, UnitInterval> {
        Constrained::<T, UnitInterval> {
            value: T::zero(),
            _marker: PhantomData,
        }
    }

    /// Returns the midpoint (one half) as a constrained value.
    #[must_use]
    pub fn half<T: UnitBounds>() -> Constrained<T, UnitInterval> {
        Constrained::<T, UnitInterval> {
            value: T::half(),
            _marker: PhantomData,
        }
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::support::constraint::*;

    use uom::si::{
        f64::Ratio,
        ratio::{percent, ratio},
    };

    #[test]
    fn endpoints_are_inclusive() {
        assert!(UnitInterval::new(0.0).is_ok());
        assert!(UnitInterval::new(1.0).is_ok());
        assert!(UnitInterval::new(Ratio::new::<ratio>(1.0)).is_ok());
    }

    #[test]
    fn half_is_the_midpoint() {
        assert_eq!(UnitInterval::half::<f64>().into_inner(), 0.5);
        assert_eq!(UnitInterval::half::<Ratio>().into_inner().get::<ratio>(), 0.5);
    }

    #[test]
    fn rejects_out_of_range_humidity() {
        assert!(matches!(
            UnitInterval::new(-1e-15),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            UnitInterval::new(Ratio::new::<percent>(101.0)),
            Err(ConstraintError::AboveMaximum)
        ));
        assert!(matches!(
            UnitInterval::new(f64::INFINITY),
            Err(ConstraintError::AboveMaximum)
        ));
        assert!(matches!(
            UnitInterval::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }
}
