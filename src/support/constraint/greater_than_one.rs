use std::cmp::Ordering;

use num_traits::One;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly greater than one.
///
/// Growth factors use this: a radius multiplied by such a factor always
/// moves outward.
///
/// ```
/// use matrioshka_models::support::constraint::GreaterThanOne;
///
/// assert!(GreaterThanOne::new(4.0).is_ok());
/// assert!(GreaterThanOne::new(1.000_001).is_ok());
/// assert!(GreaterThanOne::new(1.0).is_err());
/// assert!(GreaterThanOne::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GreaterThanOne;

impl GreaterThanOne {
    /// Constructs a [`Constrained<T, GreaterThanOne>`] if the value exceeds one.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`] if the value is one or less,
    /// or [`ConstraintError::NotANumber`] for `NaN`.
    pub fn new<T: PartialOrd + One>(
        value: T,
    ) -> Result<Constrained<T, GreaterThanOne>, ConstraintError> {
        Constrained::<T, GreaterThanOne>::new(value)
    }
}

impl<T: PartialOrd + One> Constraint<T> for GreaterThanOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal | Ordering::Less) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats() {
        assert!(GreaterThanOne::new(2.0).is_ok());
        assert_eq!(GreaterThanOne::new(1.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(GreaterThanOne::new(0.5), Err(ConstraintError::BelowMinimum));
        assert_eq!(
            GreaterThanOne::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn integers() {
        assert_eq!(GreaterThanOne::new(3_u32).map(|c| c.into_inner()), Ok(3));
        assert!(GreaterThanOne::new(1_u32).is_err());
    }

    #[test]
    fn infinity_is_allowed() {
        assert!(GreaterThanOne::new(f64::INFINITY).is_ok());
    }
}
