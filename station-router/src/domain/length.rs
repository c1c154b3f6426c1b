//! Segment length type.

use std::fmt;

/// Error returned when a segment length is negative or not finite.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid segment length {value}: {reason}")]
pub struct InvalidLength {
    value: f64,
    reason: &'static str,
}

/// The physical length of a segment, used as the edge weight.
///
/// A `Length` is always finite and non-negative, which is what keeps
/// Dijkstra's algorithm correct over the station graph.
///
/// # Examples
///
/// ```
/// use station_router::domain::Length;
///
/// let len = Length::new(12.5).unwrap();
/// assert_eq!(len.get(), 12.5);
///
/// assert!(Length::new(-1.0).is_err());
/// assert!(Length::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Length(f64);

impl Length {
    /// Validate a raw length.
    pub fn new(value: f64) -> Result<Self, InvalidLength> {
        if !value.is_finite() {
            return Err(InvalidLength {
                value,
                reason: "must be finite",
            });
        }
        if value < 0.0 {
            return Err(InvalidLength {
                value,
                reason: "must not be negative",
            });
        }
        // Normalises -0.0 to 0.0.
        Ok(Length(value + 0.0))
    }

    /// Returns the length as a float.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Length({})", self.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn non_negative_always_valid(value in 0.0f64..1e12) {
            prop_assert_eq!(Length::new(value).unwrap().get(), value);
        }

        #[test]
        fn negative_always_rejected(value in -1e12f64..-1e-9) {
            prop_assert!(Length::new(value).is_err());
        }
    }
}
