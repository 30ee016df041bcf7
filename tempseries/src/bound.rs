//! The minimal-bound rule every reading in a series must satisfy.
//!
//! A [`MinimalBound`] is checked once per batch, before any storage is
//! touched, so a batch is either admitted whole or rejected whole.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeriesError};

/// Absolute zero in degrees Celsius, rounded to the whole degree.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.0;

/// Lowest reading a series accepts.
///
/// Readings equal to the bound are admitted. NaN never compares greater than
/// or equal to anything, so NaN readings are always rejected.
///
/// # Examples
///
/// ```rust
/// use tempseries::bound::MinimalBound;
///
/// let bound = MinimalBound::default();
/// assert!(bound.admits(-273.0));
/// assert!(!bound.admits(-273.5));
/// assert!(bound.check(&[1.0, 2.0]).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MinimalBound(f64);

impl MinimalBound {
    /// The bound used by [`crate::Series::new`].
    pub const DEFAULT: Self = Self(ABSOLUTE_ZERO_CELSIUS);

    /// Creates a bound at `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidBound`] if `value` is NaN or infinite.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(SeriesError::InvalidBound { bound: value });
        }
        Ok(Self(value))
    }

    /// Returns the bound as a plain number.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns whether `reading` satisfies this bound.
    #[inline]
    pub fn admits(self, reading: f64) -> bool {
        reading >= self.0
    }

    /// Checks a whole batch against this bound.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::ValueOutOfRange`] describing the first reading
    /// that falls below the bound.
    pub fn check(self, readings: &[f64]) -> Result<()> {
        match readings.iter().position(|&r| !self.admits(r)) {
            None => Ok(()),
            Some(index) => Err(SeriesError::ValueOutOfRange {
                index,
                value: readings[index],
                bound: self.0,
            }),
        }
    }
}

impl Default for MinimalBound {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for MinimalBound {
    type Error = SeriesError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MinimalBound> for f64 {
    fn from(bound: MinimalBound) -> Self {
        bound.0
    }
}
