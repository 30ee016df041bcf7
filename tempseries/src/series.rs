//! The temperature series container.
//!
//! A [`Series`] owns an ordered, validated copy of its readings. Every
//! reading satisfies the series' [`MinimalBound`]; construction and
//! [`Series::append`] check a whole batch before storing any of it.
//!
//! # Example Usage
//!
//! ```rust
//! use tempseries::Series;
//!
//! # fn main() -> Result<(), tempseries::SeriesError> {
//! let mut series = Series::new(&[3.0, -5.0, 1.0, 5.0])?;
//! assert_eq!(series.min()?, -5.0);
//! assert_eq!(series.max()?, 5.0);
//!
//! let total = series.append(&[2.0])?;
//! assert_eq!(total, 6.0);
//!
//! // Readings below absolute zero are rejected and nothing is stored.
//! assert!(series.append(&[20.0, -300.0]).is_err());
//! assert_eq!(series.len(), 5);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bound::MinimalBound;
use crate::buffer::ReadingBuffer;
use crate::error::{Result, SeriesError};
use crate::stats::{self, SummaryStatistics};

/// An ordered series of temperature readings.
///
/// Read queries are recomputed on every call and never mutate the series.
/// The only mutation is [`Series::append`], which takes `&mut self`; share a
/// series across threads behind a lock if it must be appended to
/// concurrently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "SeriesRecord", into = "SeriesRecord")]
pub struct Series {
    readings: ReadingBuffer,
    bound: MinimalBound,
}

/// Serialized shape of a [`Series`]. Deserialization is routed through
/// [`Series::with_bound`] so the bound invariant holds for loaded data too.
#[derive(Serialize, Deserialize)]
struct SeriesRecord {
    values: Vec<f64>,
    #[serde(default)]
    bound: MinimalBound,
}

impl Series {
    /// Creates a series from `values`, bounded at absolute zero (−273 °C).
    ///
    /// The readings are copied; later changes to `values` do not affect the
    /// series.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::ValueOutOfRange`] if any reading is below
    /// −273 or is NaN. No series is created in that case.
    pub fn new(values: &[f64]) -> Result<Self> {
        Self::with_minimal_bound(values, MinimalBound::DEFAULT)
    }

    /// Creates a series whose readings must be at least `bound`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidBound`] if `bound` is not finite, or
    /// [`SeriesError::ValueOutOfRange`] if any reading is below it.
    pub fn with_bound(values: &[f64], bound: f64) -> Result<Self> {
        Self::with_minimal_bound(values, MinimalBound::new(bound)?)
    }

    /// Creates a series checked against an already validated bound.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::ValueOutOfRange`] if any reading is below
    /// `bound`.
    pub fn with_minimal_bound(values: &[f64], bound: MinimalBound) -> Result<Self> {
        bound.check(values).inspect_err(|e| {
            debug!(error = %e, "rejected initial readings");
        })?;

        trace!(len = values.len(), bound = bound.value(), "created series");
        Ok(Self {
            readings: ReadingBuffer::from_slice(values),
            bound,
        })
    }

    /// Creates an empty series bounded at absolute zero.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Returns true if the series holds no readings.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Logical capacity of the backing buffer.
    pub fn capacity(&self) -> usize {
        self.readings.capacity()
    }

    /// The bound every reading satisfies.
    pub fn bound(&self) -> MinimalBound {
        self.bound
    }

    /// Borrows the readings in measurement order.
    pub fn as_slice(&self) -> &[f64] {
        self.readings.as_slice()
    }

    /// Iterates over the readings in measurement order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.as_slice().iter().copied()
    }

    /// Returns a copy of the readings in measurement order.
    ///
    /// Mutating the returned vector has no effect on the series.
    pub fn raw_values(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    /// Sum of all readings; zero for an empty series.
    pub fn sum(&self) -> f64 {
        stats::sum(self.as_slice())
    }

    /// Arithmetic mean of the readings.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptySeries`] if the series is empty.
    pub fn average(&self) -> Result<f64> {
        stats::mean(self.as_slice()).ok_or(SeriesError::EmptySeries {
            operation: "average",
        })
    }

    /// Population standard deviation (divides by `n`, not `n - 1`).
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptySeries`] if the series is empty.
    pub fn deviation(&self) -> Result<f64> {
        stats::population_std_dev(self.as_slice()).ok_or(SeriesError::EmptySeries {
            operation: "deviation",
        })
    }

    /// Smallest reading.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptySeries`] if the series is empty.
    pub fn min(&self) -> Result<f64> {
        stats::minimum(self.as_slice()).ok_or(SeriesError::EmptySeries { operation: "min" })
    }

    /// Largest reading.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptySeries`] if the series is empty.
    pub fn max(&self) -> Result<f64> {
        stats::maximum(self.as_slice()).ok_or(SeriesError::EmptySeries { operation: "max" })
    }

    /// Reading closest to zero; see [`Series::find_closest_to_value`].
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptySeries`] if the series is empty.
    pub fn find_closest_to_zero(&self) -> Result<f64> {
        self.find_closest_to_value(0.0)
    }

    /// Reading with the smallest distance to `target`.
    ///
    /// When two readings are equally distant, a strictly positive reading
    /// wins over an earlier non-positive one; otherwise the earlier reading
    /// is kept.
    ///
    /// ```rust
    /// use tempseries::Series;
    ///
    /// let series = Series::new(&[-0.2, 0.2, -0.2]).unwrap();
    /// assert_eq!(series.find_closest_to_zero().unwrap(), 0.2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptySeries`] if the series is empty. Any
    /// `target`, including NaN or an infinity, succeeds on a non-empty
    /// series.
    pub fn find_closest_to_value(&self, target: f64) -> Result<f64> {
        stats::closest_to(self.as_slice(), target).ok_or(SeriesError::EmptySeries {
            operation: "closest value",
        })
    }

    /// Readings strictly less than `threshold`, in measurement order.
    pub fn find_less_than(&self, threshold: f64) -> Vec<f64> {
        stats::less_than(self.as_slice(), threshold)
    }

    /// Readings strictly greater than `threshold`, in measurement order.
    pub fn find_greater_than(&self, threshold: f64) -> Vec<f64> {
        stats::greater_than(self.as_slice(), threshold)
    }

    /// Average, deviation, min and max bundled into one snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptySeries`] if the series is empty.
    pub fn summary_statistics(&self) -> Result<SummaryStatistics> {
        Ok(SummaryStatistics {
            count: self.len(),
            average: self.average()?,
            deviation: self.deviation()?,
            min: self.min()?,
            max: self.max()?,
        })
    }

    /// Appends `new_values` in order and returns the sum of every reading
    /// now in the series.
    ///
    /// The backing buffer doubles its capacity as needed, so repeated
    /// appends cost amortized O(1) per reading.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::ValueOutOfRange`] if any new reading is below
    /// the bound. The series is left unchanged.
    pub fn append(&mut self, new_values: &[f64]) -> Result<f64> {
        self.bound.check(new_values).inspect_err(|e| {
            debug!(error = %e, batch = new_values.len(), "rejected appended readings");
        })?;

        self.readings.extend_from_slice(new_values);
        Ok(self.sum())
    }
}

impl TryFrom<SeriesRecord> for Series {
    type Error = SeriesError;

    fn try_from(record: SeriesRecord) -> Result<Self> {
        Self::with_minimal_bound(&record.values, record.bound)
    }
}

impl From<Series> for SeriesRecord {
    fn from(series: Series) -> Self {
        Self {
            values: series.raw_values(),
            bound: series.bound,
        }
    }
}

impl TryFrom<&[f64]> for Series {
    type Error = SeriesError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<Vec<f64>> for Series {
    type Error = SeriesError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(&values)
    }
}
