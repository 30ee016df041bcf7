//! Linear-scan reductions over a slice of readings.
//!
//! Every aggregate returns `None` for an empty slice; [`crate::Series`] turns
//! that into [`crate::SeriesError::EmptySeries`]. Filters never fail and
//! return an empty vector when nothing matches.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sum of all readings. Zero for an empty slice.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean.
#[allow(clippy::cast_precision_loss)] // Series lengths stay far below 2^52
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(sum(values) / values.len() as f64)
}

/// Population standard deviation: `sqrt(sum((x - mean)^2) / n)`.
#[allow(clippy::cast_precision_loss)]
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let squared: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    Some((squared / values.len() as f64).sqrt())
}

/// Smallest reading.
pub fn minimum(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Largest reading.
pub fn maximum(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Reading closest to `target`.
///
/// A strictly closer reading always replaces the current pick. On an exact
/// distance tie a strictly positive reading replaces a non-positive pick;
/// otherwise the earlier reading is kept. The scan is seeded with the first
/// reading, so any non-empty slice yields a reading even for a NaN or
/// infinite `target`.
///
/// # Examples
///
/// ```rust
/// use tempseries::stats::closest_to;
///
/// assert_eq!(closest_to(&[-0.2, 0.2, -0.2], 0.0), Some(0.2));
/// assert_eq!(closest_to(&[0.5, 1.5], 1.0), Some(0.5));
/// assert_eq!(closest_to(&[], 1.0), None);
/// ```
pub fn closest_to(values: &[f64], target: f64) -> Option<f64> {
    let (&first, rest) = values.split_first()?;

    let mut closest = first;
    let mut best = (first - target).abs();

    for &value in rest {
        let distance = (value - target).abs();
        if distance < best || (distance == best && value > 0.0 && closest <= 0.0) {
            closest = value;
            best = distance;
        }
    }

    Some(closest)
}

/// Readings strictly less than `threshold`, in order.
pub fn less_than(values: &[f64], threshold: f64) -> Vec<f64> {
    values.iter().copied().filter(|&v| v < threshold).collect()
}

/// Readings strictly greater than `threshold`, in order.
pub fn greater_than(values: &[f64], threshold: f64) -> Vec<f64> {
    values.iter().copied().filter(|&v| v > threshold).collect()
}

/// Snapshot of the aggregate statistics of a series.
///
/// Produced by [`crate::Series::summary_statistics`]. The snapshot does not
/// track later appends to the series it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Number of readings summarised.
    pub count: usize,
    /// Arithmetic mean.
    pub average: f64,
    /// Population standard deviation.
    pub deviation: f64,
    /// Smallest reading.
    pub min: f64,
    /// Largest reading.
    pub max: f64,
}

impl SummaryStatistics {
    /// Computes the summary of `values`, or `None` if the slice is empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        Some(Self {
            count: values.len(),
            average: mean(values)?,
            deviation: population_std_dev(values)?,
            min: minimum(values)?,
            max: maximum(values)?,
        })
    }
}

impl fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} avg={} dev={} min={} max={}",
            self.count, self.average, self.deviation, self.min, self.max
        )
    }
}
