//! # tempseries
//!
//! In-memory statistics over a series of temperature readings.
//!
//! A [`Series`] holds readings in measurement order and answers aggregate
//! queries (mean, population standard deviation, min, max, nearest reading)
//! and threshold filters over them. Readings are validated against a
//! [`MinimalBound`] (absolute zero, −273 °C, unless configured otherwise)
//! when the series is built and whenever readings are appended.
//!
//! ## Quick Start
//!
//! ```rust
//! use tempseries::Series;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut series = Series::new(&[0.1, -0.1, 3.0])?;
//!
//! let summary = series.summary_statistics()?;
//! assert!((summary.average - 1.0).abs() < 1e-9);
//! assert_eq!(summary.min, -0.1);
//!
//! // Append returns the sum of the whole series.
//! let total = series.append(&[0.2, 3.0])?;
//! assert!((total - 6.2).abs() < 1e-9);
//!
//! assert_eq!(series.find_greater_than(0.1), vec![3.0, 0.2, 3.0]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every fallible operation returns [`Result`]. Aggregates on an empty
//! series fail with [`SeriesError::EmptySeries`]; readings below the bound
//! fail with [`SeriesError::ValueOutOfRange`] and are never partially
//! stored. Filters never fail.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (buffer growth, rejected batches) and
//! never installs a subscriber itself.
//!
//! ## Modules
//!
//! - [`series`]: The [`Series`] container
//! - [`stats`]: Slice reductions and [`SummaryStatistics`]
//! - [`bound`]: The minimal-bound validation rule
//! - [`buffer`]: Doubling backing storage
//! - [`error`]: Error types

pub mod bound;
pub mod buffer;
pub mod error;
pub mod series;
pub mod stats;

// Re-export primary API types at crate root for convenience.
pub use bound::{ABSOLUTE_ZERO_CELSIUS, MinimalBound};
pub use error::{Result, SeriesError};
pub use series::Series;
pub use stats::SummaryStatistics;
