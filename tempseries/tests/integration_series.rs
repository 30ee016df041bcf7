//! Integration tests for the series query API.

use tempseries::error::Result;
use tempseries::{Series, SeriesError};

const EPS: f64 = 1e-5;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_single_reading_aggregates() -> Result<()> {
    for x in [-273.0, -1.0, 0.0, 21.5, 1.0e6] {
        let series = Series::new(&[x])?;
        assert_close(series.average()?, x);
        assert_close(series.deviation()?, 0.0);
        assert_close(series.min()?, x);
        assert_close(series.max()?, x);
        assert_close(series.find_closest_to_value(x + 10.0)?, x);
    }
    Ok(())
}

#[test]
fn test_reference_readings() -> Result<()> {
    let series = Series::new(&[3.0, -5.0, 1.0, 5.0])?;

    assert_close(series.average()?, 1.0);
    assert_close(series.deviation()?, 3.741_657_386_773_941_3);
    assert_close(series.min()?, -5.0);
    assert_close(series.max()?, 5.0);

    let summary = series.summary_statistics()?;
    assert_eq!(summary.count, 4);
    assert_close(summary.average, 1.0);
    assert_close(summary.deviation, 3.741_657_386_773_941_3);
    Ok(())
}

#[test]
fn test_nearest_value_tie_breaking() -> Result<()> {
    let series = Series::new(&[-0.2, 0.2, -0.2])?;
    assert_close(series.find_closest_to_zero()?, 0.2);

    let series = Series::new(&[-0.2, 0.2, -0.2, 0.1, -0.1])?;
    assert_close(series.find_closest_to_value(1.0)?, 0.2);
    // 0.1 and -0.1 tie at zero; the positive one wins regardless of order.
    assert_close(series.find_closest_to_zero()?, 0.1);

    let series = Series::new(&[0.1, -0.1])?;
    assert_close(series.find_closest_to_zero()?, 0.1);
    Ok(())
}

#[test]
fn test_nearest_value_never_fails_on_non_empty() -> Result<()> {
    let series = Series::new(&[-12.0, 4.0, 30.0])?;

    for target in [
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::MAX,
        f64::MIN,
        -1.0e300,
    ] {
        let closest = series.find_closest_to_value(target)?;
        assert!(series.as_slice().contains(&closest));
    }

    assert_close(series.find_closest_to_value(1000.0)?, 30.0);
    assert_close(series.find_closest_to_value(-1000.0)?, -12.0);
    Ok(())
}

#[test]
fn test_threshold_filters() -> Result<()> {
    let series = Series::new(&[-0.2, 0.2, -0.2, 0.1, -0.1, 3.0])?;

    assert_eq!(series.find_less_than(0.1), vec![-0.2, -0.2, -0.1]);
    assert_eq!(series.find_greater_than(0.1), vec![0.2, 3.0]);

    assert!(series.find_less_than(-100.0).is_empty());
    assert!(series.find_greater_than(100.0).is_empty());
    assert_eq!(series.find_less_than(f64::INFINITY).len(), 6);
    assert!(series.find_less_than(f64::NAN).is_empty());
    Ok(())
}

#[test]
fn test_empty_series() {
    let series = Series::new(&[]).unwrap();

    assert!(series.is_empty());
    assert!(matches!(series.average(), Err(SeriesError::EmptySeries { .. })));
    assert!(matches!(series.deviation(), Err(SeriesError::EmptySeries { .. })));
    assert!(matches!(series.min(), Err(SeriesError::EmptySeries { .. })));
    assert!(matches!(series.max(), Err(SeriesError::EmptySeries { .. })));
    assert!(matches!(
        series.find_closest_to_value(5.0),
        Err(SeriesError::EmptySeries { .. })
    ));
    assert!(matches!(
        series.summary_statistics(),
        Err(SeriesError::EmptySeries { .. })
    ));

    assert!(series.find_less_than(0.0).is_empty());
    assert!(series.find_greater_than(0.0).is_empty());
}

#[test]
fn test_read_operations_are_idempotent() -> Result<()> {
    let series = Series::new(&[12.5, -3.0, 7.25, 7.25, 0.0])?;

    assert_eq!(series.average()?, series.average()?);
    assert_eq!(series.deviation()?, series.deviation()?);
    assert_eq!(series.min()?, series.min()?);
    assert_eq!(series.max()?, series.max()?);
    assert_eq!(series.find_closest_to_zero()?, series.find_closest_to_zero()?);
    assert_eq!(series.find_less_than(7.0), series.find_less_than(7.0));
    assert_eq!(series.find_greater_than(7.0), series.find_greater_than(7.0));
    assert_eq!(series.summary_statistics()?, series.summary_statistics()?);
    assert_eq!(series.raw_values(), series.raw_values());
    Ok(())
}

#[test]
fn test_summary_serializes() -> Result<()> {
    let series = Series::new(&[0.1, -0.1, 3.0])?;
    let summary = series.summary_statistics()?;

    let json = serde_json::to_string(&summary).unwrap();
    let parsed: tempseries::SummaryStatistics = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.count, summary.count);
    assert_close(parsed.average, summary.average);
    assert_close(parsed.deviation, summary.deviation);
    assert_close(parsed.min, summary.min);
    assert_close(parsed.max, summary.max);
    Ok(())
}

#[test]
fn test_series_shared_behind_lock() -> Result<()> {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let series = Arc::new(Mutex::new(Series::empty()));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let series = Arc::clone(&series);
            thread::spawn(move || {
                for i in 0..25 {
                    let reading = f64::from(t * 100 + i);
                    series.lock().unwrap().append(&[reading]).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let series = series.lock().unwrap();
    assert_eq!(series.len(), 100);
    assert_close(series.min()?, 0.0);
    assert_close(series.max()?, 324.0);
    Ok(())
}
