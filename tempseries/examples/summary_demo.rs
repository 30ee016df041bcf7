//! Walks through the series API on a day of hourly readings.
//!
//! Run with `RUST_LOG=tempseries=debug cargo run --example summary_demo` to
//! see buffer growth and rejected batches.

use tempseries::{Series, SeriesError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Overnight readings, in degrees Celsius.
    let mut series = Series::new(&[-3.5, -4.0, -4.2, -3.8, -2.1, 0.4])?;
    println!("Created series with {} readings", series.len());

    // Daytime readings arrive in two batches.
    let total = series.append(&[2.3, 5.8, 9.1, 11.4, 12.0, 11.2])?;
    println!("Sum after first batch: {total:.1}");
    let total = series.append(&[8.7, 5.2, 2.9, 0.6, -0.4, -1.9])?;
    println!("Sum after second batch: {total:.1}");
    println!("Buffer capacity: {}", series.capacity());

    // A faulty sensor reading is rejected and nothing is stored.
    match series.append(&[-1.0, -9999.0]) {
        Err(SeriesError::ValueOutOfRange { index, value, .. }) => {
            println!("Rejected batch: reading {value} at index {index}");
        }
        other => println!("Unexpected result: {other:?}"),
    }

    let summary = series.summary_statistics()?;
    println!("Summary: {summary}");
    println!("Closest to freezing: {}", series.find_closest_to_zero()?);
    println!("Closest to 10 C: {}", series.find_closest_to_value(10.0)?);
    println!("Below freezing: {:?}", series.find_less_than(0.0));
    println!("Above 10 C: {:?}", series.find_greater_than(10.0));

    println!("As JSON: {}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
