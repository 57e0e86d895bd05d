//! Live feed example.
//!
//! This example demonstrates:
//! - Appending samples from a live feed
//! - Correcting the most recent sample and a late-arriving one
//! - Point queries with linear and step semantics
//! - Extracting a window with interpolated boundaries
//!
//! Run with: cargo run --example live_feed

use chrono::{TimeDelta, Utc};
use tempora::{Interval, IrregularTimeSeries, TimeSeries, Value, ValueFlags};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Live Feed Example ===\n");

    let base_time = Utc::now();
    let mut linear = IrregularTimeSeries::builder().capacity(1_000).build()?;
    let mut step = IrregularTimeSeries::builder().step(true).build()?;

    // Simulate 60 readings at 10 second intervals, skipping every seventh one
    for i in 0..60 {
        if i % 7 == 3 {
            continue;
        }
        let timestamp = base_time + TimeDelta::seconds(i * 10);
        let reading = 20.0 + (i as f64 * 0.2).sin() * 3.0;
        linear.add(Value::new(timestamp, reading));
        step.add(Value::new(timestamp, reading));
    }
    println!("Collected {} readings", linear.len());

    // The feed revises its latest reading
    let latest = linear.last().ok_or("feed produced no readings")?;
    linear.add(Value::with_flags(
        latest.time(),
        ValueFlags::ESTIMATED,
        latest.data() + 0.5,
    ));
    println!(
        "Revised latest reading: {:.3} -> {:.3}",
        latest.data(),
        linear.last().ok_or("series emptied")?.data()
    );

    // A skipped reading arrives late
    let late = Value::new(base_time + TimeDelta::seconds(30), 21.0);
    linear.add(late);
    step.add(late);
    println!("Backfilled reading at +30s, now {} readings\n", linear.len());

    // Point queries between samples
    let probe = base_time + TimeDelta::seconds(105);
    let interpolated = linear.value_at(probe)?;
    let held = step.value_at(probe)?;
    println!("Value at +105s:");
    println!(
        "  linear: {:.3} (interpolated: {})",
        interpolated.data(),
        interpolated.flags().contains(ValueFlags::INTERPOLATED)
    );
    println!("  step:   {:.3} (sampled at {})", held.data(), held.time());
    println!();

    // Window extraction
    let window = Interval::new(
        base_time + TimeDelta::seconds(95),
        base_time + TimeDelta::seconds(155),
    )?;
    println!("Window +95s..+155s (linear):");
    for value in linear.values(&window) {
        println!(
            "  +{:>4}s  {:>8.3}  {:?}",
            (value.time() - base_time).num_milliseconds() as f64 / 1000.0,
            value.data(),
            value.flags()
        );
    }
    println!("Window +95s..+155s (step):");
    for value in step.values(&window) {
        println!(
            "  +{:>4}s  {:>8.3}",
            (value.time() - base_time).num_milliseconds() as f64 / 1000.0,
            value.data()
        );
    }

    Ok(())
}
