//! Time series benchmark for tempora
//!
//! Tests in-memory series performance characteristics:
//! - Append rate into empty and pre-sized series
//! - Out-of-order insertion cost
//! - Point query performance (exact, interpolated, held)
//! - Window extraction across different window sizes

use chrono::{DateTime, TimeDelta, Utc};
use rand::seq::SliceRandom;
use std::time::{Duration, Instant};
use tempora::{Interval, IrregularTimeSeries, TimeSeries, Value};

const WARMUP_ITERATIONS: usize = 1;
const BENCHMARK_ITERATIONS: usize = 3;
const RULE_WIDTH: usize = 80;

/// Scales `amount` down to the largest unit whose threshold it reaches.
fn scaled(amount: f64, units: &[(f64, &str)]) -> String {
    units
        .iter()
        .find(|(threshold, _)| amount >= *threshold)
        .map_or_else(
            || format!("{amount:.2}"),
            |(threshold, suffix)| format!("{:.2}{suffix}", amount / threshold),
        )
}

fn format_elapsed(elapsed: Duration) -> String {
    let micros = elapsed.as_secs_f64() * 1_000_000.0;
    if micros < 1000.0 {
        format!("{micros:.0}µs")
    } else {
        scaled(micros, &[(1_000_000.0, "s"), (1000.0, "ms")])
    }
}

fn format_rate(samples: usize, elapsed: Duration) -> String {
    let per_sec = samples as f64 / elapsed.as_secs_f64();
    let rate = scaled(per_sec, &[(1_000_000.0, "M"), (1000.0, "K")]);
    format!("{rate} samples/sec")
}

fn print_section(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{rule}\n{title}\n{rule}");
}

fn print_header() {
    println!("  {:<50} {:>12}  {:>20}", "Case", "Elapsed", "Rate");
    println!("  {}", "-".repeat(RULE_WIDTH));
}

fn print_result(case: &str, elapsed: Duration, samples: usize) {
    let (elapsed_text, rate_text) = (format_elapsed(elapsed), format_rate(samples, elapsed));
    println!("  {case:<50} {elapsed_text:>12}  {rate_text:>20}");
}

/// Samples `spacing` apart from `base_time` with LCG-generated data in `[0, 100)`.
fn generate_samples(count: usize, base_time: DateTime<Utc>, spacing: TimeDelta) -> Vec<Value> {
    let mut state = 12345u64;
    (0..count)
        .scan(base_time, |time, _| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12345);
            let sample = Value::new(*time, (state % 10_000) as f64 / 100.0);
            *time += spacing;
            Some(sample)
        })
        .collect()
}

fn average<F: FnMut() -> Duration>(mut run: F) -> Duration {
    let mut durations = Vec::new();
    for i in 0..WARMUP_ITERATIONS + BENCHMARK_ITERATIONS {
        let duration = run();
        if i >= WARMUP_ITERATIONS {
            durations.push(duration);
        }
    }
    durations.iter().sum::<Duration>() / durations.len() as u32
}

/// Benchmark: Appending strictly increasing samples
fn benchmark_append(num_points: usize, presized: bool) -> Duration {
    let samples = generate_samples(num_points, Utc::now(), TimeDelta::seconds(1));
    let mut series = if presized {
        IrregularTimeSeries::with_capacity(num_points, false)
    } else {
        IrregularTimeSeries::new(false)
    };

    let start = Instant::now();
    for sample in &samples {
        series.add(*sample);
    }
    let elapsed = start.elapsed();

    assert_eq!(series.len(), num_points);
    elapsed
}

/// Benchmark: Inserting samples in random order
fn benchmark_shuffled_insert(num_points: usize) -> Duration {
    let mut samples = generate_samples(num_points, Utc::now(), TimeDelta::seconds(1));
    samples.shuffle(&mut rand::rng());
    let mut series = IrregularTimeSeries::with_capacity(num_points, false);

    let start = Instant::now();
    for sample in &samples {
        series.add(*sample);
    }
    let elapsed = start.elapsed();

    assert_eq!(series.len(), num_points);
    elapsed
}

/// Benchmark: Point queries at `offset` past every sample
fn benchmark_point_query(num_points: usize, step: bool, offset: TimeDelta) -> Duration {
    let samples = generate_samples(num_points, Utc::now(), TimeDelta::seconds(1));
    let series = IrregularTimeSeries::from_sorted(&samples, step);

    let start = Instant::now();
    for sample in &samples {
        let value = series.value_at(sample.time() + offset).unwrap();
        std::hint::black_box(value);
    }
    start.elapsed()
}

/// Benchmark: Extracting sliding windows
fn benchmark_window_query(num_points: usize, window_secs: i64, step: bool) -> (Duration, usize) {
    let base_time = Utc::now();
    let samples = generate_samples(num_points, base_time, TimeDelta::seconds(1));
    let series = IrregularTimeSeries::from_sorted(&samples, step);

    let windows: Vec<Interval> = (0..1000)
        .map(|i| {
            let window_start = base_time + TimeDelta::milliseconds(i * 997 + 500);
            Interval::starting_at(window_start, TimeDelta::seconds(window_secs)).unwrap()
        })
        .collect();

    let mut extracted = 0;
    let start = Instant::now();
    for window in &windows {
        extracted += series.values(window).len();
    }
    (start.elapsed(), extracted)
}

fn main() {
    env_logger::init();

    print_section("TEMPORA TIME SERIES BENCHMARK\nIn-memory series performance characteristics");
    println!();

    // 1. Append
    print_section("1. Append (strictly increasing times)");
    print_header();
    for &count in &[10_000, 100_000, 1_000_000] {
        let avg = average(|| benchmark_append(count, false));
        print_result(&format!("{count} points (lazy growth)"), avg, count);

        let avg = average(|| benchmark_append(count, true));
        print_result(&format!("{count} points (pre-sized)"), avg, count);
    }

    // 2. Out-of-order insertion
    print_section("2. Shuffled Insert");
    print_header();
    for &count in &[1_000, 10_000, 50_000] {
        let avg = average(|| benchmark_shuffled_insert(count));
        print_result(&format!("{count} points (random order)"), avg, count);
    }

    // 3. Point queries
    print_section("3. Point Queries (100K points)");
    print_header();
    let count = 100_000;
    let cases = [
        ("exact", false, TimeDelta::zero()),
        ("interpolated", false, TimeDelta::milliseconds(500)),
        ("held (step)", true, TimeDelta::milliseconds(500)),
    ];
    for (name, step, offset) in cases {
        let avg = average(|| benchmark_point_query(count, step, offset));
        print_result(&format!("{count} lookups ({name})"), avg, count);
    }

    // 4. Window extraction
    print_section("4. Window Extraction (100K points, 1000 windows)");
    print_header();
    for &window_secs in &[10, 600, 3600] {
        for step in [false, true] {
            let mode = if step { "step" } else { "linear" };
            let mut extracted = 0;
            let avg = average(|| {
                let (duration, values) = benchmark_window_query(count, window_secs, step);
                extracted = values;
                duration
            });
            log::debug!("{mode} {window_secs}s windows extracted {extracted} values");
            print_result(&format!("{window_secs}s windows ({mode})"), avg, 1000);
        }
    }

    println!();
}
