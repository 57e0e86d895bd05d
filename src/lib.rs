//! # tempora
//!
//! Compact in-memory time-indexed value store.
//!
//! A series keeps scalar samples strictly sorted by time and answers point and
//! range queries with either step (zero-order hold) or linear semantics.
//!
//! ## Features
//!
//! - **Amortized O(1) append**: buffers grow in fixed chunks, never per element
//! - **Out-of-order writes**: late samples are placed with a binary search; a
//!   sample at an existing time replaces the stored one
//! - **Point queries**: exact, interpolated or held-last-value lookups
//! - **Window extraction**: boundary-aware interpolation and clamping
//! - **Constant series**: zero-storage series for defaults and placeholders
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use tempora::{Interval, IrregularTimeSeries, TimeSeries, Value};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let mut series = IrregularTimeSeries::new(false);
//!
//! series.add(Value::new(start, 0.0));
//! series.add(Value::new(start + TimeDelta::seconds(10), 10.0));
//!
//! let halfway = series.value_at(start + TimeDelta::seconds(5))?;
//! assert_eq!(halfway.data(), 5.0);
//!
//! let window = Interval::new(start, start + TimeDelta::seconds(20))?;
//! for value in series.values(&window) {
//!     println!("{}: {}", value.time(), value.data());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Series are plain single-threaded data structures. Callers sharing one
//! between threads must serialize mutation themselves. Values returned by
//! [`TimeSeries::values`] are independent copies.

#![deny(missing_docs)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod algorithms;
mod builder;
mod constant;
mod error;
mod interval;
mod irregular;
mod series;
mod value;

pub use algorithms::SearchResult;
pub use builder::{DEFAULT_DELTA_CAPACITY, TimeSeriesBuilder};
pub use constant::ConstantTimeSeries;
pub use error::SeriesError;
pub use interval::{Interval, Range};
pub use irregular::{IrregularTimeSeries, Iter};
pub use series::{TimeSeries, TimeSeriesType};
pub use value::{Timestamp, Value, ValueFlags};
