//! Error type shared by series construction and queries.

use crate::value::Timestamp;
use chrono::TimeDelta;
use std::fmt::{Display, Formatter};

/// Errors reported by time series construction and queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SeriesError {
    /// An interval was constructed with `end < start`.
    InvalidInterval {
        /// Requested start of the interval.
        start: Timestamp,
        /// Requested end of the interval.
        end: Timestamp,
    },
    /// `start + duration` does not fit in a timestamp.
    IntervalOverflow {
        /// Requested start of the interval.
        start: Timestamp,
        /// Requested length of the interval.
        duration: TimeDelta,
    },
    /// An index range was constructed with `end < start`.
    InvalidRange {
        /// Requested start index.
        start: usize,
        /// Requested end index.
        end: usize,
    },
    /// The growth chunk of a series must be at least one element.
    InvalidDeltaCapacity(usize),
    /// No sample exists at or before the requested time, or the series is empty.
    NotFound {
        /// The time that was queried.
        time: Timestamp,
    },
    /// Positional access outside `[0, len)`.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Number of samples in the series.
        len: usize,
    },
}

impl SeriesError {
    /// Returns `true` for errors raised while constructing an interval, range or series.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            SeriesError::InvalidInterval { .. }
                | SeriesError::IntervalOverflow { .. }
                | SeriesError::InvalidRange { .. }
                | SeriesError::InvalidDeltaCapacity(_)
        )
    }
}

impl Display for SeriesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesError::InvalidInterval { start, end } => {
                write!(f, "Invalid interval: end {end} is before start {start}")
            }
            SeriesError::IntervalOverflow { start, duration } => {
                write!(f, "Interval overflow: {start} + {duration} is not a valid time")
            }
            SeriesError::InvalidRange { start, end } => {
                write!(f, "Invalid range: end {end} is before start {start}")
            }
            SeriesError::InvalidDeltaCapacity(delta) => {
                write!(f, "Invalid delta capacity {delta}: must be greater than 0")
            }
            SeriesError::NotFound { time } => {
                write!(f, "No value found for time {time}")
            }
            SeriesError::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for series of length {len}")
            }
        }
    }
}

impl std::error::Error for SeriesError {}
