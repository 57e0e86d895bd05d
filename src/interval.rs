//! Half-open time intervals and index ranges.

use crate::error::SeriesError;
use crate::value::Timestamp;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// A half-open time range `[start, end)` with `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    start: Timestamp,
    end: Timestamp,
}

impl Interval {
    /// Creates an interval, failing if `end` is before `start`.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, SeriesError> {
        if end < start {
            return Err(SeriesError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the interval `[start, start + duration)`.
    ///
    /// Fails with [`SeriesError::IntervalOverflow`] when the end is not a
    /// representable time, and with [`SeriesError::InvalidInterval`] when
    /// `duration` is negative.
    pub fn starting_at(start: Timestamp, duration: TimeDelta) -> Result<Self, SeriesError> {
        let end = start
            .checked_add_signed(duration)
            .ok_or(SeriesError::IntervalOverflow { start, duration })?;
        Self::new(start, end)
    }

    /// Inclusive start.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Exclusive end.
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// `end - start`, never negative.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Returns `true` if `time` lies in `[start, end)`.
    pub fn contains(&self, time: Timestamp) -> bool {
        self.start <= time && time < self.end
    }

    /// Same interval with a later start. Callers keep `start <= end`.
    pub(crate) fn with_start(&self, start: Timestamp) -> Self {
        debug_assert!(start <= self.end);
        Self {
            start,
            end: self.end,
        }
    }
}

/// A half-open index range `[start, end)` into a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    start: usize,
    end: usize,
}

impl Range {
    /// Creates a range, failing if `end` is before `start`.
    pub fn new(start: usize, end: usize) -> Result<Self, SeriesError> {
        if end < start {
            return Err(SeriesError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a range from bounds already known to be ordered.
    pub(crate) fn from_ordered(start: usize, end: usize) -> Self {
        debug_assert!(end >= start);
        Self { start, end }
    }

    /// First index in the range.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last index in the range.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of indices covered.
    pub fn count(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the range covers no index.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Range> for std::ops::Range<usize> {
    fn from(range: Range) -> Self {
        range.start..range.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn t(secs: i64) -> Timestamp {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_interval_construction() {
        let interval = Interval::new(t(10), t(25)).unwrap();
        assert_eq!(interval.duration(), TimeDelta::seconds(15));
        assert!(interval.contains(t(10)));
        assert!(interval.contains(t(24)));
        assert!(!interval.contains(t(25)));

        let empty = Interval::new(t(10), t(10)).unwrap();
        assert_eq!(empty.duration(), TimeDelta::zero());
        assert!(!empty.contains(t(10)));

        let err = Interval::new(t(10), t(9)).unwrap_err();
        assert!(err.is_construction_error());
    }

    #[test]
    fn test_interval_starting_at() {
        let interval = Interval::starting_at(t(0), TimeDelta::minutes(1)).unwrap();
        assert_eq!(interval.end(), t(60));
        assert!(Interval::starting_at(t(0), TimeDelta::seconds(-1)).is_err());
    }

    #[test]
    fn test_interval_starting_at_overflow() {
        let err = Interval::starting_at(t(0), TimeDelta::MAX).unwrap_err();
        assert_eq!(
            err,
            SeriesError::IntervalOverflow {
                start: t(0),
                duration: TimeDelta::MAX
            }
        );
        assert!(err.is_construction_error());
        assert!(Interval::starting_at(t(0), TimeDelta::MIN).is_err());
    }

    #[test]
    fn test_range_construction() {
        let range = Range::new(3, 8).unwrap();
        assert_eq!(range.count(), 5);
        assert!(!range.is_empty());
        assert_eq!(std::ops::Range::from(range), 3..8);

        assert!(Range::new(4, 4).unwrap().is_empty());
        assert_eq!(
            Range::new(5, 4),
            Err(SeriesError::InvalidRange { start: 5, end: 4 })
        );
    }
}
