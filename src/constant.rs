//! A series that answers every query with the same value.

use crate::error::SeriesError;
use crate::interval::{Interval, Range};
use crate::series::{TimeSeries, TimeSeriesType};
use crate::value::{Timestamp, Value};
use std::iter::Once;

/// Zero-storage series holding a single permanent value.
///
/// Useful as a default or placeholder wherever a [`TimeSeries`] is expected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantTimeSeries {
    value: Value,
}

impl ConstantTimeSeries {
    /// Creates a series that always returns `value`.
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// The value returned by every query.
    pub fn value(&self) -> Value {
        self.value
    }
}

impl TimeSeries for ConstantTimeSeries {
    fn series_type(&self) -> TimeSeriesType {
        TimeSeriesType::Constant
    }

    fn len(&self) -> usize {
        1
    }

    fn capacity(&self) -> usize {
        1
    }

    fn is_step(&self) -> bool {
        true
    }

    fn first(&self) -> Option<Value> {
        Some(self.value)
    }

    fn last(&self) -> Option<Value> {
        Some(self.value)
    }

    fn get(&self, index: usize) -> Result<Value, SeriesError> {
        if index == 0 {
            Ok(self.value)
        } else {
            Err(SeriesError::IndexOutOfRange { index, len: 1 })
        }
    }

    fn value_at(&self, _time: Timestamp) -> Result<Value, SeriesError> {
        Ok(self.value)
    }

    fn to_range(&self, _interval: &Interval) -> Range {
        Range::from_ordered(0, 1)
    }

    fn values(&self, _interval: &Interval) -> Vec<Value> {
        vec![self.value]
    }
}

impl IntoIterator for ConstantTimeSeries {
    type Item = Value;
    type IntoIter = Once<Value>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.value)
    }
}
