//! Sorted-buffer time series with arbitrary sample times.

use crate::algorithms::{
    SearchResult, capacity_for, find_end_index, find_index, find_start_index, grow, insert_at,
    interpolate,
};
use crate::builder::{DEFAULT_DELTA_CAPACITY, TimeSeriesBuilder};
use crate::error::SeriesError;
use crate::interval::{Interval, Range};
use crate::series::{TimeSeries, TimeSeriesType};
use crate::value::{Timestamp, Value};
use std::iter::Copied;
use std::slice;

/// Iterator over the samples of an [`IrregularTimeSeries`], in ascending time order.
pub type Iter<'a> = Copied<slice::Iter<'a, Value>>;

/// A time series backed by a buffer of samples kept strictly ascending by time.
///
/// Appending after the last sample is amortized O(1); the buffer grows in
/// whole chunks of [`delta_capacity`](Self::delta_capacity) samples and is
/// never shrunk except by [`clear`](Self::clear). Samples arriving out of order
/// are placed with a binary search, and a sample at an existing time replaces
/// the stored one.
///
/// The series is not synchronized. Concurrent writers must be serialized by
/// the caller.
#[derive(Debug)]
pub struct IrregularTimeSeries {
    values: Vec<Value>,
    step: bool,
    delta: usize,
}

impl IrregularTimeSeries {
    /// Creates an empty series. Storage is allocated on the first [`add`](Self::add).
    pub fn new(step: bool) -> Self {
        Self {
            values: Vec::new(),
            step,
            delta: DEFAULT_DELTA_CAPACITY,
        }
    }

    /// Creates an empty series with room for at least `capacity` samples.
    pub fn with_capacity(capacity: usize, step: bool) -> Self {
        Self::with_delta(capacity, step, DEFAULT_DELTA_CAPACITY)
    }

    /// Creates a series holding a copy of `values`.
    ///
    /// `values` must already be strictly ascending by time. This is not
    /// verified, and every later search relies on it.
    pub fn from_sorted(values: &[Value], step: bool) -> Self {
        Self::preloaded(values, 0, step, DEFAULT_DELTA_CAPACITY)
    }

    /// Returns a builder for configuring growth and initial capacity.
    pub fn builder() -> TimeSeriesBuilder {
        TimeSeriesBuilder::new()
    }

    pub(crate) fn with_delta(capacity: usize, step: bool, delta: usize) -> Self {
        let values = if capacity > 0 {
            Vec::with_capacity(capacity_for(capacity, delta))
        } else {
            Vec::new()
        };
        Self {
            values,
            step,
            delta,
        }
    }

    pub(crate) fn preloaded(values: &[Value], capacity: usize, step: bool, delta: usize) -> Self {
        let mut series = Self::with_delta(capacity.max(values.len()), step, delta);
        series.values.extend_from_slice(values);
        series
    }

    /// Number of samples the buffer grows by.
    pub fn delta_capacity(&self) -> usize {
        self.delta
    }

    /// The stored samples in ascending time order.
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Iterates over the stored samples in ascending time order.
    pub fn iter(&self) -> Iter<'_> {
        self.values.iter().copied()
    }

    /// Adds a sample, keeping the series sorted.
    ///
    /// A sample after the last one is appended. A sample at an already stored
    /// time replaces it. Anything else is inserted at its sorted position.
    pub fn add(&mut self, value: Value) {
        let Some(last) = self.values.last_mut() else {
            if self.values.capacity() == 0 {
                self.values = Vec::with_capacity(self.delta);
            }
            self.values.push(value);
            return;
        };

        if last.time() < value.time() {
            if self.values.len() == self.values.capacity() {
                let capacity = capacity_for(self.values.len() + 1, self.delta);
                grow(&mut self.values, capacity);
            }
            self.values.push(value);
        } else if last.time() == value.time() {
            *last = value;
        } else {
            match find_index(&self.values, value.time()) {
                SearchResult::Found(index) => self.values[index] = value,
                SearchResult::NotFound(index) => {
                    #[cfg(feature = "logging")]
                    log::trace!(
                        "Inserting late sample at {} into position {index} of {}",
                        value.time(),
                        self.values.len()
                    );
                    insert_at(&mut self.values, self.delta, index, value);
                }
            }
        }
    }

    /// Adds every sample of `values` in order.
    pub fn add_slice(&mut self, values: &[Value]) {
        for value in values {
            self.add(*value);
        }
    }

    /// Drops all samples and releases the buffer.
    pub fn clear(&mut self) {
        #[cfg(feature = "logging")]
        log::debug!("Clearing time series of {} values", self.values.len());
        self.values = Vec::new();
    }

    /// Floor search for `time` starting at `begin`. Returns `0` for an empty series.
    pub fn find_start_index(&self, begin: usize, time: Timestamp) -> usize {
        find_start_index(&self.values, begin, time)
    }

    /// Ceiling search for `time` starting at `begin`. Returns `0` for an empty series.
    pub fn find_end_index(&self, begin: usize, time: Timestamp) -> usize {
        find_end_index(&self.values, begin, time)
    }

    fn step_values(&self, range: Range, interval: &Interval) -> Vec<Value> {
        let mut result = self.values[range.start()..range.end()].to_vec();
        if let Some(head) = result.first_mut()
            && head.time() < interval.start()
        {
            *head = head.retimed(interval.start());
        }
        result
    }

    fn linear_values(&self, range: Range, interval: &Interval) -> Vec<Value> {
        let (start, end) = (range.start(), range.end());
        let head = self.values[start];

        if self.values.len() - start < 2 {
            return vec![head.retimed(interval.start())];
        }

        let mut result = Vec::with_capacity(range.count() + 1);
        if head.time() < interval.start() {
            if end < self.values.len() {
                result.push(interpolate(
                    &head,
                    &self.values[start + 1],
                    interval.start(),
                ));
                result.extend_from_slice(&self.values[start + 1..end]);
                result.push(self.right_boundary(end, interval));
            } else {
                // Nothing to the right to interpolate against: hold the first sample.
                result.push(head.retimed(interval.start()));
                result.extend_from_slice(&self.values[start + 1..end]);
            }
        } else {
            result.extend_from_slice(&self.values[start..end]);
            if let Some(next) = self.values.get(end)
                && next.time() > interval.end()
            {
                result.push(interpolate(&self.values[end - 1], next, interval.end()));
            }
        }
        result
    }

    /// Value closing a window whose ceiling index is `end < len`.
    fn right_boundary(&self, end: usize, interval: &Interval) -> Value {
        let next = &self.values[end];
        if next.time() > interval.end() {
            interpolate(&self.values[end - 1], next, interval.end())
        } else {
            *next
        }
    }
}

impl TimeSeries for IrregularTimeSeries {
    fn series_type(&self) -> TimeSeriesType {
        TimeSeriesType::Irregular
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn capacity(&self) -> usize {
        self.values.capacity()
    }

    fn is_step(&self) -> bool {
        self.step
    }

    fn first(&self) -> Option<Value> {
        self.values.first().copied()
    }

    fn last(&self) -> Option<Value> {
        self.values.last().copied()
    }

    fn get(&self, index: usize) -> Result<Value, SeriesError> {
        self.values
            .get(index)
            .copied()
            .ok_or(SeriesError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    fn value_at(&self, time: Timestamp) -> Result<Value, SeriesError> {
        match find_index(&self.values, time) {
            SearchResult::Found(index) => Ok(self.values[index]),
            SearchResult::NotFound(0) => Err(SeriesError::NotFound { time }),
            SearchResult::NotFound(next) => {
                let previous = &self.values[next - 1];
                match self.values.get(next) {
                    Some(following) if !self.step => Ok(interpolate(previous, following, time)),
                    _ => Ok(*previous),
                }
            }
        }
    }

    fn to_range(&self, interval: &Interval) -> Range {
        if self.values.is_empty() {
            return Range::default();
        }
        Range::from_ordered(
            find_start_index(&self.values, 0, interval.start()),
            find_end_index(&self.values, 0, interval.end()),
        )
    }

    fn values(&self, interval: &Interval) -> Vec<Value> {
        let Some(first) = self.values.first() else {
            return Vec::new();
        };

        let mut interval = *interval;
        if interval.start() < first.time() {
            if interval.end() <= first.time() {
                return Vec::new();
            }
            interval = interval.with_start(first.time());
        }

        let range = self.to_range(&interval);
        if range.is_empty() {
            return Vec::new();
        }

        if self.step {
            self.step_values(range, &interval)
        } else {
            self.linear_values(range, &interval)
        }
    }
}

impl Default for IrregularTimeSeries {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Clone for IrregularTimeSeries {
    fn clone(&self) -> Self {
        let mut values = Vec::with_capacity(self.values.capacity());
        values.extend_from_slice(&self.values);
        Self {
            values,
            step: self.step,
            delta: self.delta,
        }
    }
}

impl<'a> IntoIterator for &'a IrregularTimeSeries {
    type Item = Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Value> for IrregularTimeSeries {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<Value> for IrregularTimeSeries {
    /// Collects samples in any order into a linear series.
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut series = Self::default();
        series.extend(iter);
        series
    }
}
