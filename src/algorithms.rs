//! Search, growth and interpolation primitives over time-sorted sample slices.
//!
//! Every function here expects `values` to be strictly ascending by time. That
//! ordering is not checked; an unsorted slice produces meaningless indices.

use crate::value::{Timestamp, Value, ValueFlags, combine_code};
use chrono::TimeDelta;

/// Outcome of an exact-time binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    /// A sample with the queried time exists at this index.
    Found(usize),
    /// No sample has the queried time; inserting at this index keeps the slice sorted.
    NotFound(usize),
}

impl SearchResult {
    /// Returns the index of the matching sample, if any.
    pub fn found(self) -> Option<usize> {
        match self {
            SearchResult::Found(index) => Some(index),
            SearchResult::NotFound(_) => None,
        }
    }

    /// Returns the matching index or the insertion point.
    pub fn index(self) -> usize {
        match self {
            SearchResult::Found(index) | SearchResult::NotFound(index) => index,
        }
    }
}

/// Rounds `requested` up to the next multiple of `delta`.
///
/// `delta` must be non-zero.
pub fn capacity_for(requested: usize, delta: usize) -> usize {
    requested.div_ceil(delta) * delta
}

/// Binary search for the sample at exactly `time`.
pub fn find_index(values: &[Value], time: Timestamp) -> SearchResult {
    match values.binary_search_by_key(&time, Value::time) {
        Ok(index) => SearchResult::Found(index),
        Err(insert_at) => SearchResult::NotFound(insert_at),
    }
}

/// Floor search restricted to `values[begin..]`.
///
/// Returns the index of the sample at `time` if present, otherwise the last
/// index whose time is before `time`, never less than `begin`. The result is
/// always a valid index for a non-empty slice; a `begin` past the end is
/// clamped to the last sample.
pub fn find_start_index(values: &[Value], begin: usize, time: Timestamp) -> usize {
    let begin = begin.min(values.len().saturating_sub(1));
    match find_index(&values[begin..], time) {
        SearchResult::Found(index) => begin + index,
        SearchResult::NotFound(insert_at) => begin + insert_at.saturating_sub(1),
    }
}

/// Ceiling search restricted to `values[begin..]`.
///
/// Returns `values.len()` when `time` is after the last sample, otherwise the
/// index of the sample at `time` or the point where it would be inserted.
pub fn find_end_index(values: &[Value], begin: usize, time: Timestamp) -> usize {
    if values.last().is_none_or(|last| last.time() < time) {
        return values.len();
    }
    let begin = begin.min(values.len());
    begin + find_index(&values[begin..], time).index()
}

/// Linear interpolation between `a` and `b` at `time`.
///
/// Callers guarantee `a.time() <= time <= b.time()` and `a.time() < b.time()`.
/// The result carries the flags of both samples plus [`ValueFlags::INTERPOLATED`].
pub fn interpolate(a: &Value, b: &Value, time: Timestamp) -> Value {
    let ratio = seconds(time - a.time()) / seconds(b.time() - a.time());
    let data = a.data() + (b.data() - a.data()) * ratio;
    Value::from_parts(
        time,
        a.flags() | b.flags() | ValueFlags::INTERPOLATED,
        combine_code(a.code(), b.code()),
        data,
    )
}

/// Writes `value` at `index`, keeping the buffer sorted.
///
/// A sample with the same time already at `index` is overwritten in place.
/// Otherwise the tail is shifted right, growing the buffer by whole `delta`
/// chunks first when it is full.
pub fn insert_at(values: &mut Vec<Value>, delta: usize, index: usize, value: Value) {
    if let Some(existing) = values.get_mut(index)
        && existing.time() == value.time()
    {
        *existing = value;
        return;
    }
    if values.len() == values.capacity() {
        let capacity = capacity_for(values.len() + 1, delta);
        grow(values, capacity);
    }
    values.insert(index, value);
}

/// Moves the buffer into a fresh allocation of exactly `capacity` elements.
pub(crate) fn grow(values: &mut Vec<Value>, capacity: usize) {
    #[cfg(feature = "logging")]
    log::debug!(
        "Growing time series buffer from {} to {} values",
        values.capacity(),
        capacity
    );
    let mut grown = Vec::with_capacity(capacity);
    grown.extend_from_slice(values);
    *values = grown;
}

#[allow(clippy::cast_precision_loss)]
fn seconds(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1_000_000_000.0
}
