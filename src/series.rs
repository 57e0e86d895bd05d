//! Read contract shared by every time series flavour.

use crate::error::SeriesError;
use crate::interval::{Interval, Range};
use crate::value::{Timestamp, Value};

/// Storage flavour of a time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSeriesType {
    /// Arbitrary sample times held in a sorted buffer.
    Irregular,
    /// One value answering every query.
    Constant,
}

/// Query surface of a time series.
///
/// Implementations hold samples in strictly ascending time order. Point
/// queries between samples either hold the previous sample (step series) or
/// interpolate linearly (linear series).
pub trait TimeSeries {
    /// Storage flavour of this series.
    fn series_type(&self) -> TimeSeriesType;

    /// Number of samples.
    fn len(&self) -> usize;

    /// Returns `true` if the series holds no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of samples the series can hold without reallocating.
    fn capacity(&self) -> usize;

    /// `true` for zero-order-hold semantics, `false` for linear interpolation.
    fn is_step(&self) -> bool;

    /// Earliest sample.
    fn first(&self) -> Option<Value>;

    /// Latest sample.
    fn last(&self) -> Option<Value>;

    /// Sample at `index`.
    fn get(&self, index: usize) -> Result<Value, SeriesError>;

    /// Value of the series at `time`.
    ///
    /// An exact match is returned unchanged. Between two samples a linear
    /// series interpolates; a step series, or a query after the last sample,
    /// returns the previous sample with its own timestamp. Fails with
    /// [`SeriesError::NotFound`] if there is no sample at or before `time`.
    fn value_at(&self, time: Timestamp) -> Result<Value, SeriesError>;

    /// Index range covering `interval`: floor of the start, ceiling of the end.
    fn to_range(&self, interval: &Interval) -> Range;

    /// Materializes the samples covering `interval`, with boundary values held
    /// or interpolated according to the series mode.
    fn values(&self, interval: &Interval) -> Vec<Value>;
}
