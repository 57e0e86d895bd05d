//! Consuming builder for configuring a series before creation.

use crate::error::SeriesError;
use crate::irregular::IrregularTimeSeries;
use crate::value::Value;

/// Default number of samples a series buffer grows by.
///
/// Every allocation is rounded up to a multiple of this chunk, which bounds
/// the number of reallocations under sustained appends.
pub const DEFAULT_DELTA_CAPACITY: usize = 4096;

/// Builder for configuring and creating an [`IrregularTimeSeries`].
///
/// # Example
///
/// ```
/// use tempora::{IrregularTimeSeries, TimeSeries};
///
/// let series = IrregularTimeSeries::builder()
///     .step(true)
///     .capacity(10_000)
///     .delta_capacity(1024)
///     .build()?;
///
/// assert!(series.is_step());
/// assert_eq!(series.capacity(), 10_240);
/// # Ok::<(), tempora::SeriesError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TimeSeriesBuilder {
    capacity: usize,
    step: bool,
    delta_capacity: usize,
}

impl TimeSeriesBuilder {
    /// Creates a builder for an empty, linear series with default growth.
    pub fn new() -> Self {
        Self {
            capacity: 0,
            step: false,
            delta_capacity: DEFAULT_DELTA_CAPACITY,
        }
    }

    /// Sets the number of samples to reserve room for up front.
    ///
    /// Default: 0 (allocate on first add)
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Selects step (zero-order hold) semantics instead of linear interpolation.
    ///
    /// Default: false
    #[must_use]
    pub fn step(mut self, step: bool) -> Self {
        self.step = step;
        self
    }

    /// Sets the chunk the buffer grows by.
    ///
    /// Default: [`DEFAULT_DELTA_CAPACITY`]
    #[must_use]
    pub fn delta_capacity(mut self, delta: usize) -> Self {
        self.delta_capacity = delta;
        self
    }

    /// Creates an empty series.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidDeltaCapacity`] if the growth chunk is zero.
    pub fn build(self) -> Result<IrregularTimeSeries, SeriesError> {
        self.validate()?;
        Ok(IrregularTimeSeries::with_delta(
            self.capacity,
            self.step,
            self.delta_capacity,
        ))
    }

    /// Creates a series holding a copy of `values`, which must be strictly
    /// ascending by time.
    ///
    /// The reserved capacity covers the larger of `values.len()` and the
    /// configured capacity.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidDeltaCapacity`] if the growth chunk is zero.
    pub fn build_from(self, values: &[Value]) -> Result<IrregularTimeSeries, SeriesError> {
        self.validate()?;
        Ok(IrregularTimeSeries::preloaded(
            values,
            self.capacity,
            self.step,
            self.delta_capacity,
        ))
    }

    fn validate(&self) -> Result<(), SeriesError> {
        if self.delta_capacity == 0 {
            return Err(SeriesError::InvalidDeltaCapacity(self.delta_capacity));
        }
        #[cfg(feature = "logging")]
        log::debug!(
            "Creating time series: capacity={}, step={}, delta_capacity={}",
            self.capacity,
            self.step,
            self.delta_capacity
        );
        Ok(())
    }
}

impl Default for TimeSeriesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
