//! Sample records and their quality flags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::{Add, BitAnd, BitOr, BitOrAssign, Div, Mul, Rem, Sub};

/// Point in time used for every sample.
pub type Timestamp = DateTime<Utc>;

/// Quality flags attached to a [`Value`].
///
/// Flags combine with `|` whenever two values are merged by an operator or by
/// interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ValueFlags(u32);

impl ValueFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// The sample was expected but not recorded.
    pub const MISSING: Self = Self(0x1);
    /// The sample was estimated rather than measured.
    pub const ESTIMATED: Self = Self(0x2);
    /// The sample was synthesized by interpolation.
    pub const INTERPOLATED: Self = Self(0x4);

    /// Creates flags from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every flag in `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ValueFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ValueFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ValueFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// A single immutable sample: timestamp, quality flags, caller-defined code and scalar data.
///
/// Arithmetic operators act on `data` and keep the left operand's `time`.
/// Flags are OR-ed together and the left operand's `code` wins unless it is `0`.
///
/// Equality compares all four fields. Ordering compares `data` only, so two
/// values may compare as neither less nor greater and still be unequal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Value {
    time: Timestamp,
    flags: ValueFlags,
    code: i32,
    data: f64,
}

impl Value {
    /// Creates a sample with no flags and an unset code.
    pub fn new(time: Timestamp, data: f64) -> Self {
        Self::from_parts(time, ValueFlags::NONE, 0, data)
    }

    /// Creates a sample with the given flags and an unset code.
    pub fn with_flags(time: Timestamp, flags: ValueFlags, data: f64) -> Self {
        Self::from_parts(time, flags, 0, data)
    }

    /// Creates a sample from all four fields.
    pub fn from_parts(time: Timestamp, flags: ValueFlags, code: i32, data: f64) -> Self {
        Self {
            time,
            flags,
            code,
            data,
        }
    }

    /// Returns a copy of this sample moved to `time`.
    #[must_use]
    pub fn retimed(&self, time: Timestamp) -> Self {
        Self { time, ..*self }
    }

    /// Timestamp of the sample.
    pub fn time(&self) -> Timestamp {
        self.time
    }

    /// Quality flags.
    pub fn flags(&self) -> ValueFlags {
        self.flags
    }

    /// Caller-defined code, `0` when unset.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Scalar payload.
    pub fn data(&self) -> f64 {
        self.data
    }

    /// Returns a copy with `data + 1.0`.
    #[must_use]
    pub fn incremented(&self) -> Self {
        Self {
            data: self.data + 1.0,
            ..*self
        }
    }

    /// Returns a copy with `data - 1.0`.
    #[must_use]
    pub fn decremented(&self) -> Self {
        Self {
            data: self.data - 1.0,
            ..*self
        }
    }

    /// Combines flags and code of two samples, keeping `self.time` and the given `data`.
    pub(crate) fn combine(&self, other: &Self, data: f64) -> Self {
        Self {
            time: self.time,
            flags: self.flags | other.flags,
            code: combine_code(self.code, other.code),
            data,
        }
    }
}

/// First non-zero code wins, left operand preferred.
pub(crate) fn combine_code(left: i32, right: i32) -> i32 {
    if left != 0 { left } else { right }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.data.partial_cmp(&other.data)
    }
}

macro_rules! impl_data_op {
    ($op_trait:ident, $method:ident, $op:tt) => {
        impl $op_trait for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                self.combine(&rhs, self.data $op rhs.data)
            }
        }

        impl $op_trait<f64> for Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                Value {
                    data: self.data $op rhs,
                    ..self
                }
            }
        }
    };
}

impl_data_op!(Add, add, +);
impl_data_op!(Sub, sub, -);
impl_data_op!(Mul, mul, *);
impl_data_op!(Div, div, /);
impl_data_op!(Rem, rem, %);
