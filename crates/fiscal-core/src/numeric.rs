//! Numeric element types for series.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A real-valued scalar that a [`TimeSeries`](crate::series::TimeSeries) can hold.
///
/// Division is plain `Div`: dividing by zero is not guarded and yields the type's
/// infinity or NaN, which ratio code relies on to flag an undefined ratio.
pub trait Real:
    Copy
    + Debug
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Converts an integer into this type.
    fn from_i32(value: i32) -> Self;

    /// Lossy conversion from `f64`, used when decoding non-finite values.
    fn from_f64(value: f64) -> Self;

    /// Lossy conversion to `f64`, used when exporting.
    fn to_f64(self) -> f64;

    /// Returns false for infinities and NaN.
    fn is_finite(self) -> bool;

    /// Additive identity.
    #[must_use]
    fn zero() -> Self {
        Self::from_i32(0)
    }

    /// Multiplicative identity.
    #[must_use]
    fn one() -> Self {
        Self::from_i32(1)
    }
}

macro_rules! impl_real {
    ($($ty:ty),*) => {
        $(
            impl Real for $ty {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn from_i32(value: i32) -> Self {
                    value as $ty
                }

                #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }

                #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn is_finite(self) -> bool {
                    <$ty>::is_finite(self)
                }
            }
        )*
    };
}

impl_real!(f32, f64);
