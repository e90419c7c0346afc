//! Period-aligned arithmetic between series.
//!
//! Two series combine by matching period keys, never positions. The alignment
//! policy is strict: both operands must carry exactly the same period set, in
//! any order, and anything else fails with
//! [`SeriesError::Alignment`](crate::SeriesError::Alignment). The result follows
//! the left operand's period order.
//!
//! The `std::ops` operators are implemented for both owned and borrowed series
//! and yield a [`Result`]:
//!
//! ```
//! use fiscal_core::{Period, TimeSeries};
//!
//! let periods = vec![Period::quarterly(2025, 1)?, Period::quarterly(2025, 2)?];
//! let revenue = TimeSeries::new(periods.clone(), vec![100.0, 110.0])?;
//! let expenses = TimeSeries::new(periods, vec![80.0, 84.0])?;
//!
//! let income = (&revenue - &expenses)?;
//! assert_eq!(income.values(), vec![20.0, 26.0]);
//! # Ok::<(), fiscal_core::SeriesError>(())
//! ```
//!
//! Division by a zero value is not guarded and yields infinity or NaN.

use std::ops::{Add, Div, Mul, Sub};

use tracing::trace;

use crate::{
    error::Result,
    metadata::TimeSeriesMetadata,
    numeric::Real,
    series::TimeSeries,
};

impl<T: Real> TimeSeries<T> {
    /// Combines two aligned series period by period with `op(self[p], other[p])`.
    ///
    /// The result carries default metadata.
    ///
    /// # Errors
    /// Returns [`SeriesError::Alignment`](crate::SeriesError::Alignment) unless both
    /// series share one period set.
    pub fn zip_with<F>(&self, other: &Self, op: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        self.ensure_aligned(other.periods())?;
        let values = self
            .iter()
            .map(|(period, value)| op(value, other.value_or_zero(&period)))
            .collect();
        trace!(len = self.len(), "Combined aligned series");
        Ok(Self::from_aligned(
            self.periods().to_vec(),
            values,
            TimeSeriesMetadata::default(),
        ))
    }

    fn combine<F>(&self, other: &Self, symbol: char, op: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        let (left, right) = (&self.metadata().name, &other.metadata().name);
        let name = match (left.is_empty(), right.is_empty()) {
            (false, false) => format!("{left} {symbol} {right}"),
            (false, true) => left.clone(),
            (true, _) => right.clone(),
        };
        Ok(self
            .zip_with(other, op)?
            .with_metadata(TimeSeriesMetadata::new(name)))
    }

    /// Period-wise sum.
    ///
    /// # Errors
    /// Returns [`SeriesError::Alignment`](crate::SeriesError::Alignment) unless both
    /// series share one period set.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.combine(other, '+', |a, b| a + b)
    }

    /// Period-wise difference.
    ///
    /// # Errors
    /// Returns [`SeriesError::Alignment`](crate::SeriesError::Alignment) unless both
    /// series share one period set.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.combine(other, '-', |a, b| a - b)
    }

    /// Period-wise product.
    ///
    /// # Errors
    /// Returns [`SeriesError::Alignment`](crate::SeriesError::Alignment) unless both
    /// series share one period set.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.combine(other, '*', |a, b| a * b)
    }

    /// Period-wise quotient. A zero divisor yields infinity or NaN for that period.
    ///
    /// # Errors
    /// Returns [`SeriesError::Alignment`](crate::SeriesError::Alignment) unless both
    /// series share one period set.
    pub fn try_div(&self, other: &Self) -> Result<Self> {
        self.combine(other, '/', |a, b| a / b)
    }
}

macro_rules! impl_series_op {
    ($op:ident, $method:ident, $checked:ident) => {
        impl<T: Real> $op<&TimeSeries<T>> for &TimeSeries<T> {
            type Output = Result<TimeSeries<T>>;

            fn $method(self, rhs: &TimeSeries<T>) -> Self::Output {
                self.$checked(rhs)
            }
        }

        impl<T: Real> $op for TimeSeries<T> {
            type Output = Result<Self>;

            fn $method(self, rhs: Self) -> Self::Output {
                self.$checked(&rhs)
            }
        }
    };
}

impl_series_op!(Add, add, try_add);
impl_series_op!(Sub, sub, try_sub);
impl_series_op!(Mul, mul, try_mul);
impl_series_op!(Div, div, try_div);
