#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fiscal/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Calendar periods and period-indexed numeric series.
//!
//! This crate provides the engine every financial metric is built from:
//!
//! - [`Period`](period::Period) - One calendar interval at a [`Granularity`](granularity::Granularity)
//! - [`TimeSeries`](series::TimeSeries) - Immutable period-to-value mapping with aligned arithmetic
//! - [`TimeSeriesMetadata`](metadata::TimeSeriesMetadata) - Name, description and unit tags
//! - [`Real`](numeric::Real) - Numeric element trait (implemented for `f32` and `f64`)
//! - [`sum_series`](aggregate::sum_series) and [`average_time_series`](aggregate::average_time_series) - Aggregation helpers
//!
//! # Features
//!
//! - `dataframe` - Export series as polars DataFrames

/// Aggregation helpers (sums, average balances, roll-ups).
pub mod aggregate;
/// Period-aligned arithmetic between series.
pub mod arithmetic;
/// Error types for period and series operations.
pub mod error;
/// Period granularity definitions.
pub mod granularity;
/// Series metadata.
pub mod metadata;
/// Numeric element types.
pub mod numeric;
/// Calendar periods.
pub mod period;
/// The period-indexed series container.
pub mod series;

/// DataFrame export.
#[cfg(feature = "dataframe")]
pub mod frame;

// Re-export commonly used items at crate root
pub use aggregate::{Aggregation, average_time_series, sum_series};
pub use error::{Result, SeriesError};
pub use granularity::Granularity;
pub use metadata::TimeSeriesMetadata;
pub use numeric::Real;
pub use period::Period;
pub use series::TimeSeries;
