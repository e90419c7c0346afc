#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fiscal/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Period-indexed financial series.
//!
//! This crate re-exports the period and series engine from `fiscal-core` and adds
//! a [`SeriesRegistry`] for holding a statement's line items over one shared
//! horizon.
//!
//! # Features
//!
//! - `dataframe` - Export series as polars DataFrames
//! - `full` - All of the above
//!
//! # Example
//!
//! ```rust
//! use fiscal::{Period, SeriesRegistry, TimeSeries, average_time_series};
//!
//! let horizon = Period::range(Period::annual(2022)?, Period::annual(2024)?)?;
//! let statement = SeriesRegistry::new(horizon.clone())?
//!     .with_series("net_income", TimeSeries::new(horizon.clone(), vec![12.0, 15.0, 18.0])?)?
//!     .with_series("total_assets", TimeSeries::new(horizon.clone(), vec![100.0, 140.0, 160.0])?)?;
//!
//! let net_income = statement.get("net_income").expect("registered");
//! let assets = statement.get("total_assets").expect("registered");
//! let roa = net_income.try_div(&average_time_series(assets))?;
//! assert_eq!(roa.get(&horizon[1]), Some(0.125));
//! # Ok::<(), fiscal::SeriesError>(())
//! ```

// Core types and helpers
pub use fiscal_core::*;

mod registry;
pub use registry::SeriesRegistry;
