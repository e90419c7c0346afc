//! DataFrame export.

use polars::prelude::{Column, DataFrame, PlSmallStr};

use crate::{
    error::{Result, SeriesError},
    numeric::Real,
    series::TimeSeries,
};

impl<T: Real> TimeSeries<T> {
    /// Exports the series as a two-column DataFrame.
    ///
    /// Columns: `period` (the period label, e.g. `2025-Q1`) and `value` (as `f64`),
    /// one row per period in iteration order.
    ///
    /// # Errors
    /// Returns [`SeriesError::Export`] if the frame cannot be built.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let labels: Vec<String> = self.periods().iter().map(ToString::to_string).collect();
        let values: Vec<f64> = self.iter().map(|(_, value)| value.to_f64()).collect();

        DataFrame::new(vec![
            Column::new(PlSmallStr::from("period"), labels),
            Column::new(PlSmallStr::from("value"), values),
        ])
        .map_err(|e| SeriesError::Export(e.to_string()))
    }
}
