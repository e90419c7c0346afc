//! Aggregation helpers that compose series into derived series.
//!
//! - [`sum_series`] - element-wise total across aligned series
//! - [`average_time_series`] - average balance between consecutive periods
//! - [`TimeSeries::aggregate`] - roll-up into coarser periods

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    error::{Result, SeriesError},
    granularity::Granularity,
    metadata::TimeSeriesMetadata,
    numeric::Real,
    period::Period,
    series::TimeSeries,
};

/// Element-wise sum across series that share one period set.
///
/// Every series must cover exactly `periods`, and the result follows the order
/// of `periods`. An empty list yields a zero series over `periods`.
///
/// # Errors
/// Returns [`SeriesError::Alignment`] if any series differs in period set from
/// `periods`, or [`SeriesError::DuplicatePeriod`] if `periods` repeats a period.
pub fn sum_series<T: Real>(
    series: &[TimeSeries<T>],
    periods: &[Period],
) -> Result<TimeSeries<T>> {
    let Some((first, rest)) = series.split_first() else {
        trace!(len = periods.len(), "Summing empty series list");
        let zeros = TimeSeries::zeros(periods.to_vec())?;
        return Ok(zeros.with_metadata(TimeSeriesMetadata::new("Total")));
    };

    let mut total = first.clone();
    for next in rest {
        total = total.zip_with(next, |a, b| a + b)?;
    }
    total.ensure_aligned(periods)?;
    let values = periods
        .iter()
        .map(|period| total.value_or_zero(period))
        .collect();
    Ok(TimeSeries::new(periods.to_vec(), values)?.with_metadata(TimeSeriesMetadata::new("Total")))
}

/// Average balance between each period and the one before it.
///
/// The first period has no predecessor and keeps its raw value; every later
/// period `i` becomes `(v[i - 1] + v[i]) / 2`. This is the denominator used for
/// ratios such as return on average assets.
#[must_use]
pub fn average_time_series<T: Real>(series: &TimeSeries<T>) -> TimeSeries<T> {
    let values = series.values();
    let two = T::from_i32(2);
    let averages = values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            if i == 0 {
                *value
            } else {
                (values[i - 1] + *value) / two
            }
        })
        .collect();
    TimeSeries::from_aligned(
        series.periods().to_vec(),
        averages,
        series
            .metadata()
            .renamed(format!("Average {}", series.metadata().name)),
    )
}

/// How values falling into the same coarser period are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aggregation {
    /// Total of the values (flows such as revenue).
    #[default]
    Sum,
    /// Mean of the values.
    Average,
    /// Value of the earliest period (opening balances).
    First,
    /// Value of the latest period (closing balances).
    Last,
}

impl<T: Real> TimeSeries<T> {
    /// Rolls the series up into `granularity` periods.
    ///
    /// Each value lands in the coarser period containing its own period's start;
    /// values sharing a target period are combined with `method`. The result is
    /// ordered by period and keeps this series' metadata.
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidParameter`] if `granularity` is finer than any
    /// period in the series.
    pub fn aggregate(&self, granularity: Granularity, method: Aggregation) -> Result<Self> {
        let mut buckets: Vec<(Period, Vec<(Period, T)>)> = Vec::new();
        let mut slots: HashMap<Period, usize> = HashMap::new();

        for (period, value) in self.iter() {
            if granularity.is_finer_than(period.granularity()) {
                return Err(SeriesError::InvalidParameter(format!(
                    "cannot aggregate {period} into {granularity:?} periods"
                )));
            }
            let target = Period::containing(granularity, period.start())?;
            let slot = *slots.entry(target).or_insert_with(|| {
                buckets.push((target, Vec::new()));
                buckets.len() - 1
            });
            buckets[slot].1.push((period, value));
        }

        buckets.sort_unstable_by_key(|(target, _)| *target);

        let mut periods = Vec::with_capacity(buckets.len());
        let mut values = Vec::with_capacity(buckets.len());
        for (target, mut entries) in buckets {
            entries.sort_unstable_by_key(|(period, _)| *period);
            periods.push(target);
            values.push(reduce(&entries, method)?);
        }

        trace!(
            from = self.len(),
            to = periods.len(),
            ?granularity,
            ?method,
            "Aggregated series"
        );
        Ok(Self::from_aligned(periods, values, self.metadata().clone()))
    }
}

/// Combines the chronologically sorted, non-empty `entries` of one bucket.
fn reduce<T: Real>(entries: &[(Period, T)], method: Aggregation) -> Result<T> {
    let total = || entries.iter().fold(T::zero(), |acc, (_, v)| acc + *v);
    let value = match method {
        Aggregation::Sum => total(),
        Aggregation::Average => {
            let count = i32::try_from(entries.len()).map_err(|_| {
                SeriesError::InvalidParameter(format!("{} values in one period", entries.len()))
            })?;
            total() / T::from_i32(count)
        }
        Aggregation::First => entries.first().map_or_else(T::zero, |(_, v)| *v),
        Aggregation::Last => entries.last().map_or_else(T::zero, |(_, v)| *v),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months(count: u32) -> Vec<Period> {
        (1..=count)
            .map(|m| Period::monthly(2025, m).unwrap())
            .collect()
    }

    fn monthly(values: &[f64]) -> TimeSeries<f64> {
        TimeSeries::new(months(values.len() as u32), values.to_vec()).unwrap()
    }

    #[test]
    fn test_average_time_series() {
        let avg = average_time_series(&monthly(&[10.0, 20.0, 30.0]));
        assert_eq!(avg.values(), vec![10.0, 15.0, 25.0]);
        assert_eq!(avg.periods(), months(3).as_slice());
    }

    #[test]
    fn test_average_time_series_edges() {
        assert!(average_time_series(&monthly(&[])).is_empty());
        assert_eq!(average_time_series(&monthly(&[42.0])).values(), vec![42.0]);
    }

    #[test]
    fn test_sum_series() {
        let total = sum_series(
            &[
                monthly(&[1.0, 2.0]),
                monthly(&[10.0, 20.0]),
                monthly(&[100.0, 200.0]),
            ],
            &months(2),
        )
        .unwrap();
        assert_eq!(total.values(), vec![111.0, 222.0]);
        assert_eq!(total.metadata().name, "Total");
    }

    #[test]
    fn test_sum_series_follows_supplied_periods() {
        let mut periods = months(2);
        periods.reverse();
        let total = sum_series(&[monthly(&[1.0, 2.0]), monthly(&[3.0, 4.0])], &periods).unwrap();
        assert_eq!(total.periods(), periods.as_slice());
        assert_eq!(total.values(), vec![6.0, 4.0]);
    }

    #[test]
    fn test_sum_series_empty_list_is_zero() {
        let periods = months(3);
        let total = sum_series::<f64>(&[], &periods).unwrap();
        assert_eq!(total.periods(), periods.as_slice());
        assert_eq!(total.values(), vec![0.0; 3]);
    }

    #[test]
    fn test_sum_series_requires_alignment() {
        let result = sum_series(
            &[monthly(&[1.0, 2.0]), monthly(&[1.0, 2.0, 3.0])],
            &months(2),
        );
        assert!(matches!(result, Err(SeriesError::Alignment { .. })));

        let result = sum_series(&[monthly(&[1.0, 2.0])], &months(3));
        assert!(matches!(result, Err(SeriesError::Alignment { .. })));
        let result = sum_series(&[monthly(&[1.0, 2.0])], &[]);
        assert!(matches!(result, Err(SeriesError::Alignment { .. })));
    }

    #[test]
    fn test_aggregate_months_to_quarters() {
        let ts = monthly(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let q1 = Period::quarterly(2025, 1).unwrap();
        let q2 = Period::quarterly(2025, 2).unwrap();

        let sum = ts.aggregate(Granularity::Quarterly, Aggregation::Sum).unwrap();
        assert_eq!(sum.periods(), &[q1, q2]);
        assert_eq!(sum.values(), vec![6.0, 15.0]);

        let avg = ts
            .aggregate(Granularity::Quarterly, Aggregation::Average)
            .unwrap();
        assert_eq!(avg.values(), vec![2.0, 5.0]);

        let first = ts.aggregate(Granularity::Quarterly, Aggregation::First).unwrap();
        assert_eq!(first.values(), vec![1.0, 4.0]);

        let last = ts.aggregate(Granularity::Annual, Aggregation::Last).unwrap();
        assert_eq!(last.periods(), &[Period::annual(2025).unwrap()]);
        assert_eq!(last.values(), vec![6.0]);
    }

    #[test]
    fn test_aggregate_uses_chronological_order() {
        let periods = vec![
            Period::monthly(2025, 3).unwrap(),
            Period::monthly(2025, 1).unwrap(),
            Period::monthly(2025, 2).unwrap(),
        ];
        let ts = TimeSeries::new(periods, vec![30.0, 10.0, 20.0]).unwrap();
        let closing = ts.aggregate(Granularity::Quarterly, Aggregation::Last).unwrap();
        assert_eq!(closing.values(), vec![30.0]);
        let opening = ts.aggregate(Granularity::Quarterly, Aggregation::First).unwrap();
        assert_eq!(opening.values(), vec![10.0]);
    }

    #[test]
    fn test_aggregate_rejects_finer_target() {
        let ts = monthly(&[1.0, 2.0]);
        assert!(matches!(
            ts.aggregate(Granularity::Daily, Aggregation::Sum),
            Err(SeriesError::InvalidParameter(_))
        ));
        let same = ts.aggregate(Granularity::Monthly, Aggregation::Sum).unwrap();
        assert_eq!(same, ts);
    }
}
