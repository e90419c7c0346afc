//! The period-indexed numeric container.
//!
//! A [`TimeSeries`] maps each of an ordered list of [`Period`]s to exactly one
//! value. The list fixes iteration and display order; every lookup goes through
//! the period key, never through a position. Series are values: each operation
//! returns a new series and leaves its inputs untouched.
//!
//! Element-wise arithmetic lives in [`arithmetic`](crate::arithmetic) and
//! roll-ups in [`aggregate`](crate::aggregate).

use std::collections::{HashMap, HashSet};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::{
    error::{Result, SeriesError},
    metadata::TimeSeriesMetadata,
    numeric::Real,
    period::Period,
};

/// An immutable, ordered mapping from [`Period`] to a numeric value.
///
/// Invariants:
///
/// - no period appears twice in the period list;
/// - the value mapping covers exactly the listed periods.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries<T> {
    periods: Vec<Period>,
    values: HashMap<Period, T>,
    metadata: TimeSeriesMetadata,
}

impl<T: Real> TimeSeries<T> {
    /// Creates a series from parallel period and value arrays.
    ///
    /// The supplied period order is kept for iteration.
    ///
    /// # Errors
    /// Returns [`SeriesError::LengthMismatch`] if the arrays differ in length and
    /// [`SeriesError::DuplicatePeriod`] if a period is repeated.
    pub fn new(periods: Vec<Period>, values: Vec<T>) -> Result<Self> {
        if periods.len() != values.len() {
            debug!(
                periods = periods.len(),
                values = values.len(),
                "Rejecting series with mismatched lengths"
            );
            return Err(SeriesError::LengthMismatch {
                periods: periods.len(),
                values: values.len(),
            });
        }

        let mut map = HashMap::with_capacity(periods.len());
        for (period, value) in periods.iter().copied().zip(values) {
            if map.insert(period, value).is_some() {
                debug!(%period, "Rejecting series with duplicate period");
                return Err(SeriesError::DuplicatePeriod(period));
            }
        }

        Ok(Self {
            periods,
            values: map,
            metadata: TimeSeriesMetadata::default(),
        })
    }

    /// Creates a series from an unordered mapping.
    ///
    /// The period list is the mapping's keys sorted by start instant.
    #[must_use]
    pub fn from_map(values: HashMap<Period, T>, metadata: TimeSeriesMetadata) -> Self {
        let mut periods: Vec<Period> = values.keys().copied().collect();
        periods.sort_unstable();
        Self {
            periods,
            values,
            metadata,
        }
    }

    /// Creates a series holding `value` at every period.
    ///
    /// # Errors
    /// Returns [`SeriesError::DuplicatePeriod`] if a period is repeated.
    pub fn constant(periods: Vec<Period>, value: T) -> Result<Self> {
        let values = vec![value; periods.len()];
        Self::new(periods, values)
    }

    /// Creates a series holding zero at every period.
    ///
    /// # Errors
    /// Returns [`SeriesError::DuplicatePeriod`] if a period is repeated.
    pub fn zeros(periods: Vec<Period>) -> Result<Self> {
        Self::constant(periods, T::zero())
    }

    /// Builds a series from parts that already satisfy the invariants.
    pub(crate) fn from_aligned(
        periods: Vec<Period>,
        values: Vec<T>,
        metadata: TimeSeriesMetadata,
    ) -> Self {
        let values = periods.iter().copied().zip(values).collect();
        Self {
            periods,
            values,
            metadata,
        }
    }

    /// Replaces the metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: TimeSeriesMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Returns the metadata.
    #[must_use]
    pub const fn metadata(&self) -> &TimeSeriesMetadata {
        &self.metadata
    }

    /// Returns the periods in iteration order.
    #[must_use]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Returns the values in period order.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.iter().map(|(_, value)| value).collect()
    }

    /// Returns the number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns true if the series has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Returns true if the series has a value for `period`.
    #[must_use]
    pub fn contains(&self, period: &Period) -> bool {
        self.values.contains_key(period)
    }

    /// Looks up the value for `period`.
    ///
    /// `None` means the series has no data for that period; it is not an error.
    #[must_use]
    pub fn get(&self, period: &Period) -> Option<T> {
        self.values.get(period).copied()
    }

    /// Looks up the value for `period`, treating absence as zero.
    #[must_use]
    pub fn value_or_zero(&self, period: &Period) -> T {
        self.get(period).unwrap_or_else(T::zero)
    }

    /// Iterates over `(period, value)` pairs in period order.
    pub fn iter(&self) -> impl Iterator<Item = (Period, T)> + '_ {
        self.periods
            .iter()
            .filter_map(|period| self.values.get(period).map(|value| (*period, *value)))
    }

    /// Returns the first period and its value.
    #[must_use]
    pub fn first(&self) -> Option<(Period, T)> {
        self.iter().next()
    }

    /// Returns the last period and its value.
    #[must_use]
    pub fn last(&self) -> Option<(Period, T)> {
        let period = self.periods.last()?;
        self.values.get(period).map(|value| (*period, *value))
    }

    /// Applies a scalar transform to every value, keeping the periods.
    ///
    /// The result is named `"Transformed <name>"`.
    #[must_use]
    pub fn map_values<F>(&self, transform: F) -> Self
    where
        F: Fn(T) -> T,
    {
        let values = self.iter().map(|(_, value)| transform(value)).collect();
        Self::from_aligned(
            self.periods.clone(),
            values,
            self.metadata
                .renamed(format!("Transformed {}", self.metadata.name)),
        )
    }

    /// Period-over-period change at `lag`.
    ///
    /// For index `i >= lag` the result is `v[i] - v[i - lag]`. The leading `lag`
    /// periods keep their raw value: they are the change from an assumed zero
    /// balance before the series begins, so no period is dropped. A lag at or
    /// beyond the series length therefore returns the values unchanged.
    #[must_use]
    pub fn diff(&self, lag: usize) -> Self {
        let values = self.values();
        let changes = values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                if i >= lag {
                    *value - values[i - lag]
                } else {
                    *value
                }
            })
            .collect();
        trace!(lag, len = values.len(), "Computed series diff");
        Self::from_aligned(
            self.periods.clone(),
            changes,
            self.metadata.renamed(format!("{} change", self.metadata.name)),
        )
    }

    /// Running total of the values.
    #[must_use]
    pub fn cumulative_sum(&self) -> Self {
        let mut total = T::zero();
        let values = self
            .iter()
            .map(|(_, value)| {
                total = total + value;
                total
            })
            .collect();
        Self::from_aligned(
            self.periods.clone(),
            values,
            self.metadata
                .renamed(format!("Cumulative {}", self.metadata.name)),
        )
    }

    /// Relative change over `lag` periods: `(v[i] - v[i - lag]) / v[i - lag]`.
    ///
    /// Unlike [`diff`](Self::diff), the leading `lag` periods have no base and are
    /// dropped. A zero base yields infinity or NaN.
    #[must_use]
    pub fn growth_rate(&self, lag: usize) -> Self {
        let values = self.values();
        let rates = (lag..values.len())
            .map(|i| (values[i] - values[i - lag]) / values[i - lag])
            .collect();
        let periods = self.periods.iter().skip(lag).copied().collect();
        Self::from_aligned(
            periods,
            rates,
            self.metadata.renamed(format!("{} growth", self.metadata.name)),
        )
    }

    /// Trailing mean over `window` periods.
    ///
    /// The first `window - 1` periods lack a full window and are dropped.
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidParameter`] if `window` is zero or too large.
    pub fn moving_average(&self, window: usize) -> Result<Self> {
        if window == 0 {
            return Err(SeriesError::InvalidParameter(
                "moving average window must be positive".to_string(),
            ));
        }
        let divisor = i32::try_from(window).map(T::from_i32).map_err(|_| {
            SeriesError::InvalidParameter(format!("moving average window {window} is too large"))
        })?;

        let values = self.values();
        let averages = values
            .windows(window)
            .map(|slice| slice.iter().fold(T::zero(), |acc, v| acc + *v) / divisor)
            .collect();
        let periods = self.periods.iter().skip(window - 1).copied().collect();
        Ok(Self::from_aligned(
            periods,
            averages,
            self.metadata.renamed(format!(
                "{} {window}-period average",
                self.metadata.name
            )),
        ))
    }

    /// Sub-series of the periods that start within `from` through `to`.
    ///
    /// A period qualifies when its start lies at or after `from`'s start and before
    /// `to`'s end. Order is preserved.
    #[must_use]
    pub fn between(&self, from: &Period, to: &Period) -> Self {
        let (lower, upper) = (from.start(), to.end());
        let (periods, values): (Vec<Period>, Vec<T>) = self
            .iter()
            .filter(|(period, _)| period.start() >= lower && period.start() < upper)
            .unzip();
        Self::from_aligned(periods, values, self.metadata.clone())
    }

    /// Sum of all values (zero for an empty series).
    #[must_use]
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, (_, value)| acc + value)
    }

    /// Arithmetic mean of the values, or `None` for an empty series.
    #[must_use]
    pub fn mean(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let count = i32::try_from(self.len()).ok()?;
        Some(self.sum() / T::from_i32(count))
    }

    /// Returns true if `other` covers exactly the same period set (in any order).
    #[must_use]
    pub fn is_aligned_with(&self, other: &Self) -> bool {
        self.first_mismatch(&other.periods).is_none()
    }

    /// Fails unless `periods` names exactly this series' period set (in any order).
    ///
    /// # Errors
    /// Returns [`SeriesError::Alignment`] naming the first period found on only one side.
    pub fn ensure_aligned(&self, periods: &[Period]) -> Result<()> {
        match self.first_mismatch(periods) {
            None => Ok(()),
            Some(period) => {
                debug!(
                    left = self.len(),
                    right = periods.len(),
                    %period,
                    "Series are not aligned"
                );
                Err(SeriesError::Alignment {
                    left: self.len(),
                    right: periods.len(),
                    period,
                })
            }
        }
    }

    /// First period present in only one of `self` and `periods`.
    fn first_mismatch(&self, periods: &[Period]) -> Option<Period> {
        if let Some(missing) = periods.iter().find(|p| !self.values.contains_key(p)) {
            return Some(*missing);
        }
        let other: HashSet<&Period> = periods.iter().collect();
        self.periods.iter().find(|p| !other.contains(p)).copied()
    }

    /// Encodes the series as JSON.
    ///
    /// Infinities and NaN are written as the strings `"inf"`, `"-inf"` and `"NaN"`
    /// and read back by [`from_json`](Self::from_json).
    ///
    /// # Errors
    /// Returns [`SeriesError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String>
    where
        T: Serialize,
    {
        serde_json::to_string(self).map_err(|e| SeriesError::Serialization(e.to_string()))
    }

    /// Decodes a series from JSON produced by [`to_json`](Self::to_json).
    ///
    /// # Errors
    /// Returns [`SeriesError::Serialization`] if the input is malformed or violates
    /// the construction invariants.
    pub fn from_json(json: &str) -> Result<Self>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(json).map_err(|e| SeriesError::Serialization(e.to_string()))
    }
}

/// Borrowed wire form: periods with parallel values.
#[derive(Serialize)]
#[serde(bound(serialize = "T: Real + Serialize"))]
struct SeriesRef<'a, T> {
    periods: &'a [Period],
    values: Vec<WireValue<T>>,
    metadata: &'a TimeSeriesMetadata,
}

/// Owned wire form used while decoding.
#[derive(Deserialize)]
struct RawSeries<T> {
    periods: Vec<Period>,
    values: Vec<RawValue<T>>,
    #[serde(default)]
    metadata: TimeSeriesMetadata,
}

/// One encoded value. Non-finite values travel as labels so that formats
/// without infinities or NaN (JSON) keep them.
struct WireValue<T>(T);

impl<T: Real + Serialize> Serialize for WireValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            return self.0.serialize(serializer);
        }
        let value = self.0.to_f64();
        let label = if value.is_nan() {
            "NaN"
        } else if value > 0.0 {
            "inf"
        } else {
            "-inf"
        };
        serializer.serialize_str(label)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue<T> {
    Number(T),
    Label(String),
}

impl<T: Real> RawValue<T> {
    fn into_value(self) -> Result<T> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Label(label) => match label.as_str() {
                "NaN" => Ok(T::from_f64(f64::NAN)),
                "inf" => Ok(T::from_f64(f64::INFINITY)),
                "-inf" => Ok(T::from_f64(f64::NEG_INFINITY)),
                _ => Err(SeriesError::Serialization(format!(
                    "unknown value label {label:?}"
                ))),
            },
        }
    }
}

impl<T: Real + Serialize> Serialize for TimeSeries<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        SeriesRef {
            periods: &self.periods,
            values: self.values().into_iter().map(WireValue).collect(),
            metadata: &self.metadata,
        }
        .serialize(serializer)
    }
}

impl<'de, T: Real + Deserialize<'de>> Deserialize<'de> for TimeSeries<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawSeries::<T>::deserialize(deserializer)?;
        let values = raw
            .values
            .into_iter()
            .map(RawValue::into_value)
            .collect::<Result<Vec<_>>>()
            .map_err(serde::de::Error::custom)?;
        Self::new(raw.periods, values)
            .map(|series| series.with_metadata(raw.metadata))
            .map_err(serde::de::Error::custom)
    }
}
