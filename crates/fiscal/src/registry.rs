//! Named series sharing one statement horizon.

use std::collections::{BTreeMap, HashSet};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, warn};

use fiscal_core::{Period, Real, Result, SeriesError, TimeSeries, sum_series};

/// Registry of named series that all cover one horizon.
///
/// A financial statement is a set of line items over the same periods. The
/// `SeriesRegistry` holds those line items by name and enforces the shared
/// horizon on registration, so any two registered series can be combined with
/// aligned arithmetic without further checks. Registered series are re-ordered
/// to follow the horizon.
///
/// # Example
///
/// ```
/// use fiscal::{Period, SeriesRegistry, TimeSeries};
///
/// let horizon = Period::range(Period::quarterly(2025, 1)?, Period::quarterly(2025, 2)?)?;
/// let mut statement = SeriesRegistry::new(horizon.clone())?;
/// statement.register("revenue", TimeSeries::new(horizon.clone(), vec![100.0, 110.0])?)?;
/// statement.register("cogs", TimeSeries::new(horizon.clone(), vec![60.0, 64.0])?)?;
///
/// // Unregistered line items count as zero.
/// let costs = statement.sum(&["cogs", "opex"])?;
/// assert_eq!(costs.values(), vec![60.0, 64.0]);
/// assert_eq!(statement.value_or_zero("opex", &horizon[0]), 0.0);
/// # Ok::<(), fiscal::SeriesError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesRegistry<T> {
    horizon: Vec<Period>,
    series: BTreeMap<String, TimeSeries<T>>,
}

impl<T: Real> SeriesRegistry<T> {
    /// Create an empty registry over `horizon`.
    ///
    /// # Errors
    /// Returns [`SeriesError::DuplicatePeriod`] if the horizon repeats a period.
    pub fn new(horizon: Vec<Period>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(horizon.len());
        for period in &horizon {
            if !seen.insert(*period) {
                return Err(SeriesError::DuplicatePeriod(*period));
            }
        }
        Ok(Self {
            horizon,
            series: BTreeMap::new(),
        })
    }

    /// Returns the shared horizon.
    #[must_use]
    pub fn horizon(&self) -> &[Period] {
        &self.horizon
    }

    /// Register a series under `name`, replacing any series of the same name.
    ///
    /// # Errors
    /// Returns [`SeriesError::Alignment`] unless the series covers exactly the horizon.
    pub fn register(&mut self, name: impl Into<String>, series: TimeSeries<T>) -> Result<()> {
        let name = name.into();
        series.ensure_aligned(&self.horizon)?;

        let values = self
            .horizon
            .iter()
            .map(|period| series.value_or_zero(period))
            .collect();
        let ordered =
            TimeSeries::new(self.horizon.clone(), values)?.with_metadata(series.metadata().clone());

        debug!(name = %name, periods = self.horizon.len(), "Registering series");
        if self.series.insert(name.clone(), ordered).is_some() {
            warn!(name = %name, "Replaced previously registered series");
        }
        Ok(())
    }

    /// Register a series, builder style.
    ///
    /// # Errors
    /// Returns [`SeriesError::Alignment`] unless the series covers exactly the horizon.
    pub fn with_series(mut self, name: impl Into<String>, series: TimeSeries<T>) -> Result<Self> {
        self.register(name, series)?;
        Ok(self)
    }

    /// Remove and return the series registered under `name`.
    pub fn remove(&mut self, name: &str) -> Option<TimeSeries<T>> {
        self.series.remove(name)
    }

    /// Returns the series registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TimeSeries<T>> {
        self.series.get(name)
    }

    /// Returns true if a series is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.series.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Returns the number of registered series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns true if no series is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Value of `name` at `period`, or zero if either is absent.
    #[must_use]
    pub fn value_or_zero(&self, name: &str, period: &Period) -> T {
        self.get(name)
            .map_or_else(T::zero, |series| series.value_or_zero(period))
    }

    /// Sum of the named series over the horizon.
    ///
    /// Names with no registered series contribute nothing, so a statement with
    /// no matching accounts yields a zero series.
    ///
    /// # Errors
    /// Returns an error only if the registry's invariants were broken.
    pub fn sum(&self, names: &[&str]) -> Result<TimeSeries<T>> {
        let mut found = Vec::with_capacity(names.len());
        for name in names {
            match self.series.get(*name) {
                Some(series) => found.push(series.clone()),
                None => debug!(name = %name, "Series not registered, contributing zero"),
            }
        }
        sum_series(&found, &self.horizon)
    }
}

#[derive(Serialize)]
#[serde(bound(serialize = "T: Real + Serialize"))]
struct RegistryRef<'a, T> {
    horizon: &'a [Period],
    series: &'a BTreeMap<String, TimeSeries<T>>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Real + DeserializeOwned"))]
struct RawRegistry<T> {
    horizon: Vec<Period>,
    #[serde(default)]
    series: BTreeMap<String, TimeSeries<T>>,
}

impl<T: Real + Serialize> Serialize for SeriesRegistry<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RegistryRef {
            horizon: &self.horizon,
            series: &self.series,
        }
        .serialize(serializer)
    }
}

impl<'de, T: Real + DeserializeOwned> Deserialize<'de> for SeriesRegistry<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawRegistry::<T>::deserialize(deserializer)?;
        let mut registry = Self::new(raw.horizon).map_err(serde::de::Error::custom)?;
        for (name, series) in raw.series {
            registry
                .register(name, series)
                .map_err(serde::de::Error::custom)?;
        }
        Ok(registry)
    }
}
