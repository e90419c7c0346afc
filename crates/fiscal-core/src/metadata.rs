//! Descriptive tags carried alongside a series.

use serde::{Deserialize, Serialize};

/// Name, description and unit of a [`TimeSeries`](crate::series::TimeSeries).
///
/// Metadata never affects arithmetic; it only travels with the values for display
/// and persistence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSeriesMetadata {
    /// Series name (e.g., "Revenue"). May be empty.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit of the values (e.g., "USD").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl TimeSeriesMetadata {
    /// Creates metadata with a name and no description or unit.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            unit: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the unit.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Returns a copy with the name replaced, keeping description and unit.
    #[must_use]
    pub(crate) fn renamed(&self, name: String) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }
}
