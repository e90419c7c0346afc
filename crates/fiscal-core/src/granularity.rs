//! Period granularity definitions.
//!
//! This module defines [`Granularity`], the unit of a [`Period`](crate::period::Period).
//! Variants are declared finest to coarsest, so the derived ordering ranks them
//! by size.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Unit of a calendar period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One millisecond.
    Millisecond,
    /// One second.
    Second,
    /// One minute.
    Minute,
    /// One hour.
    Hourly,
    /// One calendar day.
    Daily,
    /// One calendar month.
    Monthly,
    /// One calendar quarter (three months starting in January, April, July or October).
    Quarterly,
    /// One calendar year.
    Annual,
}

impl Granularity {
    /// All granularities, finest first.
    pub const ALL: [Self; 8] = [
        Self::Millisecond,
        Self::Second,
        Self::Minute,
        Self::Hourly,
        Self::Daily,
        Self::Monthly,
        Self::Quarterly,
        Self::Annual,
    ];

    /// Returns true if this granularity is shorter than a day.
    #[must_use]
    pub const fn is_intraday(&self) -> bool {
        matches!(
            self,
            Self::Millisecond | Self::Second | Self::Minute | Self::Hourly
        )
    }

    /// Returns true if periods of this granularity vary in length with the calendar.
    #[must_use]
    pub const fn is_calendar(&self) -> bool {
        matches!(self, Self::Monthly | Self::Quarterly | Self::Annual)
    }

    /// Number of calendar months spanned, for calendar granularities.
    #[must_use]
    pub const fn months(&self) -> Option<u32> {
        match self {
            Self::Monthly => Some(1),
            Self::Quarterly => Some(3),
            Self::Annual => Some(12),
            _ => None,
        }
    }

    /// Exact length of one period, for granularities that do not depend on the calendar.
    #[must_use]
    pub fn fixed_duration(&self) -> Option<TimeDelta> {
        match self {
            Self::Millisecond => Some(TimeDelta::milliseconds(1)),
            Self::Second => Some(TimeDelta::seconds(1)),
            Self::Minute => Some(TimeDelta::minutes(1)),
            Self::Hourly => Some(TimeDelta::hours(1)),
            Self::Daily => Some(TimeDelta::days(1)),
            Self::Monthly | Self::Quarterly | Self::Annual => None,
        }
    }

    /// Returns true if periods of this granularity are strictly shorter than `other`'s.
    #[must_use]
    pub fn is_finer_than(&self, other: Self) -> bool {
        *self < other
    }
}
