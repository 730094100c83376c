//! Bucket granularity for chart aggregation.

use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Bucket size used by the time bucketer and label formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Granularity {
    /// All granularities, finest first, as offered by the chart selector.
    pub const ALL: [Granularity; 5] = [
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Parse a UI interval string, defaulting to `Daily` for anything
    /// unrecognized (the chart selector's initial value).
    pub fn from_interval(interval: &str) -> Self {
        interval.parse().unwrap_or(Self::Daily)
    }

    /// Look-back window a chart at this granularity covers by default.
    ///
    /// Months and years are approximated as 30 and 365 days.
    pub fn window(self) -> Duration {
        match self {
            Self::Hourly => Duration::hours(1),
            Self::Daily => Duration::hours(24),
            Self::Weekly => Duration::days(7),
            Self::Monthly => Duration::days(30),
            Self::Yearly => Duration::days(365),
        }
    }

    /// Start of the default window ending at `end`.
    pub fn window_start(self, end: Timestamp) -> Timestamp {
        end - self.window()
    }

    /// Chart subtitle, e.g. "Daily average".
    pub fn description(self) -> &'static str {
        match self {
            Self::Hourly => "Hourly average",
            Self::Daily => "Daily average",
            Self::Weekly => "Weekly average",
            Self::Monthly => "Monthly average",
            Self::Yearly => "Yearly average",
        }
    }
}

impl FromStr for Granularity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| CoreError::UnknownGranularity(s.to_string()))
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
