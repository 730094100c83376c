//! Environment-driven configuration for the report tool.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use pondwatch_core::pagination::DEFAULT_PAGE_SIZE;
use pondwatch_core::types::Timestamp;
use pondwatch_core::{Granularity, SensorKind};

pub const ENV_EXPORT: &str = "PONDWATCH_EXPORT";
pub const ENV_SENSOR_KIND: &str = "PONDWATCH_SENSOR_KIND";
pub const ENV_GRANULARITY: &str = "PONDWATCH_GRANULARITY";
pub const ENV_PAGE: &str = "PONDWATCH_PAGE";
pub const ENV_PAGE_SIZE: &str = "PONDWATCH_PAGE_SIZE";
pub const ENV_WINDOW_END: &str = "PONDWATCH_WINDOW_END";

#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// JSON export holding the sensor row and its readings.
    pub export_path: PathBuf,
    /// Band set to classify with. `None` uses the sensor's own type.
    pub sensor_kind: Option<SensorKind>,
    /// `None` uses the sensor's `aggregation_interval`.
    pub granularity: Option<Granularity>,
    /// When set, only readings in the granularity's look-back window ending
    /// here are reported.
    pub window_end: Option<Timestamp>,
    /// Requested table page; clamped when the report is built.
    pub page: usize,
    pub page_size: usize,
}

impl ReportConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let export_path = lookup(ENV_EXPORT)
            .map(PathBuf::from)
            .with_context(|| format!("{ENV_EXPORT} environment variable is required"))?;

        let sensor_kind = lookup(ENV_SENSOR_KIND)
            .map(|v| v.parse::<SensorKind>())
            .transpose()
            .with_context(|| format!("{ENV_SENSOR_KIND} is invalid"))?;

        let granularity = lookup(ENV_GRANULARITY)
            .map(|v| v.parse::<Granularity>())
            .transpose()
            .with_context(|| format!("{ENV_GRANULARITY} is invalid"))?;

        let window_end = lookup(ENV_WINDOW_END)
            .map(|v| DateTime::parse_from_rfc3339(v.trim()).map(|dt| dt.with_timezone(&Utc)))
            .transpose()
            .with_context(|| format!("{ENV_WINDOW_END} must be an RFC 3339 timestamp"))?;

        let page = parse_usize(&lookup, ENV_PAGE, 1)?;
        let page_size = parse_usize(&lookup, ENV_PAGE_SIZE, DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            anyhow::bail!("{ENV_PAGE_SIZE} must be at least 1");
        }

        Ok(Self {
            export_path,
            sensor_kind,
            granularity,
            window_end,
            page,
            page_size,
        })
    }
}

fn parse_usize<F>(lookup: &F, key: &str, default: usize) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) => v
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a non-negative integer, got {v:?}")),
        None => Ok(default),
    }
}
