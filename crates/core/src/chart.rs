//! Chart-ready series: bucketed means with rendered axis labels.

use std::fmt::Display;

use chrono::TimeZone;
use serde::Serialize;

use crate::bucketing::aggregate;
use crate::granularity::Granularity;
use crate::labels::format_label_in;
use crate::readings::Reading;

/// One plotted point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Aggregate `readings` at `granularity`, label each bucket in `tz`, and
/// round means to two decimals.
pub fn build_series<Tz>(readings: &[Reading], granularity: Granularity, tz: &Tz) -> Vec<ChartPoint>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    aggregate(readings, granularity)
        .into_iter()
        .map(|point| ChartPoint {
            label: format_label_in(point.time, granularity, tz),
            value: round2(point.value),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
