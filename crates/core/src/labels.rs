//! Axis label rendering for bucket starts.
//!
//! Labels are rendered in the viewer's time zone, unlike bucketing which is
//! always UTC.

use std::fmt::Display;

use chrono::{Local, TimeZone};

use crate::granularity::Granularity;
use crate::types::Timestamp;

/// Rendering used when the interval string is not a known granularity,
/// e.g. `3/5/2024, 2:00:00 PM`.
pub const DEFAULT_LABEL_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

fn label_format(granularity: Granularity) -> &'static str {
    match granularity {
        Granularity::Hourly => "%b %d, %H",
        Granularity::Daily | Granularity::Weekly => "%b %d",
        Granularity::Monthly => "%b %y",
        Granularity::Yearly => "%Y",
    }
}

/// Label for a bucket start in the local time zone.
pub fn format_label(bucket_start: Timestamp, granularity: Granularity) -> String {
    format_label_in(bucket_start, granularity, &Local)
}

/// Label for a bucket start in an explicit time zone.
pub fn format_label_in<Tz>(bucket_start: Timestamp, granularity: Granularity, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    bucket_start
        .with_timezone(tz)
        .format(label_format(granularity))
        .to_string()
}

/// Label for a raw interval string in the local time zone. Unknown intervals
/// fall back to [`DEFAULT_LABEL_FORMAT`].
pub fn format_interval_label(bucket_start: Timestamp, interval: &str) -> String {
    format_interval_label_in(bucket_start, interval, &Local)
}

/// [`format_interval_label`] in an explicit time zone.
pub fn format_interval_label_in<Tz>(bucket_start: Timestamp, interval: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match interval.parse::<Granularity>() {
        Ok(granularity) => format_label_in(bucket_start, granularity, tz),
        Err(_) => bucket_start
            .with_timezone(tz)
            .format(DEFAULT_LABEL_FORMAT)
            .to_string(),
    }
}
