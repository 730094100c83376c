//! Calendar-aligned time bucketing for chart series.
//!
//! Bucket starts are derived from UTC calendar fields only, never local time,
//! so readings taken in different zones pool by absolute calendar position.
//! Weeks start on Sunday.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};

use crate::granularity::Granularity;
use crate::readings::{AggregatedPoint, Reading};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Bucket alignment
// ---------------------------------------------------------------------------

/// Start of the bucket containing `ts`: every calendar field finer than
/// `granularity` is zeroed in UTC.
pub fn bucket_start(ts: Timestamp, granularity: Granularity) -> Timestamp {
    let midnight = start_of_day(ts);
    match granularity {
        Granularity::Hourly => midnight + Duration::hours(i64::from(ts.hour())),
        Granularity::Daily => midnight,
        Granularity::Weekly => days_before(midnight, ts.weekday().num_days_from_sunday()),
        Granularity::Monthly => days_before(midnight, ts.day0()),
        Granularity::Yearly => days_before(midnight, ts.ordinal0()),
    }
}

/// Step back whole days, clamping at the earliest representable instant.
fn days_before(midnight: Timestamp, days: u32) -> Timestamp {
    midnight
        .checked_sub_signed(Duration::days(i64::from(days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn start_of_day(ts: Timestamp) -> Timestamp {
    // Leap-second timestamps carry nanoseconds >= 1e9.
    let nanos = ts.nanosecond() % 1_000_000_000;
    ts - Duration::seconds(i64::from(ts.num_seconds_from_midnight()))
        - Duration::nanoseconds(i64::from(nanos))
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Running sum and count for one bucket.
#[derive(Debug, Default, Clone, Copy)]
struct BucketAccumulator {
    sum: f64,
    count: usize,
}

impl BucketAccumulator {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Pool readings into calendar buckets and average each bucket.
///
/// Output is sorted ascending by bucket start regardless of input order.
/// An empty input yields an empty series; callers render a "not enough data"
/// placeholder in that case.
pub fn aggregate(readings: &[Reading], granularity: Granularity) -> Vec<AggregatedPoint> {
    aggregate_values(
        readings.iter().map(|r| (r.recorded_at, r.value)),
        granularity,
    )
}

/// [`aggregate`] over raw `(timestamp, value)` pairs.
pub fn aggregate_values<I>(samples: I, granularity: Granularity) -> Vec<AggregatedPoint>
where
    I: IntoIterator<Item = (Timestamp, f64)>,
{
    let mut buckets: BTreeMap<Timestamp, BucketAccumulator> = BTreeMap::new();
    let mut sample_count = 0usize;

    for (ts, value) in samples {
        buckets
            .entry(bucket_start(ts, granularity))
            .or_default()
            .push(value);
        sample_count += 1;
    }

    tracing::debug!(
        granularity = %granularity,
        samples = sample_count,
        buckets = buckets.len(),
        "Aggregated readings",
    );

    buckets
        .into_iter()
        .map(|(time, acc)| AggregatedPoint {
            time,
            value: acc.mean(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
