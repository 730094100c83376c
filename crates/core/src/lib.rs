//! `pondwatch-core`: pure logic behind the pond monitoring dashboard.
//!
//! Classifies readings against configured threshold bands, buckets reading
//! lists into calendar-aligned means for charts, renders axis labels, and
//! computes pagination bars for reading tables. Nothing here performs I/O;
//! callers fetch sensors and readings and pass them in.

pub mod bucketing;
pub mod chart;
pub mod error;
pub mod granularity;
pub mod labels;
pub mod pagination;
pub mod readings;
pub mod sensor_kinds;
pub mod threshold_validation;
pub mod thresholds;
pub mod types;

pub use bucketing::{aggregate, bucket_start};
pub use error::CoreError;
pub use granularity::Granularity;
pub use labels::format_label;
pub use pagination::{page_window, PageItem};
pub use readings::{AggregatedPoint, Reading};
pub use sensor_kinds::{SensorKind, SensorProfile};
pub use thresholds::{classify, match_band, ThresholdBand, ThresholdColor, ThresholdSet};
