//! Report assembly: the latest-reading card, the chart series, and one page
//! of the reading table, all computed from a single export.

use std::fmt::Display;

use chrono::TimeZone;
use serde::Serialize;

use pondwatch_core::chart::{build_series, ChartPoint};
use pondwatch_core::pagination::{clamp_page, page_count, page_slice};
use pondwatch_core::readings::{in_window, valid_only};
use pondwatch_core::threshold_validation::validate_bands;
use pondwatch_core::thresholds::{status_label, BadgeStyle, STATUS_UNKNOWN};
use pondwatch_core::types::Timestamp;
use pondwatch_core::{
    classify, match_band, page_window, Granularity, PageItem, Reading, SensorKind, SensorProfile,
};

use crate::config::ReportConfig;
use crate::export::SensorExport;

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub sensor_id: String,
    pub title: &'static str,
    pub kind: SensorKind,
    pub unit: &'static str,
    /// Start of the reported window, when one was applied.
    pub window_start: Option<Timestamp>,
    /// `None` when the sensor has no valid readings.
    pub latest: Option<LatestStatus>,
    pub chart: ChartSection,
    pub table: TablePage,
}

/// Card view of the newest reading. Uses exact band matching, so a value in
/// a gap between bands shows as "Unknown".
#[derive(Debug, Clone, Serialize)]
pub struct LatestStatus {
    pub value: f64,
    pub display_value: String,
    pub recorded_at: Timestamp,
    pub status: String,
    pub status_label: String,
    pub style: BadgeStyle,
    /// Range tooltip for the matched band, if any.
    pub range: Option<String>,
    pub is_ideal: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSection {
    pub granularity: Granularity,
    pub description: &'static str,
    /// Empty when there is not enough data to draw a chart.
    pub points: Vec<ChartPoint>,
}

/// Dense table view. Uses nearest-band classification, so every row has a
/// band name whenever bands are configured.
#[derive(Debug, Clone, Serialize)]
pub struct TablePage {
    pub page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    pub pages: Vec<PageItem>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub recorded_at: Timestamp,
    pub value: f64,
    pub display_value: String,
    pub status: String,
    pub status_label: String,
    /// Badge colors of the band containing the value. `None` when the status
    /// came from the nearest-band fallback.
    pub style: Option<BadgeStyle>,
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Resolve which band set to classify with: explicit config first, then the
/// sensor's own `type`, then temperature.
pub fn resolve_kind(export: &SensorExport, config: &ReportConfig) -> SensorKind {
    if let Some(kind) = config.sensor_kind {
        return kind;
    }
    match export.sensor.kind.as_deref().map(str::parse::<SensorKind>) {
        Some(Ok(kind)) => kind,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Unrecognized sensor type, defaulting to temperature");
            SensorKind::Temperature
        }
        None => SensorKind::Temperature,
    }
}

/// Resolve the chart granularity: explicit config first, then the sensor's
/// `aggregation_interval` (unknown values mean daily), then daily.
pub fn resolve_granularity(export: &SensorExport, config: &ReportConfig) -> Granularity {
    config
        .granularity
        .or_else(|| {
            export
                .sensor
                .aggregation_interval
                .as_deref()
                .map(Granularity::from_interval)
        })
        .unwrap_or(Granularity::Daily)
}

/// Build a report with chart labels rendered in `tz`.
pub fn build_report<Tz>(export: &SensorExport, config: &ReportConfig, tz: &Tz) -> Report
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let kind = resolve_kind(export, config);
    let granularity = resolve_granularity(export, config);
    let profile = SensorProfile::for_kind(kind);

    if let Err(e) = validate_bands(export.sensor.thresholds.bands(kind)) {
        tracing::warn!(error = %e, kind = %kind, "Sensor has invalid threshold bands");
    }

    let mut readings = valid_only(&export.readings);
    let dropped = export.readings.len() - readings.len();
    if dropped > 0 {
        tracing::debug!(dropped, "Skipped invalid readings");
    }

    let mut window_start = None;
    if let Some(end) = config.window_end {
        let start = granularity.window_start(end);
        readings = in_window(&readings, start, end);
        window_start = Some(start);
    }

    let latest = latest_status(&readings, export, kind, &profile);

    let chart = ChartSection {
        granularity,
        description: granularity.description(),
        points: build_series(&readings, granularity, tz),
    };

    let table = table_page(readings, export, kind, &profile, config);

    tracing::info!(
        sensor_id = %export.sensor.id,
        kind = %kind,
        chart_points = chart.points.len(),
        total_rows = table.total_rows,
        "Built report",
    );

    Report {
        sensor_id: export.sensor.id.clone(),
        title: kind.display_name(),
        kind,
        unit: profile.unit,
        window_start,
        latest,
        chart,
        table,
    }
}

fn latest_status(
    readings: &[Reading],
    export: &SensorExport,
    kind: SensorKind,
    profile: &SensorProfile,
) -> Option<LatestStatus> {
    let latest = readings.iter().max_by_key(|r| r.recorded_at)?;
    let band = export.sensor.thresholds.match_band(kind, latest.value);
    let status = band.map_or(STATUS_UNKNOWN, |b| b.name.as_str());

    Some(LatestStatus {
        value: latest.value,
        display_value: profile.format_value(latest.value),
        recorded_at: latest.recorded_at,
        status: status.to_string(),
        status_label: status_label(status),
        style: band.map(|b| b.color).unwrap_or_default().style(),
        range: band.map(|b| b.describe(profile.unit)),
        is_ideal: profile.is_ideal(latest.value),
    })
}

fn table_page(
    mut readings: Vec<Reading>,
    export: &SensorExport,
    kind: SensorKind,
    profile: &SensorProfile,
    config: &ReportConfig,
) -> TablePage {
    readings.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

    let bands = export.sensor.thresholds.bands(kind);
    let total_rows = readings.len();
    let total_pages = page_count(total_rows, config.page_size);
    let page = clamp_page(config.page, total_pages);

    let rows = page_slice(&readings, page, config.page_size)
        .iter()
        .map(|r| {
            let status = classify(r.value, bands);
            TableRow {
                recorded_at: r.recorded_at,
                value: r.value,
                display_value: profile.format_value(r.value),
                status: status.to_string(),
                status_label: status_label(status),
                style: match_band(r.value, bands).map(|b| b.color.style()),
            }
        })
        .collect();

    TablePage {
        page,
        total_pages,
        total_rows,
        pages: page_window(total_pages, page),
        rows,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::Utc;

    use super::*;
    use crate::export::parse_export;

    fn config() -> ReportConfig {
        ReportConfig {
            export_path: PathBuf::from("unused.json"),
            sensor_kind: None,
            granularity: None,
            window_end: None,
            page: 1,
            page_size: 10,
        }
    }

    #[test]
    fn kind_prefers_config_then_sensor_type() {
        let export = parse_export(r#"{ "sensor": { "id": "s", "type": "ph" } }"#).unwrap();
        assert_eq!(resolve_kind(&export, &config()), SensorKind::Ph);

        let mut cfg = config();
        cfg.sensor_kind = Some(SensorKind::Turbidity);
        assert_eq!(resolve_kind(&export, &cfg), SensorKind::Turbidity);
    }

    #[test]
    fn granularity_prefers_config_then_sensor_interval() {
        let export = parse_export(
            r#"{ "sensor": { "id": "s", "aggregation_interval": "monthly" } }"#,
        )
        .unwrap();
        assert_eq!(resolve_granularity(&export, &config()), Granularity::Monthly);

        let mut cfg = config();
        cfg.granularity = Some(Granularity::Hourly);
        assert_eq!(resolve_granularity(&export, &cfg), Granularity::Hourly);
    }

    #[test]
    fn unknown_sensor_interval_means_daily() {
        let export = parse_export(
            r#"{ "sensor": { "id": "s", "aggregation_interval": "sometimes" } }"#,
        )
        .unwrap();
        assert_eq!(resolve_granularity(&export, &config()), Granularity::Daily);
    }

    #[test]
    fn unknown_sensor_type_defaults_to_temperature() {
        let export = parse_export(r#"{ "sensor": { "id": "s", "type": "salinity" } }"#).unwrap();
        assert_eq!(resolve_kind(&export, &config()), SensorKind::Temperature);
    }

    #[test]
    fn empty_export_has_no_latest_and_no_pages() {
        let export = parse_export(r#"{ "sensor": { "id": "s" } }"#).unwrap();
        let report = build_report(&export, &config(), &Utc);
        assert!(report.latest.is_none());
        assert!(report.chart.points.is_empty());
        assert_eq!(report.table.total_pages, 0);
        assert_eq!(report.table.page, 1);
        assert!(report.table.pages.is_empty());
        assert!(report.table.rows.is_empty());
    }
}
