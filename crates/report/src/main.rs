//! `pondwatch-report` -- prints a dashboard report for one sensor export.
//!
//! Reads a JSON export (sensor row + readings), classifies the readings
//! against the sensor's threshold bands, buckets them for charting, and
//! writes a JSON report to stdout. Logs go to stderr.
//!
//! # Environment variables
//!
//! | Variable                | Required | Default         | Description                          |
//! |-------------------------|----------|-----------------|--------------------------------------|
//! | `PONDWATCH_EXPORT`      | yes      | --              | Path to the sensor export JSON       |
//! | `PONDWATCH_SENSOR_KIND` | no       | sensor `type`   | Band set to classify with            |
//! | `PONDWATCH_GRANULARITY` | no       | sensor interval | Chart bucket size                    |
//! | `PONDWATCH_WINDOW_END`  | no       | --              | RFC 3339 end of the look-back window |
//! | `PONDWATCH_PAGE`        | no       | `1`             | Table page to print                  |
//! | `PONDWATCH_PAGE_SIZE`   | no       | `10`            | Rows per table page                  |

use chrono::Local;
use pondwatch_report::config::ReportConfig;
use pondwatch_report::export::load_export;
use pondwatch_report::report::build_report;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pondwatch_report=info,pondwatch_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        tracing::error!("Report failed: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = ReportConfig::from_env()?;

    tracing::info!(
        export = %config.export_path.display(),
        granularity = ?config.granularity,
        page = config.page,
        "Starting pondwatch-report",
    );

    let export = load_export(&config.export_path)?;
    let report = build_report(&export, &config, &Local);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
