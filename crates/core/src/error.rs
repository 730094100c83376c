#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown granularity: {0}")]
    UnknownGranularity(String),

    #[error("Unknown sensor kind: {0}")]
    UnknownSensorKind(String),
}
