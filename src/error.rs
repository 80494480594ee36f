use crate::timestamp::TimestampError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Timestamp parse failed: {0}")]
    Timestamp(#[from] TimestampError),

    #[error("Sensor request to {url} failed with status {status}")]
    Transport { status: u16, url: String },

    #[error("Metrics recorder error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("Record {index} could not be normalized")]
    Record {
        index: usize,
        #[source]
        source: Box<ScraperError>,
    },
}

pub type Result<T> = std::result::Result<T, ScraperError>;
