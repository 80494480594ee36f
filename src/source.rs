use crate::config::SourceConfig;
use crate::error::{Result, ScraperError};
use crate::types::{RawRecord, SensorSource};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Fetches the live sensor listing over HTTP.
pub struct HttpSensorSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSensorSource {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl SensorSource for HttpSensorSource {
    fn source_name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_records(&self) -> Result<Vec<RawRecord>> {
        debug!("Requesting live sensor listing");
        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::Transport {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = resp.bytes().await?;
        let records = parse_listing(&body)?;
        info!("Fetched {} sensor readings", records.len());
        Ok(records)
    }
}

/// Replays a sensor listing previously saved to disk.
pub struct FileSensorSource {
    path: PathBuf,
}

impl FileSensorSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl SensorSource for FileSensorSource {
    fn source_name(&self) -> &str {
        "file"
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_records(&self) -> Result<Vec<RawRecord>> {
        let body = tokio::fs::read(&self.path).await?;
        let records = parse_listing(&body)?;
        info!("Loaded {} sensor readings", records.len());
        Ok(records)
    }
}

/// Decode a listing body. The top level must be a JSON array.
pub fn parse_listing(body: &[u8]) -> Result<Vec<RawRecord>> {
    Ok(serde_json::from_slice(body)?)
}
