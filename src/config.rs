use crate::constants::{DEFAULT_SENSOR_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::error::{Result, ScraperError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    pub timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SENSOR_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    /// Read config from `path`. With `required == false` a missing file yields defaults.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(path).map_err(|e| {
            ScraperError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.source.url.trim().is_empty() {
            return Err(ScraperError::Config("source.url must not be empty".into()));
        }
        if self.source.timeout_seconds == 0 {
            return Err(ScraperError::Config(
                "source.timeout_seconds must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
