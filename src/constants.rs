/// Live sensor listing queried when no URL is configured
pub const DEFAULT_SENSOR_URL: &str = "https://www.aqandu.org/api/liveSensors?sensorSource=all";

/// Request timeout used when the config file does not set one
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "aq_scraper.toml";

// Field names in each raw sensor reading
pub const FIELD_PM2_5: &str = "PM2_5";
pub const FIELD_LATITUDE: &str = "Latitude";
pub const FIELD_LONGITUDE: &str = "Longitude";
pub const FIELD_TIME: &str = "time";
