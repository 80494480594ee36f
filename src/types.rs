use crate::error::Result;
use chrono::NaiveDateTime;

/// Raw sensor reading as returned by the live sensor listing
pub type RawRecord = serde_json::Value;

/// Latitude/longitude pair, carried through from the feed unchanged
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// A reading ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    /// PM2.5 concentration as reported by the sensor
    pub concentration: f64,
    pub position: Position,
    /// Civil time from the feed; no timezone is attached or converted
    pub timestamp: NaiveDateTime,
    pub severity_color: &'static str,
}

/// Anything that can supply a batch of raw sensor readings
#[async_trait::async_trait]
pub trait SensorSource: Send + Sync {
    /// Identifier used in logs and metrics labels
    fn source_name(&self) -> &str;

    /// Fetch every reading currently available from this source
    async fn fetch_records(&self) -> Result<Vec<RawRecord>>;
}
