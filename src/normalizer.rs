use crate::constants::{FIELD_LATITUDE, FIELD_LONGITUDE, FIELD_PM2_5, FIELD_TIME};
use crate::error::{Result, ScraperError};
use crate::severity::classify;
use crate::timestamp::parse_timestamp;
use crate::types::{NormalizedRecord, Position, RawRecord};
use serde_json::Value;

/// Turn one raw sensor reading into a display-ready record.
///
/// All four fields are required. A record that fails any check produces no
/// partial output.
pub fn normalize(raw: &RawRecord) -> Result<NormalizedRecord> {
    let concentration = number_field(raw, FIELD_PM2_5)?;
    let latitude = number_field(raw, FIELD_LATITUDE)?;
    let longitude = number_field(raw, FIELD_LONGITUDE)?;
    let time = string_field(raw, FIELD_TIME)?;

    Ok(NormalizedRecord {
        concentration,
        position: Position {
            latitude,
            longitude,
        },
        timestamp: parse_timestamp(time)?,
        severity_color: classify(concentration),
    })
}

/// Normalize a batch in input order, stopping at the first bad record.
pub fn normalize_all(raws: &[RawRecord]) -> Result<Vec<NormalizedRecord>> {
    raws.iter()
        .enumerate()
        .map(|(index, raw)| {
            normalize(raw).map_err(|e| ScraperError::Record {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

fn field<'a>(raw: &'a RawRecord, name: &str) -> Result<&'a Value> {
    raw.get(name)
        .ok_or_else(|| ScraperError::MissingField(name.to_string()))
}

fn number_field(raw: &RawRecord, name: &str) -> Result<f64> {
    let value = field(raw, name)?;
    value.as_f64().ok_or_else(|| ScraperError::InvalidField {
        field: name.to_string(),
        reason: format!("expected a number, got {value}"),
    })
}

fn string_field<'a>(raw: &'a RawRecord, name: &str) -> Result<&'a str> {
    let value = field(raw, name)?;
    value.as_str().ok_or_else(|| ScraperError::InvalidField {
        field: name.to_string(),
        reason: format!("expected a string, got {value}"),
    })
}
