//! Parsing of the sensor feed's `time` field.
//!
//! The feed reports times as `"<Weekday> <Day> <Mon> <Year> <HH:MM:SS> <Zone>"`,
//! e.g. `"Mon 15 Mar 2021 08:30:45 UTC"`. Only the day, month, year and clock
//! tokens are read. The zone token is ignored and no conversion is applied, so
//! the result is a naive calendar timestamp carrying the civil fields verbatim.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Month abbreviations as they appear in the feed, in calendar order.
pub const MONTHS: [(&str, u32); 12] = [
    ("Jan", 1),
    ("Feb", 2),
    ("Mar", 3),
    ("Apr", 4),
    ("May", 5),
    ("Jun", 6),
    ("Jul", 7),
    ("Aug", 8),
    ("Sep", 9),
    ("Oct", 10),
    ("Nov", 11),
    ("Dec", 12),
];

/// Weekday, day, month, year and clock must all be present.
const REQUIRED_TOKENS: usize = 5;

/// Years outside this range are rejected even where chrono could represent them.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("expected at least 5 space-separated tokens, found {found} in {input:?}")]
    TooFewTokens { found: usize, input: String },

    #[error("unknown month abbreviation {0:?}")]
    UnknownMonth(String),

    #[error("invalid day of month {0:?}")]
    InvalidDay(String),

    #[error("invalid year {0:?}")]
    InvalidYear(String),

    #[error("invalid time of day {0:?}, expected HH:MM:SS")]
    InvalidTime(String),

    #[error("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02} is not a valid calendar instant")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    },
}

/// Look up a month abbreviation (case-sensitive).
pub fn month_number(abbrev: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find(|(name, _)| *name == abbrev)
        .map(|(_, number)| *number)
}

/// Parse a feed timestamp such as `"Mon 15 Mar 2021 08:30:45 UTC"`.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampError> {
    let tokens: Vec<&str> = raw.split(' ').collect();
    if tokens.len() < REQUIRED_TOKENS {
        return Err(TimestampError::TooFewTokens {
            found: tokens.len(),
            input: raw.to_string(),
        });
    }

    let day: u32 = tokens[1]
        .parse()
        .map_err(|_| TimestampError::InvalidDay(tokens[1].to_string()))?;
    let month = month_number(tokens[2])
        .ok_or_else(|| TimestampError::UnknownMonth(tokens[2].to_string()))?;
    let year = tokens[3]
        .parse::<i32>()
        .ok()
        .filter(|y| YEAR_RANGE.contains(y))
        .ok_or_else(|| TimestampError::InvalidYear(tokens[3].to_string()))?;
    let (hour, minute, second) = parse_clock(tokens[4])?;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or(TimestampError::InvalidDate {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
}

fn parse_clock(clock: &str) -> Result<(u32, u32, u32), TimestampError> {
    let invalid = || TimestampError::InvalidTime(clock.to_string());

    let parts = clock
        .split(':')
        .map(|part| part.parse::<u32>().map_err(|_| invalid()))
        .collect::<Result<Vec<u32>, _>>()?;

    match parts.as_slice() {
        [hour, minute, second] => Ok((*hour, *minute, *second)),
        _ => Err(invalid()),
    }
}
