//! Day key - the calendar-day string used for quota counting
//!
//! A `DayKey` is a validated `YYYY-MM-DD` string. It is computed by the
//! caller once (at view load) and persisted verbatim on each archive
//! entry; the engine never re-derives "today" on its own.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Calendar-day key in `YYYY-MM-DD` form
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DayKey(String);

impl DayKey {
    /// Parse and validate a `YYYY-MM-DD` string
    pub fn parse(s: &str) -> Result<Self, DayKeyParseError> {
        let trimmed = s.trim();
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(|_| Self(trimmed.to_string()))
            .map_err(|_| DayKeyParseError::InvalidFormat(trimmed.to_string()))
    }

    /// Key for a specific calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    /// Key for the current local calendar date
    ///
    /// Callers capture this once per view; a session spanning midnight
    /// keeps the stale key until the view is reloaded.
    pub fn today() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// The underlying string form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error when parsing a DayKey from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DayKeyParseError {
    #[error("invalid day key (expected YYYY-MM-DD): {0:?}")]
    InvalidFormat(String),
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for DayKey {
    type Err = DayKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayKey::parse(s)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DayKey::parse(&s).map_err(serde::de::Error::custom)
    }
}
