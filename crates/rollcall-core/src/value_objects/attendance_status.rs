//! Attendance status - the canonical per-member status within a session
//!
//! Stored data historically used Indonesian labels and three different
//! spellings for the "absent without notice" status. All parsing is
//! centralized here so the rest of the system only ever sees the four
//! canonical variants.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical attendance status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttendanceStatus {
    /// Attended the session
    #[default]
    Present,
    /// Absent with permission
    Excused,
    /// Absent due to illness
    Sick,
    /// Absent without notice
    Unexcused,
}

impl AttendanceStatus {
    /// All variants, in display order
    pub const ALL: [Self; 4] = [Self::Present, Self::Excused, Self::Sick, Self::Unexcused];

    /// Canonical lowercase string form
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Excused => "excused",
            Self::Sick => "sick",
            Self::Unexcused => "unexcused",
        }
    }

    /// Parse a status string, accepting legacy spellings
    ///
    /// The source data wrote "Hadir"/"Izin"/"Sakit" for the first three
    /// variants and any of "Alfa", "Alpha", "Tanpa Keterangan" or
    /// "no-status" for the last one. Matching is case-insensitive and
    /// ignores surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, StatusParseError> {
        match s.trim().to_lowercase().as_str() {
            "present" | "hadir" => Ok(Self::Present),
            "excused" | "izin" => Ok(Self::Excused),
            "sick" | "sakit" => Ok(Self::Sick),
            "unexcused" | "alfa" | "alpha" | "tanpa keterangan" | "no-status" => {
                Ok(Self::Unexcused)
            }
            _ => Err(StatusParseError::Unknown(s.trim().to_string())),
        }
    }
}

/// Error when parsing an AttendanceStatus from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusParseError {
    #[error("unknown attendance status: {0:?}")]
    Unknown(String),
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttendanceStatus::parse(s)
    }
}

impl Serialize for AttendanceStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AttendanceStatus::parse(&s).map_err(serde::de::Error::custom)
    }
}
