//! Archive entry entity - one immutable session record

use chrono::{DateTime, Utc};

use crate::entities::member::title_case;
use crate::value_objects::{DayKey, DocumentId};

/// One archived session: "who attended what, when"
///
/// Immutable once created. Owns a sub-collection of attendance
/// snapshots, one per roster member at archival time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub id: DocumentId,
    /// Session title, title-cased at archival
    pub title: String,
    /// Where the session took place, title-cased at archival
    pub location: String,
    /// Calendar-day key persisted verbatim for quota counting
    pub day_key: DayKey,
    /// Server-assigned creation timestamp
    pub created_at: DateTime<Utc>,
}

impl ArchiveEntry {
    /// Maximum number of archive entries allowed per calendar day
    pub const DAILY_LIMIT: usize = 2;
}

/// Draft archive entry carrying everything but the server-assigned fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub title: String,
    pub location: String,
    pub day_key: DayKey,
}

impl NewSession {
    /// Build a draft from operator input, title-casing title and location
    pub fn new(title: &str, location: &str, day_key: DayKey) -> Self {
        Self {
            title: title_case(title),
            location: title_case(location),
            day_key,
        }
    }

    /// Materialize into a full entity with server-assigned fields
    pub fn into_entry(self, id: DocumentId, created_at: DateTime<Utc>) -> ArchiveEntry {
        ArchiveEntry {
            id,
            title: self.title,
            location: self.location,
            day_key: self.day_key,
            created_at,
        }
    }
}
