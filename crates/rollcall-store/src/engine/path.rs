//! Collection paths - the persisted layout of the store
//!
//! Three collections exist: the member roster, the archived sessions,
//! and one attendance sub-collection per session.

use std::fmt;

use rollcall_core::DocumentId;

/// Path to a collection or sub-collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionPath {
    /// The member roster
    Members,
    /// Archived session entries
    Sessions,
    /// Attendance snapshots under one session entry
    Attendance(DocumentId),
}

impl CollectionPath {
    /// The flat string key identifying the collection inside the engine
    pub fn key(&self) -> String {
        match self {
            Self::Members => "members".to_string(),
            Self::Sessions => "sessions".to_string(),
            Self::Attendance(entry_id) => format!("sessions/{entry_id}/attendance"),
        }
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}
