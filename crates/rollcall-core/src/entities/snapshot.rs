//! Attendance snapshot entity - one member's frozen status within a session

use chrono::{DateTime, Utc};

use crate::entities::Member;
use crate::value_objects::{AttendanceStatus, DocumentId};

/// A frozen copy of one member's attendance at archival time
///
/// Owned exclusively by its parent archive entry. The snapshot never
/// shares identity with the live member it was copied from: editing or
/// deleting the member afterwards does not touch the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSnapshot {
    /// Equals the source member's id purely as a correlation key;
    /// carries no ownership meaning
    pub id: DocumentId,
    pub name: String,
    pub category: Option<String>,
    pub status: AttendanceStatus,
    /// Server-assigned time the snapshot was written
    pub recorded_at: DateTime<Utc>,
}

/// Draft snapshot carrying everything but the server-assigned timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnapshot {
    pub id: DocumentId,
    pub name: String,
    pub category: Option<String>,
    pub status: AttendanceStatus,
}

impl NewSnapshot {
    /// Copy a member's current attributes verbatim
    pub fn of(member: &Member) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            category: member.category.clone(),
            status: member.default_status,
        }
    }

    /// Materialize into a full entity with the server-assigned timestamp
    pub fn into_snapshot(self, recorded_at: DateTime<Utc>) -> AttendanceSnapshot {
        AttendanceSnapshot {
            id: self.id,
            name: self.name,
            category: self.category,
            status: self.status,
            recorded_at,
        }
    }
}
