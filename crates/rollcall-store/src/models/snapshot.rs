//! Attendance snapshot document model

use serde::{Deserialize, Serialize};

use rollcall_core::AttendanceStatus;

/// Body of a document in a `sessions/{id}/attendance` sub-collection
///
/// Legacy status spellings in stored data are normalized by the
/// `AttendanceStatus` deserializer, so a decoded body always carries a
/// canonical status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDoc {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub status: AttendanceStatus,
}
