//! Member document model

use serde::{Deserialize, Serialize};

use rollcall_core::{AttendanceStatus, MemberRole};

/// Body of a document in the `members` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDoc {
    pub name: String,
    /// Lowercased, whitespace-collapsed name; the duplicate-check key
    pub normalized_name: String,
    pub role: MemberRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub default_status: AttendanceStatus,
}
