//! Response DTOs for service operations
//!
//! All response DTOs implement `Serialize` for JSON output. Document
//! IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One roster member as presented to operators
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub default_status: String,
    pub created_at: DateTime<Utc>,
}

/// One archived session (without its snapshot children)
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveEntryResponse {
    pub id: String,
    pub title: String,
    pub location: String,
    pub day_key: String,
    pub created_at: DateTime<Utc>,
}

/// One frozen attendance record inside an archive entry
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub status: String,
    pub recorded_at: DateTime<Utc>,
}

/// Per-status counts for one archive entry
#[derive(Debug, Clone, Serialize)]
pub struct TallyResponse {
    pub present: usize,
    pub excused: usize,
    pub sick: usize,
    pub unexcused: usize,
    pub total: usize,
}

/// Quota state for one calendar day
#[derive(Debug, Clone, Serialize)]
pub struct QuotaResponse {
    pub day_key: String,
    pub used: usize,
    pub limit: usize,
    pub remaining: usize,
}
