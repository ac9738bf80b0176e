//! Request DTOs for service operations
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

use rollcall_core::{AttendanceStatus, DayKey, MemberRole};

/// Register a new roster member
///
/// `role` and `default_status` fall back to `member` / `present` when
/// omitted; `category` is only meaningful when `role` is officer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMemberRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    pub role: MemberRole,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    #[serde(default)]
    pub default_status: AttendanceStatus,
}

/// Archive the current roster as one immutable session
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewSessionRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1-150 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 150, message = "Location must be 1-150 characters"))]
    pub location: String,

    /// Calendar day the quota is counted against
    pub day_key: DayKey,
}
