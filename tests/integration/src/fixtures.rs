//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use rollcall_core::{AttendanceStatus, DayKey, MemberRole};
use rollcall_service::dto::{NewMemberRequest, NewSessionRequest};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A plain member registration with a unique name
pub fn member_request() -> NewMemberRequest {
    let suffix = unique_suffix();
    NewMemberRequest {
        name: format!("Warga {suffix}"),
        role: MemberRole::Member,
        category: None,
        default_status: AttendanceStatus::Present,
    }
}

/// A member registration with a fixed name and default status
pub fn member_named(name: &str, default_status: AttendanceStatus) -> NewMemberRequest {
    NewMemberRequest {
        name: name.to_string(),
        role: MemberRole::Member,
        category: None,
        default_status,
    }
}

/// An officer registration with the given category
pub fn officer_named(name: &str, category: &str) -> NewMemberRequest {
    NewMemberRequest {
        name: name.to_string(),
        role: MemberRole::Officer,
        category: Some(category.to_string()),
        default_status: AttendanceStatus::Present,
    }
}

/// A session archival request with a unique title
pub fn session_request(day: &str) -> NewSessionRequest {
    let suffix = unique_suffix();
    NewSessionRequest {
        title: format!("Rapat {suffix}"),
        location: "Balai Warga".to_string(),
        day_key: DayKey::parse(day).expect("valid day key"),
    }
}

/// A session archival request with a fixed title
pub fn session_titled(title: &str, day: &str) -> NewSessionRequest {
    NewSessionRequest {
        title: title.to_string(),
        location: "Balai Warga".to_string(),
        day_key: DayKey::parse(day).expect("valid day key"),
    }
}
