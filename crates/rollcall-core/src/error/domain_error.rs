//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::session::ArchiveEntry;
use crate::entities::MemberRole;

/// Domain layer errors
///
/// Every state-changing operation either completes or reports one of
/// these; nothing here is fatal to the process and every case is
/// recoverable by retrying the user action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Bad or missing input, surfaced to the operator without retry
    #[error("Validation error: {0}")]
    Validation(String),

    /// Another live member already carries the same normalized name.
    /// Carries the conflicting member's role and category for display.
    #[error("Name {name:?} is already registered as {role}")]
    DuplicateName {
        name: String,
        role: MemberRole,
        category: Option<String>,
    },

    /// The daily archive quota is spent for the given calendar day
    #[error("Daily archive limit reached: {existing} of {limit} used")]
    QuotaExceeded { limit: usize, existing: usize },

    /// Backend failure, including corrupt stored documents; never
    /// retried automatically
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Build a validation error from any displayable message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a quota error for the configured daily limit
    pub fn quota_exceeded(existing: usize) -> Self {
        Self::QuotaExceeded {
            limit: ArchiveEntry::DAILY_LIMIT,
            existing,
        }
    }

    /// Get an error code string for operator-facing surfaces
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::DuplicateName { .. } => "DUPLICATE_NAME",
            Self::QuotaExceeded { .. } => "QUOTA_EXCEEDED",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a duplicate-name conflict
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateName { .. })
    }

    /// Check if this is a quota violation
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }

    /// Check if this is a storage failure
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Remaining quota units implied by a quota error, floored at 0
    pub fn remaining(&self) -> Option<usize> {
        match self {
            Self::QuotaExceeded { limit, existing } => Some(limit.saturating_sub(*existing)),
            _ => None,
        }
    }
}
