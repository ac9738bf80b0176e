//! Error handling utilities for repositories

use rollcall_core::DomainError;

use crate::engine::StoreError;

/// Convert an engine error to a DomainError at the repository boundary
pub fn map_store_error(e: StoreError) -> DomainError {
    DomainError::Storage(e.to_string())
}
