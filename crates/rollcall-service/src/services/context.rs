//! Service context - dependency container for services
//!
//! Holds the repositories needed by services.

use std::sync::Arc;

use rollcall_core::traits::{MemberRepository, SessionRepository};
use rollcall_store::{MemoryStore, StoreMemberRepository, StoreSessionRepository};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all
/// services. It provides access to the member and session repositories
/// behind their trait objects, so tests and alternative backends can
/// swap implementations freely.
#[derive(Clone)]
pub struct ServiceContext {
    member_repo: Arc<dyn MemberRepository>,
    session_repo: Arc<dyn SessionRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        session_repo: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            member_repo,
            session_repo,
        }
    }

    /// Context backed by a fresh in-process document store
    ///
    /// Both repositories share one store, so sessions and their
    /// snapshot sub-collections live in the same engine instance.
    pub fn in_memory() -> Self {
        let store = MemoryStore::new();
        Self::new(
            Arc::new(StoreMemberRepository::new(store.clone())),
            Arc::new(StoreSessionRepository::new(store)),
        )
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the session repository
    pub fn session_repo(&self) -> &dyn SessionRepository {
        self.session_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("member_repo", &"dyn MemberRepository")
            .field("session_repo", &"dyn SessionRepository")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
pub struct ServiceContextBuilder {
    member_repo: Option<Arc<dyn MemberRepository>>,
    session_repo: Option<Arc<dyn SessionRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            member_repo: None,
            session_repo: None,
        }
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn session_repo(mut self, repo: Arc<dyn SessionRepository>) -> Self {
        self.session_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.member_repo
                .ok_or_else(|| super::error::ServiceError::validation("member_repo is required"))?,
            self.session_repo
                .ok_or_else(|| super::error::ServiceError::validation("session_repo is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
