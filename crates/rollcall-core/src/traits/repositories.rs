//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from a document store; the
//! storage layer provides the implementation. The contract is kept to
//! insert/delete-by-id, equality-filtered reads, and live subscriptions
//! so it stays portable to any document or relational backend.

use async_trait::async_trait;

use crate::entities::{ArchiveEntry, AttendanceSnapshot, Member, NewMember, NewSession, NewSnapshot};
use crate::error::DomainError;
use crate::value_objects::{DayKey, DocumentId};
use crate::watch::{ArchiveWatch, RosterWatch, SnapshotWatch};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert a draft member; the store assigns id and creation timestamp
    async fn insert(&self, draft: NewMember) -> RepoResult<Member>;

    /// Find member by ID
    async fn find_by_id(&self, id: DocumentId) -> RepoResult<Option<Member>>;

    /// Find a live member by normalized name (the duplicate check)
    async fn find_by_normalized_name(&self, normalized: &str) -> RepoResult<Option<Member>>;

    /// List all members; source order carries no meaning
    async fn list(&self) -> RepoResult<Vec<Member>>;

    /// Delete a member document; no error if already gone
    async fn delete(&self, id: DocumentId) -> RepoResult<()>;

    /// Subscribe to the full member collection
    async fn watch(&self) -> RepoResult<RosterWatch>;
}

// ============================================================================
// Session Repository
// ============================================================================

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert a draft archive entry; the store assigns id and timestamp
    async fn insert(&self, draft: NewSession) -> RepoResult<ArchiveEntry>;

    /// Find entry by ID
    async fn find_by_id(&self, id: DocumentId) -> RepoResult<Option<ArchiveEntry>>;

    /// List all entries, newest `created_at` first; ties broken by
    /// insertion order, newest insertion first
    async fn list(&self) -> RepoResult<Vec<ArchiveEntry>>;

    /// Count entries whose day key equals the given key
    async fn count_by_day(&self, day_key: &DayKey) -> RepoResult<usize>;

    /// Write one snapshot child under an entry, keyed by the draft's id
    async fn insert_snapshot(
        &self,
        entry_id: DocumentId,
        draft: NewSnapshot,
    ) -> RepoResult<AttendanceSnapshot>;

    /// List an entry's snapshot children; empty for unknown entries
    async fn snapshots(&self, entry_id: DocumentId) -> RepoResult<Vec<AttendanceSnapshot>>;

    /// Delete one snapshot child; no error if already gone
    async fn delete_snapshot(
        &self,
        entry_id: DocumentId,
        snapshot_id: DocumentId,
    ) -> RepoResult<()>;

    /// Delete the entry document itself; no error if already gone.
    /// Children are NOT deleted here - cascading is the caller's job.
    async fn delete(&self, id: DocumentId) -> RepoResult<()>;

    /// Subscribe to the full entry list, newest first
    async fn watch(&self) -> RepoResult<ArchiveWatch>;

    /// Subscribe to one entry's snapshot children
    async fn watch_snapshots(&self, entry_id: DocumentId) -> RepoResult<SnapshotWatch>;
}
