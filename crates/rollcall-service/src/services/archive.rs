//! Archive service
//!
//! Freezes the current roster into immutable session records and
//! manages the archive: listing, snapshot reads, cascading delete,
//! and live subscriptions.

use tracing::{info, instrument, warn};
use validator::Validate;

use rollcall_core::{
    ArchiveEntry, ArchiveWatch, AttendanceSnapshot, DocumentId, DomainError, NewSession,
    NewSnapshot, SnapshotWatch,
};

use crate::dto::NewSessionRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::quota::QuotaService;

/// Archive service
pub struct ArchiveService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ArchiveService<'a> {
    /// Create a new ArchiveService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Archive the current roster as one immutable session
    ///
    /// Preconditions are checked in order, first failure wins: blank
    /// title or location, empty roster, then the daily quota. The
    /// entry and its per-member snapshots are written as independent
    /// inserts; a failure mid-way leaves the entry with a partial
    /// snapshot set rather than rolling anything back.
    #[instrument(skip(self, request), fields(day_key = %request.day_key))]
    pub async fn archive_session(&self, request: NewSessionRequest) -> ServiceResult<ArchiveEntry> {
        request.validate()?;

        if request.title.trim().is_empty() {
            return Err(DomainError::validation("Title must not be empty").into());
        }
        if request.location.trim().is_empty() {
            return Err(DomainError::validation("Location must not be empty").into());
        }

        let members = self.ctx.member_repo().list().await?;
        if members.is_empty() {
            return Err(DomainError::validation("Nothing to archive: the roster is empty").into());
        }

        QuotaService::new(self.ctx)
            .ensure_capacity(&request.day_key)
            .await?;

        let draft = NewSession::new(&request.title, &request.location, request.day_key);
        let entry = self.ctx.session_repo().insert(draft).await?;

        for member in &members {
            self.ctx
                .session_repo()
                .insert_snapshot(entry.id, NewSnapshot::of(member))
                .await?;
        }

        info!(
            entry_id = %entry.id,
            title = %entry.title,
            day_key = %entry.day_key,
            members = members.len(),
            "Session archived"
        );

        Ok(entry)
    }

    /// All archive entries, newest first
    #[instrument(skip(self))]
    pub async fn list_archives(&self) -> ServiceResult<Vec<ArchiveEntry>> {
        Ok(self.ctx.session_repo().list().await?)
    }

    /// The most recently archived entry, if any
    #[instrument(skip(self))]
    pub async fn latest(&self) -> ServiceResult<Option<ArchiveEntry>> {
        Ok(self.ctx.session_repo().list().await?.into_iter().next())
    }

    /// Find one archive entry by id
    #[instrument(skip(self))]
    pub async fn get_archive(&self, id: DocumentId) -> ServiceResult<Option<ArchiveEntry>> {
        Ok(self.ctx.session_repo().find_by_id(id).await?)
    }

    /// The frozen attendance records of one entry
    #[instrument(skip(self))]
    pub async fn snapshots(&self, entry_id: DocumentId) -> ServiceResult<Vec<AttendanceSnapshot>> {
        Ok(self.ctx.session_repo().snapshots(entry_id).await?)
    }

    /// Delete an archive entry and all of its snapshots
    ///
    /// Children first, then the parent, each as its own delete; a
    /// failure can leave the entry with some snapshots already gone.
    /// Idempotent: deleting an unknown entry succeeds. Deleting frees
    /// one quota unit for the entry's day.
    #[instrument(skip(self))]
    pub async fn delete_archive(&self, id: DocumentId) -> ServiceResult<()> {
        let snapshots = self.ctx.session_repo().snapshots(id).await?;
        let count = snapshots.len();
        for snapshot in snapshots {
            self.ctx.session_repo().delete_snapshot(id, snapshot.id).await?;
        }
        self.ctx.session_repo().delete(id).await?;

        if count > 0 {
            info!(entry_id = %id, snapshots = count, "Archive entry deleted");
        } else {
            warn!(entry_id = %id, "Archive delete on empty or unknown entry");
        }

        Ok(())
    }

    /// Subscribe to the archive list; each update is newest first
    #[instrument(skip(self))]
    pub async fn watch_archives(&self) -> ServiceResult<ArchiveWatch> {
        Ok(self.ctx.session_repo().watch().await?)
    }

    /// Subscribe to one entry's snapshot children
    #[instrument(skip(self))]
    pub async fn watch_snapshots(&self, entry_id: DocumentId) -> ServiceResult<SnapshotWatch> {
        Ok(self.ctx.session_repo().watch_snapshots(entry_id).await?)
    }
}
