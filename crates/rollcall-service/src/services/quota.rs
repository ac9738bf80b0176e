//! Quota service
//!
//! Derives the daily archive quota by counting entries; no counter
//! document exists anywhere, so deleting an entry restores capacity
//! for its day automatically.

use tracing::instrument;

use rollcall_core::{ArchiveEntry, DayKey, DomainError};

use crate::dto::QuotaResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Quota service
pub struct QuotaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> QuotaService<'a> {
    /// Create a new QuotaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Number of archive entries recorded on the given day
    #[instrument(skip(self))]
    pub async fn count_archived_on(&self, day_key: &DayKey) -> ServiceResult<usize> {
        Ok(self.ctx.session_repo().count_by_day(day_key).await?)
    }

    /// Remaining capacity for the given day, floored at zero
    #[instrument(skip(self))]
    pub async fn remaining(&self, day_key: &DayKey) -> ServiceResult<usize> {
        let used = self.count_archived_on(day_key).await?;
        Ok(ArchiveEntry::DAILY_LIMIT.saturating_sub(used))
    }

    /// Full quota state for the given day
    #[instrument(skip(self))]
    pub async fn status(&self, day_key: &DayKey) -> ServiceResult<QuotaResponse> {
        let used = self.count_archived_on(day_key).await?;
        Ok(QuotaResponse {
            day_key: day_key.to_string(),
            used,
            limit: ArchiveEntry::DAILY_LIMIT,
            remaining: ArchiveEntry::DAILY_LIMIT.saturating_sub(used),
        })
    }

    /// Fail with `QuotaExceeded` when the day has no capacity left
    ///
    /// The count and any subsequent insert are separate operations;
    /// two concurrent archivals can both pass this check and exceed
    /// the limit by one.
    #[instrument(skip(self))]
    pub async fn ensure_capacity(&self, day_key: &DayKey) -> ServiceResult<()> {
        let used = self.count_archived_on(day_key).await?;
        if used >= ArchiveEntry::DAILY_LIMIT {
            return Err(DomainError::quota_exceeded(used).into());
        }
        Ok(())
    }
}
