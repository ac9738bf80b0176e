//! Aggregation service
//!
//! Computes per-status tallies over an entry's snapshot children, as
//! a one-shot read or as a live subscription derived from the
//! snapshot watch.

use tokio::sync::watch;
use tracing::instrument;

use rollcall_core::{DocumentId, StatusTally, TallyWatch, Watch};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Aggregation service
pub struct AggregationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AggregationService<'a> {
    /// Create a new AggregationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current per-status tally for one archive entry
    ///
    /// An unknown entry id simply has no snapshots and yields the
    /// all-zero tally.
    #[instrument(skip(self))]
    pub async fn tally_for(&self, entry_id: DocumentId) -> ServiceResult<StatusTally> {
        let snapshots = self.ctx.session_repo().snapshots(entry_id).await?;
        Ok(StatusTally::count(&snapshots))
    }

    /// Subscribe to one entry's tally
    ///
    /// Derived from the snapshot subscription: each snapshot update is
    /// re-counted and published. The forwarding task exits when either
    /// side hangs up.
    #[instrument(skip(self))]
    pub async fn watch_tally(&self, entry_id: DocumentId) -> ServiceResult<TallyWatch> {
        let mut snapshots = self.ctx.session_repo().watch_snapshots(entry_id).await?;
        let (tx, rx) = watch::channel(StatusTally::count(&snapshots.current()));

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    next = snapshots.next() => match next {
                        Ok(set) => {
                            if tx.send(StatusTally::count(&set)).is_err() {
                                break;
                            }
                        }
                        Err(_) => break,
                    },
                    () = tx.closed() => break,
                }
            }
        });

        Ok(Watch::new(rx))
    }
}
