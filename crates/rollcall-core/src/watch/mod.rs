//! Live subscription handle
//!
//! Reads in this system are modeled as continuous subscriptions: once
//! subscribed, the caller receives a fresh full result set whenever the
//! underlying collection changes. Intermediate states may be coalesced
//! (latest wins), which keeps delivery eventually consistent and
//! monotonic per collection. Dropping the handle unsubscribes without
//! any side effect on stored data.

use tokio::sync::watch;

use crate::entities::{ArchiveEntry, AttendanceSnapshot, Member};
use crate::value_objects::StatusTally;

/// Live view over the member roster
pub type RosterWatch = Watch<Vec<Member>>;
/// Live view over the archive list, newest first
pub type ArchiveWatch = Watch<Vec<ArchiveEntry>>;
/// Live view over one entry's snapshot children
pub type SnapshotWatch = Watch<Vec<AttendanceSnapshot>>;
/// Live view over one entry's status tally
pub type TallyWatch = Watch<StatusTally>;

/// The backing subscription ended because the store shut down
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("watch source closed")]
pub struct WatchClosed;

/// A cancelable subscription delivering full-snapshot updates
///
/// Wraps a `tokio::sync::watch` receiver seeded with the current result
/// set. `current()` never blocks; `next()` suspends until the next
/// published update.
#[derive(Debug)]
pub struct Watch<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> Watch<T> {
    /// Wrap a seeded receiver
    pub fn new(rx: watch::Receiver<T>) -> Self {
        Self { rx }
    }

    /// The most recently delivered result set
    pub fn current(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Wait for the next update and return it
    ///
    /// Updates published while the caller was not waiting are coalesced;
    /// only the latest state is observed.
    pub async fn next(&mut self) -> Result<T, WatchClosed> {
        self.rx.changed().await.map_err(|_| WatchClosed)?;
        Ok(self.rx.borrow_and_update().clone())
    }

    /// Check whether an update is pending without waiting
    pub fn has_changed(&self) -> Result<bool, WatchClosed> {
        self.rx.has_changed().map_err(|_| WatchClosed)
    }
}
