//! Document-store implementation of SessionRepository

use async_trait::async_trait;
use serde_json::Value;
use tracing::{instrument, warn};

use rollcall_core::traits::{RepoResult, SessionRepository};
use rollcall_core::{
    ArchiveEntry, ArchiveWatch, AttendanceSnapshot, DayKey, DocumentId, NewSession, NewSnapshot,
    SnapshotWatch,
};

use crate::engine::{CollectionPath, Document, MemoryStore};
use crate::mappers::{decode_session, decode_snapshot, encode_session, encode_snapshot};

use super::error::map_store_error;

/// Session repository over the in-process document store
#[derive(Debug, Clone)]
pub struct StoreSessionRepository {
    store: MemoryStore,
}

impl StoreSessionRepository {
    /// Create a new StoreSessionRepository
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

/// Newest `created_at` first; equal stamps fall back to the insertion
/// sequence, newest first, so the order is deterministic
fn sort_newest_first(docs: &mut [Document]) {
    docs.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then(b.seq.cmp(&a.seq))
    });
}

fn project_entries(docs: &[Document]) -> Vec<ArchiveEntry> {
    let mut docs = docs.to_vec();
    sort_newest_first(&mut docs);
    docs.iter()
        .filter_map(|doc| match decode_session(doc) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(id = %doc.id, error = %e, "skipping corrupt session document");
                None
            }
        })
        .collect()
}

fn project_snapshots(entry_id: DocumentId) -> impl Fn(&[Document]) -> Vec<AttendanceSnapshot> {
    move |docs| {
        docs.iter()
            .filter_map(|doc| match decode_snapshot(entry_id, doc) {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    warn!(id = %doc.id, error = %e, "skipping corrupt snapshot document");
                    None
                }
            })
            .collect()
    }
}

#[async_trait]
impl SessionRepository for StoreSessionRepository {
    #[instrument(skip(self, draft))]
    async fn insert(&self, draft: NewSession) -> RepoResult<ArchiveEntry> {
        let body = encode_session(&draft).map_err(map_store_error)?;
        let doc = self.store.insert(&CollectionPath::Sessions, None, body);
        Ok(draft.into_entry(doc.id, doc.created_at))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: DocumentId) -> RepoResult<Option<ArchiveEntry>> {
        self.store
            .get(&CollectionPath::Sessions, id)
            .map(|doc| decode_session(&doc).map_err(map_store_error))
            .transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<ArchiveEntry>> {
        let mut docs = self.store.list(&CollectionPath::Sessions);
        sort_newest_first(&mut docs);
        docs.iter()
            .map(|doc| decode_session(doc).map_err(map_store_error))
            .collect()
    }

    #[instrument(skip(self))]
    async fn count_by_day(&self, day_key: &DayKey) -> RepoResult<usize> {
        Ok(self.store.count_eq(
            &CollectionPath::Sessions,
            "day_key",
            &Value::String(day_key.as_str().to_string()),
        ))
    }

    #[instrument(skip(self, draft))]
    async fn insert_snapshot(
        &self,
        entry_id: DocumentId,
        draft: NewSnapshot,
    ) -> RepoResult<AttendanceSnapshot> {
        let body = encode_snapshot(&draft).map_err(map_store_error)?;
        let doc = self
            .store
            .insert(&CollectionPath::Attendance(entry_id), Some(draft.id), body);
        Ok(draft.into_snapshot(doc.created_at))
    }

    #[instrument(skip(self))]
    async fn snapshots(&self, entry_id: DocumentId) -> RepoResult<Vec<AttendanceSnapshot>> {
        self.store
            .list(&CollectionPath::Attendance(entry_id))
            .iter()
            .map(|doc| decode_snapshot(entry_id, doc).map_err(map_store_error))
            .collect()
    }

    #[instrument(skip(self))]
    async fn delete_snapshot(
        &self,
        entry_id: DocumentId,
        snapshot_id: DocumentId,
    ) -> RepoResult<()> {
        self.store
            .delete(&CollectionPath::Attendance(entry_id), snapshot_id);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: DocumentId) -> RepoResult<()> {
        self.store.delete(&CollectionPath::Sessions, id);
        // Clear the emptied sub-collection out of the engine; left
        // alone if orphaned children still need a cleanup re-run
        let attendance = CollectionPath::Attendance(id);
        if self.store.list(&attendance).is_empty() {
            self.store.remove_collection(&attendance);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn watch(&self) -> RepoResult<ArchiveWatch> {
        Ok(self.store.subscribe(&CollectionPath::Sessions, project_entries))
    }

    #[instrument(skip(self))]
    async fn watch_snapshots(&self, entry_id: DocumentId) -> RepoResult<SnapshotWatch> {
        Ok(self.store.subscribe(
            &CollectionPath::Attendance(entry_id),
            project_snapshots(entry_id),
        ))
    }
}
