//! Memory-backed document store
//!
//! Provides the minimal client contract the domain layer depends on:
//! (a) insert / replace / delete by id over schemaless JSON documents,
//! (b) equality-filtered queries and counts on a single field,
//! (c) live subscription to a collection delivering full snapshots
//!     through a projection closure,
//! (d) server-assigned, strictly increasing creation timestamps plus a
//!     store-wide insertion sequence number for stable ordering.
//!
//! Locks are only ever held across synchronous sections, never across
//! awaits.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use tokio::sync::watch;

use rollcall_core::{DocumentId, Watch};

use super::path::CollectionPath;

/// Errors raised while encoding or decoding document bodies
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("corrupt document {id} in {collection}: {source}")]
    Decode {
        collection: String,
        id: DocumentId,
        #[source]
        source: serde_json::Error,
    },
}

/// One stored document with its server-assigned metadata
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,
    /// Store-wide insertion sequence number, used as an ordering tiebreak
    pub seq: u64,
    /// Server-assigned creation timestamp, strictly increasing per store
    pub created_at: DateTime<Utc>,
    pub body: Value,
}

/// One collection's documents plus its change-notification channel
struct Shard {
    docs: RwLock<Vec<Document>>,
    rev: watch::Sender<u64>,
}

impl Shard {
    fn new() -> Self {
        Self {
            docs: RwLock::new(Vec::new()),
            rev: watch::channel(0).0,
        }
    }

    fn bump(&self) {
        self.rev.send_modify(|r| *r += 1);
    }
}

struct Inner {
    collections: DashMap<String, Arc<Shard>>,
    seq: AtomicU64,
    /// Last issued timestamp; insert stamps are forced strictly past it
    /// so ordering by `created_at` is deterministic
    clock: Mutex<DateTime<Utc>>,
}

/// In-process document store
///
/// Cheap to clone; all clones share the same collections.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                collections: DashMap::new(),
                seq: AtomicU64::new(0),
                clock: Mutex::new(DateTime::<Utc>::MIN_UTC),
            }),
        }
    }

    fn shard(&self, path: &CollectionPath) -> Arc<Shard> {
        self.inner
            .collections
            .entry(path.key())
            .or_insert_with(|| Arc::new(Shard::new()))
            .clone()
    }

    fn existing_shard(&self, path: &CollectionPath) -> Option<Arc<Shard>> {
        self.inner.collections.get(&path.key()).map(|s| s.clone())
    }

    /// Server-assigned timestamp, strictly after every earlier one
    fn stamp(&self) -> DateTime<Utc> {
        let mut last = self.inner.clock.lock();
        let mut now = Utc::now();
        if now <= *last {
            now = *last + Duration::microseconds(1);
        }
        *last = now;
        now
    }

    /// Insert a document, assigning id (unless supplied), sequence
    /// number, and creation timestamp
    ///
    /// Inserting with an id that already exists replaces the stored
    /// document in place, the way a keyed set-write does.
    pub fn insert(&self, path: &CollectionPath, id: Option<DocumentId>, body: Value) -> Document {
        let doc = Document {
            id: id.unwrap_or_else(DocumentId::new),
            seq: self.inner.seq.fetch_add(1, Ordering::Relaxed),
            created_at: self.stamp(),
            body,
        };

        let shard = self.shard(path);
        {
            let mut docs = shard.docs.write();
            if let Some(existing) = docs.iter_mut().find(|d| d.id == doc.id) {
                *existing = doc.clone();
            } else {
                docs.push(doc.clone());
            }
        }
        shard.bump();
        doc
    }

    /// Fetch one document by id
    pub fn get(&self, path: &CollectionPath, id: DocumentId) -> Option<Document> {
        let shard = self.existing_shard(path)?;
        let docs = shard.docs.read();
        docs.iter().find(|d| d.id == id).cloned()
    }

    /// Delete one document by id; returns whether it existed
    pub fn delete(&self, path: &CollectionPath, id: DocumentId) -> bool {
        let Some(shard) = self.existing_shard(path) else {
            return false;
        };
        let removed = {
            let mut docs = shard.docs.write();
            let before = docs.len();
            docs.retain(|d| d.id != id);
            docs.len() != before
        };
        if removed {
            shard.bump();
        }
        removed
    }

    /// All documents in a collection, in insertion order
    pub fn list(&self, path: &CollectionPath) -> Vec<Document> {
        match self.existing_shard(path) {
            Some(shard) => shard.docs.read().clone(),
            None => Vec::new(),
        }
    }

    /// Documents whose body field equals the given value
    pub fn query_eq(&self, path: &CollectionPath, field: &str, value: &Value) -> Vec<Document> {
        match self.existing_shard(path) {
            Some(shard) => shard
                .docs
                .read()
                .iter()
                .filter(|d| d.body.get(field) == Some(value))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Count of documents whose body field equals the given value
    pub fn count_eq(&self, path: &CollectionPath, field: &str, value: &Value) -> usize {
        match self.existing_shard(path) {
            Some(shard) => shard
                .docs
                .read()
                .iter()
                .filter(|d| d.body.get(field) == Some(value))
                .count(),
            None => 0,
        }
    }

    /// Drop a whole collection, closing its subscriptions
    ///
    /// Used after a cascading delete to clear the emptied
    /// sub-collection out of the engine.
    pub fn remove_collection(&self, path: &CollectionPath) {
        self.inner.collections.remove(&path.key());
    }

    /// Subscribe to a collection through a projection closure
    ///
    /// The returned handle is seeded with the projection of the current
    /// documents and receives a fresh projection after every mutation.
    /// Dropping the handle cancels the subscription; removing the
    /// collection closes it from the store side.
    pub fn subscribe<T, F>(&self, path: &CollectionPath, project: F) -> Watch<T>
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(&[Document]) -> T + Send + Sync + 'static,
    {
        let shard = self.shard(path);
        let mut rev_rx = shard.rev.subscribe();
        let seed = project(&shard.docs.read());
        let (tx, rx) = watch::channel(seed);

        // Hold only a weak reference so a removed collection can drop
        // its shard and end the subscription.
        let weak: Weak<Shard> = Arc::downgrade(&shard);
        drop(shard);

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    changed = rev_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let Some(shard) = weak.upgrade() else {
                            break;
                        };
                        let update = project(&shard.docs.read());
                        if tx.send(update).is_err() {
                            break;
                        }
                    }
                    () = tx.closed() => break,
                }
            }
        });

        Watch::new(rx)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("collections", &self.inner.collections.len())
            .finish()
    }
}
