//! Document-store implementation of MemberRepository

use async_trait::async_trait;
use serde_json::Value;
use tracing::{instrument, warn};

use rollcall_core::traits::{MemberRepository, RepoResult};
use rollcall_core::{DocumentId, Member, NewMember, RosterWatch};

use crate::engine::{CollectionPath, Document, MemoryStore};
use crate::mappers::{decode_member, encode_member};

use super::error::map_store_error;

/// Member repository over the in-process document store
#[derive(Debug, Clone)]
pub struct StoreMemberRepository {
    store: MemoryStore,
}

impl StoreMemberRepository {
    /// Create a new StoreMemberRepository
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

/// Decode every member document into a name-sorted roster, skipping
/// corrupt ones with a warning
///
/// One-shot reads fail hard on corruption; live projections must keep
/// delivering, so they drop the bad document instead.
fn project_members(docs: &[Document]) -> Vec<Member> {
    let mut members: Vec<Member> = docs
        .iter()
        .filter_map(|doc| match decode_member(doc) {
            Ok(member) => Some(member),
            Err(e) => {
                warn!(id = %doc.id, error = %e, "skipping corrupt member document");
                None
            }
        })
        .collect();
    members.sort_by(|a, b| a.name.cmp(&b.name));
    members
}

#[async_trait]
impl MemberRepository for StoreMemberRepository {
    #[instrument(skip(self, draft))]
    async fn insert(&self, draft: NewMember) -> RepoResult<Member> {
        let body = encode_member(&draft).map_err(map_store_error)?;
        let doc = self.store.insert(&CollectionPath::Members, None, body);
        Ok(draft.into_member(doc.id, doc.created_at))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: DocumentId) -> RepoResult<Option<Member>> {
        self.store
            .get(&CollectionPath::Members, id)
            .map(|doc| decode_member(&doc).map_err(map_store_error))
            .transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_normalized_name(&self, normalized: &str) -> RepoResult<Option<Member>> {
        let matches = self.store.query_eq(
            &CollectionPath::Members,
            "normalized_name",
            &Value::String(normalized.to_string()),
        );
        matches
            .first()
            .map(|doc| decode_member(doc).map_err(map_store_error))
            .transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Member>> {
        self.store
            .list(&CollectionPath::Members)
            .iter()
            .map(|doc| decode_member(doc).map_err(map_store_error))
            .collect()
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: DocumentId) -> RepoResult<()> {
        // Idempotent-on-missing: a repeat delete is not an error
        self.store.delete(&CollectionPath::Members, id);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn watch(&self) -> RepoResult<RosterWatch> {
        Ok(self.store.subscribe(&CollectionPath::Members, project_members))
    }
}
