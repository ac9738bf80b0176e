//! Archive entry entity <-> document mapper

use serde_json::Value;

use rollcall_core::{ArchiveEntry, NewSession};

use crate::engine::{CollectionPath, Document, StoreError};
use crate::models::SessionDoc;

/// Encode a draft session into a document body
pub fn encode_session(draft: &NewSession) -> Result<Value, StoreError> {
    let doc = SessionDoc {
        title: draft.title.clone(),
        location: draft.location.clone(),
        day_key: draft.day_key.clone(),
    };
    serde_json::to_value(doc).map_err(StoreError::Encode)
}

/// Decode a stored document into an archive entry
pub fn decode_session(doc: &Document) -> Result<ArchiveEntry, StoreError> {
    let body: SessionDoc =
        serde_json::from_value(doc.body.clone()).map_err(|source| StoreError::Decode {
            collection: CollectionPath::Sessions.key(),
            id: doc.id,
            source,
        })?;
    Ok(ArchiveEntry {
        id: doc.id,
        title: body.title,
        location: body.location,
        day_key: body.day_key,
        created_at: doc.created_at,
    })
}
