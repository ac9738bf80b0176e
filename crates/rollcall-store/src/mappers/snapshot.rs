//! Attendance snapshot entity <-> document mapper

use serde_json::Value;

use rollcall_core::{AttendanceSnapshot, DocumentId, NewSnapshot};

use crate::engine::{CollectionPath, Document, StoreError};
use crate::models::SnapshotDoc;

/// Encode a draft snapshot into a document body
pub fn encode_snapshot(draft: &NewSnapshot) -> Result<Value, StoreError> {
    let doc = SnapshotDoc {
        name: draft.name.clone(),
        category: draft.category.clone(),
        status: draft.status,
    };
    serde_json::to_value(doc).map_err(StoreError::Encode)
}

/// Decode a stored document into a snapshot entity
pub fn decode_snapshot(
    entry_id: DocumentId,
    doc: &Document,
) -> Result<AttendanceSnapshot, StoreError> {
    let body: SnapshotDoc =
        serde_json::from_value(doc.body.clone()).map_err(|source| StoreError::Decode {
            collection: CollectionPath::Attendance(entry_id).key(),
            id: doc.id,
            source,
        })?;
    Ok(AttendanceSnapshot {
        id: doc.id,
        name: body.name,
        category: body.category,
        status: body.status,
        recorded_at: doc.created_at,
    })
}
