//! Member entity <-> document mapper

use serde_json::Value;

use rollcall_core::{Member, NewMember};

use crate::engine::{CollectionPath, Document, StoreError};
use crate::models::MemberDoc;

/// Encode a draft member into a document body
pub fn encode_member(draft: &NewMember) -> Result<Value, StoreError> {
    let doc = MemberDoc {
        name: draft.name.clone(),
        normalized_name: draft.normalized_name.clone(),
        role: draft.role,
        category: draft.category.clone(),
        default_status: draft.default_status,
    };
    serde_json::to_value(doc).map_err(StoreError::Encode)
}

/// Decode a stored document into a member entity
pub fn decode_member(doc: &Document) -> Result<Member, StoreError> {
    let body: MemberDoc =
        serde_json::from_value(doc.body.clone()).map_err(|source| StoreError::Decode {
            collection: CollectionPath::Members.key(),
            id: doc.id,
            source,
        })?;
    Ok(Member {
        id: doc.id,
        name: body.name,
        normalized_name: body.normalized_name,
        role: body.role,
        category: body.category,
        default_status: body.default_status,
        created_at: doc.created_at,
    })
}
