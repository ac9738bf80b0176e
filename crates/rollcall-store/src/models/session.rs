//! Session document model

use serde::{Deserialize, Serialize};

use rollcall_core::DayKey;

/// Body of a document in the `sessions` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDoc {
    pub title: String,
    pub location: String,
    /// Calendar-day key persisted verbatim; the quota count filters on
    /// equality against this field
    pub day_key: DayKey,
}
