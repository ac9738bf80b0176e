//! Document body models
//!
//! Typed serde views of the schemaless JSON bodies the engine stores.
//! Server-assigned metadata (id, timestamps, sequence) lives on the
//! engine's `Document`, not in the body.

pub mod member;
pub mod session;
pub mod snapshot;

pub use member::MemberDoc;
pub use session::SessionDoc;
pub use snapshot::SnapshotDoc;
