//! In-process document store engine

pub mod path;
pub mod store;

pub use path::CollectionPath;
pub use store::{Document, MemoryStore, StoreError};
