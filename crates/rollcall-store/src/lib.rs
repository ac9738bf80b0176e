//! # rollcall-store
//!
//! Storage layer implementing the repository traits from `rollcall-core`
//! over an in-process document store.
//!
//! ## Overview
//!
//! The engine provides the minimal document-store contract the domain
//! needs: insert/delete by id over schemaless JSON documents,
//! equality-filtered queries and counts, live subscriptions delivering
//! full collection snapshots, and server-assigned timestamps. Documents
//! are decoded into typed models through mapper modules.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rollcall_store::{MemoryStore, StoreMemberRepository};
//! use rollcall_core::MemberRepository;
//!
//! let store = MemoryStore::new();
//! let members = StoreMemberRepository::new(store.clone());
//! ```

pub mod engine;
pub mod mappers;
pub mod models;
pub mod repositories;

// Re-export commonly used types
pub use engine::{CollectionPath, Document, MemoryStore, StoreError};
pub use repositories::{StoreMemberRepository, StoreSessionRepository};
