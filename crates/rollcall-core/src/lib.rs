//! # rollcall-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on the storage engine or any application surface.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;
pub mod watch;

// Re-export commonly used types at crate root
pub use entities::{
    ArchiveEntry, AttendanceSnapshot, Member, MemberRole, NewMember, NewSession, NewSnapshot,
};
pub use error::DomainError;
pub use traits::{MemberRepository, RepoResult, SessionRepository};
pub use value_objects::{
    AttendanceStatus, DayKey, DayKeyParseError, DocumentId, DocumentIdParseError, StatusParseError,
    StatusTally,
};
pub use watch::{ArchiveWatch, RosterWatch, SnapshotWatch, TallyWatch, Watch, WatchClosed};
