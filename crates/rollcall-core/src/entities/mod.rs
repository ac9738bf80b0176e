//! Domain entities

pub mod member;
pub mod session;
pub mod snapshot;

pub use member::{normalize_name, title_case, Member, MemberRole, NewMember, RoleParseError};
pub use session::{ArchiveEntry, NewSession};
pub use snapshot::{AttendanceSnapshot, NewSnapshot};
