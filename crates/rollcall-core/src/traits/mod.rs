//! Repository traits (ports)

pub mod repositories;

pub use repositories::{MemberRepository, RepoResult, SessionRepository};
