//! Repository implementations over the in-process document store

pub mod error;
pub mod member;
pub mod session;

pub use member::StoreMemberRepository;
pub use session::StoreSessionRepository;
