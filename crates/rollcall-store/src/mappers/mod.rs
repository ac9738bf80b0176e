//! Entity <-> document mappers

pub mod member;
pub mod session;
pub mod snapshot;

pub use member::{decode_member, encode_member};
pub use session::{decode_session, encode_session};
pub use snapshot::{decode_snapshot, encode_snapshot};
