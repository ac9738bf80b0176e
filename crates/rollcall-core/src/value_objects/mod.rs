//! Value objects - immutable domain values with validation

pub mod attendance_status;
pub mod day_key;
pub mod document_id;
pub mod tally;

pub use attendance_status::{AttendanceStatus, StatusParseError};
pub use day_key::{DayKey, DayKeyParseError};
pub use document_id::{DocumentId, DocumentIdParseError};
pub use tally::StatusTally;
