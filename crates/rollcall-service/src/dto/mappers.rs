//! Mappers converting domain entities to response DTOs

use rollcall_core::{ArchiveEntry, AttendanceSnapshot, Member, StatusTally};

use super::responses::{ArchiveEntryResponse, MemberResponse, SnapshotResponse, TallyResponse};

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.to_string(),
            name: member.name.clone(),
            role: member.role.to_string(),
            category: member.category.clone(),
            default_status: member.default_status.to_string(),
            created_at: member.created_at,
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self::from(&member)
    }
}

impl From<&ArchiveEntry> for ArchiveEntryResponse {
    fn from(entry: &ArchiveEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            title: entry.title.clone(),
            location: entry.location.clone(),
            day_key: entry.day_key.to_string(),
            created_at: entry.created_at,
        }
    }
}

impl From<ArchiveEntry> for ArchiveEntryResponse {
    fn from(entry: ArchiveEntry) -> Self {
        Self::from(&entry)
    }
}

impl From<&AttendanceSnapshot> for SnapshotResponse {
    fn from(snapshot: &AttendanceSnapshot) -> Self {
        Self {
            id: snapshot.id.to_string(),
            name: snapshot.name.clone(),
            category: snapshot.category.clone(),
            status: snapshot.status.to_string(),
            recorded_at: snapshot.recorded_at,
        }
    }
}

impl From<&StatusTally> for TallyResponse {
    fn from(tally: &StatusTally) -> Self {
        Self {
            present: tally.present,
            excused: tally.excused,
            sick: tally.sick,
            unexcused: tally.unexcused,
            total: tally.total(),
        }
    }
}
