//! End-to-end tests for the attendance engine
//!
//! Drives the full service stack (registry, archive, aggregation,
//! quota) over an in-process document store. No external processes
//! are required.
//!
//! Run with: cargo test -p integration-tests --test engine_tests

use integration_tests::{
    member_named, member_request, officer_named, session_request, session_titled, test_context,
};
use rollcall_core::{ArchiveEntry, AttendanceStatus, DayKey, DocumentId, StatusTally};
use rollcall_service::{AggregationService, ArchiveService, QuotaService, RegistryService};

// ============================================================================
// Roster Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_list_members() {
    let ctx = test_context();
    let registry = RegistryService::new(&ctx);

    registry
        .add_member(member_named("citra lestari", AttendanceStatus::Present))
        .await
        .unwrap();
    registry
        .add_member(officer_named("andi wijaya", "ketua"))
        .await
        .unwrap();

    let members = registry.list_members().await.unwrap();
    assert_eq!(members.len(), 2);

    // Name-sorted, title-cased
    assert_eq!(members[0].name, "Andi Wijaya");
    assert_eq!(members[0].category.as_deref(), Some("Ketua"));
    assert_eq!(members[1].name, "Citra Lestari");
    assert!(members[1].category.is_none());
}

#[tokio::test]
async fn test_duplicate_name_detected_across_spelling() {
    let ctx = test_context();
    let registry = RegistryService::new(&ctx);

    registry
        .add_member(member_named("Budi Santoso", AttendanceStatus::Present))
        .await
        .unwrap();

    for spelling in ["budi santoso", "BUDI SANTOSO", "  budi   Santoso "] {
        let err = registry
            .add_member(member_named(spelling, AttendanceStatus::Present))
            .await
            .unwrap_err();
        let domain = err.as_domain().unwrap();
        assert!(domain.is_duplicate(), "spelling {spelling:?} should collide");
    }

    assert_eq!(registry.list_members().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_removed_member_frees_name() {
    let ctx = test_context();
    let registry = RegistryService::new(&ctx);

    let member = registry
        .add_member(member_named("Dewi Anggraini", AttendanceStatus::Present))
        .await
        .unwrap();
    registry.remove_member(member.id).await.unwrap();

    let again = registry
        .add_member(member_named("dewi ANGGRAINI", AttendanceStatus::Present))
        .await
        .unwrap();
    assert_ne!(again.id, member.id);
}

#[tokio::test]
async fn test_roster_watch_tracks_changes() {
    let ctx = test_context();
    let registry = RegistryService::new(&ctx);

    let mut watch = registry.watch_members().await.unwrap();
    assert!(watch.current().is_empty());

    let member = registry.add_member(member_request()).await.unwrap();
    assert_eq!(watch.next().await.unwrap().len(), 1);

    registry.remove_member(member.id).await.unwrap();
    assert!(watch.next().await.unwrap().is_empty());
}

// ============================================================================
// Archival Tests
// ============================================================================

#[tokio::test]
async fn test_archive_freezes_full_roster() {
    let ctx = test_context();
    let registry = RegistryService::new(&ctx);
    let archive = ArchiveService::new(&ctx);

    registry
        .add_member(member_named("Andi", AttendanceStatus::Present))
        .await
        .unwrap();
    registry
        .add_member(member_named("Budi", AttendanceStatus::Excused))
        .await
        .unwrap();
    registry
        .add_member(officer_named("Citra", "Sekretaris"))
        .await
        .unwrap();

    let entry = archive
        .archive_session(session_titled("rapat BULANAN", "2025-06-01"))
        .await
        .unwrap();
    assert_eq!(entry.title, "Rapat Bulanan");
    assert_eq!(entry.day_key, DayKey::parse("2025-06-01").unwrap());

    let snapshots = archive.snapshots(entry.id).await.unwrap();
    assert_eq!(snapshots.len(), 3);

    let budi = snapshots.iter().find(|s| s.name == "Budi").unwrap();
    assert_eq!(budi.status, AttendanceStatus::Excused);
    let citra = snapshots.iter().find(|s| s.name == "Citra").unwrap();
    assert_eq!(citra.category.as_deref(), Some("Sekretaris"));
}

#[tokio::test]
async fn test_archive_requires_nonempty_roster() {
    let ctx = test_context();
    let archive = ArchiveService::new(&ctx);

    let err = archive
        .archive_session(session_request("2025-06-01"))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert!(archive.list_archives().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_snapshots_survive_roster_changes() {
    let ctx = test_context();
    let registry = RegistryService::new(&ctx);
    let archive = ArchiveService::new(&ctx);

    let member = registry
        .add_member(member_named("Eko Prasetyo", AttendanceStatus::Sick))
        .await
        .unwrap();
    let entry = archive
        .archive_session(session_request("2025-06-01"))
        .await
        .unwrap();

    // Deleting the member afterwards must not touch the frozen copy
    registry.remove_member(member.id).await.unwrap();

    let snapshots = archive.snapshots(entry.id).await.unwrap();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].name, "Eko Prasetyo");
    assert_eq!(snapshots[0].status, AttendanceStatus::Sick);
    // Correlation key still points at the removed member
    assert_eq!(snapshots[0].id, member.id);
}

#[tokio::test]
async fn test_archive_listing_is_newest_first() {
    let ctx = test_context();
    let registry = RegistryService::new(&ctx);
    let archive = ArchiveService::new(&ctx);

    registry.add_member(member_request()).await.unwrap();

    let first = archive
        .archive_session(session_titled("Pertama", "2025-06-01"))
        .await
        .unwrap();
    let second = archive
        .archive_session(session_titled("Kedua", "2025-06-01"))
        .await
        .unwrap();
    let third = archive
        .archive_session(session_titled("Ketiga", "2025-06-02"))
        .await
        .unwrap();

    let ids: Vec<_> = archive
        .list_archives()
        .await
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
    assert_eq!(archive.latest().await.unwrap().unwrap().id, third.id);
}

// ============================================================================
// Quota Tests
// ============================================================================

#[tokio::test]
async fn test_daily_quota_enforced_per_day() {
    let ctx = test_context();
    let registry = RegistryService::new(&ctx);
    let archive = ArchiveService::new(&ctx);
    let quota = QuotaService::new(&ctx);

    registry.add_member(member_request()).await.unwrap();

    let day = DayKey::parse("2025-06-01").unwrap();
    for _ in 0..ArchiveEntry::DAILY_LIMIT {
        archive
            .archive_session(session_request("2025-06-01"))
            .await
            .unwrap();
    }
    assert_eq!(quota.remaining(&day).await.unwrap(), 0);

    let err = archive
        .archive_session(session_request("2025-06-01"))
        .await
        .unwrap_err();
    let domain = err.as_domain().unwrap();
    assert!(domain.is_quota_exceeded());
    assert_eq!(domain.remaining(), Some(0));

    // The same roster archives fine on another day
    archive
        .archive_session(session_request("2025-06-02"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_deleting_entry_restores_quota() {
    let ctx = test_context();
    let registry = RegistryService::new(&ctx);
    let archive = ArchiveService::new(&ctx);
    let quota = QuotaService::new(&ctx);

    registry.add_member(member_request()).await.unwrap();

    let day = DayKey::parse("2025-06-01").unwrap();
    let first = archive
        .archive_session(session_request("2025-06-01"))
        .await
        .unwrap();
    archive
        .archive_session(session_request("2025-06-01"))
        .await
        .unwrap();
    assert_eq!(quota.count_archived_on(&day).await.unwrap(), 2);

    archive.delete_archive(first.id).await.unwrap();
    assert_eq!(quota.count_archived_on(&day).await.unwrap(), 1);

    // Freed capacity is immediately usable
    archive
        .archive_session(session_request("2025-06-01"))
        .await
        .unwrap();
}

// ============================================================================
// Cascading Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_archive_cascades() {
    let ctx = test_context();
    let registry = RegistryService::new(&ctx);
    let archive = ArchiveService::new(&ctx);

    for _ in 0..3 {
        registry.add_member(member_request()).await.unwrap();
    }
    let entry = archive
        .archive_session(session_request("2025-06-01"))
        .await
        .unwrap();
    assert_eq!(archive.snapshots(entry.id).await.unwrap().len(), 3);

    archive.delete_archive(entry.id).await.unwrap();

    assert!(archive.get_archive(entry.id).await.unwrap().is_none());
    assert!(archive.snapshots(entry.id).await.unwrap().is_empty());

    // Repeat delete and unknown-id delete are both fine
    archive.delete_archive(entry.id).await.unwrap();
    archive.delete_archive(DocumentId::new()).await.unwrap();
}

// ============================================================================
// Aggregation Tests
// ============================================================================

#[tokio::test]
async fn test_tally_counts_per_status() {
    let ctx = test_context();
    let registry = RegistryService::new(&ctx);
    let archive = ArchiveService::new(&ctx);
    let aggregation = AggregationService::new(&ctx);

    registry
        .add_member(member_named("Andi", AttendanceStatus::Present))
        .await
        .unwrap();
    registry
        .add_member(member_named("Budi", AttendanceStatus::Present))
        .await
        .unwrap();
    registry
        .add_member(member_named("Citra", AttendanceStatus::Sick))
        .await
        .unwrap();
    registry
        .add_member(member_named("Dewi", AttendanceStatus::Unexcused))
        .await
        .unwrap();

    let entry = archive
        .archive_session(session_request("2025-06-01"))
        .await
        .unwrap();

    let tally = aggregation.tally_for(entry.id).await.unwrap();
    assert_eq!(
        tally,
        StatusTally {
            present: 2,
            excused: 0,
            sick: 1,
            unexcused: 1,
        }
    );
    assert_eq!(tally.total(), 4);
}

#[tokio::test]
async fn test_tally_watch_follows_cascade() {
    let ctx = test_context();
    let registry = RegistryService::new(&ctx);
    let archive = ArchiveService::new(&ctx);
    let aggregation = AggregationService::new(&ctx);

    registry
        .add_member(member_named("Andi", AttendanceStatus::Present))
        .await
        .unwrap();
    registry
        .add_member(member_named("Budi", AttendanceStatus::Excused))
        .await
        .unwrap();

    let entry = archive
        .archive_session(session_request("2025-06-01"))
        .await
        .unwrap();

    let mut tally_watch = aggregation.watch_tally(entry.id).await.unwrap();
    assert_eq!(tally_watch.current().total(), 2);

    archive.delete_archive(entry.id).await.unwrap();

    // The cascade empties the snapshot set; the tally follows
    let mut latest = tally_watch.current();
    while latest.total() != 0 {
        latest = tally_watch.next().await.unwrap();
    }
    assert_eq!(latest, StatusTally::default());
}

// ============================================================================
// Legacy Alias Tests
// ============================================================================

#[tokio::test]
async fn test_legacy_status_labels_normalize() {
    let ctx = test_context();
    let registry = RegistryService::new(&ctx);
    let archive = ArchiveService::new(&ctx);
    let aggregation = AggregationService::new(&ctx);

    // Requests as an old client would send them
    for (name, raw) in [
        ("Andi", "Hadir"),
        ("Budi", "Izin"),
        ("Citra", "Sakit"),
        ("Dewi", "Alpha"),
        ("Eko", "Tanpa Keterangan"),
    ] {
        let request = serde_json::from_value(serde_json::json!({
            "name": name,
            "default_status": raw,
        }))
        .unwrap();
        registry.add_member(request).await.unwrap();
    }

    let entry = archive
        .archive_session(session_request("2025-06-01"))
        .await
        .unwrap();

    let tally = aggregation.tally_for(entry.id).await.unwrap();
    assert_eq!(
        tally,
        StatusTally {
            present: 1,
            excused: 1,
            sick: 1,
            unexcused: 2,
        }
    );
}

// ============================================================================
// Subscription Tests
// ============================================================================

#[tokio::test]
async fn test_archive_watch_sees_create_and_delete() {
    let ctx = test_context();
    let registry = RegistryService::new(&ctx);
    let archive = ArchiveService::new(&ctx);

    registry.add_member(member_request()).await.unwrap();

    let mut watch = archive.watch_archives().await.unwrap();
    assert!(watch.current().is_empty());

    let entry = archive
        .archive_session(session_titled("Rapat", "2025-06-01"))
        .await
        .unwrap();
    let entries = watch.next().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Rapat");

    archive.delete_archive(entry.id).await.unwrap();
    let mut entries = watch.current();
    while !entries.is_empty() {
        entries = watch.next().await.unwrap();
    }
}

#[tokio::test]
async fn test_snapshot_watch_is_scoped_to_entry() {
    let ctx = test_context();
    let registry = RegistryService::new(&ctx);
    let archive = ArchiveService::new(&ctx);

    registry.add_member(member_request()).await.unwrap();

    let first = archive
        .archive_session(session_request("2025-06-01"))
        .await
        .unwrap();
    let mut watch = archive.watch_snapshots(first.id).await.unwrap();
    assert_eq!(watch.current().len(), 1);

    // Archiving another session must not disturb the first entry's watch
    archive
        .archive_session(session_request("2025-06-01"))
        .await
        .unwrap();
    assert!(!watch.has_changed().unwrap());
}
