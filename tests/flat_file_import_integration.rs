//! Integration test for the one-time flat-file migration.
//!
//! Builds a legacy JSON document on disk, imports it, and verifies the
//! round trip plus the interaction between imported state and live
//! missions afterwards.

use std::io::Write;
use std::sync::Arc;

use habitpet::adapters::import::FlatFileImporter;
use habitpet::adapters::memory::InMemoryProfileStore;
use habitpet::application::handlers::{JournalMissionCommand, JournalMissionHandler};
use habitpet::domain::foundation::{MissionDate, UserId};
use habitpet::ports::ProfileStore;

fn write_legacy_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const LEGACY: &str = r#"
{
    "discord-7": {
        "level": 4,
        "experience": 118,
        "last_login": "2025-05-31",
        "github_username": "habitdev",
        "puzzles_solved": 11,
        "journal_days": {
            "2025-05-30": "refactored the parser",
            "2025-05-31": "wrote docs"
        },
        "github_commits": {
            "2025-05-30": 3,
            "2025-05-31": 7
        }
    }
}
"#;

#[tokio::test]
async fn migrated_profile_reads_back_identically() {
    let store = Arc::new(InMemoryProfileStore::new());
    let importer = FlatFileImporter::new(store.clone());
    let file = write_legacy_file(LEGACY);

    let summary = importer.import_file(file.path()).await.unwrap();
    assert_eq!(summary.profiles, 1);
    assert_eq!(summary.journal_entries, 2);
    assert_eq!(summary.commit_records, 2);

    let user = UserId::new("discord-7").unwrap();
    let profile = store.get_or_create(&user).await.unwrap();

    assert_eq!(profile.level(), 4);
    assert_eq!(profile.experience(), 118);
    assert_eq!(profile.puzzles_solved(), 11);
    assert_eq!(profile.linked_github().unwrap().as_str(), "habitdev");
    assert_eq!(profile.journal_entries().len(), 2);
    assert_eq!(
        profile.commit_count_on(MissionDate::from_ymd(2025, 5, 31).unwrap()),
        7
    );
}

#[tokio::test]
async fn missions_continue_from_migrated_state() {
    let store = Arc::new(InMemoryProfileStore::new());
    let importer = FlatFileImporter::new(store.clone());
    let file = write_legacy_file(LEGACY);
    importer.import_file(file.path()).await.unwrap();

    let user = UserId::new("discord-7").unwrap();
    let journal = JournalMissionHandler::new(store.clone());

    // The migrated 2025-05-31 entry still gates that date.
    let duplicate = journal
        .handle(JournalMissionCommand {
            user_id: user.clone(),
            date: MissionDate::from_ymd(2025, 5, 31).unwrap(),
            text: "late addition".into(),
        })
        .await
        .unwrap();
    assert!(!duplicate.accepted);

    // A fresh date awards 30 XP on top of the imported 118, clearing
    // requirement(4) = 120 and advancing to level 5.
    let fresh = journal
        .handle(JournalMissionCommand {
            user_id: user.clone(),
            date: MissionDate::from_ymd(2025, 6, 1).unwrap(),
            text: "back at it".into(),
        })
        .await
        .unwrap();
    assert!(fresh.accepted);
    assert!(fresh.leveled_up);

    let profile = store.get_or_create(&user).await.unwrap();
    assert_eq!(profile.level(), 5);
    assert_eq!(profile.experience(), 148);
}

#[tokio::test]
async fn import_is_idempotent_across_runs() {
    let store = Arc::new(InMemoryProfileStore::new());
    let importer = FlatFileImporter::new(store.clone());
    let file = write_legacy_file(LEGACY);

    let first = importer.import_file(file.path()).await.unwrap();
    let second = importer.import_file(file.path()).await.unwrap();

    assert_eq!(first.journal_entries, 2);
    assert_eq!(second.journal_entries, 0);
    assert_eq!(second.commit_records, 0);

    let user = UserId::new("discord-7").unwrap();
    let profile = store.get_or_create(&user).await.unwrap();
    assert_eq!(profile.journal_entries().len(), 2);
    assert_eq!(profile.experience(), 118);
}
