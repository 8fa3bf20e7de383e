#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::sync::Arc;
use std::time::Duration;

use lockor_core::model::{DiagnosticSeverity, NoticeLevel};
use lockor_core::ports::memory::RecordingNotifier;
use lockor_core::ProtectionLevel;
use lockor_engine::{
    apply_engine_command, apply_engine_query, open_workspace, EngineCommand, EngineQuery,
    EngineQueryResult, Session,
};
use tempfile::TempDir;

fn setup() -> (TempDir, Session, RecordingNotifier) {
    let dir = TempDir::new().unwrap();
    let notifier = RecordingNotifier::new();
    let session = open_workspace(dir.path(), Arc::new(notifier.clone())).unwrap();
    (dir, session, notifier)
}

fn write_settings(session: &Session, text: &str) {
    let path = session.settings_file().path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

#[test]
fn test_external_level_edit_applies_on_next_save() {
    let (_dir, mut session, _notifier) = setup();
    apply_engine_command(
        EngineCommand::LockFile {
            path: Some("a.rs".to_string()),
        },
        &mut session,
    )
    .unwrap();
    assert!(session.will_save("a.rs").is_err());

    write_settings(&session, "protectionLevel = \"soft\"\n");
    assert!(session.will_save("a.rs").is_ok());
}

#[test]
fn test_configuration_changed_reapplies_new_level() {
    let (_dir, mut session, notifier) = setup();
    apply_engine_command(
        EngineCommand::LockFile {
            path: Some("a.rs".to_string()),
        },
        &mut session,
    )
    .unwrap();
    assert_eq!(notifier.diagnostics()[0].severity, DiagnosticSeverity::Error);

    assert!(session.configuration_changed().is_none());

    write_settings(&session, "protectionLevel = \"soft\"\n");
    let outcome = session.configuration_changed().expect("level changed");
    assert_eq!(outcome.level, ProtectionLevel::Soft);
    assert_eq!(notifier.diagnostics()[0].severity, DiagnosticSeverity::Warning);
}

#[test]
fn test_configuration_changed_applies_marker_setting() {
    let (_dir, mut session, notifier) = setup();
    apply_engine_command(
        EngineCommand::LockFile {
            path: Some("a.rs".to_string()),
        },
        &mut session,
    )
    .unwrap();
    assert_eq!(notifier.diagnostics().len(), 1);

    write_settings(&session, "addVisibleMarkers = false\n");
    assert!(session.configuration_changed().is_none());
    assert!(notifier.diagnostics().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_did_change_warns_after_quiet_period() {
    let (_dir, mut session, notifier) = setup();
    apply_engine_command(
        EngineCommand::LockFile {
            path: Some("a.rs".to_string()),
        },
        &mut session,
    )
    .unwrap();
    notifier.clear();

    assert!(session.did_change("a.rs"));
    assert!(!session.did_change("other.rs"));

    tokio::time::sleep(Duration::from_millis(2100)).await;

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Warning);
}

#[test]
fn test_save_of_unlocked_file_is_allowed() {
    let (_dir, session, notifier) = setup();
    assert!(session.will_save("free.rs").is_ok());
    assert!(notifier.notices().is_empty());
}

#[test]
fn test_blank_path_reads_as_unlocked() {
    let (_dir, mut session, _notifier) = setup();
    apply_engine_command(
        EngineCommand::LockFile {
            path: Some("a.rs".to_string()),
        },
        &mut session,
    )
    .unwrap();

    assert!(session.will_save("").is_ok());
    assert!(session.will_save("   ").is_ok());
    assert!(!session.did_change(""));

    let result = apply_engine_query(
        EngineQuery::IsFileLocked {
            path: Some(String::new()),
        },
        &session,
    )
    .unwrap();
    assert_eq!(result, EngineQueryResult::IsLocked(false));
}
