mod common;

use common::{file, harness_at};
use lockor_core::ProtectionLevel;

#[test]
fn test_status_of_locked_file_per_level() {
    let cases = [
        (ProtectionLevel::Soft, true, true),
        (ProtectionLevel::AiAware, false, false),
        (ProtectionLevel::Hard, false, false),
    ];

    for (level, can_ai_modify, can_save) in cases {
        let mut h = harness_at(level);
        h.permissions.add_file(file("a.rs"), 0o644);
        h.manager.lock(&file("a.rs"));

        let info = h.manager.lock_status_info(Some(&file("a.rs")));
        assert!(info.is_locked);
        assert_eq!(info.protection_level, level);
        assert_eq!(info.can_ai_modify, can_ai_modify, "level {}", level);
        assert_eq!(info.can_save, can_save, "level {}", level);
        assert_eq!(info.locked_file_count, 1);
    }
}

#[test]
fn test_status_of_unlocked_file() {
    let mut h = harness_at(ProtectionLevel::Hard);
    h.permissions.add_file(file("a.rs"), 0o644);
    h.manager.lock(&file("a.rs"));

    let info = h.manager.lock_status_info(Some(&file("free.rs")));
    assert!(!info.is_locked);
    assert!(info.can_ai_modify);
    assert!(info.can_save);
    assert_eq!(info.locked_files, vec![file("a.rs")]);
}

#[test]
fn test_workspace_status_without_file() {
    let h = harness_at(ProtectionLevel::AiAware);

    let info = h.manager.lock_status_info(None);
    assert!(info.file.is_none());
    assert!(!info.is_locked);
    assert_eq!(info.locked_file_count, 0);
}

#[test]
fn test_status_serializes_camel_case() {
    let mut h = harness_at(ProtectionLevel::AiAware);
    h.manager.lock(&file("a.rs"));

    let value = serde_json::to_value(h.manager.lock_status_info(Some(&file("a.rs"))))
        .unwrap_or_default();
    assert_eq!(value["isLocked"], true);
    assert_eq!(value["protectionLevel"], "ai-aware");
    assert_eq!(value["canAIModify"], false);
    assert_eq!(value["lockedFileCount"], 1);
}
