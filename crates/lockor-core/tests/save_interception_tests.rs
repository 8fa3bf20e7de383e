#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{file, harness_at};
use lockor_core::model::{NoticeAction, NoticeLevel};
use lockor_core::{LockorError, ProtectionLevel, SaveDecision};

#[test]
fn test_ai_aware_vetoes_save_of_locked_file() {
    let mut h = harness_at(ProtectionLevel::AiAware);
    h.manager.lock("/proj/config.js");
    h.notifier.clear();

    let err = h.manager.will_save("/proj/config.js").unwrap_err();

    assert!(matches!(
        err,
        LockorError::SaveBlocked {
            level: ProtectionLevel::AiAware,
            ..
        }
    ));
    assert_eq!(err.code(), "ERR_SAVE_BLOCKED");

    let notices = h.notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].action, Some(NoticeAction::Unlock));
    assert_eq!(notices[0].path.as_deref(), Some("/proj/config.js"));
}

#[test]
fn test_hard_vetoes_save() {
    let mut h = harness_at(ProtectionLevel::Hard);
    h.permissions.add_file(file("a.rs"), 0o644);
    h.manager.lock(&file("a.rs"));

    assert_eq!(
        h.manager.evaluate_save(&file("a.rs")),
        SaveDecision::Veto {
            level: ProtectionLevel::Hard
        }
    );
    assert!(h.manager.will_save(&file("a.rs")).is_err());
}

#[test]
fn test_soft_allows_save_with_warning() {
    let mut h = harness_at(ProtectionLevel::Soft);
    h.manager.lock(&file("a.rs"));
    h.notifier.clear();

    assert!(h.manager.will_save(&file("a.rs")).is_ok());

    let notices = h.notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Warning);
    assert_eq!(notices[0].action, Some(NoticeAction::Unlock));
}

#[test]
fn test_unlocked_file_saves_silently() {
    let h = harness_at(ProtectionLevel::Hard);

    assert_eq!(h.manager.evaluate_save(&file("free.rs")), SaveDecision::Allow);
    assert!(h.manager.will_save(&file("free.rs")).is_ok());
    assert!(h.notifier.notices().is_empty());
}

#[test]
fn test_level_is_read_fresh_on_each_save() {
    let mut h = harness_at(ProtectionLevel::AiAware);
    h.manager.lock(&file("a.rs"));
    assert!(h.manager.will_save(&file("a.rs")).is_err());

    h.config.set_protection_level(ProtectionLevel::Soft);
    assert!(h.manager.will_save(&file("a.rs")).is_ok());
}

#[test]
fn test_veto_notice_shown_with_notifications_off() {
    let mut h = harness_at(ProtectionLevel::AiAware);
    let mut settings = lockor_core::Settings::default();
    settings.show_notifications = false;
    h.config.set(settings);
    h.manager.lock(&file("a.rs"));

    assert!(h.manager.will_save(&file("a.rs")).is_err());

    let notices = h.notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
}

#[test]
fn test_unlock_then_save_succeeds() {
    let mut h = harness_at(ProtectionLevel::AiAware);
    h.manager.lock(&file("a.rs"));
    h.manager.unlock(&file("a.rs"));

    assert!(h.manager.will_save(&file("a.rs")).is_ok());
}
