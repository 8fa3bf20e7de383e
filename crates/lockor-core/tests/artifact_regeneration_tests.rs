#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{file, harness, harness_at, harness_with};
use lockor_core::logging_facility::test_capture::init_test_capture;
use lockor_core::model::DiagnosticSeverity;
use lockor_core::schema::EVENT_DEGRADED;
use lockor_core::{ArtifactKind, ProtectionLevel, Settings};

#[test]
fn test_lock_writes_rule_and_status_documents() {
    let mut h = harness();
    h.manager.lock(&file("src/config.js"));

    let rule = h.artifacts.document(ArtifactKind::RuleFile).unwrap();
    assert!(rule.starts_with("---\n"));
    assert!(rule.contains("globs: src/config.js\n"));
    assert!(rule.contains("alwaysApply: true"));
    assert!(rule.contains("- `src/config.js`"));
    assert!(rule.contains("Do NOT modify"));

    let status = h.artifacts.document(ArtifactKind::StatusFile).unwrap();
    assert!(status.contains("# Lockor Status"));
    assert!(status.contains("**Locked files**: 1"));
}

#[test]
fn test_soft_rule_document_is_advisory() {
    let mut h = harness_at(ProtectionLevel::Soft);
    h.manager.lock(&file("a.rs"));

    let rule = h.artifacts.document(ArtifactKind::RuleFile).unwrap();
    assert!(rule.contains("Avoid modifying"));
    assert!(!rule.contains("read-only on disk"));
}

#[test]
fn test_documents_removed_when_set_becomes_empty() {
    let mut h = harness();
    h.manager.lock(&file("a.rs"));
    h.manager.unlock(&file("a.rs"));

    assert!(h.artifacts.document(ArtifactKind::RuleFile).is_none());
    assert!(h.artifacts.document(ArtifactKind::StatusFile).is_none());
    assert!(h.notifier.diagnostics().is_empty());
}

#[test]
fn test_rule_failure_does_not_block_status_or_diagnostics() {
    let capture = init_test_capture();
    let mut h = harness();
    h.artifacts.fail_on(ArtifactKind::RuleFile);

    let outcome = h.manager.lock(&file("a.rs"));

    assert!(h.manager.is_locked(&file("a.rs")));
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].code(), "ERR_ARTIFACT");
    assert!(h.artifacts.document(ArtifactKind::StatusFile).is_some());
    assert_eq!(h.notifier.diagnostics().len(), 1);

    assert!(
        capture.count_events(|e| {
            e.op.as_deref() == Some("write_artifact")
                && e.event.as_deref() == Some(EVENT_DEGRADED)
                && e.err_code() == Some("ERR_ARTIFACT")
        }) >= 1
    );
}

#[test]
fn test_diagnostics_track_locked_set() {
    let mut h = harness_at(ProtectionLevel::AiAware);
    h.manager.lock(&file("a.rs"));
    h.manager.lock(&file("b.rs"));

    let diags = h.notifier.diagnostics();
    assert_eq!(diags.len(), 2);
    assert!(diags.iter().all(|d| d.severity == DiagnosticSeverity::Error));
    assert!(diags.iter().all(|d| d.line == 0 && d.character == 0));

    h.manager.unlock(&file("a.rs"));
    let diags = h.notifier.diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].path, file("b.rs"));
}

#[test]
fn test_visible_markers_off_publishes_empty_diagnostics() {
    let mut settings = Settings::default();
    settings.add_visible_markers = false;
    let mut h = harness_with(settings, Some(common::ROOT.into()));

    h.manager.lock(&file("a.rs"));

    assert!(h.notifier.diagnostics().is_empty());
    assert!(h.notifier.diagnostics_publications() >= 1);
    assert!(h.artifacts.document(ArtifactKind::RuleFile).is_some());
}

#[test]
fn test_level_change_regenerates_documents() {
    let mut h = harness_at(ProtectionLevel::Soft);
    h.manager.lock(&file("a.rs"));
    assert!(h
        .artifacts
        .document(ArtifactKind::RuleFile)
        .unwrap()
        .contains("Avoid modifying"));

    h.config.set_protection_level(ProtectionLevel::AiAware);
    h.manager.apply_protection_level_change();

    let rule = h.artifacts.document(ArtifactKind::RuleFile).unwrap();
    assert!(rule.contains("Do NOT modify"));
    assert_eq!(
        h.notifier.diagnostics()[0].severity,
        DiagnosticSeverity::Error
    );
}

#[test]
fn test_paths_outside_root_are_listed_verbatim() {
    let mut h = harness();
    h.manager.lock("/elsewhere/x.rs");

    let rule = h.artifacts.document(ArtifactKind::RuleFile).unwrap();
    assert!(rule.contains("- `/elsewhere/x.rs`"));
}
