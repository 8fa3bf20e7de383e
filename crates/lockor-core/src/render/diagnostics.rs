use lockor_core_types::ProtectionLevel;

use crate::model::{DiagnosticSeverity, LockDiagnostic, LockedFileSet};

pub const DIAGNOSTIC_SOURCE: &str = "lockor";

/// One diagnostic per locked file, anchored at the start of the document
pub fn render_diagnostics(set: &LockedFileSet, level: ProtectionLevel) -> Vec<LockDiagnostic> {
    let severity = if level.blocks_saves() {
        DiagnosticSeverity::Error
    } else {
        DiagnosticSeverity::Warning
    };

    set.iter()
        .map(|path| LockDiagnostic {
            path: path.to_string(),
            line: 0,
            character: 0,
            severity,
            message: format!(
                "This file is locked by Lockor (protection level: {}). Unlock it before editing.",
                level
            ),
            source: DIAGNOSTIC_SOURCE.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_diagnostic_per_file_at_origin() {
        let set: LockedFileSet = ["/a".to_string(), "/b".to_string()].into_iter().collect();
        let diags = render_diagnostics(&set, ProtectionLevel::AiAware);

        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.line == 0 && d.character == 0));
        assert!(diags.iter().all(|d| d.severity == DiagnosticSeverity::Error));
    }

    #[test]
    fn test_soft_level_warns() {
        let set: LockedFileSet = ["/a".to_string()].into_iter().collect();
        let diags = render_diagnostics(&set, ProtectionLevel::Soft);
        assert_eq!(diags[0].severity, DiagnosticSeverity::Warning);
    }
}
