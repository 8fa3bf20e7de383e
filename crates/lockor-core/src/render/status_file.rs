use std::path::Path;

use chrono::{DateTime, Utc};
use lockor_core_types::ProtectionLevel;

use super::display_path;
use crate::model::LockedFileSet;

/// Render the human-readable workspace status document
pub fn render_status_file(
    set: &LockedFileSet,
    level: ProtectionLevel,
    root: Option<&Path>,
    generated_at: DateTime<Utc>,
) -> String {
    let mut output = String::new();

    output.push_str("# Lockor Status\n\n");
    output.push_str(&format!("**Protection level**: {}\n\n", level));
    output.push_str(&format!("**Locked files**: {}\n\n", set.len()));

    for path in set.iter() {
        output.push_str(&format!("- `{}`\n", display_path(root, path)));
    }
    if !set.is_empty() {
        output.push('\n');
    }

    output.push_str("## Protection levels\n\n");
    for candidate in ProtectionLevel::ALL {
        let marker = if candidate == level { " (active)" } else { "" };
        output.push_str(&format!(
            "- **{}**{}: {}\n",
            candidate,
            marker,
            explain(candidate)
        ));
    }
    output.push('\n');

    output.push_str(&format!(
        "_Last updated: {}_\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn explain(level: ProtectionLevel) -> &'static str {
    match level {
        ProtectionLevel::Soft => {
            "saves are allowed with a warning; AI assistants are asked to avoid changes"
        }
        ProtectionLevel::AiAware => {
            "saves are blocked; AI assistants are told not to modify locked files"
        }
        ProtectionLevel::Hard => "saves are blocked and write permission is removed on disk",
    }
}
