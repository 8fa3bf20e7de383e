use std::path::Path;

use lockor_core_types::ProtectionLevel;

use super::display_path;
use crate::model::LockedFileSet;

/// Render the AI directive document
///
/// Front-matter scopes the rule to the locked files through `globs`; the body
/// lists the files and the directives for the current level. Compliance is up
/// to the assistant reading it.
pub fn render_rule_file(
    set: &LockedFileSet,
    level: ProtectionLevel,
    root: Option<&Path>,
) -> String {
    let files: Vec<String> = set.iter().map(|p| display_path(root, p)).collect();
    let globs: Vec<String> = files.iter().map(|f| glob_literal(f)).collect();

    let mut output = String::new();

    output.push_str("---\n");
    output.push_str(&format!("description: {}\n", description(level)));
    output.push_str(&format!("globs: {}\n", globs.join(",")));
    output.push_str("alwaysApply: true\n");
    output.push_str("---\n\n");

    output.push_str("# Locked Files\n\n");
    output.push_str(&format!("Protection level: **{}**\n\n", level));
    output.push_str("The following files are locked by Lockor:\n\n");
    for file in &files {
        output.push_str(&format!("- `{}`\n", file));
    }
    output.push('\n');

    output.push_str("## Instructions for AI assistants\n\n");
    match level {
        ProtectionLevel::Soft => {
            output.push_str("- Avoid modifying these files.\n");
            output.push_str(
                "- If a change to a locked file is unavoidable, \
                 explain why and ask the user first.\n",
            );
        }
        ProtectionLevel::AiAware | ProtectionLevel::Hard => {
            output.push_str("- Do NOT modify, rename, move or delete these files.\n");
            output.push_str("- Do NOT propose edits that rewrite their contents.\n");
            output.push_str(
                "- If a task requires changing a locked file, \
                 stop and ask the user to unlock it.\n",
            );
        }
    }
    if level.strips_write_permission() {
        output.push_str("- These files are read-only on disk; do not change their permissions.\n");
    }

    output
}

/// Glob matching exactly `path`
///
/// Metacharacters become single-character classes. A comma would split the
/// `globs` list, so it is widened to `?`.
fn glob_literal(path: &str) -> String {
    let mut glob = String::with_capacity(path.len());
    for c in path.chars() {
        match c {
            '*' | '?' | '[' | ']' | '{' | '}' => {
                glob.push('[');
                glob.push(c);
                glob.push(']');
            }
            ',' => glob.push('?'),
            _ => glob.push(c),
        }
    }
    glob
}

fn description(level: ProtectionLevel) -> &'static str {
    match level {
        ProtectionLevel::Soft => "Files locked by Lockor. Avoid modifying them.",
        ProtectionLevel::AiAware | ProtectionLevel::Hard => {
            "Files locked by Lockor. AI assistants must not modify them."
        }
    }
}
