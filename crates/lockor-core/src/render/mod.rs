//! Artifact rendering
//!
//! Every artifact is a pure projection of the locked set and the current
//! protection level. Callers regenerate the whole document on each change.

pub mod diagnostics;
pub mod rule_file;
pub mod status_file;

pub use diagnostics::render_diagnostics;
pub use rule_file::render_rule_file;
pub use status_file::render_status_file;

use std::path::{Component, Path};

/// Path as shown in generated documents
///
/// Paths under `root` are made relative with `/` separators; anything else
/// is returned unchanged.
pub fn display_path(root: Option<&Path>, path: &str) -> String {
    let Some(root) = root else {
        return path.to_string();
    };
    match Path::new(path).strip_prefix(root) {
        Ok(relative) if relative.as_os_str().is_empty() => path.to_string(),
        Ok(relative) => relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path_relative_under_root() {
        let root = Path::new("/proj");
        assert_eq!(display_path(Some(root), "/proj/src/main.rs"), "src/main.rs");
    }

    #[test]
    fn test_display_path_outside_root_unchanged() {
        let root = Path::new("/proj");
        assert_eq!(display_path(Some(root), "/other/a.rs"), "/other/a.rs");
        assert_eq!(display_path(None, "/proj/a.rs"), "/proj/a.rs");
    }
}
