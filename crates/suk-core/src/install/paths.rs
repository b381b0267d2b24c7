//! Mapping manifest entries to target paths
//!
//! Pure functions, no filesystem access. A manifest path must stay inside its
//! alias directory: absolute paths, drive prefixes and `..` segments are
//! rejected rather than normalised away.

use crate::config::Aliases;
use crate::error::{Result, SukError};
use crate::registry::FileManifestEntry;
use std::path::{Path, PathBuf};

/// Validate a relative path and return it with `.` and empty segments removed.
///
/// Both `/` and `\` are treated as separators so a manifest behaves the same on
/// every platform.
pub fn normalize_relative(path: &str) -> std::result::Result<PathBuf, String> {
    if path.trim().is_empty() {
        return Err("path is empty".to_string());
    }
    if path.starts_with('/') || path.starts_with('\\') || Path::new(path).is_absolute() {
        return Err("absolute paths are not allowed".to_string());
    }
    if path.ends_with('/') || path.ends_with('\\') {
        return Err("path does not name a file".to_string());
    }

    let mut normalized = PathBuf::new();
    for (i, segment) in path.split(['/', '\\']).enumerate() {
        match segment {
            "" | "." => continue,
            ".." => return Err("parent directory segments are not allowed".to_string()),
            s if i == 0 && s.ends_with(':') => {
                return Err("drive prefixes are not allowed".to_string())
            }
            s => normalized.push(s),
        }
    }

    if normalized.as_os_str().is_empty() {
        return Err("path does not name a file".to_string());
    }

    Ok(normalized)
}

/// Target path for a manifest entry: its role's alias joined with its path
pub fn map_target(aliases: &Aliases, entry: &FileManifestEntry) -> Result<PathBuf> {
    let relative =
        normalize_relative(&entry.path).map_err(|reason| SukError::InvalidManifestPath {
            path: entry.path.clone(),
            reason,
        })?;

    let alias_root = aliases
        .for_role(entry.role)
        .ok_or(SukError::MissingAlias { role: entry.role })?;

    Ok(alias_root.join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FileRole;

    fn aliases() -> Aliases {
        Aliases {
            components: Some(PathBuf::from("src/lib/components/ui")),
            utils: None,
            types: Some(PathBuf::from("src/lib/types")),
            ui: None,
        }
    }

    fn entry(path: &str, role: FileRole) -> FileManifestEntry {
        FileManifestEntry {
            path: path.to_string(),
            template: "t".to_string(),
            role,
        }
    }

    #[test]
    fn test_maps_by_role() {
        let a = aliases();
        assert_eq!(
            map_target(&a, &entry("button.svelte", FileRole::Component)).unwrap(),
            PathBuf::from("src/lib/components/ui/button.svelte")
        );
        assert_eq!(
            map_target(&a, &entry("button.ts", FileRole::Types)).unwrap(),
            PathBuf::from("src/lib/types/button.ts")
        );
    }

    #[test]
    fn test_nested_and_dot_segments() {
        let a = aliases();
        assert_eq!(
            map_target(&a, &entry("./card/./header.svelte", FileRole::Component)).unwrap(),
            PathBuf::from("src/lib/components/ui/card/header.svelte")
        );
    }

    #[test]
    fn test_rejects_parent_traversal() {
        let a = aliases();
        for path in ["../evil.ts", "a/../../evil.ts", "a/..", "..\\evil.ts"] {
            assert!(
                matches!(
                    map_target(&a, &entry(path, FileRole::Types)),
                    Err(SukError::InvalidManifestPath { .. })
                ),
                "accepted {}",
                path
            );
        }
    }

    #[test]
    fn test_rejects_absolute_paths() {
        let a = aliases();
        for path in ["/etc/passwd", "\\windows\\x", "C:\\x.ts", "C:/x.ts"] {
            assert!(
                matches!(
                    map_target(&a, &entry(path, FileRole::Types)),
                    Err(SukError::InvalidManifestPath { .. })
                ),
                "accepted {}",
                path
            );
        }
    }

    #[test]
    fn test_rejects_empty_paths() {
        let a = aliases();
        for path in ["", "  ", ".", "./", "dir/", "card\\", "a/b/"] {
            assert!(map_target(&a, &entry(path, FileRole::Types)).is_err());
        }
    }

    #[test]
    fn test_missing_alias() {
        let a = aliases();
        assert!(matches!(
            map_target(&a, &entry("cn.ts", FileRole::Utils)),
            Err(SukError::MissingAlias {
                role: FileRole::Utils
            })
        ));
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let a = aliases();
        let e = entry("grid/grid.svelte", FileRole::Component);
        assert_eq!(map_target(&a, &e).unwrap(), map_target(&a, &e).unwrap());
    }

    #[test]
    fn test_dots_inside_names_are_fine() {
        assert_eq!(
            normalize_relative("a..b/c...ts").unwrap(),
            PathBuf::from("a..b/c...ts")
        );
    }
}
