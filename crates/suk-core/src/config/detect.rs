//! Project detection for `init`

use std::path::Path;

/// What was found in a project root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectInfo {
    pub package_json: bool,
    pub svelte_config: bool,
    pub tailwind_config: bool,
}

impl ProjectInfo {
    /// A package manifest is the minimum for installing components
    pub fn is_node_project(&self) -> bool {
        self.package_json
    }
}

/// Look for the marker files of a Svelte + Tailwind project
pub fn detect_project(root: &Path) -> ProjectInfo {
    let info = ProjectInfo {
        package_json: root.join("package.json").is_file(),
        svelte_config: has_any(root, &["svelte.config.js", "svelte.config.ts"]),
        tailwind_config: has_any(
            root,
            &["tailwind.config.js", "tailwind.config.ts", "tailwind.config.cjs"],
        ),
    };
    tracing::debug!("Detected project at {}: {:?}", root.display(), info);
    info
}

fn has_any(root: &Path, names: &[&str]) -> bool {
    names.iter().any(|name| root.join(name).is_file())
}
