//! Component definition types as they appear in a registry `index.json`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a file within a component, selecting the alias directory it lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    Component,
    Types,
    Utils,
}

impl FileRole {
    /// Key under `aliases` in the project configuration
    pub fn alias_key(&self) -> &'static str {
        match self {
            FileRole::Component => "components",
            FileRole::Types => "types",
            FileRole::Utils => "utils",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileRole::Component => "component",
            FileRole::Types => "types",
            FileRole::Utils => "utils",
        }
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One file a component contributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileManifestEntry {
    /// Path relative to the role's alias directory
    pub path: String,

    /// Template identifier, looked up in the template store
    pub template: String,

    /// Which alias directory the file is written to
    #[serde(rename = "type")]
    pub role: FileRole,
}

/// A component as declared in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    /// Identifier, must match the registry key
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Free-form grouping tag used by `list`
    #[serde(default)]
    pub category: String,

    /// Runtime packages or components this one relies on (informational only)
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Dev-time packages (informational only)
    #[serde(default)]
    pub dev_dependencies: Vec<String>,

    /// Files to materialize, in order
    pub files: Vec<FileManifestEntry>,

    /// Approximate bundle size, e.g. "3.2kB"
    #[serde(default)]
    pub size: Option<String>,

    /// Exported symbols
    #[serde(default)]
    pub exports: Vec<String>,
}

impl ComponentDefinition {
    /// Category for display, `general` when unset
    pub fn display_category(&self) -> &str {
        if self.category.trim().is_empty() {
            "general"
        } else {
            &self.category
        }
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty() || !self.dev_dependencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_definition_with_camel_case_fields() {
        let json = r#"{
            "name": "button",
            "description": "Interactive button",
            "category": "form",
            "dependencies": [],
            "devDependencies": ["@lucide/svelte"],
            "files": [
                { "path": "button.svelte", "template": "button.svelte", "type": "component" }
            ],
            "size": "3.2kB",
            "exports": ["Button"]
        }"#;

        let def: ComponentDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.dev_dependencies, vec!["@lucide/svelte"]);
        assert_eq!(def.files[0].role, FileRole::Component);
        assert_eq!(def.size.as_deref(), Some("3.2kB"));
        assert!(def.has_dependencies());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let json = r#"{ "path": "x.css", "template": "x.css", "type": "styles" }"#;
        assert!(serde_json::from_str::<FileManifestEntry>(json).is_err());
    }

    #[test]
    fn test_alias_keys() {
        assert_eq!(FileRole::Component.alias_key(), "components");
        assert_eq!(FileRole::Types.alias_key(), "types");
        assert_eq!(FileRole::Utils.alias_key(), "utils");
    }

    #[test]
    fn test_display_category_defaults_to_general() {
        let def = ComponentDefinition {
            name: "x".to_string(),
            description: String::new(),
            category: String::new(),
            dependencies: vec![],
            dev_dependencies: vec![],
            files: vec![],
            size: None,
            exports: vec![],
        };
        assert_eq!(def.display_category(), "general");
    }
}
