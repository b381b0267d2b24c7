//! Component registry loading and lookup
//!
//! A registry is a JSON object mapping component name to [`ComponentDefinition`].
//! It is loaded once per run and never mutated afterwards. Loading either yields
//! a fully validated registry or an error; a partially valid registry is never
//! exposed.

pub mod builtin;
pub mod manifest;

use crate::error::{Result, SukError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

pub use manifest::{ComponentDefinition, FileManifestEntry, FileRole};

/// Where the active registry came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryOrigin {
    External(PathBuf),
    Builtin,
}

/// Validated, read-only component catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    components: BTreeMap<String, ComponentDefinition>,
}

impl Registry {
    /// Load and validate a registry from an `index.json` file.
    ///
    /// A missing, unreadable or syntactically broken file is `RegistryUnavailable`;
    /// well-formed JSON that does not describe a valid registry is `RegistryInvalid`.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| SukError::RegistryUnavailable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| SukError::RegistryUnavailable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Self::from_value(value)
    }

    /// Build a registry from already-parsed JSON, applying all validation rules
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let components: BTreeMap<String, ComponentDefinition> = serde_json::from_value(value)
            .map_err(|e| SukError::RegistryInvalid {
                reason: e.to_string(),
            })?;

        for (key, def) in &components {
            if def.name != *key {
                return Err(SukError::RegistryInvalid {
                    reason: format!("entry '{}' declares name '{}'", key, def.name),
                });
            }
            if def.files.is_empty() {
                return Err(SukError::RegistryInvalid {
                    reason: format!("component '{}' has no files", key),
                });
            }
        }

        Ok(Self { components })
    }

    /// Parse a registry from JSON text (used for the embedded registry and tests)
    pub fn from_json(content: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| SukError::RegistryInvalid {
                reason: e.to_string(),
            })?;
        Self::from_value(value)
    }

    /// The registry compiled into the binary
    pub fn builtin() -> Result<Self> {
        builtin::load_registry()
    }

    /// Load the registry at `path`, falling back to the built-in registry when no
    /// external source is usable. An invalid external registry is still an error.
    pub async fn resolve(path: Option<&Path>) -> Result<(Self, RegistryOrigin)> {
        let Some(path) = path else {
            tracing::debug!("No registry directory configured, using built-in registry");
            return Ok((Self::builtin()?, RegistryOrigin::Builtin));
        };

        match Self::load(path).await {
            Ok(registry) => {
                tracing::debug!(
                    "Loaded {} components from {}",
                    registry.len(),
                    path.display()
                );
                Ok((registry, RegistryOrigin::External(path.to_path_buf())))
            }
            Err(SukError::RegistryUnavailable { path, reason }) => {
                tracing::warn!(
                    "Registry unavailable at {} ({}), using built-in registry",
                    path.display(),
                    reason
                );
                Ok((Self::builtin()?, RegistryOrigin::Builtin))
            }
            Err(e) => Err(e),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&ComponentDefinition> {
        self.components.get(name)
    }

    /// Registered component names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.components.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentDefinition> {
        self.components.values()
    }

    /// Components grouped by display category, both levels sorted
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&ComponentDefinition>> {
        let mut groups: BTreeMap<&str, Vec<&ComponentDefinition>> = BTreeMap::new();
        for def in self.components.values() {
            groups.entry(def.display_category()).or_default().push(def);
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_COMPONENTS: &str = r#"{
        "button": {
            "name": "button",
            "description": "Button",
            "category": "form",
            "files": [
                { "path": "button.svelte", "template": "button.svelte", "type": "component" },
                { "path": "button.ts", "template": "button-types.ts", "type": "types" }
            ]
        },
        "stack": {
            "name": "stack",
            "description": "Stack",
            "files": [
                { "path": "stack.svelte", "template": "stack.svelte", "type": "component" }
            ]
        }
    }"#;

    #[test]
    fn test_lookup_and_names() {
        let registry = Registry::from_json(TWO_COMPONENTS).unwrap();
        assert_eq!(registry.names(), vec!["button", "stack"]);
        assert_eq!(registry.lookup("button").unwrap().files.len(), 2);
        assert!(registry.lookup("card").is_none());
    }

    #[test]
    fn test_by_category_uses_general_for_missing_category() {
        let registry = Registry::from_json(TWO_COMPONENTS).unwrap();
        let groups = registry.by_category();
        assert_eq!(groups["form"][0].name, "button");
        assert_eq!(groups["general"][0].name, "stack");
    }

    #[test]
    fn test_name_mismatch_is_invalid() {
        let json = r#"{ "button": { "name": "btn", "files": [
            { "path": "b.svelte", "template": "b.svelte", "type": "component" }
        ] } }"#;
        assert!(matches!(
            Registry::from_json(json),
            Err(SukError::RegistryInvalid { .. })
        ));
    }

    #[test]
    fn test_empty_files_is_invalid() {
        let json = r#"{ "button": { "name": "button", "files": [] } }"#;
        assert!(matches!(
            Registry::from_json(json),
            Err(SukError::RegistryInvalid { .. })
        ));
    }

    #[test]
    fn test_unknown_file_type_is_invalid() {
        let json = r#"{ "button": { "name": "button", "files": [
            { "path": "b.css", "template": "b.css", "type": "styles" }
        ] } }"#;
        assert!(matches!(
            Registry::from_json(json),
            Err(SukError::RegistryInvalid { .. })
        ));
    }

    #[test]
    fn test_one_bad_entry_rejects_whole_registry() {
        let json = r#"{
            "good": { "name": "good", "files": [
                { "path": "g.svelte", "template": "g.svelte", "type": "component" }
            ] },
            "bad": { "name": "bad", "files": [] }
        }"#;
        assert!(Registry::from_json(json).is_err());
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let result = Registry::load(&dir.path().join("index.json")).await;
        assert!(matches!(result, Err(SukError::RegistryUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_broken_json_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Registry::load(&path).await,
            Err(SukError::RegistryUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("index.json");
        let (registry, origin) = Registry::resolve(Some(&missing)).await.unwrap();
        assert_eq!(origin, RegistryOrigin::Builtin);
        assert!(registry.contains("button"));
    }

    #[tokio::test]
    async fn test_resolve_surfaces_invalid_registry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        std::fs::write(&path, r#"{ "x": { "name": "y", "files": [] } }"#).unwrap();
        assert!(matches!(
            Registry::resolve(Some(&path)).await,
            Err(SukError::RegistryInvalid { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_prefers_external_registry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        std::fs::write(&path, TWO_COMPONENTS).unwrap();
        let (registry, origin) = Registry::resolve(Some(&path)).await.unwrap();
        assert_eq!(origin, RegistryOrigin::External(path));
        assert!(registry.contains("stack"));
    }
}
