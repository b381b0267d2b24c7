//! Built-in registry and templates embedded at compile time
//!
//! These keep the tool usable when no registry directory is packaged alongside
//! it: the registry falls back to `builtin/registry.json` and the template
//! store falls back to `builtin/templates/svelte/`.

use super::Registry;
use crate::error::{Result, SukError};
use include_dir::{include_dir, Dir};

static BUILTIN_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/builtin");

const REGISTRY_FILE: &str = "registry.json";
const TEMPLATE_DIR: &str = "templates/svelte";

/// Parse the embedded registry with the same validation as an external one
pub fn load_registry() -> Result<Registry> {
    let file = BUILTIN_DIR
        .get_file(REGISTRY_FILE)
        .ok_or_else(|| SukError::RegistryInvalid {
            reason: format!("built-in {} is missing", REGISTRY_FILE),
        })?;

    let content = file.contents_utf8().ok_or_else(|| SukError::RegistryInvalid {
        reason: format!("built-in {} is not valid UTF-8", REGISTRY_FILE),
    })?;

    Registry::from_json(content)
}

/// Look up a built-in template by id
pub fn template(id: &str) -> Option<&'static str> {
    BUILTIN_DIR
        .get_file(format!("{}/{}", TEMPLATE_DIR, id))
        .and_then(|f| f.contents_utf8())
}

/// Ids of every built-in template
pub fn template_ids() -> Vec<&'static str> {
    BUILTIN_DIR
        .get_dir(TEMPLATE_DIR)
        .map(|dir| {
            dir.files()
                .filter_map(|f| f.path().file_name().and_then(|n| n.to_str()))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = load_registry().unwrap();
        for name in ["button", "container", "grid", "flex"] {
            assert!(registry.contains(name), "missing built-in '{}'", name);
        }
    }

    #[test]
    fn test_every_builtin_component_has_builtin_templates() {
        let registry = load_registry().unwrap();
        for def in registry.iter() {
            for file in &def.files {
                assert!(
                    template(&file.template).is_some(),
                    "no built-in template '{}' for '{}'",
                    file.template,
                    def.name
                );
            }
        }
    }

    #[test]
    fn test_unknown_template_is_none() {
        assert!(template("does-not-exist.svelte").is_none());
    }

    #[test]
    fn test_template_ids_lists_button() {
        let ids = template_ids();
        assert!(ids.contains(&"button.svelte"));
        assert!(ids.contains(&"button-types.ts"));
    }
}
