//! Template lookup: external store first, then the built-in table
//!
//! The external store is injected at construction, either a directory keyed by
//! template id or an in-memory map. Ids missing from it fall back to the
//! templates embedded in the binary.

use crate::error::{Result, SukError};
use crate::install::paths::normalize_relative;
use crate::registry::builtin;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs;

/// External template source
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Directory containing one file per template id
    Local(PathBuf),
    /// Templates held in memory, keyed by id
    Memory(HashMap<String, String>),
}

/// Which tier served a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateOrigin {
    External,
    Builtin,
}

/// Two-tier template resolver
#[derive(Debug, Clone)]
pub struct TemplateStore {
    source: Option<TemplateSource>,
}

impl TemplateStore {
    pub fn new(source: TemplateSource) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Store backed by a template directory
    pub fn local(root: PathBuf) -> Self {
        Self::new(TemplateSource::Local(root))
    }

    /// Store backed by an in-memory map
    pub fn memory(templates: HashMap<String, String>) -> Self {
        Self::new(TemplateSource::Memory(templates))
    }

    /// Store with no external tier, serving only built-in templates
    pub fn builtin_only() -> Self {
        Self { source: None }
    }

    pub fn source(&self) -> Option<&TemplateSource> {
        self.source.as_ref()
    }

    /// Resolve a template id to its raw text
    pub async fn resolve(&self, id: &str) -> Result<String> {
        self.resolve_with_origin(id).await.map(|(text, _)| text)
    }

    /// Resolve a template id, reporting which tier served it
    pub async fn resolve_with_origin(&self, id: &str) -> Result<(String, TemplateOrigin)> {
        if let Some(text) = self.external(id).await? {
            tracing::debug!("Template '{}' served from external store", id);
            return Ok((text, TemplateOrigin::External));
        }

        match builtin::template(id) {
            Some(text) => {
                tracing::debug!("Template '{}' served from built-in table", id);
                Ok((text.to_string(), TemplateOrigin::Builtin))
            }
            None => Err(SukError::TemplateNotFound { id: id.to_string() }),
        }
    }

    async fn external(&self, id: &str) -> Result<Option<String>> {
        let Some(source) = &self.source else {
            return Ok(None);
        };

        match source {
            TemplateSource::Memory(templates) => Ok(templates.get(id).cloned()),
            TemplateSource::Local(root) => {
                // Template ids are keys, not paths: never let one escape the root
                let relative = normalize_relative(id)
                    .map_err(|_| SukError::TemplateNotFound { id: id.to_string() })?;
                let path = root.join(relative);

                match fs::metadata(&path).await {
                    Ok(meta) if meta.is_file() => {}
                    Ok(_) => return Ok(None),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
                    Err(e) => return Err(SukError::io(path, e)),
                }

                let text = fs::read_to_string(&path)
                    .await
                    .map_err(|e| SukError::io(&path, e))?;
                Ok(Some(text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_external_store_takes_precedence() {
        let store = TemplateStore::memory(HashMap::from([(
            "button.svelte".to_string(),
            "<button>custom</button>".to_string(),
        )]));

        let (text, origin) = store.resolve_with_origin("button.svelte").await.unwrap();
        assert_eq!(text, "<button>custom</button>");
        assert_eq!(origin, TemplateOrigin::External);
    }

    #[tokio::test]
    async fn test_falls_back_to_builtin() {
        let store = TemplateStore::memory(HashMap::new());
        let (text, origin) = store.resolve_with_origin("button-types.ts").await.unwrap();
        assert!(text.contains("Props"));
        assert_eq!(origin, TemplateOrigin::Builtin);
    }

    #[tokio::test]
    async fn test_unknown_everywhere_is_not_found() {
        let store = TemplateStore::builtin_only();
        assert!(matches!(
            store.resolve("nope.svelte").await,
            Err(SukError::TemplateNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_local_directory_store() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("card.svelte"), "<div>card</div>").unwrap();

        let store = TemplateStore::local(dir.path().to_path_buf());
        assert_eq!(store.resolve("card.svelte").await.unwrap(), "<div>card</div>");
        // not on disk, but built in
        assert!(store.resolve("grid.svelte").await.is_ok());
    }

    #[tokio::test]
    async fn test_local_store_rejects_escaping_ids() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("templates");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(dir.path().join("secret.txt"), "secret").unwrap();

        let store = TemplateStore::local(root);
        assert!(matches!(
            store.resolve("../secret.txt").await,
            Err(SukError::TemplateNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_directory_with_template_name_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("flex.svelte")).unwrap();

        let store = TemplateStore::local(dir.path().to_path_buf());
        let (_, origin) = store.resolve_with_origin("flex.svelte").await.unwrap();
        assert_eq!(origin, TemplateOrigin::Builtin);
    }
}
