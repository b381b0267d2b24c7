//! Template resolution and rendering
//!
//! This module provides:
//! - A two-tier template store (injected external source, then built-ins)
//! - Placeholder rendering over a closed set of tokens
//! - A registry audit reporting templates no tier can serve

pub mod render;
pub mod store;

use crate::error::SukError;
use crate::registry::Registry;

pub use render::{render, Placeholder, RenderContext};
pub use store::{TemplateOrigin, TemplateSource, TemplateStore};

/// A manifest entry whose template could not be resolved
#[derive(Debug)]
pub struct MissingTemplate {
    pub component: String,
    pub template: String,
    pub error: SukError,
}

/// Resolve every template referenced by the registry and collect the failures
pub async fn audit(registry: &Registry, store: &TemplateStore) -> Vec<MissingTemplate> {
    let mut missing = Vec::new();

    for def in registry.iter() {
        for file in &def.files {
            if let Err(error) = store.resolve(&file.template).await {
                missing.push(MissingTemplate {
                    component: def.name.clone(),
                    template: file.template.clone(),
                    error,
                });
            }
        }
    }

    missing
}
