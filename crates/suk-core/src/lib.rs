//! SUK Core - vendoring UI component sources into a project
//!
//! Components live in a registry: a JSON catalog mapping each component name
//! to the files it contributes. Installing a component resolves each file's
//! template, substitutes a fixed set of placeholders, maps the file to a
//! directory configured in the project's `suk.json`, and writes it under a
//! conflict policy.
//!
//! # Architecture
//!
//! - **Sources** - `registry` (catalog with built-in fallback) and `templates`
//!   (two-tier template store plus the placeholder renderer)
//! - **Install** - `install::paths` (pure path mapping), `install::materialize`
//!   (conflict-aware writes) and `install::Installer` (batch orchestration
//!   with per-component outcomes)
//! - **CLI/TUI Interface** - optional cliclack-based commands (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based commands in [`tui`]
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use suk_core::{Installer, ProjectConfig, Registry, TemplateStore};
//!
//! let (registry, _) = Registry::resolve(Some(Path::new("registry/index.json"))).await?;
//! let templates = TemplateStore::local("registry/templates/svelte".into());
//! let config = ProjectConfig::load_required(Path::new("suk.json"))?;
//!
//! let result = Installer::new(&registry, &config, &templates, ".")
//!     .install(&["button"], false)
//!     .await;
//! assert!(result.is_success());
//! ```

pub mod config;
pub mod error;
pub mod install;
pub mod product;
pub mod registry;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::ProjectConfig;
pub use error::{Result, SukError};
pub use install::{BatchResult, ComponentOutcome, Installer};
pub use product::ProductConfig;
pub use registry::{ComponentDefinition, FileManifestEntry, FileRole, Registry};
pub use templates::{TemplateSource, TemplateStore};
