//! Error types for component installation
//!
//! [`SukError`] carries every failure the install pipeline can report. Some
//! variants are fatal to a run (`RegistryInvalid`), one is recovered locally
//! (`RegistryUnavailable` falls back to the built-in registry), and the rest
//! are unit-scoped: they are recorded against a single component or file and
//! the batch carries on.

use std::path::PathBuf;
use thiserror::Error;

use crate::registry::FileRole;

/// Core error type for registry, template and filesystem operations
#[derive(Debug, Error)]
pub enum SukError {
    /// No registry source could be found or parsed
    #[error("Registry unavailable at {}: {}", .path.display(), .reason)]
    RegistryUnavailable { path: PathBuf, reason: String },

    /// The registry parsed but failed structural validation
    #[error("Invalid registry: {reason}")]
    RegistryInvalid { reason: String },

    /// Requested component is not in the registry
    #[error("Unknown component: {name}")]
    UnknownComponent { name: String },

    /// Template id is unknown to both the external store and the built-in table
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String },

    /// Manifest path is absolute or escapes its alias directory
    #[error("Invalid manifest path '{path}': {reason}")]
    InvalidManifestPath { path: String, reason: String },

    /// No alias directory is configured for the file's role
    #[error("No alias configured for '{}' files (aliases.{})", .role, .role.alias_key())]
    MissingAlias { role: FileRole },

    /// Target file exists and overwrite was not requested
    #[error("File {} already exists. Use --force to overwrite.", .path.display())]
    FileConflict { path: PathBuf },

    /// Project configuration file is missing
    #[error("Configuration not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Project configuration file is not valid JSON for the expected shape
    #[error("Failed to parse {}: {}", .path.display(), .message)]
    ConfigParse { path: PathBuf, message: String },

    /// Filesystem failure (mkdir, write, remove)
    #[error("I/O error at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SukError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, SukError>;
