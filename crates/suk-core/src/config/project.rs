//! Project configuration (`suk.json`)

use crate::error::{Result, SukError};
use crate::registry::FileRole;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_COMPONENTS_PATH: &str = "src/lib/components/ui";
pub const DEFAULT_UTILS_PATH: &str = "src/lib/utils";
pub const DEFAULT_TYPES_PATH: &str = "src/lib/types";

/// Tailwind settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindConfig {
    #[serde(default = "default_tailwind_config")]
    pub config: String,

    #[serde(default = "default_tailwind_css")]
    pub css: String,

    #[serde(default = "default_base_color")]
    pub base_color: String,

    /// Rendered into templates as `{{cssVariables}}`
    #[serde(default = "default_true")]
    pub css_variables: bool,
}

impl Default for TailwindConfig {
    fn default() -> Self {
        Self {
            config: default_tailwind_config(),
            css: default_tailwind_css(),
            base_color: default_base_color(),
            css_variables: true,
        }
    }
}

/// Directories each file role is installed into
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aliases {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utils: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<PathBuf>,
}

impl Aliases {
    /// Alias directory for a file role
    pub fn for_role(&self, role: FileRole) -> Option<&Path> {
        match role {
            FileRole::Component => self.components.as_deref(),
            FileRole::Types => self.types.as_deref(),
            FileRole::Utils => self.utils.as_deref(),
        }
    }
}

/// Project-level settings read from `suk.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default = "default_style")]
    pub style: String,

    #[serde(default)]
    pub rsc: bool,

    /// Whether generated code is typed; rendered as `{{typescript}}`
    #[serde(default = "default_true")]
    pub tsx: bool,

    #[serde(default)]
    pub tailwind: TailwindConfig,

    #[serde(default)]
    pub aliases: Aliases,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            schema: None,
            style: default_style(),
            rsc: false,
            tsx: true,
            tailwind: TailwindConfig::default(),
            aliases: Aliases {
                components: Some(PathBuf::from(DEFAULT_COMPONENTS_PATH)),
                utils: Some(PathBuf::from(DEFAULT_UTILS_PATH)),
                types: Some(PathBuf::from(DEFAULT_TYPES_PATH)),
                ui: Some(PathBuf::from(DEFAULT_COMPONENTS_PATH)),
            },
        }
    }
}

impl ProjectConfig {
    /// Read the config file, returning `None` when it does not exist
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SukError::io(path, e)),
        };

        Self::parse(&content, path).map(Some)
    }

    /// Read the config file, failing when it does not exist
    pub fn load_required(path: &Path) -> Result<Self> {
        Self::load(path)?.ok_or_else(|| SukError::ConfigNotFound {
            path: path.to_path_buf(),
        })
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| SukError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Problems that would stop files from being placed
    pub fn validate(&self) -> Vec<String> {
        [FileRole::Component, FileRole::Utils, FileRole::Types]
            .into_iter()
            .filter(|role| {
                self.aliases
                    .for_role(*role)
                    .map_or(true, |p| p.as_os_str().is_empty())
            })
            .map(|role| format!("Missing aliases.{} in configuration", role.alias_key()))
            .collect()
    }

    /// Write pretty-printed JSON to `path`
    pub fn write(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| SukError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| SukError::io(path, e))
    }
}

fn default_style() -> String {
    "default".to_string()
}

fn default_tailwind_config() -> String {
    "tailwind.config.js".to_string()
}

fn default_tailwind_css() -> String {
    "src/app.css".to_string()
}

fn default_base_color() -> String {
    "neutral".to_string()
}

fn default_true() -> bool {
    true
}
