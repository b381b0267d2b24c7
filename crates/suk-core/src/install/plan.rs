//! Dry-run planning: what `install` would write, without touching the disk

use super::paths::map_target;
use super::pipeline::Installer;
use crate::error::SukError;
use crate::registry::FileManifestEntry;
use std::path::PathBuf;

/// A manifest entry and where it would land
#[derive(Debug)]
pub struct PlannedFile {
    pub entry: FileManifestEntry,
    /// Mapped path relative to the project root, or why it cannot be mapped
    pub target: Result<PathBuf, SukError>,
    /// A file already exists at the target
    pub exists: bool,
}

/// Plan for one requested component
#[derive(Debug)]
pub enum ComponentPlan {
    Install {
        description: String,
        /// Informational only; dependencies are never installed automatically
        dependencies: Vec<String>,
        dev_dependencies: Vec<String>,
        files: Vec<PlannedFile>,
    },
    UnknownComponent,
}

#[derive(Debug)]
pub struct PlannedComponent {
    pub name: String,
    pub plan: ComponentPlan,
}

impl Installer<'_> {
    /// Describe what installing `names` would do
    pub fn plan<S: AsRef<str>>(&self, names: &[S]) -> Vec<PlannedComponent> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                let plan = match self.registry().lookup(name) {
                    None => ComponentPlan::UnknownComponent,
                    Some(def) => ComponentPlan::Install {
                        description: def.description.clone(),
                        dependencies: def.dependencies.clone(),
                        dev_dependencies: def.dev_dependencies.clone(),
                        files: def
                            .files
                            .iter()
                            .map(|entry| {
                                let target = map_target(&self.config().aliases, entry);
                                let exists = target
                                    .as_ref()
                                    .map(|t| self.root().join(t).exists())
                                    .unwrap_or(false);
                                PlannedFile {
                                    entry: entry.clone(),
                                    target,
                                    exists,
                                }
                            })
                            .collect(),
                    },
                };
                PlannedComponent {
                    name: name.to_string(),
                    plan,
                }
            })
            .collect()
    }
}
