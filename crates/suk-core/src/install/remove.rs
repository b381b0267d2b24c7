//! Removing installed component files
//!
//! Uses the same manifest-to-path mapping as installation. Only files are
//! deleted; directories are left in place even when they end up empty.

use super::paths::map_target;
use super::pipeline::{FileFailure, Installer};
use crate::error::SukError;
use crate::registry::ComponentDefinition;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Result of removing one component
#[derive(Debug)]
pub enum RemoveOutcome {
    Removed {
        removed: Vec<PathBuf>,
    },
    PartiallyRemoved {
        removed: Vec<PathBuf>,
        failures: Vec<FileFailure>,
    },
    Failed {
        failures: Vec<FileFailure>,
    },
    /// None of the component's files were present
    NotInstalled,
    UnknownComponent,
}

impl RemoveOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            RemoveOutcome::Removed { .. } | RemoveOutcome::NotInstalled
        )
    }
}

#[derive(Debug)]
pub struct RemoveReport {
    pub name: String,
    pub outcome: RemoveOutcome,
}

impl Installer<'_> {
    /// Delete the files each named component maps to, continuing past failures
    pub async fn remove<S: AsRef<str>>(&self, names: &[S]) -> Vec<RemoveReport> {
        let mut reports = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            let outcome = match self.registry().lookup(name) {
                Some(def) => self.remove_component(def).await,
                None => RemoveOutcome::UnknownComponent,
            };
            reports.push(RemoveReport {
                name: name.to_string(),
                outcome,
            });
        }

        reports
    }

    async fn remove_component(&self, def: &ComponentDefinition) -> RemoveOutcome {
        let mut removed = Vec::new();
        let mut failures = Vec::new();

        for entry in &def.files {
            let target = match map_target(&self.config().aliases, entry) {
                Ok(target) => target,
                Err(cause) => {
                    failures.push(FileFailure {
                        component: def.name.clone(),
                        file: entry.clone(),
                        cause,
                    });
                    continue;
                }
            };

            let path = self.root().join(&target);
            match fs::remove_file(&path).await {
                Ok(()) => {
                    tracing::debug!("Removed {}", path.display());
                    removed.push(target);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => failures.push(FileFailure {
                    component: def.name.clone(),
                    file: entry.clone(),
                    cause: SukError::io(path, e),
                }),
            }
        }

        match (removed.is_empty(), failures.is_empty()) {
            (true, true) => RemoveOutcome::NotInstalled,
            (false, true) => RemoveOutcome::Removed { removed },
            (true, false) => RemoveOutcome::Failed { failures },
            (false, false) => RemoveOutcome::PartiallyRemoved { removed, failures },
        }
    }
}
