//! Batch installation of registry components
//!
//! Each requested name gets exactly one outcome, in request order. Failures are
//! scoped to the file or component that caused them: a conflict on one file
//! does not stop its sibling files, and an unknown or broken component does not
//! stop the rest of the batch.

use super::{materialize::materialize, paths::map_target};
use crate::config::ProjectConfig;
use crate::error::{Result, SukError};
use crate::registry::{ComponentDefinition, FileManifestEntry, Registry};
use crate::templates::{render, RenderContext, TemplateStore};
use std::path::{Path, PathBuf};

/// A file that could not be installed (or removed), and why
#[derive(Debug)]
pub struct FileFailure {
    pub component: String,
    pub file: FileManifestEntry,
    pub cause: SukError,
}

/// Result for one requested component
#[derive(Debug)]
pub enum ComponentOutcome {
    /// Every file was written
    Succeeded { written: Vec<PathBuf> },
    /// Some files were written, some failed
    PartiallySucceeded {
        written: Vec<PathBuf>,
        failures: Vec<FileFailure>,
    },
    /// No file was written
    Failed { failures: Vec<FileFailure> },
    /// Name is not in the registry
    UnknownComponent,
}

impl ComponentOutcome {
    fn from_parts(written: Vec<PathBuf>, failures: Vec<FileFailure>) -> Self {
        match (written.is_empty(), failures.is_empty()) {
            (_, true) => ComponentOutcome::Succeeded { written },
            (true, false) => ComponentOutcome::Failed { failures },
            (false, false) => ComponentOutcome::PartiallySucceeded { written, failures },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ComponentOutcome::Succeeded { .. })
    }

    /// Paths written for this component, relative to the project root
    pub fn written(&self) -> &[PathBuf] {
        match self {
            ComponentOutcome::Succeeded { written }
            | ComponentOutcome::PartiallySucceeded { written, .. } => written,
            _ => &[],
        }
    }

    pub fn failures(&self) -> &[FileFailure] {
        match self {
            ComponentOutcome::PartiallySucceeded { failures, .. }
            | ComponentOutcome::Failed { failures } => failures,
            _ => &[],
        }
    }
}

/// One entry of a [`BatchResult`]
#[derive(Debug)]
pub struct ComponentReport {
    pub name: String,
    pub outcome: ComponentOutcome,
}

/// Per-component outcomes of an install batch, in request order
#[derive(Debug, Default)]
pub struct BatchResult {
    pub reports: Vec<ComponentReport>,
}

impl BatchResult {
    /// Outcome for the first request of `name`
    pub fn get(&self, name: &str) -> Option<&ComponentOutcome> {
        self.reports
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.outcome)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentReport> {
        self.reports.iter()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// True when every requested component succeeded
    pub fn is_success(&self) -> bool {
        self.reports.iter().all(|r| r.outcome.is_success())
    }

    pub fn written_count(&self) -> usize {
        self.reports.iter().map(|r| r.outcome.written().len()).sum()
    }

    pub fn succeeded_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.outcome.is_success())
            .count()
    }
}

/// Installs components from a registry into a project
pub struct Installer<'a> {
    registry: &'a Registry,
    config: &'a ProjectConfig,
    templates: &'a TemplateStore,
    root: PathBuf,
}

impl<'a> Installer<'a> {
    /// `root` is the project directory that relative aliases resolve against
    pub fn new(
        registry: &'a Registry,
        config: &'a ProjectConfig,
        templates: &'a TemplateStore,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            config,
            templates,
            root: root.into(),
        }
    }

    pub fn registry(&self) -> &Registry {
        self.registry
    }

    pub fn config(&self) -> &ProjectConfig {
        self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Install each requested component in order. Never fails as a whole.
    pub async fn install<S: AsRef<str>>(&self, names: &[S], overwrite: bool) -> BatchResult {
        let mut reports = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            let outcome = match self.registry.lookup(name) {
                Some(def) => self.install_component(def, overwrite).await,
                None => {
                    tracing::debug!("Component '{}' is not in the registry", name);
                    ComponentOutcome::UnknownComponent
                }
            };

            reports.push(ComponentReport {
                name: name.to_string(),
                outcome,
            });
        }

        BatchResult { reports }
    }

    async fn install_component(
        &self,
        def: &ComponentDefinition,
        overwrite: bool,
    ) -> ComponentOutcome {
        let mut written = Vec::new();
        let mut failures = Vec::new();

        for entry in &def.files {
            match self.install_file(&def.name, entry, overwrite).await {
                Ok(path) => written.push(path),
                Err(cause) => {
                    tracing::debug!("{}: {} failed: {}", def.name, entry.path, cause);
                    failures.push(FileFailure {
                        component: def.name.clone(),
                        file: entry.clone(),
                        cause,
                    });
                }
            }
        }

        ComponentOutcome::from_parts(written, failures)
    }

    /// resolve template -> render -> map path -> materialize
    async fn install_file(
        &self,
        component: &str,
        entry: &FileManifestEntry,
        overwrite: bool,
    ) -> Result<PathBuf> {
        let raw = self.templates.resolve(&entry.template).await?;
        let rendered = render(&raw, &RenderContext::new(component, self.config));
        let target = map_target(&self.config.aliases, entry)?;

        materialize(&self.root.join(&target), &rendered, overwrite).await?;
        Ok(target)
    }
}
