//! Charm-style CLI prompts using cliclack

use super::report;
use crate::config::project::{DEFAULT_COMPONENTS_PATH, DEFAULT_TYPES_PATH, DEFAULT_UTILS_PATH};
use crate::config::{detect_project, Aliases, ProjectConfig, TailwindConfig};
use crate::install::Installer;
use crate::product::ProductConfig;
use crate::registry::{Registry, RegistryOrigin};
use crate::templates::{self, TemplateStore};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Where the command runs and where the registry lives
#[derive(Debug, Clone, Default)]
pub struct RunEnv {
    /// Project root; relative aliases resolve against it
    pub project_root: PathBuf,

    /// Registry directory from the command line, if given
    pub registry_dir: Option<PathBuf>,
}

/// Arguments for `add`
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    pub components: Vec<String>,
    pub all: bool,
    pub force: bool,
    pub dry_run: bool,
    pub yes: bool,
}

/// Arguments for `init`
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    pub force: bool,
    pub yes: bool,
}

/// Arguments for `list`
#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    pub details: bool,
}

/// Arguments for `remove`
#[derive(Debug, Clone, Default)]
pub struct RemoveArgs {
    pub components: Vec<String>,
    pub force: bool,
}

/// Add components. Returns `false` when any requested component did not fully install.
pub async fn add<C: ProductConfig>(product: &C, env: &RunEnv, args: AddArgs) -> Result<bool> {
    cliclack::intro(product.display_name())?;

    let Some(config) = require_config(product, env)? else {
        return Ok(false);
    };

    let spinner = cliclack::spinner();
    spinner.start("Loading component registry...");
    let (registry, templates) = match load_sources(product, env).await {
        Ok(sources) => sources,
        Err(e) => {
            spinner.stop("Failed to load registry");
            return Err(e);
        }
    };
    spinner.stop(format!("Registry loaded ({} components)", registry.len()));

    let names = match select_components(&registry, &args)? {
        Some(names) => names,
        None => return Ok(true),
    };

    let installer = Installer::new(&registry, &config, &templates, &env.project_root);

    if args.dry_run {
        report::print_plan(&installer.plan(&names));
        cliclack::outro("Dry run complete, no files written")?;
        return Ok(true);
    }

    let spinner = cliclack::spinner();
    spinner.start(format!("Adding {} component(s)...", names.len()));
    let result = installer.install(&names, args.force).await;
    spinner.stop(format!(
        "Wrote {} file(s) for {} of {} component(s)",
        result.written_count(),
        result.succeeded_count(),
        result.len()
    ));

    report::print_batch(&result)?;

    if result.is_success() {
        print_next_steps(product);
        cliclack::outro("Components added successfully!")?;
    } else {
        cliclack::outro_cancel("Some components were not fully installed")?;
    }

    Ok(result.is_success())
}

fn select_components(registry: &Registry, args: &AddArgs) -> Result<Option<Vec<String>>> {
    if args.all {
        let names: Vec<String> = registry.names().into_iter().map(String::from).collect();

        if !args.force && !args.yes {
            let confirm: bool = cliclack::confirm(format!("Add all {} components?", names.len()))
                .initial_value(false)
                .interact()?;
            if !confirm {
                cliclack::outro_cancel("Operation cancelled.")?;
                return Ok(None);
            }
        }
        return Ok(Some(names));
    }

    if !args.components.is_empty() {
        return Ok(Some(dedupe(&args.components)));
    }

    if args.yes {
        anyhow::bail!("No components specified. Pass component names or --all.");
    }

    let mut multi = cliclack::multiselect("Select components to add");
    for def in registry.iter() {
        multi = multi.item(def.name.clone(), &def.name, &def.description);
    }
    let selected: Vec<String> = multi.required(true).interact()?;

    if selected.is_empty() {
        cliclack::outro_cancel("No components selected.")?;
        return Ok(None);
    }

    Ok(Some(selected))
}

/// Drop repeated names, keeping the first occurrence
fn dedupe(names: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .iter()
        .filter(|n| seen.insert(n.as_str()))
        .cloned()
        .collect()
}

/// Write a project configuration file
pub async fn init<C: ProductConfig>(product: &C, env: &RunEnv, args: InitArgs) -> Result<()> {
    cliclack::intro(format!("Initializing {} in your project", product.display_name()))?;

    let root = &env.project_root;
    let config_path = product.config_path(root);

    if config_path.exists() && !args.force && !args.yes {
        let overwrite: bool = cliclack::confirm(format!(
            "{} is already initialized. Overwrite configuration?",
            product.display_name()
        ))
        .initial_value(false)
        .interact()?;

        if !overwrite {
            cliclack::outro_cancel("Initialization cancelled.")?;
            return Ok(());
        }
    }

    let spinner = cliclack::spinner();
    spinner.start("Detecting project configuration...");
    let project = detect_project(root);
    if !project.is_node_project() {
        spinner.stop("No package.json found");
        anyhow::bail!(
            "No package.json found in {}. Please run this in a Node.js project.",
            root.display()
        );
    }
    spinner.stop("Project configuration detected");

    if !project.svelte_config {
        cliclack::log::warning("No svelte.config.js found; components target Svelte 5")?;
    }

    let (components, utils, types, typescript, tailwind) = if args.yes {
        (
            DEFAULT_COMPONENTS_PATH.to_string(),
            DEFAULT_UTILS_PATH.to_string(),
            DEFAULT_TYPES_PATH.to_string(),
            true,
            project.tailwind_config,
        )
    } else {
        (
            ask_path("Where would you like to install components?", DEFAULT_COMPONENTS_PATH)?,
            ask_path("Where would you like to install utility functions?", DEFAULT_UTILS_PATH)?,
            ask_path("Where would you like to install types?", DEFAULT_TYPES_PATH)?,
            cliclack::confirm("Are you using TypeScript?")
                .initial_value(true)
                .interact()?,
            cliclack::confirm("Are you using Tailwind CSS?")
                .initial_value(project.tailwind_config)
                .interact()?,
        )
    };

    let config = InitAnswers {
        components,
        utils,
        types,
        typescript,
        tailwind,
    }
    .into_config(product.schema_url());

    config
        .write(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    cliclack::log::success(format!("Created {}", config_path.display()))?;

    println!();
    println!("  Next steps");
    println!();
    println!("  1.  {} add button", product.name());
    println!("  2.  {} list", product.name());
    println!();

    cliclack::outro(format!("{} initialized successfully!", product.display_name()))?;
    Ok(())
}

/// Answers collected by `init`, with or without prompting
#[derive(Debug, Clone)]
struct InitAnswers {
    components: String,
    utils: String,
    types: String,
    typescript: bool,
    tailwind: bool,
}

impl InitAnswers {
    /// The Tailwind answer drives `cssVariables`, the TypeScript answer drives `tsx`
    fn into_config(self, schema_url: &str) -> ProjectConfig {
        ProjectConfig {
            schema: Some(schema_url.to_string()),
            tsx: self.typescript,
            tailwind: TailwindConfig {
                css_variables: self.tailwind,
                ..TailwindConfig::default()
            },
            aliases: Aliases {
                components: Some(PathBuf::from(&self.components)),
                utils: Some(PathBuf::from(self.utils)),
                types: Some(PathBuf::from(self.types)),
                ui: Some(PathBuf::from(self.components)),
            },
            ..ProjectConfig::default()
        }
    }
}

fn ask_path(prompt: &str, default: &str) -> Result<String> {
    let input: String = cliclack::input(prompt)
        .placeholder(default)
        .default_input(default)
        .interact()?;
    Ok(if input.trim().is_empty() {
        default.to_string()
    } else {
        input.trim().to_string()
    })
}

/// Print the registry grouped by category
pub async fn list<C: ProductConfig>(product: &C, env: &RunEnv, args: ListArgs) -> Result<()> {
    println!(
        "{}",
        format!("Available {} Components", product.display_name()).blue()
    );
    println!();

    let (registry, templates) = load_sources(product, env).await?;

    if registry.is_empty() {
        println!("{}", "No components available in registry.".yellow());
        return Ok(());
    }

    let missing = if args.details {
        templates::audit(&registry, &templates).await
    } else {
        Vec::new()
    };

    for (category, components) in registry.by_category() {
        println!("{}", capitalize_category(category).cyan());

        for def in components {
            if args.details {
                println!("  {} {}", "●".green(), def.name.white());
                println!("    {}", def.description.dimmed());
                if let Some(size) = &def.size {
                    println!("    {} {}", "Size:".blue(), size.yellow());
                }
                if !def.exports.is_empty() {
                    println!("    {} {}", "Exports:".blue(), def.exports.join(", "));
                }
                if def.has_dependencies() {
                    let deps: Vec<&str> = def
                        .dependencies
                        .iter()
                        .chain(&def.dev_dependencies)
                        .map(String::as_str)
                        .collect();
                    println!("    {} {}", "Dependencies:".blue(), deps.join(", "));
                }
                for m in missing.iter().filter(|m| m.component == def.name) {
                    println!("    {} template '{}' unavailable", "!".red(), m.template);
                }
                println!();
            } else {
                let size = def
                    .size
                    .as_ref()
                    .map(|s| format!(" ({})", s).dimmed().to_string())
                    .unwrap_or_default();
                println!(
                    "  {} {}{} - {}",
                    "●".green(),
                    def.name.white(),
                    size,
                    def.description.dimmed()
                );
            }
        }
        println!();
    }

    let name = product.name();
    println!("{}", "Usage:".blue());
    println!(
        "{}",
        format!("  {} add <component-name>    Add a specific component", name).dimmed()
    );
    println!(
        "{}",
        format!("  {} add button container    Add multiple components", name).dimmed()
    );
    println!(
        "{}",
        format!("  {} list --details          Show detailed information", name).dimmed()
    );

    Ok(())
}

fn capitalize_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Remove installed components. Returns `false` when any removal failed.
pub async fn remove<C: ProductConfig>(product: &C, env: &RunEnv, args: RemoveArgs) -> Result<bool> {
    cliclack::intro(product.display_name())?;

    let Some(config) = require_config(product, env)? else {
        return Ok(false);
    };

    if args.components.is_empty() {
        anyhow::bail!(
            "No components specified to remove. Usage: {} remove <component-name> [component-name...]",
            product.name()
        );
    }
    let names = dedupe(&args.components);

    if !args.force {
        let confirm: bool = cliclack::confirm(format!(
            "Remove {} component(s): {}?",
            names.len(),
            names.join(", ")
        ))
        .initial_value(false)
        .interact()?;

        if !confirm {
            cliclack::outro_cancel("Operation cancelled.")?;
            return Ok(true);
        }
    }

    let (registry, templates) = load_sources(product, env).await?;
    let installer = Installer::new(&registry, &config, &templates, &env.project_root);

    let reports = installer.remove(&names).await;
    report::print_removals(&reports)?;

    let ok = reports.iter().all(|r| r.outcome.is_success());
    if ok {
        cliclack::outro("Remember to update your imports if needed.")?;
    } else {
        cliclack::outro_cancel("Some components could not be removed")?;
    }
    Ok(ok)
}

/// Load and validate the project config, printing guidance when it is missing
fn require_config<C: ProductConfig>(product: &C, env: &RunEnv) -> Result<Option<ProjectConfig>> {
    let path = product.config_path(&env.project_root);
    let Some(config) = ProjectConfig::load(&path)? else {
        cliclack::log::error(format!(
            "{} is not initialized in this project.",
            product.display_name()
        ))?;
        cliclack::outro_cancel(format!("Run `{} init` first.", product.name()))?;
        return Ok(None);
    };

    let problems = config.validate();
    if !problems.is_empty() {
        for problem in &problems {
            cliclack::log::error(problem)?;
        }
        anyhow::bail!("Invalid configuration in {}", path.display());
    }

    Ok(Some(config))
}

/// Registry (with built-in fallback) and the template store it implies
async fn load_sources<C: ProductConfig>(
    product: &C,
    env: &RunEnv,
) -> Result<(Registry, TemplateStore)> {
    let registry_dir = product.registry_dir(env.registry_dir.as_deref());
    let index = registry_dir
        .as_ref()
        .map(|dir| dir.join(product.registry_index_file()));

    let (registry, origin) = Registry::resolve(index.as_deref())
        .await
        .context("Failed to load component registry")?;

    if let (Some(dir), RegistryOrigin::Builtin) = (&registry_dir, &origin) {
        cliclack::log::warning(format!(
            "No registry at {}, using built-in components",
            dir.display()
        ))?;
    }

    let templates = match &registry_dir {
        Some(dir) => TemplateStore::local(dir.join(product.template_dir())),
        None => TemplateStore::builtin_only(),
    };

    Ok((registry, templates))
}

fn print_next_steps<C: ProductConfig>(product: &C) {
    let steps = product.next_steps();
    if steps.is_empty() {
        return;
    }

    println!();
    println!("  Next steps");
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }
    println!();
}
