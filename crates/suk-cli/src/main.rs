//! SUK CLI - vendor Svelte UI components into your project

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use suk_core::tui::{AddArgs, InitArgs, ListArgs, RemoveArgs, RunEnv};
use suk_core::ProductConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// SUK product configuration
#[derive(Clone)]
pub struct SukConfig;

impl ProductConfig for SukConfig {
    fn name(&self) -> &'static str {
        "suk"
    }

    fn display_name(&self) -> &'static str {
        "SUK"
    }

    fn config_file(&self) -> &'static str {
        "suk.json"
    }

    fn registry_dir_env(&self) -> &'static str {
        "SUK_REGISTRY_DIR"
    }

    fn schema_url(&self) -> &'static str {
        "https://suk.zandrd.dev/schema.json"
    }

    fn next_steps(&self) -> Vec<String> {
        vec![
            "Import components in your Svelte files:\n      \
             import { Button } from '$lib/components/ui';"
                .to_string(),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "suk")]
#[command(about = "SUK - The Svelte UI Kit that doesn't suck")]
#[command(version)]
pub struct Args {
    /// Registry directory containing index.json and templates/svelte/ (or SUK_REGISTRY_DIR)
    #[arg(long = "registry-dir", global = true)]
    pub registry_dir: Option<PathBuf>,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize SUK in your project
    Init(CliInitArgs),
    /// Add components to your project
    Add(CliAddArgs),
    /// List available components
    #[command(alias = "ls")]
    List(CliListArgs),
    /// Remove components from your project
    #[command(alias = "rm")]
    Remove(CliRemoveArgs),
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// Target directory
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Accept defaults for every prompt (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Parser, Debug)]
pub struct CliAddArgs {
    /// Component names to add
    pub components: Vec<String>,

    /// Add all available components
    #[arg(short, long)]
    pub all: bool,

    /// Overwrite existing components
    #[arg(short, long)]
    pub force: bool,

    /// Show what would be added without actually adding
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Parser, Debug)]
pub struct CliListArgs {
    /// Show component details
    #[arg(short, long)]
    pub details: bool,
}

#[derive(Parser, Debug)]
pub struct CliRemoveArgs {
    /// Component names to remove
    pub components: Vec<String>,

    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

impl From<CliAddArgs> for AddArgs {
    fn from(args: CliAddArgs) -> Self {
        AddArgs {
            components: args.components,
            all: args.all,
            force: args.force,
            dry_run: args.dry_run,
            yes: args.yes,
        }
    }
}

impl From<CliRemoveArgs> for RemoveArgs {
    fn from(args: CliRemoveArgs) -> Self {
        RemoveArgs {
            components: args.components,
            force: args.force,
        }
    }
}

/// Initialize the tracing subscriber.
///
/// `--debug` forces debug level; otherwise `RUST_LOG`, defaulting to warnings.
/// Logs go to stderr so they stay out of the prompt output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("suk=debug,suk_core=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("suk=warn,suk_core=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(args: Args) -> Result<bool> {
    let config = SukConfig;
    let cwd = match args.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let mut env = RunEnv {
        project_root: cwd,
        registry_dir: args.registry_dir,
    };

    match args.command {
        Some(Command::Init(init_args)) => {
            if let Some(path) = init_args.path {
                env.project_root = path;
            }
            let init_args = InitArgs {
                force: init_args.force,
                yes: init_args.yes,
            };
            suk_core::tui::init(&config, &env, init_args).await?;
            Ok(true)
        }
        Some(Command::Add(add_args)) => suk_core::tui::add(&config, &env, add_args.into()).await,
        Some(Command::List(list_args)) => {
            let list_args = ListArgs {
                details: list_args.details,
            };
            suk_core::tui::list(&config, &env, list_args).await?;
            Ok(true)
        }
        Some(Command::Remove(remove_args)) => {
            suk_core::tui::remove(&config, &env, remove_args.into()).await
        }
        None => {
            Args::command().print_help()?;
            Ok(true)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing(args.debug);
    tracing::debug!("suk starting with args: {:?}", args);

    let result = run(args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
