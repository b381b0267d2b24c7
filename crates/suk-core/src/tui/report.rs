//! Rendering pipeline results for the terminal

use crate::install::{
    BatchResult, ComponentOutcome, ComponentPlan, FileFailure, PlannedComponent, RemoveOutcome,
    RemoveReport,
};
use anyhow::Result;
use colored::Colorize;

fn print_failures(failures: &[FileFailure]) {
    for failure in failures {
        println!(
            "    {} {}: {}",
            "x".red(),
            failure.file.path,
            failure.cause.to_string().dimmed()
        );
    }
}

/// One block per requested component, in request order
pub fn print_batch(result: &BatchResult) -> Result<()> {
    for report in result.iter() {
        match &report.outcome {
            ComponentOutcome::Succeeded { written } => {
                cliclack::log::success(format!("{} installed", report.name))?;
                for path in written {
                    println!("    {} {}", "+".green(), path.display());
                }
            }
            ComponentOutcome::PartiallySucceeded { written, failures } => {
                cliclack::log::warning(format!(
                    "{} partially installed ({} of {} files)",
                    report.name,
                    written.len(),
                    written.len() + failures.len()
                ))?;
                for path in written {
                    println!("    {} {}", "+".green(), path.display());
                }
                print_failures(failures);
            }
            ComponentOutcome::Failed { failures } => {
                cliclack::log::error(format!("Failed to install {}", report.name))?;
                print_failures(failures);
            }
            ComponentOutcome::UnknownComponent => {
                cliclack::log::error(format!(
                    "Unknown component: {} (run `suk list` to see available components)",
                    report.name
                ))?;
            }
        }
    }
    Ok(())
}

/// Dry-run listing
pub fn print_plan(plans: &[PlannedComponent]) {
    println!("{}", "Dry run - would add the following components:".blue());
    println!();

    for planned in plans {
        match &planned.plan {
            ComponentPlan::UnknownComponent => {
                println!("  {} {} - {}", "?".yellow(), planned.name, "unknown".red());
            }
            ComponentPlan::Install {
                description,
                dependencies,
                dev_dependencies,
                files,
            } => {
                println!(
                    "  {} {} - {}",
                    "+".green(),
                    planned.name.white(),
                    description.dimmed()
                );
                if !dependencies.is_empty() {
                    println!("    {} {}", "Dependencies:".blue(), dependencies.join(", "));
                }
                if !dev_dependencies.is_empty() {
                    println!(
                        "    {} {}",
                        "Dev dependencies:".blue(),
                        dev_dependencies.join(", ")
                    );
                }
                for file in files {
                    match &file.target {
                        Ok(target) if file.exists => println!(
                            "    {} {} {}",
                            "~".yellow(),
                            target.display(),
                            "(exists)".dimmed()
                        ),
                        Ok(target) => println!("    {} {}", "+".green(), target.display()),
                        Err(e) => println!("    {} {}: {}", "x".red(), file.entry.path, e),
                    }
                }
            }
        }
    }
    println!();
}

pub fn print_removals(reports: &[RemoveReport]) -> Result<()> {
    for report in reports {
        match &report.outcome {
            RemoveOutcome::Removed { removed } => {
                for path in removed {
                    println!("  {} {}", "-".red(), path.display());
                }
                cliclack::log::success(format!(
                    "{} - removed {} file(s)",
                    report.name,
                    removed.len()
                ))?;
            }
            RemoveOutcome::PartiallyRemoved { removed, failures } => {
                for path in removed {
                    println!("  {} {}", "-".red(), path.display());
                }
                print_failures(failures);
                cliclack::log::warning(format!("{} - partially removed", report.name))?;
            }
            RemoveOutcome::Failed { failures } => {
                print_failures(failures);
                cliclack::log::error(format!("{} - error removing", report.name))?;
            }
            RemoveOutcome::NotInstalled => {
                cliclack::log::warning(format!("{} - not found", report.name))?;
            }
            RemoveOutcome::UnknownComponent => {
                cliclack::log::error(format!("Unknown component: {}", report.name))?;
            }
        }
    }
    Ok(())
}
