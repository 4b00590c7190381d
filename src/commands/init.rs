//! Init command
//!
//! Implements `tsinit <name>`: resolves the blueprint, then scaffolds the
//! project under the current directory with progress on stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::config::Blueprint;
use crate::initializer::{InitReport, ProjectInitializer, ProjectName};
use crate::package_manager::{PackageManagerKind, SystemPackageManager};

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Project (and directory) name
    pub name: String,
    /// Package manager override
    pub package_manager: Option<PackageManagerKind>,
    /// Blueprint config file
    pub config: Option<PathBuf>,
    /// Parent directory for the project (defaults to the current directory)
    pub parent: Option<PathBuf>,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<InitReport> {
    let name = ProjectName::new(options.name)?;

    let mut blueprint = Blueprint::resolve(options.config.as_deref())
        .context("Failed to load blueprint config")?;
    if let Some(kind) = options.package_manager {
        blueprint.package_manager = kind;
    }

    let parent = match options.parent {
        Some(parent) => parent,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    let package_manager = SystemPackageManager::new(blueprint.package_manager);
    let initializer = ProjectInitializer::new(blueprint, package_manager);
    let kind = initializer.blueprint().package_manager;

    println!(
        "{} Creating {} with {}\n",
        style("→").cyan(),
        style(name.as_str()).bold(),
        kind
    );

    let report = initializer
        .initialize_with(&parent, &name, |step| {
            if step.is_external() {
                println!("{} {}... {}", style("→").dim(), step, style(format!("({})", kind)).dim());
            } else {
                println!("{} {}...", style("→").dim(), step);
            }
        })
        .with_context(|| format!("Failed to initialize project '{}'", name))?;

    println!(
        "\n{} Created {} ({} files)",
        style("✓").green(),
        report.root.display(),
        report.files.len()
    );

    let run = initializer.package_manager().kind();
    println!("\n{}", style("Next steps:").bold());
    println!("  1. {}", style(format!("cd {}", name)).cyan());
    println!("  2. Copy .env.example to .env and fill in values");
    println!("  3. Run {} to start developing", style(format!("{} run dev", run)).cyan());

    Ok(report)
}
