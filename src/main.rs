#![forbid(unsafe_code)]
//! tsinit Command Line Interface

use std::path::PathBuf;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use tsinit::commands::{execute_init, InitOptions};
use tsinit::PackageManagerKind;

#[derive(Parser)]
#[command(name = "tsinit")]
#[command(about = "Scaffold a TypeScript/Node project with linting, formatting and env config")]
#[command(version)]
struct Cli {
    /// Name of the project directory to create
    #[arg(value_name = "PROJECT_NAME")]
    name: Option<String>,

    /// Package manager to run (overrides the config file)
    #[arg(short, long, value_enum, env = "TSINIT_PACKAGE_MANAGER")]
    package_manager: Option<PackageManagerArg>,

    /// Blueprint config file (defaults to the user config, if any)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Package manager choice on the command line
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum PackageManagerArg {
    Npm,
    Yarn,
    Pnpm,
}

impl From<PackageManagerArg> for PackageManagerKind {
    fn from(arg: PackageManagerArg) -> Self {
        match arg {
            PackageManagerArg::Npm => PackageManagerKind::Npm,
            PackageManagerArg::Yarn => PackageManagerKind::Yarn,
            PackageManagerArg::Pnpm => PackageManagerKind::Pnpm,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "tsinit=debug" } else { "tsinit=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let name = match cli.name {
        Some(name) if !name.is_empty() => name,
        _ => {
            eprintln!("{} Please provide a project name", style("✗").red());
            eprintln!("  Usage: tsinit <PROJECT_NAME>");
            std::process::exit(1);
        }
    };

    let options = InitOptions {
        name,
        package_manager: cli.package_manager.map(Into::into),
        config: cli.config,
        parent: None,
    };
    execute_init(options)?;

    Ok(())
}
