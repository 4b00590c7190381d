#![forbid(unsafe_code)]

//! # tsinit
//!
//! Scaffold a TypeScript/Node project in one command.
//!
//! ## What it does
//!
//! - Creates the project directory
//! - Initializes `package.json` and sets scripts and entry point
//! - Installs build, lint and format tooling plus runtime dependencies
//! - Writes `tsconfig.json`, ESLint, Prettier, `.env.example`, `.gitignore`,
//!   `README.md` and `src/index.ts`
//!
//! ## Example
//!
//! ```rust,no_run
//! use tsinit::{Blueprint, ProjectInitializer, ProjectName, SystemPackageManager};
//!
//! fn main() -> anyhow::Result<()> {
//!     let blueprint = Blueprint::default();
//!     let npm = SystemPackageManager::new(blueprint.package_manager);
//!     let initializer = ProjectInitializer::new(blueprint, npm);
//!
//!     let report = initializer.initialize(std::path::Path::new("."), &ProjectName::new("demo")?)?;
//!     println!("created {}", report.root.display());
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod initializer;
pub mod manifest;
pub mod package_manager;
pub mod templates;

// Re-exports
pub use config::Blueprint;
pub use error::{Result, ScaffoldError};
pub use initializer::{InitReport, ProjectInitializer, ProjectName, Step};
pub use manifest::PackageManifest;
pub use package_manager::{PackageManager, PackageManagerKind, SystemPackageManager};
pub use templates::{Template, TemplateContext, TemplateRenderer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
