//! Package manager integration
//!
//! The initializer only needs two capabilities from a package manager: create
//! a manifest, and install a list of packages. [`PackageManager`] is that
//! seam; [`SystemPackageManager`] fulfills it by running the real binary.

use std::fmt;
use std::path::Path;
use std::process::Command;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Supported package managers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManagerKind {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManagerKind {
    /// Name as typed by users and written in blueprint files
    pub fn name(&self) -> &'static str {
        match self {
            PackageManagerKind::Npm => "npm",
            PackageManagerKind::Yarn => "yarn",
            PackageManagerKind::Pnpm => "pnpm",
        }
    }

    /// Executable looked up on PATH. Windows installs ship `.cmd` shims,
    /// which `Command` does not resolve from the bare name.
    pub fn program(&self) -> &'static str {
        if cfg!(windows) {
            match self {
                PackageManagerKind::Npm => "npm.cmd",
                PackageManagerKind::Yarn => "yarn.cmd",
                PackageManagerKind::Pnpm => "pnpm.cmd",
            }
        } else {
            self.name()
        }
    }

    /// Arguments that create a default manifest without prompting
    pub fn init_args(&self) -> &'static [&'static str] {
        match self {
            PackageManagerKind::Npm | PackageManagerKind::Yarn => &["init", "-y"],
            PackageManagerKind::Pnpm => &["init"],
        }
    }

    /// Arguments preceding the package list for an install
    pub fn install_args(&self, dev: bool) -> &'static [&'static str] {
        match (self, dev) {
            (PackageManagerKind::Npm, true) => &["install", "--save-dev"],
            (PackageManagerKind::Npm, false) => &["install"],
            (PackageManagerKind::Yarn, true) => &["add", "--dev"],
            (PackageManagerKind::Yarn, false) => &["add"],
            (PackageManagerKind::Pnpm, true) => &["add", "--save-dev"],
            (PackageManagerKind::Pnpm, false) => &["add"],
        }
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capabilities the initializer needs from a package manager.
///
/// Every call runs to completion before returning. `root` is the project
/// directory the command operates on.
pub trait PackageManager {
    /// Create a default `package.json` in `root`
    fn init(&self, root: &Path) -> Result<()>;

    /// Install `packages` into `root`, as dev dependencies when `dev` is set
    fn install(&self, root: &Path, packages: &[String], dev: bool) -> Result<()>;
}

/// Runs the real package manager binary with inherited stdio
#[derive(Debug, Clone, Copy)]
pub struct SystemPackageManager {
    kind: PackageManagerKind,
}

impl SystemPackageManager {
    pub fn new(kind: PackageManagerKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> PackageManagerKind {
        self.kind
    }

    fn run(&self, root: &Path, args: &[&str]) -> Result<()> {
        let command_line = render_command_line(self.kind.name(), args);
        tracing::info!("Running `{}` in {}", command_line, root.display());

        let status = Command::new(self.kind.program())
            .args(args)
            .current_dir(root)
            .status()
            .map_err(|source| ScaffoldError::CommandLaunch {
                command: command_line.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ScaffoldError::CommandFailed {
                command: command_line,
                status,
            });
        }

        tracing::debug!("`{}` finished", command_line);
        Ok(())
    }
}

impl PackageManager for SystemPackageManager {
    fn init(&self, root: &Path) -> Result<()> {
        self.run(root, self.kind.init_args())
    }

    fn install(&self, root: &Path, packages: &[String], dev: bool) -> Result<()> {
        let mut args: Vec<&str> = self.kind.install_args(dev).to_vec();
        args.extend(packages.iter().map(String::as_str));
        self.run(root, &args)
    }
}

fn render_command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [PackageManagerKind; 3] = [
        PackageManagerKind::Npm,
        PackageManagerKind::Yarn,
        PackageManagerKind::Pnpm,
    ];

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&PackageManagerKind::Pnpm).unwrap();
        assert_eq!(json, "\"pnpm\"");
    }

    #[test]
    fn test_install_args() {
        assert_eq!(PackageManagerKind::Npm.install_args(true), ["install", "--save-dev"]);
        assert_eq!(PackageManagerKind::Npm.install_args(false), ["install"]);
        assert_eq!(PackageManagerKind::Yarn.install_args(true), ["add", "--dev"]);
        assert_eq!(PackageManagerKind::Pnpm.init_args(), ["init"]);
    }

    #[test]
    fn test_name_matches_serialized_form() {
        for kind in ALL_KINDS {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_program_uses_cmd_shim_on_windows() {
        for kind in ALL_KINDS {
            if cfg!(windows) {
                assert_eq!(kind.program(), format!("{}.cmd", kind.name()));
            } else {
                assert_eq!(kind.program(), kind.name());
            }
        }
    }

    #[test]
    fn test_render_command_line() {
        assert_eq!(
            render_command_line("npm", &["install", "--save-dev", "typescript"]),
            "npm install --save-dev typescript"
        );
    }

    #[test]
    fn test_spawn_failure_is_external_command_error() {
        let temp = tempfile::TempDir::new().unwrap();
        // Point at a directory that does not exist so the spawn itself fails
        let missing_root = temp.path().join("nope");
        let pm = SystemPackageManager::new(PackageManagerKind::Npm);

        let err = pm.init(&missing_root).unwrap_err();
        assert!(err.is_external_command());
    }
}
