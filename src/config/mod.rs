//! Blueprint configuration
//!
//! The data that drives an initialization run: which packages to install,
//! which scripts and entry point to put in the manifest, and which package
//! manager to call. Defaults are the canonical TypeScript/Node setup; a JSON
//! file can override any subset of fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, ScaffoldError};
use crate::package_manager::PackageManagerKind;

/// File name looked up under the user config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Overrides the directory holding the user blueprint
pub const CONFIG_DIR_ENV: &str = "TSINIT_CONFIG_DIR";

fn default_main() -> String {
    "src/index.ts".to_string()
}

fn default_scripts() -> Map<String, Value> {
    [
        ("start", "node dist/index.js"),
        ("dev", "nodemon src/index.ts"),
        ("build", "tsc"),
        ("lint", "eslint . --ext .ts"),
        ("lint:fix", "eslint . --ext .ts --fix"),
        ("format", "prettier --write \"src/**/*.ts\""),
    ]
    .into_iter()
    .map(|(name, command)| (name.to_string(), Value::String(command.to_string())))
    .collect()
}

fn default_dev_dependencies() -> Vec<String> {
    [
        "typescript",
        "ts-node",
        "nodemon",
        "@types/node",
        "eslint",
        "@typescript-eslint/parser",
        "@typescript-eslint/eslint-plugin",
        "prettier",
        "eslint-config-prettier",
        "eslint-plugin-prettier",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_dependencies() -> Vec<String> {
    vec!["dotenv".to_string()]
}

/// What to put into a freshly scaffolded project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    /// Package manager used for init and installs
    #[serde(default)]
    pub package_manager: PackageManagerKind,

    /// Value written to the manifest's `main` field
    #[serde(default = "default_main")]
    pub main: String,

    /// Replaces the manifest's `scripts` mapping wholesale (order kept)
    #[serde(default = "default_scripts")]
    pub scripts: Map<String, Value>,

    /// Build, lint and format tooling
    #[serde(default = "default_dev_dependencies")]
    pub dev_dependencies: Vec<String>,

    /// Runtime dependencies
    #[serde(default = "default_dependencies")]
    pub dependencies: Vec<String>,
}

impl Default for Blueprint {
    fn default() -> Self {
        Self {
            package_manager: PackageManagerKind::default(),
            main: default_main(),
            scripts: default_scripts(),
            dev_dependencies: default_dev_dependencies(),
            dependencies: default_dependencies(),
        }
    }
}

impl Blueprint {
    /// Load a blueprint from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScaffoldError::io("failed to read", path, e))?;
        serde_json::from_str(&content).map_err(|source| ScaffoldError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the blueprint for a run.
    ///
    /// An explicit path must exist. Without one, the user-level config file is
    /// used when present, otherwise the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!("Loading blueprint from {}", path.display());
            return Self::load(path);
        }

        match user_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Loading user blueprint from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// `$TSINIT_CONFIG_DIR/config.json` when set, else
/// `<config dir>/tsinit/config.json` if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    user_config_path_from(std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from))
}

fn user_config_path_from(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    match override_dir {
        Some(dir) if !dir.as_os_str().is_empty() => Some(dir.join(CONFIG_FILE_NAME)),
        _ => dirs::config_dir().map(|dir| dir.join("tsinit").join(CONFIG_FILE_NAME)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_scripts_order() {
        let blueprint = Blueprint::default();
        let names: Vec<&str> = blueprint.scripts.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["start", "dev", "build", "lint", "lint:fix", "format"]);
    }

    #[test]
    fn test_default_dependency_sets() {
        let blueprint = Blueprint::default();
        assert_eq!(blueprint.main, "src/index.ts");
        assert_eq!(blueprint.dependencies, vec!["dotenv".to_string()]);
        assert!(blueprint.dev_dependencies.contains(&"typescript".to_string()));
        assert!(blueprint.dev_dependencies.contains(&"@typescript-eslint/parser".to_string()));
        assert!(!blueprint.dev_dependencies.iter().any(|d| blueprint.dependencies.contains(d)));
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blueprint.json");
        std::fs::write(&path, r#"{ "package_manager": "pnpm", "dependencies": ["zod"] }"#).unwrap();

        let blueprint = Blueprint::load(&path).unwrap();

        assert_eq!(blueprint.package_manager, PackageManagerKind::Pnpm);
        assert_eq!(blueprint.dependencies, vec!["zod".to_string()]);
        assert_eq!(blueprint.main, "src/index.ts");
        assert_eq!(blueprint.scripts, default_scripts());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.json");
        let err = Blueprint::resolve(Some(missing.as_path())).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_config_dir_override() {
        let path = user_config_path_from(Some(PathBuf::from("/etc/tsinit-test"))).unwrap();
        assert_eq!(path, Path::new("/etc/tsinit-test").join("config.json"));
    }

    #[test]
    fn test_empty_config_dir_override_is_ignored() {
        let fallback = user_config_path_from(None);
        assert_eq!(user_config_path_from(Some(PathBuf::new())), fallback);
        if let Some(path) = fallback {
            assert!(path.ends_with("tsinit/config.json"));
        }
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Blueprint::load(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
