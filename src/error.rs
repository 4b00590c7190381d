//! Error types
//!
//! Library-level failures. Everything here is fatal to an initialization run;
//! the command layer wraps these in `anyhow` for reporting.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors produced while scaffolding a project
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Directory or file creation/write failure
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Package manager could not be started (usually not on PATH)
    #[error("failed to launch `{command}`: {source}")]
    CommandLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Package manager ran but exited unsuccessfully
    #[error("`{command}` exited with {status}")]
    CommandFailed { command: String, status: ExitStatus },

    /// Project name rejected at entry
    #[error("invalid project name: {0}")]
    InvalidProjectName(String),

    /// Manifest or blueprint is not the JSON we expect
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest parsed but its top level is not an object
    #[error("{} does not contain a JSON object", .0.display())]
    ManifestShape(PathBuf),

    /// Template failed to render
    #[error("failed to render template {name}: {source}")]
    Template {
        name: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

impl ScaffoldError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// True for failures of the external package manager (launch or exit status)
    pub fn is_external_command(&self) -> bool {
        matches!(
            self,
            ScaffoldError::CommandLaunch { .. } | ScaffoldError::CommandFailed { .. }
        )
    }

    /// True for filesystem failures
    pub fn is_io(&self) -> bool {
        matches!(self, ScaffoldError::Io { .. })
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, ScaffoldError>;
