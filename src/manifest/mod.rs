//! Package manifest
//!
//! Reads the `package.json` produced by the package manager, overwrites the
//! fields we own, and writes it back. Everything else in the document is left
//! alone, in its original order.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Result, ScaffoldError};

/// Manifest file name
pub const MANIFEST_FILE: &str = "package.json";

/// A `package.json` document loaded from disk
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl PackageManifest {
    /// Load the manifest in `root`
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(MANIFEST_FILE);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ScaffoldError::io("failed to read", &path, e))?;

        let value: Value = serde_json::from_str(&content).map_err(|source| ScaffoldError::Json {
            path: path.clone(),
            source,
        })?;

        match value {
            Value::Object(fields) => Ok(Self { path, fields }),
            _ => Err(ScaffoldError::ManifestShape(path)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Package name as recorded by the package manager
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn main(&self) -> Option<&str> {
        self.fields.get("main").and_then(Value::as_str)
    }

    pub fn scripts(&self) -> Option<&Map<String, Value>> {
        self.fields.get("scripts").and_then(Value::as_object)
    }

    /// Replace the scripts mapping wholesale
    pub fn set_scripts(&mut self, scripts: Map<String, Value>) {
        // insert() on an existing key keeps its position
        self.fields.insert("scripts".to_string(), Value::Object(scripts));
    }

    pub fn set_main(&mut self, main: impl Into<String>) {
        self.fields.insert("main".to_string(), Value::String(main.into()));
    }

    /// Serialize with two-space indentation
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.fields).map_err(|source| ScaffoldError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Write the manifest back to where it was loaded from, newline-terminated
    /// like the package managers themselves write it
    pub fn save(&self) -> Result<()> {
        let mut content = self.to_json()?;
        content.push('\n');
        std::fs::write(&self.path, content)
            .map_err(|e| ScaffoldError::io("failed to write", &self.path, e))
    }
}
