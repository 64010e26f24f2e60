//! Project manifest (`package.json`) loading.
//!
//! Only the `scripts` table is modeled; the doctor consumes nothing else
//! from the manifest.
use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::error::BoulderError;

/// File name of the project manifest, relative to the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// The slice of `package.json` the doctor cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Project name, used for display only.
    #[serde(default)]
    pub name: Option<String>,
    /// The `scripts` table; string-valued entrypoints keyed by name.
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
}

impl Manifest {
    /// The `scripts.test` entrypoint, if declared.
    #[must_use]
    pub fn test_script(&self) -> Option<&str> {
        self.scripts.get("test").map(String::as_str)
    }

    /// The `scripts.build` entrypoint, if declared.
    #[must_use]
    pub fn build_script(&self) -> Option<&str> {
        self.scripts.get("build").map(String::as_str)
    }
}

/// Load and parse the manifest at `path`.
///
/// # Errors
///
/// Returns [`BoulderError::IoFailure`] if the file cannot be read, and
/// [`BoulderError::ConfigInvalid`] if it is not a JSON object of the
/// expected shape.
pub fn load(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path).map_err(|source| BoulderError::IoFailure {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|e| {
        BoulderError::ConfigInvalid {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}
