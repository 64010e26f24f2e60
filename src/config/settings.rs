//! Boulder home settings (`boulder.toml`) loading.
use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Deserialize;

/// File name of the settings file, relative to the Boulder home.
pub const SETTINGS_FILE: &str = "boulder.toml";

/// Optional settings read from `boulder.toml` in the Boulder home.
///
/// Every field has a default so a missing file behaves exactly like an
/// empty one.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Project-local directory that receives the rules link
    /// (relative to the project root).
    pub editor_dir: String,
    /// Escalate lint failures from a warning to a hard failure.
    pub strict_lint: bool,
    /// Additional links to reconcile besides the built-in rules link.
    pub links: Vec<LinkEntry>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editor_dir: ".cursor".to_string(),
            strict_lint: false,
            links: Vec::new(),
        }
    }
}

/// One `[[links]]` entry: a declarative description of a desired link.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkEntry {
    /// Link source, relative to the Boulder home (absolute paths allowed).
    pub source: String,
    /// Link target, relative to the project root (absolute paths allowed).
    pub target: String,
    /// Whether an absent target counts against `doctor`.
    #[serde(default)]
    pub required: bool,
    /// Whether the link points at a directory (selects junction-style
    /// links on Windows).
    #[serde(default = "default_directory")]
    pub directory: bool,
}

const fn default_directory() -> bool {
    true
}

/// Load settings from `path`, falling back to defaults when the file does
/// not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings: {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("parsing settings: {}", path.display()))
}
