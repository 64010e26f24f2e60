//! Project context: Boulder home settings and the project manifest.
pub mod manifest;
pub mod settings;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::resources::LinkSpec;
use settings::Settings;

/// Name of the shared rules directory inside the Boulder home, and of the
/// link created inside the editor directory.
pub const RULES_DIR: &str = "rules";

/// Name of the lint configuration marker file at the project root.
pub const LINT_CONFIG_FILE: &str = "biome.json";

/// All resolved configuration for one run.
///
/// Immutable once built; checks receive it read-only and re-probe the
/// filesystem themselves.
#[derive(Debug, Clone)]
pub struct Config {
    /// Project root directory.
    pub root: PathBuf,
    /// The Boulder home (`$BOULDER_HOME` or `~/.config/boulder`).
    pub boulder_home: PathBuf,
    /// Settings from `boulder.toml` (defaults when the file is absent).
    pub settings: Settings,
}

impl Config {
    /// Load the configuration for a project rooted at `root`, reading
    /// settings from `boulder_home`.
    ///
    /// # Errors
    ///
    /// Returns an error if `boulder.toml` exists but cannot be parsed.
    pub fn load(root: &Path, boulder_home: &Path) -> Result<Self> {
        let settings = settings::load(&boulder_home.join(settings::SETTINGS_FILE))?;
        Ok(Self {
            root: root.to_path_buf(),
            boulder_home: boulder_home.to_path_buf(),
            settings,
        })
    }

    /// Path of the project manifest.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(manifest::MANIFEST_FILE)
    }

    /// Path of the lint configuration marker file.
    #[must_use]
    pub fn lint_config_path(&self) -> PathBuf {
        self.root.join(LINT_CONFIG_FILE)
    }

    /// The shared rules directory inside the Boulder home.
    #[must_use]
    pub fn rules_source(&self) -> PathBuf {
        self.boulder_home.join(RULES_DIR)
    }

    /// The project-local path that should link to the shared rules.
    #[must_use]
    pub fn rules_target(&self) -> PathBuf {
        self.root.join(&self.settings.editor_dir).join(RULES_DIR)
    }

    /// The built-in rules link.
    #[must_use]
    pub fn rules_link_spec(&self) -> LinkSpec {
        LinkSpec {
            source: self.rules_source(),
            target: self.rules_target(),
            required: true,
            directory: true,
        }
    }

    /// All links to reconcile: the built-in rules link first, then the
    /// declarative `[[links]]` entries from `boulder.toml`.
    ///
    /// Relative entry paths resolve against the Boulder home (sources) and
    /// the project root (targets); absolute paths are taken as-is.
    #[must_use]
    pub fn link_specs(&self) -> Vec<LinkSpec> {
        let mut specs = vec![self.rules_link_spec()];
        for entry in &self.settings.links {
            specs.push(LinkSpec {
                source: self.boulder_home.join(&entry.source),
                target: self.root.join(&entry.target),
                required: entry.required,
                directory: entry.directory,
            });
        }
        specs
    }

    /// Validate the configuration and return non-fatal warnings.
    #[must_use]
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if Path::new(&self.settings.editor_dir).is_absolute() {
            warnings.push(ConfigWarning {
                source: settings::SETTINGS_FILE.to_string(),
                item: self.settings.editor_dir.clone(),
                message: "editor_dir should be relative to the project root".to_string(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for spec in self.link_specs() {
            if !seen.insert(spec.target.clone()) {
                warnings.push(ConfigWarning {
                    source: settings::SETTINGS_FILE.to_string(),
                    item: spec.target.display().to_string(),
                    message: "duplicate link target".to_string(),
                });
            }
        }

        warnings
    }
}

/// A non-fatal configuration problem surfaced at startup.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// Config file the warning originates from.
    pub source: String,
    /// The offending item.
    pub item: String,
    /// Human-readable description of the problem.
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> Config {
        Config::load(&dir.join("project"), &dir.join("boulder")).unwrap()
    }

    #[test]
    fn load_without_settings_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        assert_eq!(config.settings.editor_dir, ".cursor");
    }

    #[test]
    fn derived_paths() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        assert_eq!(
            config.manifest_path(),
            dir.path().join("project").join("package.json")
        );
        assert_eq!(
            config.rules_source(),
            dir.path().join("boulder").join("rules")
        );
        assert_eq!(
            config.rules_target(),
            dir.path().join("project").join(".cursor").join("rules")
        );
    }

    #[test]
    fn rules_link_spec_is_required_directory_link() {
        let dir = tempfile::tempdir().unwrap();
        let spec = config_in(dir.path()).rules_link_spec();
        assert!(spec.required);
        assert!(spec.directory);
        assert_eq!(spec.source, dir.path().join("boulder").join("rules"));
    }

    #[test]
    fn link_specs_start_with_rules_link() {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().join("boulder");
        std::fs::create_dir_all(&home).unwrap();
        std::fs::write(
            home.join(settings::SETTINGS_FILE),
            "[[links]]\nsource = \"prompts\"\ntarget = \".cursor/prompts\"\n",
        )
        .unwrap();

        let config = Config::load(&dir.path().join("project"), &home).unwrap();
        let specs = config.link_specs();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].target, config.rules_target());
        assert_eq!(specs[1].source, home.join("prompts"));
        assert_eq!(
            specs[1].target,
            dir.path().join("project").join(".cursor").join("prompts")
        );
    }

    #[test]
    fn validate_clean_config_has_no_warnings() {
        let dir = tempfile::tempdir().unwrap();
        assert!(config_in(dir.path()).validate().is_empty());
    }

    #[test]
    fn validate_warns_on_absolute_editor_dir() {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().join("boulder");
        std::fs::create_dir_all(&home).unwrap();
        std::fs::write(
            home.join(settings::SETTINGS_FILE),
            "editor_dir = \"/etc/cursor\"\n",
        )
        .unwrap();

        let config = Config::load(&dir.path().join("project"), &home).unwrap();
        let warnings = config.validate();
        assert!(
            warnings.iter().any(|w| w.message.contains("relative")),
            "expected a warning about absolute editor_dir, got: {warnings:?}"
        );
    }

    #[test]
    fn validate_warns_on_duplicate_link_target() {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().join("boulder");
        std::fs::create_dir_all(&home).unwrap();
        std::fs::write(
            home.join(settings::SETTINGS_FILE),
            "[[links]]\nsource = \"other\"\ntarget = \".cursor/rules\"\n",
        )
        .unwrap();

        let config = Config::load(&dir.path().join("project"), &home).unwrap();
        let warnings = config.validate();
        assert!(
            warnings
                .iter()
                .any(|w| w.message.contains("duplicate link target")),
            "expected a duplicate-target warning, got: {warnings:?}"
        );
    }
}
