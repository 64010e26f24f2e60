// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed project fixture (project root plus
// Boulder home) and a scriptable executor so each integration test can set
// up an isolated environment without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use boulder_cli::checks::Context;
use boulder_cli::config::Config;
use boulder_cli::exec::{Executor, ProcessResult, SPAWN_FAILURE_CODE};
use boulder_cli::logging::Logger;
use boulder_cli::platform::Platform;

/// A scriptable [`Executor`] keyed by invocation prefix.
///
/// `run("bunx", ["biome", "check", "."])` is matched against the stored
/// prefixes as `"bunx biome check ."`; the first (most recently added)
/// matching prefix wins, so overrides stack naturally. Unmatched
/// invocations report a spawn failure, which keeps tests honest about
/// what they expect to be executed.
pub struct StubExecutor {
    responses: Vec<(String, i32, String)>,
    which_result: bool,
}

impl StubExecutor {
    /// An executor for a machine with a fully working toolchain.
    pub fn healthy() -> Self {
        let defaults = [
            ("bun --version", 0, "1.2.0\n"),
            ("bun test", 0, "1 pass\n"),
            ("bunx biome --version", 0, "Version: 2.3.1\n"),
            ("bunx biome check", 0, ""),
            ("bunx tsc --version", 0, "Version 5.6.3\n"),
        ];
        Self {
            responses: defaults
                .into_iter()
                .map(|(p, c, o)| (p.to_string(), c, o.to_string()))
                .collect(),
            which_result: true,
        }
    }

    /// An executor for a machine with no Bun installation at all.
    pub fn without_bun() -> Self {
        let mut stub = Self::healthy();
        stub.which_result = false;
        stub
    }

    /// Override (or add) the response for an invocation prefix.
    pub fn with(mut self, prefix: &str, code: i32, output: &str) -> Self {
        self.responses
            .insert(0, (prefix.to_string(), code, output.to_string()));
        self
    }
}

impl Executor for StubExecutor {
    fn run(&self, program: &str, args: &[&str], _cwd: &Path) -> ProcessResult {
        let invocation = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.responses
            .iter()
            .find(|(prefix, _, _)| invocation.starts_with(prefix))
            .map_or_else(
                || ProcessResult {
                    code: SPAWN_FAILURE_CODE,
                    output: format!("no stub response for: {invocation}"),
                },
                |(_, code, output)| ProcessResult {
                    code: *code,
                    output: output.clone(),
                },
            )
    }

    fn which(&self, _program: &str) -> bool {
        self.which_result
    }
}

/// An isolated project + Boulder home pair backed by a
/// [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct ProjectFixture {
    dir: tempfile::TempDir,
}

impl ProjectFixture {
    /// Create a fixture with a minimal valid project: a manifest declaring
    /// a test script, and a shared rules directory in the Boulder home.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let fixture = Self { dir };
        std::fs::create_dir_all(fixture.root()).expect("create project dir");
        std::fs::create_dir_all(fixture.rules_source()).expect("create rules dir");
        fixture.write_manifest(
            r#"{ "name": "fixture", "scripts": { "test": "bun test" } }"#,
        );
        fixture
    }

    /// Path of the project root.
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("project")
    }

    /// Path of the Boulder home.
    pub fn boulder_home(&self) -> PathBuf {
        self.dir.path().join("boulder")
    }

    /// Path of the shared rules directory.
    pub fn rules_source(&self) -> PathBuf {
        self.boulder_home().join("rules")
    }

    /// Load the configuration for this fixture.
    pub fn config(&self) -> Config {
        Config::load(&self.root(), &self.boulder_home()).expect("load config")
    }

    /// Overwrite the project manifest.
    pub fn write_manifest(&self, content: &str) {
        std::fs::write(self.root().join("package.json"), content).expect("write manifest");
    }

    /// Create the lint configuration marker file.
    pub fn write_lint_config(&self) {
        std::fs::write(self.root().join("biome.json"), "{}\n").expect("write biome.json");
    }

    /// Write `boulder.toml` into the Boulder home.
    pub fn write_settings(&self, content: &str) {
        std::fs::write(self.boulder_home().join("boulder.toml"), content)
            .expect("write settings");
    }

    /// Create the rules link the way a successful `init` would.
    #[cfg(unix)]
    pub fn link_rules(&self) {
        let target = self.config().rules_target();
        std::fs::create_dir_all(target.parent().expect("target parent"))
            .expect("create editor dir");
        std::os::unix::fs::symlink(self.rules_source(), &target).expect("create link");
    }

    /// Build a check execution context over this fixture.
    pub fn context(&self, executor: StubExecutor) -> Context {
        Context::new(
            self.config(),
            Platform::detect(),
            Arc::new(Logger::new("test")),
            false,
            Arc::new(executor),
        )
    }
}
