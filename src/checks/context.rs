//! Shared read-only context for check execution.
use std::sync::Arc;

use crate::config::Config;
use crate::exec::Executor;
use crate::logging::Log;
use crate::platform::Platform;

/// Immutable project context handed to every check.
///
/// Checks may probe the filesystem and spawn processes through
/// [`Executor`], but never see another check's in-memory result — each
/// check is independently testable against a context alone.
pub struct Context {
    /// Resolved configuration (project root, Boulder home, settings).
    pub config: Config,
    /// Detected platform information.
    pub platform: Platform,
    /// Logger for output.
    pub log: Arc<dyn Log>,
    /// Whether to preview changes without applying.
    pub dry_run: bool,
    /// Command executor (for testing or real system calls).
    pub executor: Arc<dyn Executor>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("platform", &self.platform)
            .field("log", &"<dyn Log>")
            .field("dry_run", &self.dry_run)
            .field("executor", &"<dyn Executor>")
            .finish()
    }
}

impl Context {
    /// Create a new context for check execution.
    #[must_use]
    pub fn new(
        config: Config,
        platform: Platform,
        log: Arc<dyn Log>,
        dry_run: bool,
        executor: Arc<dyn Executor>,
    ) -> Self {
        Self {
            config,
            platform,
            log,
            dry_run,
            executor,
        }
    }

    /// Project root directory.
    #[must_use]
    pub fn root(&self) -> &std::path::Path {
        &self.config.root
    }
}
