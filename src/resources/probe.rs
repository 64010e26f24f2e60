//! Path classification.
use std::path::{Path, PathBuf};

/// Raw filesystem shape of a path, as seen without following a final
/// symlink.
///
/// The probe reports shape only; contextual judgments ("this regular
/// directory should have been a symlink") belong to the caller — see
/// [`reconcile`](super::symlink::reconcile).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathState {
    /// No filesystem entry exists at the path, not even a symlink.
    Absent,
    /// A non-symlink entry (regular file or directory).
    Regular,
    /// A symlink whose target resolves. Carries the literal link text.
    SymlinkValid(PathBuf),
    /// A symlink whose target does not resolve (missing or cyclic).
    /// Carries the literal link text.
    SymlinkBroken(PathBuf),
}

/// Classify the entry at `path`.
///
/// Total over all path values: a path whose parent directory does not
/// exist probes as [`PathState::Absent`], never as an error.
#[must_use]
pub fn probe(path: &Path) -> PathState {
    // lstat: missing parents and missing entries both surface as an error
    let Ok(meta) = path.symlink_metadata() else {
        return PathState::Absent;
    };

    if !meta.is_symlink() {
        return PathState::Regular;
    }

    let Ok(target) = std::fs::read_link(path) else {
        // Entry disappeared between lstat and readlink; report what is
        // there now.
        return PathState::Absent;
    };

    // stat (following the link): resolution failure means the link text
    // points nowhere, or the chain is cyclic.
    if path.metadata().is_ok() {
        PathState::SymlinkValid(target)
    } else {
        PathState::SymlinkBroken(target)
    }
}
