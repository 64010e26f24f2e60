//! Symlink reconciliation.
//!
//! Drives [`probe`](super::probe::probe) and performs the minimal mutation
//! needed to bring one desired link into existence, or reports why it
//! cannot. Only [`LinkPolicy::ForceOverwrite`] may remove an existing
//! non-matching entry; the other policies never destroy anything.
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use super::probe::{PathState, probe};

/// One desired symlink.
#[derive(Debug, Clone)]
pub struct LinkSpec {
    /// What the link points to (the shared directory or file).
    pub source: PathBuf,
    /// Where the link lives (the project-local path).
    pub target: PathBuf,
    /// When `true`, an absent target is a blocking condition under
    /// [`LinkPolicy::VerifyOnly`] rather than a silent skip.
    pub required: bool,
    /// Request a directory-style link. On Windows this selects a
    /// directory symlink (with a junction fallback); it is never
    /// auto-detected, since the source may not exist yet on this machine.
    pub directory: bool,
}

impl LinkSpec {
    /// Human-readable `target -> source` description.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} -> {}", self.target.display(), self.source.display())
    }
}

/// How aggressively [`reconcile`] may mutate the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkPolicy {
    /// Report the current state; never mutate.
    VerifyOnly,
    /// Create the link only when the target path is empty.
    CreateIfAbsent,
    /// Replace whatever occupies the target path.
    ForceOverwrite,
}

/// Result of one reconciliation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The target is already a symlink pointing at the desired source.
    AlreadyLinked,
    /// The target was empty and the link was created.
    Created,
    /// An existing entry was removed and the link recreated.
    Replaced,
    /// The target is absent and the link is not required.
    SkippedNotRequired,
    /// Reconciliation could not proceed; carries the reason.
    Blocked(String),
}

/// Bring the on-disk state of `spec.target` in line with `spec`, within
/// the limits of `policy`.
///
/// Implements the state × policy decision table: an identical existing
/// link is never recreated, verify-only and create-if-absent never remove
/// anything, and only force-overwrite replaces a wrong-target link, a
/// broken link, or a non-symlink entry. Unexpected filesystem errors
/// during create/remove surface as [`Outcome::Blocked`] with the OS error
/// text.
#[must_use]
pub fn reconcile(spec: &LinkSpec, policy: LinkPolicy) -> Outcome {
    match probe(&spec.target) {
        PathState::Absent => match policy {
            LinkPolicy::VerifyOnly => {
                if spec.required {
                    Outcome::Blocked("missing".to_string())
                } else {
                    Outcome::SkippedNotRequired
                }
            }
            LinkPolicy::CreateIfAbsent | LinkPolicy::ForceOverwrite => {
                match create_link(spec) {
                    Ok(()) => Outcome::Created,
                    Err(e) => Outcome::Blocked(format!("{e:#}")),
                }
            }
        },
        PathState::SymlinkValid(existing) => {
            if paths_equal(&existing, &spec.source) {
                // No-op: do not recreate an identical link.
                Outcome::AlreadyLinked
            } else if policy == LinkPolicy::ForceOverwrite {
                replace_link(spec)
            } else {
                Outcome::Blocked("wrong target".to_string())
            }
        }
        PathState::SymlinkBroken(_) => {
            if policy == LinkPolicy::ForceOverwrite {
                replace_link(spec)
            } else {
                Outcome::Blocked("broken".to_string())
            }
        }
        PathState::Regular => {
            if policy == LinkPolicy::ForceOverwrite {
                replace_link(spec)
            } else {
                Outcome::Blocked("not a symlink".to_string())
            }
        }
    }
}

/// Remove the existing entry at `spec.target`, then recreate the link.
///
/// Removal always precedes creation: platforms generally forbid
/// atomically replacing a directory entry of a different kind.
fn replace_link(spec: &LinkSpec) -> Outcome {
    let result = remove_entry(&spec.target).and_then(|()| create_link(spec));
    match result {
        Ok(()) => Outcome::Replaced,
        Err(e) => Outcome::Blocked(format!("{e:#}")),
    }
}

/// Compare a literal link text against the desired source, normalizing
/// Windows UNC prefixes.
fn paths_equal(a: &Path, b: &Path) -> bool {
    dunce::simplified(a) == dunce::simplified(b)
}

/// Ensure the parent directory of `path` exists, creating ancestors as
/// needed.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create parent: {}", parent.display()))?;
    }
    Ok(())
}

/// Create the symlink described by `spec`, handling platform differences.
fn create_link(spec: &LinkSpec) -> Result<()> {
    ensure_parent_dir(&spec.target)?;

    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(&spec.source, &spec.target).with_context(|| {
            format!("creating symlink {}", spec.description())
        })?;
    }

    #[cfg(windows)]
    {
        let result = if spec.directory {
            std::os::windows::fs::symlink_dir(&spec.source, &spec.target)
        } else {
            std::os::windows::fs::symlink_file(&spec.source, &spec.target)
        };

        if result.is_err() && spec.directory {
            // Directory symlinks need admin rights or developer mode;
            // junctions do not. Fall back to mklink /J via cmd.exe.
            let output = std::process::Command::new("cmd")
                .arg("/c")
                .arg("mklink")
                .arg("/J")
                .arg(&spec.target)
                .arg(&spec.source)
                .output()
                .with_context(|| format!("running mklink for {}", spec.description()))?;
            if !output.status.success() {
                anyhow::bail!(
                    "creating junction {}: {}",
                    spec.description(),
                    String::from_utf8_lossy(&output.stderr).trim()
                );
            }
        } else {
            result.with_context(|| format!("creating symlink {}", spec.description()))?;
        }
    }

    Ok(())
}

/// Remove whatever entry occupies `path`: a symlink, a regular file, or a
/// directory tree.
fn remove_entry(path: &Path) -> Result<()> {
    let meta = path
        .symlink_metadata()
        .with_context(|| format!("reading metadata: {}", path.display()))?;

    if meta.is_symlink() {
        remove_link_entry(path, &meta)
    } else if meta.is_dir() {
        std::fs::remove_dir_all(path)
            .with_context(|| format!("removing directory: {}", path.display()))
    } else {
        std::fs::remove_file(path)
            .with_context(|| format!("removing file: {}", path.display()))
    }
}

/// Remove a symlink entry without touching what it points at.
///
/// On Windows, directory symlinks and junctions must be removed with
/// `remove_dir` rather than `remove_file`; `symlink_metadata().is_dir()`
/// is `false` for symlinks, so the raw `FILE_ATTRIBUTE_DIRECTORY` bit is
/// checked instead.
fn remove_link_entry(path: &Path, meta: &std::fs::Metadata) -> Result<()> {
    if is_dir_like(meta) {
        std::fs::remove_dir(path)
            .with_context(|| format!("removing directory link: {}", path.display()))
    } else {
        std::fs::remove_file(path)
            .with_context(|| format!("removing link: {}", path.display()))
    }
}

fn is_dir_like(meta: &std::fs::Metadata) -> bool {
    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        meta.file_attributes() & 0x10 != 0 // FILE_ATTRIBUTE_DIRECTORY
    }
    #[cfg(not(windows))]
    {
        meta.is_dir()
    }
}
