//! Error types for upgit-core.

use std::fmt;
use std::path::PathBuf;

/// Result type alias using [`TaskError`].
pub type Result<T> = std::result::Result<T, TaskError>;

/// Which bootstrap sub-step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStep {
    /// `git init` failed.
    Init,
    /// `git remote add origin` failed (the local tree has been rolled back).
    AddRemote,
}

impl fmt::Display for BootstrapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => f.write_str("init"),
            Self::AddRemote => f.write_str("remote add"),
        }
    }
}

/// Which publish sub-step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStep {
    /// Staging the working tree failed.
    Stage,
    /// Committing failed, including the "nothing to commit" case.
    Commit,
    /// Pushing to origin failed.
    Push,
}

impl fmt::Display for PublishStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stage => f.write_str("stage"),
            Self::Commit => f.write_str("commit"),
            Self::Push => f.write_str("push"),
        }
    }
}

/// Fatal conditions for a single task.
///
/// Every variant aborts the remaining stages of its task; none of them
/// aborts the batch. The orchestrator catches them at the task boundary
/// and moves on.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The local mirror directory could not be created or confirmed.
    #[error("failed to create local directory {}", .0.display())]
    DirectorySetup(PathBuf),

    /// Repository initialization or remote attachment failed.
    ///
    /// When `step` is [`BootstrapStep::AddRemote`] the partially
    /// initialized local tree has already been removed.
    #[error("bootstrap ({step}) failed for {}: {source}", path.display())]
    Bootstrap {
        /// The sub-step that failed.
        step: BootstrapStep,
        /// The local mirror path.
        path: PathBuf,
        /// Underlying git failure.
        source: upgit_git::Error,
    },

    /// Fetch or conditional merge failed (merge conflicts included).
    #[error("sync failed for {}: {source}", path.display())]
    Sync {
        /// The local mirror path.
        path: PathBuf,
        /// Underlying git failure.
        source: upgit_git::Error,
    },

    /// The content overlay hit an I/O error; the mirror may hold a
    /// partial overlay (no rollback).
    #[error("overlay of {} onto {} failed: {source}", from.display(), to.display())]
    Overlay {
        /// Source content root.
        from: PathBuf,
        /// Local mirror root.
        to: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Staging, committing, or pushing failed.
    #[error("publish ({step}) failed for {}: {source}", path.display())]
    Publish {
        /// The sub-step that failed.
        step: PublishStep,
        /// The local mirror path.
        path: PathBuf,
        /// Underlying git failure.
        source: upgit_git::Error,
    },
}
