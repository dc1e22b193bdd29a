//! Error types for upgit-git.

use std::path::PathBuf;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during git operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The git executable could not be started at all.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program name that was invoked.
        program: String,
        /// Underlying spawn error.
        source: std::io::Error,
    },

    /// A git operation exited with a non-zero status.
    ///
    /// Exit codes are not interpreted further; `detail` carries the
    /// subprocess's captured stderr (or the bare status when stderr
    /// was empty).
    #[error("git {operation} failed in {}: {detail}", repo.display())]
    CommandFailed {
        /// Which operation failed (e.g. "fetch", "commit").
        operation: &'static str,
        /// Repository the operation ran against.
        repo: PathBuf,
        /// Captured diagnostic output.
        detail: String,
    },
}

impl Error {
    /// Name of the git operation that failed, if this is a command failure.
    #[must_use]
    pub const fn operation(&self) -> Option<&'static str> {
        match self {
            Self::CommandFailed { operation, .. } => Some(*operation),
            Self::Spawn { .. } => None,
        }
    }
}
