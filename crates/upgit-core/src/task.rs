//! The unit of work: one configured mirror.

use std::path::PathBuf;

/// One synchronisation task, built from one configuration line.
///
/// Tasks are immutable values owned by the batch for the duration of a
/// run; distinct tasks are fully independent (the tool does not check
/// for duplicate paths across tasks - that is a caller error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Root of the local mirror working copy.
    pub local_path: PathBuf,
    /// Address of the remote origin the mirror is linked to.
    pub remote_path: String,
    /// Root of the source content tree overlaid onto the mirror.
    pub target_path: PathBuf,
}

impl Task {
    /// Create a task from its three configured paths.
    #[must_use]
    pub fn new(
        local_path: impl Into<PathBuf>,
        remote_path: impl Into<String>,
        target_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            local_path: local_path.into(),
            remote_path: remote_path.into(),
            target_path: target_path.into(),
        }
    }
}
