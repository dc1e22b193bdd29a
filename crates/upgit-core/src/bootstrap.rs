//! Local repository setup: directory creation and first-time git
//! initialization with rollback.

use std::fs;
use std::path::Path;

use upgit_git::GitOps;

use crate::error::{BootstrapStep, Result, TaskError};

/// Create the local mirror directory tree if absent.
///
/// Returns whether the directory exists afterwards; a `false` result is
/// escalated by the orchestrator as the task's directory-setup failure.
#[must_use]
pub fn ensure_directory(local_path: &Path) -> bool {
    let _ = fs::create_dir_all(local_path);
    local_path.is_dir()
}

/// Pure inspection: does `local_path` hold initialized git metadata?
#[must_use]
pub fn has_git_metadata(local_path: &Path) -> bool {
    local_path.join(".git").is_dir()
}

/// Initialize git tracking in `local_path` and attach `remote_path` as
/// its origin. Called only when [`has_git_metadata`] is false.
///
/// All-or-nothing: if attaching the origin fails after a successful
/// init, the whole `local_path` tree is removed (best effort) before the
/// failure is reported, so a half-initialized mirror never survives.
///
/// # Errors
/// Returns [`TaskError::Bootstrap`] carrying the failed sub-step.
pub fn bootstrap<G: GitOps>(git: &G, local_path: &Path, remote_path: &str) -> Result<()> {
    git.init(local_path).map_err(|source| TaskError::Bootstrap {
        step: BootstrapStep::Init,
        path: local_path.to_path_buf(),
        source,
    })?;

    if let Err(source) = git.add_remote(local_path, remote_path) {
        let _ = fs::remove_dir_all(local_path);
        return Err(TaskError::Bootstrap {
            step: BootstrapStep::AddRemote,
            path: local_path.to_path_buf(),
            source,
        });
    }

    Ok(())
}
