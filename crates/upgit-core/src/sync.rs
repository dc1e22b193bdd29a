//! Remote synchronisation: fetch, then merge the default branch if the
//! remote has one.

use std::path::Path;

use upgit_git::GitOps;

use crate::error::{Result, TaskError};

/// Bring the local mirror's history up to date with its remote.
///
/// Fetch always runs first; the merge of `origin/<branch>` only happens
/// when the branch actually exists on the remote. A remote with no
/// default-branch history yet (a brand-new mirror) is the expected case,
/// not a failure, so the merge is skipped silently.
///
/// # Errors
/// Returns [`TaskError::Sync`] when the fetch or the merge fails; merge
/// conflicts count as merge failure, no resolution is attempted.
pub fn synchronise<G: GitOps>(git: &G, local_path: &Path, branch: &str) -> Result<()> {
    let sync_error = |source| TaskError::Sync {
        path: local_path.to_path_buf(),
        source,
    };

    git.fetch(local_path).map_err(sync_error)?;

    if git.remote_branch_exists(local_path, branch) {
        git.merge(local_path, &format!("origin/{branch}"))
            .map_err(sync_error)?;
    }

    Ok(())
}
