//! Publish pipeline: stage, commit, push.

use std::path::Path;

use upgit_git::GitOps;

use crate::error::{PublishStep, Result, TaskError};
use crate::message::CommitMessage;

/// Publish all working-tree changes in `local_path` to the remote
/// default branch.
///
/// Runs stage → commit → push strictly in order; the first failure
/// aborts the remaining steps. A clean working tree makes the commit
/// fail ("nothing to commit"), which is reported like any other publish
/// failure rather than silently ignored - a run that changed nothing is
/// worth knowing about.
///
/// # Errors
/// Returns [`TaskError::Publish`] carrying the failed sub-step.
pub fn publish<G: GitOps>(
    git: &G,
    local_path: &Path,
    message: &CommitMessage,
    branch: &str,
) -> Result<()> {
    let publish_error = |step| {
        move |source| TaskError::Publish {
            step,
            path: local_path.to_path_buf(),
            source,
        }
    };

    git.stage_all(local_path)
        .map_err(publish_error(PublishStep::Stage))?;
    git.commit(local_path, message.as_str())
        .map_err(publish_error(PublishStep::Commit))?;
    git.push(local_path, branch)
        .map_err(publish_error(PublishStep::Push))?;

    Ok(())
}
