//! Trait abstractions for git operations.
//!
//! This module defines the `GitOps` trait which abstracts the git
//! subprocess boundary, enabling dependency injection and testability.

use std::path::Path;

use crate::Result;

/// Trait for the git operations upgit needs.
///
/// This trait abstracts git invocation, allowing for:
/// - Dependency injection in the task state machine
/// - Mock implementations for testing
///
/// Every method takes the repository path explicitly; implementations
/// hold no per-repository state, so one value can serve a whole batch.
#[allow(clippy::missing_errors_doc)]
pub trait GitOps {
    /// Initialize a new repository at `repo`.
    fn init(&self, repo: &Path) -> Result<()>;

    /// Attach `url` as the `origin` remote of `repo`.
    fn add_remote(&self, repo: &Path, url: &str) -> Result<()>;

    /// Fetch all history from `origin` into `repo`'s tracking refs.
    fn fetch(&self, repo: &Path) -> Result<()>;

    /// Check whether `branch` exists on the remote itself (not in the
    /// local cache).
    ///
    /// Any failure to query counts as "absent" rather than an error.
    fn remote_branch_exists(&self, repo: &Path, branch: &str) -> bool;

    /// Merge `reference` (e.g. `origin/master`) into the current branch.
    fn merge(&self, repo: &Path, reference: &str) -> Result<()>;

    /// Stage all working-tree changes, including deletions.
    fn stage_all(&self, repo: &Path) -> Result<()>;

    /// Commit staged changes with `message`.
    ///
    /// An empty index ("nothing to commit") is a failure, as git itself
    /// reports it.
    fn commit(&self, repo: &Path, message: &str) -> Result<()>;

    /// Push `branch` to `origin`, creating the remote branch if absent.
    fn push(&self, repo: &Path, branch: &str) -> Result<()>;
}
