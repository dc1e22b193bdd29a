//! Mock git implementation for unit-testing the task state machine.

use std::cell::RefCell;
use std::path::Path;

use upgit_git::{Error, GitOps, Result as GitResult};

/// Build the uniform failure every forced-failure flag produces.
fn forced(operation: &'static str, repo: &Path) -> Error {
    Error::CommandFailed {
        operation,
        repo: repo.to_path_buf(),
        detail: "forced failure".into(),
    }
}

/// Mock implementation of `GitOps` that records every call.
///
/// Failure flags make individual operations fail uniformly, the way a
/// non-zero git exit would.
#[derive(Default)]
pub struct RecordingGit {
    pub calls: RefCell<Vec<String>>,
    pub merged_refs: RefCell<Vec<String>>,
    pub commit_messages: RefCell<Vec<String>>,
    pub branch_on_remote: bool,
    pub fail_init: bool,
    pub fail_add_remote: bool,
    pub fail_fetch: bool,
    pub fail_merge: bool,
    pub fail_stage: bool,
    pub fail_commit: bool,
    pub fail_push: bool,
}

impl RecordingGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remote_branch(mut self) -> Self {
        self.branch_on_remote = true;
        self
    }

    pub fn with_init_failure(mut self) -> Self {
        self.fail_init = true;
        self
    }

    pub fn with_add_remote_failure(mut self) -> Self {
        self.fail_add_remote = true;
        self
    }

    pub fn with_fetch_failure(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn with_merge_failure(mut self) -> Self {
        self.fail_merge = true;
        self
    }

    pub fn with_stage_failure(mut self) -> Self {
        self.fail_stage = true;
        self
    }

    pub fn with_commit_failure(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    pub fn with_push_failure(mut self) -> Self {
        self.fail_push = true;
        self
    }

    pub fn call_names(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, operation: &'static str, repo: &Path, fail: bool) -> GitResult<()> {
        self.calls.borrow_mut().push(operation.to_owned());
        if fail {
            Err(forced(operation, repo))
        } else {
            Ok(())
        }
    }
}

impl GitOps for RecordingGit {
    fn init(&self, repo: &Path) -> GitResult<()> {
        self.record("init", repo, self.fail_init)
    }

    fn add_remote(&self, repo: &Path, _url: &str) -> GitResult<()> {
        self.record("remote add", repo, self.fail_add_remote)
    }

    fn fetch(&self, repo: &Path) -> GitResult<()> {
        self.record("fetch", repo, self.fail_fetch)
    }

    fn remote_branch_exists(&self, _repo: &Path, _branch: &str) -> bool {
        self.calls.borrow_mut().push("ls-remote".to_owned());
        self.branch_on_remote
    }

    fn merge(&self, repo: &Path, reference: &str) -> GitResult<()> {
        self.merged_refs.borrow_mut().push(reference.to_owned());
        self.record("merge", repo, self.fail_merge)
    }

    fn stage_all(&self, repo: &Path) -> GitResult<()> {
        self.record("add", repo, self.fail_stage)
    }

    fn commit(&self, repo: &Path, message: &str) -> GitResult<()> {
        self.commit_messages.borrow_mut().push(message.to_owned());
        self.record("commit", repo, self.fail_commit)
    }

    fn push(&self, repo: &Path, _branch: &str) -> GitResult<()> {
        self.record("push", repo, self.fail_push)
    }
}
