//! The batch orchestrator: drives every task through the four-stage
//! state machine and isolates per-task failures.

use std::path::PathBuf;

use upgit_git::GitOps;

use crate::error::{Result, TaskError};
use crate::message::CommitMessage;
use crate::task::Task;
use crate::{bootstrap, overlay, publish, sync};

/// The single branch this tool synchronises and publishes.
pub const DEFAULT_BRANCH: &str = "master";

/// Outcome of one task, labeled with its 1-based position in the batch.
#[derive(Debug)]
pub struct TaskOutcome {
    /// 1-based task id (position in the configuration).
    pub id: usize,
    /// The task's local mirror path.
    pub local_path: PathBuf,
    /// `Ok` when all four stages completed.
    pub result: Result<()>,
}

impl TaskOutcome {
    /// Whether the task completed all stages.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Run every task in order, each through bootstrap → sync → overlay →
/// publish.
///
/// A stage failure short-circuits the remaining stages of that task
/// only; the batch always continues to the next task and never
/// terminates early. One [`TaskOutcome`] is produced per task, in task
/// order, and every commit of the run carries the same `message`.
pub fn run<G: GitOps>(git: &G, tasks: &[Task], message: &CommitMessage) -> Vec<TaskOutcome> {
    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| TaskOutcome {
            id: index + 1,
            local_path: task.local_path.clone(),
            result: run_task(git, task, message),
        })
        .collect()
}

/// One task's pass through the state machine; any error aborts the rest.
fn run_task<G: GitOps>(git: &G, task: &Task, message: &CommitMessage) -> Result<()> {
    if !bootstrap::ensure_directory(&task.local_path) {
        return Err(TaskError::DirectorySetup(task.local_path.clone()));
    }

    if !bootstrap::has_git_metadata(&task.local_path) {
        bootstrap::bootstrap(git, &task.local_path, &task.remote_path)?;
    }

    sync::synchronise(git, &task.local_path, DEFAULT_BRANCH)?;
    overlay::overlay(&task.target_path, &task.local_path)?;
    publish::publish(git, &task.local_path, message, DEFAULT_BRANCH)
}
