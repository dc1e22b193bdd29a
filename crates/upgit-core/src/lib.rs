//! # upgit-core
//!
//! Core library for upgit: the task model, configuration parsing, and the
//! per-task synchronisation state machine (bootstrap → sync → overlay →
//! publish) with batch-level failure isolation.
//!
//! All git access goes through the [`upgit_git::GitOps`] trait so the
//! state machine can be exercised against a mock.

pub mod batch;
pub mod bootstrap;
pub mod config;
mod error;
pub mod message;
pub mod overlay;
pub mod publish;
pub mod sync;
mod task;

#[cfg(test)]
pub(crate) mod test_support;

pub use batch::{DEFAULT_BRANCH, TaskOutcome};
pub use error::{BootstrapStep, PublishStep, Result, TaskError};
pub use message::CommitMessage;
pub use task::Task;
