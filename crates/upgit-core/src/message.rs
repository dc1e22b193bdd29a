//! Run-wide commit message construction.

use std::fmt;

use chrono::{DateTime, Local};

/// Timestamp format used for commit messages, e.g. `2024/05/01 - 12:30:00`.
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d - %H:%M:%S";

/// The commit message shared by every task of one batch run.
///
/// Computed once per run so that all commits the run produces carry the
/// same label; threaded explicitly through the publish stage rather than
/// read from a global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    /// Build the message from the current local wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self::from_timestamp(&Local::now())
    }

    /// Build the message from an explicit timestamp.
    #[must_use]
    pub fn from_timestamp(timestamp: &DateTime<Local>) -> Self {
        Self(timestamp.format(TIMESTAMP_FORMAT).to_string())
    }

    /// Get the message as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
