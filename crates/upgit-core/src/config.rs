//! Batch configuration parsing.
//!
//! The configuration is a plain text file with one task per line, three
//! whitespace-separated tokens: `local_path remote_path target_path`.
//! Malformed lines are diagnosed with their line number and skipped;
//! parsing always continues with the remaining lines.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::task::Task;

/// A per-line parse diagnostic for a rejected configuration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number in the configuration file.
    pub line: usize,
    /// The offending line, verbatim.
    pub content: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "configuration line {} does not contain enough tokens: {:?} (expected: local_path remote_path target_path)",
            self.line, self.content
        )
    }
}

/// Result of parsing a configuration file: the well-formed tasks plus a
/// diagnostic for every rejected line.
#[derive(Debug, Default)]
pub struct ParsedConfig {
    /// Tasks from well-formed lines, in file order.
    pub tasks: Vec<Task>,
    /// One entry per malformed line, in file order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Load and parse a configuration file.
///
/// # Errors
/// Returns the I/O error when the file cannot be read at all; malformed
/// lines are not errors and end up in [`ParsedConfig::diagnostics`].
pub fn load(path: impl AsRef<Path>) -> io::Result<ParsedConfig> {
    let content = fs::read_to_string(path)?;
    Ok(parse(&content))
}

/// Parse configuration text.
///
/// A line needs at least three whitespace-separated tokens; extra tokens
/// beyond the third are ignored. Blank lines have fewer than three tokens
/// and are therefore diagnosed like any other malformed line.
#[must_use]
pub fn parse(content: &str) -> ParsedConfig {
    let mut parsed = ParsedConfig::default();

    for (index, line) in content.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(local), Some(remote), Some(target)) => {
                parsed.tasks.push(Task::new(local, remote, target));
            }
            _ => parsed.diagnostics.push(Diagnostic {
                line: index + 1,
                content: line.to_owned(),
            }),
        }
    }

    parsed
}
