//! Subprocess implementation of [`GitOps`].

use std::path::Path;
use std::process::{Command, Output};

use crate::error::{Error, Result};
use crate::traits::GitOps;

/// Runs git operations by invoking the `git` executable.
///
/// Each call spawns `git -C <repo> <args…>` with an argument vector (no
/// shell is involved, so paths and URLs need no quoting) and blocks until
/// the subprocess exits. Exit status zero is success; any other status is
/// reported as [`Error::CommandFailed`] with the captured stderr as
/// detail, without interpreting the exit code further.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli {
    /// Create a runner for the `git` executable found on `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: "git".into(),
        }
    }

    /// Create a runner for a specific executable (wrapper scripts, tests).
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn output(&self, repo: &Path, args: &[&str]) -> Result<Output> {
        Command::new(&self.program)
            .arg("-C")
            .arg(repo)
            .args(args)
            .output()
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            })
    }

    fn run(&self, repo: &Path, operation: &'static str, args: &[&str]) -> Result<()> {
        let output = self.output(repo, args)?;
        if output.status.success() {
            Ok(())
        } else {
            Err(Error::CommandFailed {
                operation,
                repo: repo.to_path_buf(),
                detail: detail(&output),
            })
        }
    }
}

impl GitOps for GitCli {
    fn init(&self, repo: &Path) -> Result<()> {
        self.run(repo, "init", &["init"])
    }

    fn add_remote(&self, repo: &Path, url: &str) -> Result<()> {
        self.run(repo, "remote add", &["remote", "add", "origin", url])
    }

    fn fetch(&self, repo: &Path) -> Result<()> {
        self.run(repo, "fetch", &["fetch", "origin"])
    }

    fn remote_branch_exists(&self, repo: &Path, branch: &str) -> bool {
        // `--exit-code` makes ls-remote exit non-zero when no matching
        // ref is found; every other failure also counts as "absent".
        self.output(
            repo,
            &["ls-remote", "--exit-code", "--heads", "origin", branch],
        )
        .is_ok_and(|output| output.status.success())
    }

    fn merge(&self, repo: &Path, reference: &str) -> Result<()> {
        self.run(repo, "merge", &["merge", reference])
    }

    fn stage_all(&self, repo: &Path) -> Result<()> {
        self.run(repo, "add", &["add", "-A"])
    }

    fn commit(&self, repo: &Path, message: &str) -> Result<()> {
        self.run(repo, "commit", &["commit", "-m", message])
    }

    fn push(&self, repo: &Path, branch: &str) -> Result<()> {
        self.run(repo, "push", &["push", "origin", branch])
    }
}

/// Pick the most useful diagnostic text out of a finished subprocess.
fn detail(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_owned();
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stdout = stdout.trim();
    if stdout.is_empty() {
        output.status.to_string()
    } else {
        stdout.to_owned()
    }
}
