//! upgit - keep mirror repositories in sync with local content trees.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use upgit_core::{CommitMessage, batch, config};
use upgit_git::GitCli;

mod output;
mod report;

#[derive(Parser)]
#[command(
    name = "upgit",
    version,
    about = "Keep mirror repositories in sync with local content trees"
)]
struct Cli {
    /// Path to the batch configuration file
    /// (one `local_path remote_path target_path` line per task).
    config: PathBuf,

    /// Emit per-task outcomes as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Suppress per-task success output.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    output::set_quiet(cli.quiet);

    if let Err(e) = run(&cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let parsed = match config::load(&cli.config) {
        Ok(parsed) => parsed,
        Err(e) => {
            // An unopenable configuration file is an empty batch, not a
            // hard error: report it and do nothing.
            output::error(&format!(
                "error opening configuration file {}: {e}",
                cli.config.display()
            ));
            return Ok(());
        }
    };

    for diagnostic in &parsed.diagnostics {
        output::warn(&diagnostic.to_string());
    }

    if parsed.tasks.is_empty() {
        output::info("no tasks configured - nothing to do");
        return Ok(());
    }

    let git = GitCli::new();
    let message = CommitMessage::now();
    let outcomes = batch::run(&git, &parsed.tasks, &message);

    if cli.json {
        output::essential(&report::render(&outcomes)?);
    } else {
        for outcome in &outcomes {
            match &outcome.result {
                Ok(()) => output::success(&format!(
                    "task {} executed successfully ({})",
                    outcome.id,
                    outcome.local_path.display()
                )),
                Err(e) => output::error(&format!("error in task {}: {e}", outcome.id)),
            }
        }
    }

    // Per-task failures are visible on stderr (and in the JSON report)
    // but do not change the exit status once the batch has run.
    Ok(())
}
