//! Machine-readable rendering of batch outcomes.

use std::path::Path;

use serde::Serialize;
use upgit_core::TaskOutcome;

/// One task's outcome as serialised by `--json`.
#[derive(Serialize)]
struct OutcomeRecord<'a> {
    task: usize,
    local_path: &'a Path,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Render all outcomes as a pretty-printed JSON array.
///
/// # Errors
/// Returns an error when a local path is not valid UTF-8.
pub fn render(outcomes: &[TaskOutcome]) -> serde_json::Result<String> {
    let records: Vec<OutcomeRecord<'_>> = outcomes
        .iter()
        .map(|outcome| OutcomeRecord {
            task: outcome.id,
            local_path: &outcome.local_path,
            ok: outcome.is_success(),
            error: outcome.result.as_ref().err().map(ToString::to_string),
        })
        .collect();

    serde_json::to_string_pretty(&records)
}
