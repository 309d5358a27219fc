//! One-shot task agent built on the Aegis SDK.
//!
//! Reads an optional greeting secret, writes it with a generation timestamp to
//! `output/result.txt` under the workspace root, and logs each lifecycle step
//! as a JSON record.

pub mod exit_codes;

use std::fs;
use std::path::PathBuf;

use aegis_sdk::Environment;
use aegis_sdk::core::record::format_ts;
use aegis_sdk::log::{LineSink, Logger};
use aegis_sdk::secrets::Secrets;
use aegis_sdk::workspace::Workspace;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Secret consulted for the greeting.
pub const GREETING_SECRET: &str = "GREETING";
/// Greeting used when the secret is not set.
pub const DEFAULT_GREETING: &str = "Hello from AegisVM";
/// File written under the workspace `output/` directory.
pub const RESULT_FILE: &str = "result.txt";

/// Everything the task reads from or writes to.
pub struct TaskContext<'a, E, O, S> {
    pub workspace: &'a Workspace<E>,
    pub secrets: &'a Secrets<E>,
    pub logger: &'a Logger<O, S>,
    /// Secret name to read the greeting from.
    pub greeting_secret: &'a str,
}

/// Run the task. Returns the path of the written result file.
///
/// `now` is the timestamp written into the result file.
pub fn run_task<E, O, S>(ctx: &TaskContext<'_, E, O, S>, now: DateTime<Utc>) -> Result<PathBuf>
where
    E: Environment,
    O: LineSink,
    S: LineSink,
{
    ctx.logger.info("agent starting", &[])?;

    let greeting = ctx
        .secrets
        .get(ctx.greeting_secret)
        .unwrap_or_else(|| DEFAULT_GREETING.to_string());
    ctx.logger
        .info("greeting loaded", &[("greeting", greeting.as_str().into())])?;

    let paths = ctx
        .workspace
        .ensure_dirs()
        .context("create workspace directories")?;
    let output_file = paths.output_dir.join(RESULT_FILE);
    debug!(path = %output_file.display(), "writing result");
    fs::write(&output_file, render_result(&greeting, now))
        .with_context(|| format!("write {}", output_file.display()))?;

    ctx.logger.info(
        "output written",
        &[("path", output_file.display().to_string().into())],
    )?;
    ctx.logger.info("agent finished", &[])?;
    Ok(output_file)
}

/// Contents of `result.txt`.
pub fn render_result(greeting: &str, now: DateTime<Utc>) -> String {
    format!("{greeting}\nGenerated at: {}\n", format_ts(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn result_has_greeting_then_timestamp() {
        let now = Utc
            .with_ymd_and_hms(2026, 1, 18, 12, 0, 0)
            .single()
            .expect("valid ts");
        assert_eq!(
            render_result("hi", now),
            "hi\nGenerated at: 2026-01-18T12:00:00.000000+00:00\n"
        );
    }
}
