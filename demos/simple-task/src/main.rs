use aegis_sdk::log::{self, Logger};
use aegis_sdk::secrets::Secrets;
use aegis_sdk::workspace::Workspace;
use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use simple_task::{GREETING_SECRET, TaskContext, exit_codes, run_task};

#[derive(Parser)]
#[command(
    name = "simple-task",
    version,
    about = "One-shot agent: writes a greeting to the workspace output directory"
)]
struct Cli {
    /// Secret holding the greeting.
    #[arg(long, default_value = GREETING_SECRET)]
    greeting_secret: String,
}

fn main() {
    aegis_sdk::logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        // Nothing left to report to if stderr is gone.
        let _ = log::error("task failed", &[("error", format!("{err:#}").into())]);
        std::process::exit(exit_codes::FAILED);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let workspace = Workspace::from_env();
    let secrets = Secrets::from_env();
    let logger = Logger::stdio();
    let ctx = TaskContext {
        workspace: &workspace,
        secrets: &secrets,
        logger: &logger,
        greeting_secret: &cli.greeting_secret,
    };
    run_task(&ctx, Utc::now())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_greeting_secret() {
        let cli = Cli::parse_from(["simple-task"]);
        assert_eq!(cli.greeting_secret, "GREETING");
    }

    #[test]
    fn parse_custom_secret() {
        let cli = Cli::parse_from(["simple-task", "--greeting-secret", "WELCOME"]);
        assert_eq!(cli.greeting_secret, "WELCOME");
    }
}
