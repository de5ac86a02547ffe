//! powerchord CLI entry point
//!
//! Usage:
//!   powerchord                     Run the tasks from pyproject.toml
//!   powerchord -t "cargo test"     Run the given commands instead
//!   powerchord -l fail=error       Hide the output of failed tasks

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use powerchord::cli::{fatal_message, Cli};
use powerchord::config::load_config;
use powerchord::logging;
use powerchord::runner::TaskRunner;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::debug!("Fatal: {:#}", e);
            eprintln!("{}", fatal_message(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<bool> {
    let config = load_config(cli.config.as_deref(), &cli.overrides())?;
    logging::init(&config.log_levels)?;

    let runner = TaskRunner::new(config.tasks());
    Ok(runner.run_tasks().await?)
}
