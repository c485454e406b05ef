mod cli;
mod commands;
mod plan;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use crate::cli::{CliArgs, Command};
use crate::commands::RunStatus;
use crate::plan::Plan;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    match dispatch(args.command) {
        Ok(RunStatus::Halted) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "ordq failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Command) -> Result<RunStatus> {
    let mut stdout = std::io::stdout().lock();
    match command {
        Command::List { plan, json } => {
            let queue = Plan::from_file(&plan)?.build_queue()?;
            commands::list(&queue, json, &mut stdout)?;
            Ok(RunStatus::Completed)
        }
        Command::Run { plan, dry_run } => {
            let queue = Plan::from_file(&plan)?.build_queue()?;
            commands::run(&queue, dry_run, &mut stdout)
        }
    }
}
