use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Run an ordered plan of shell steps through an ordq task queue.
#[derive(Parser, Debug)]
#[command(name = "ordq", version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute every step of a plan in queue order, stopping at the first failure.
    Run {
        /// Path to the plan TOML file.
        plan: PathBuf,

        /// Print the resolved order instead of executing it.
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the resolved step order without running anything.
    List {
        /// Path to the plan TOML file.
        plan: PathBuf,

        /// Emit the order as a JSON array.
        #[arg(long)]
        json: bool,
    },
}
