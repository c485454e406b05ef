//! `list` and `run` handlers, writing their report to any `Write`.

use std::io::Write;

use anyhow::Result;
use tracing::{error, info};

use ordq_queue::TaskQueue;

/// How a `run` ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every step ran and the queue is drained.
    Completed,
    /// Nothing ran; the resolved order was printed.
    DryRun,
    /// A step failed; it and the steps after it are still queued.
    Halted,
}

/// Print the resolved step order, one per line or as a JSON array.
pub fn list(queue: &TaskQueue, json: bool, out: &mut impl Write) -> Result<()> {
    let names = queue.names();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&names)?)?;
    } else {
        for (i, name) in names.iter().enumerate() {
            writeln!(out, "{:>3}. {}", i + 1, name)?;
        }
    }
    Ok(())
}

/// Execute the queue, or only print its order when `dry_run` is set.
///
/// Steps that ran are printed as `ok`, steps left behind by a failure as `--`.
pub fn run(queue: &TaskQueue, dry_run: bool, out: &mut impl Write) -> Result<RunStatus> {
    if dry_run {
        info!(queue = %queue.config().label, steps = queue.len(), "dry run, nothing executed");
        list(queue, false, out)?;
        return Ok(RunStatus::DryRun);
    }

    info!(queue = %queue.config().label, steps = queue.len(), "running plan");
    match queue.execute() {
        Ok(report) => {
            for name in &report.executed {
                writeln!(out, "ok  {name}")?;
            }
            info!(duration_ms = report.duration.as_millis() as u64, "plan complete");
            Ok(RunStatus::Completed)
        }
        Err(e) => {
            let pending = queue.names();
            error!(error = %e, pending = pending.len(), "plan halted");
            writeln!(out, "error: {e}")?;
            for name in &pending {
                writeln!(out, "--  {name}")?;
            }
            Ok(RunStatus::Halted)
        }
    }
}
