// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rigup: run ordered shell-command sets from a plan file.

mod plan;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rigup_core::{format_elapsed, Redactor};
use rigup_runner::BatchStatus;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::plan::{Plan, Strategy};

#[derive(Parser)]
#[command(name = "rigup", version, about = "Run ordered shell-command sets from a plan file")]
struct Cli {
    /// Path to the TOML plan file
    plan: PathBuf,

    /// Append command output to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Suppress the per-set progress summaries; only warnings and errors
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("rigup: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Default filter directive when `RIGUP_LOG` is not set.
fn default_log_level(quiet: bool) -> &'static str {
    if quiet {
        "warn"
    } else {
        "info"
    }
}

fn init_tracing(quiet: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_env("RIGUP_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_log_level(quiet)));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let plan = Plan::load(&cli.plan)
        .with_context(|| format!("loading plan {}", cli.plan.display()))?;

    let redactor = redactor_from_env(&plan.redact);

    let mut sink: Box<dyn AsyncWrite + Unpin + Send> = match &cli.log {
        Some(path) => {
            let file = tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .await
                .with_context(|| format!("opening log file {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(tokio::io::stdout()),
    };

    for def in &plan.sets {
        let set = def.to_command_set();
        let start = Instant::now();
        tracing::info!(
            set = set.id(),
            commands = set.len(),
            strategy = ?def.strategy,
            "running command set"
        );

        match def.strategy {
            Strategy::Run => {
                match rigup_runner::run_commands(&mut sink, &redactor, &set).await {
                    BatchStatus::Ok => {}
                    BatchStatus::SoftFailure { failures } => {
                        tracing::warn!(set = set.id(), failures, "set finished with soft failures");
                    }
                    BatchStatus::FatalFailure { message } => {
                        // Terminating the process on a fatal failure is
                        // decided here, at the outermost layer only.
                        sink.flush().await.ok();
                        eprintln!("rigup: {message}");
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
            Strategy::Try => {
                rigup_runner::try_commands(&mut sink, &redactor, &set).await?;
            }
            Strategy::Inspect => {
                let outputs = rigup_runner::inspect_commands(&mut sink, &redactor, &set).await?;
                for (spec, output) in set.iter().zip(&outputs) {
                    tracing::info!(
                        set = set.id(),
                        command = %redactor.redact(&spec.line),
                        output = output.trim_end(),
                        "captured output"
                    );
                }
            }
        }

        tracing::info!(
            set = set.id(),
            elapsed = %format_elapsed(start.elapsed().as_secs()),
            "set finished"
        );
    }

    sink.flush().await.context("flushing output sink")?;
    Ok(ExitCode::SUCCESS)
}

/// Build the redaction rules from the values of the named environment
/// variables. Unset variables contribute no rule.
fn redactor_from_env(names: &[String]) -> Redactor {
    let mut redactor = Redactor::new();
    for name in names {
        match std::env::var(name) {
            Ok(value) => redactor.add_rule(value),
            Err(_) => tracing::debug!(name = %name, "redaction variable not set"),
        }
    }
    redactor
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
