// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort executor: buffered capture, log and continue.

use std::process::Stdio;

use rigup_core::{CommandSet, Redactor};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::ExecError;
use crate::outcome::BatchStatus;
use crate::prompt;

/// Run one command with buffered combined capture and write everything it
/// printed to the sink.
///
/// The captured output reaches the sink whether or not the command
/// succeeded; sink write failures are warned about, never propagated.
/// Returns `ExecError::Launch` when the shell could not be started and
/// `ExecError::Exit` when the command exited non-zero.
pub async fn send_command<W>(
    sink: &mut W,
    redactor: &Redactor,
    line: &str,
) -> Result<(), ExecError>
where
    W: AsyncWrite + Unpin + Send + ?Sized,
{
    prompt::write_prompt(sink, redactor, line).await;

    let output = tokio::process::Command::new("bash")
        .arg("-c")
        .arg(line)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| {
            tracing::error!(
                command = %redactor.redact(line),
                error = %source,
                "failed to run command"
            );
            ExecError::Launch { source }
        })?;

    if let Err(e) = sink.write_all(&output.stdout).await {
        tracing::warn!(error = %e, "failed to write captured stdout to sink");
    }
    if let Err(e) = sink.write_all(&output.stderr).await {
        tracing::warn!(error = %e, "failed to write captured stderr to sink");
    }

    if !output.status.success() {
        return Err(ExecError::Exit { code: output.status.code().unwrap_or(-1) });
    }
    Ok(())
}

/// Drive a whole set through [`send_command`], in order.
///
/// Never returns an error and never exits the process. A failing fatal
/// command stops iteration and yields [`BatchStatus::FatalFailure`];
/// failing non-fatal commands are logged and counted while the batch
/// continues to the end.
pub async fn run_commands<W>(sink: &mut W, redactor: &Redactor, set: &CommandSet) -> BatchStatus
where
    W: AsyncWrite + Unpin + Send + ?Sized,
{
    let mut failures = 0usize;

    for spec in set.iter() {
        match send_command(sink, redactor, &spec.line).await {
            Ok(()) => {}
            Err(source) if spec.fatal => {
                tracing::error!(
                    set = set.id(),
                    command = %redactor.redact(&spec.line),
                    error = %source,
                    "fatal command failed, stopping batch"
                );
                return BatchStatus::FatalFailure { message: spec.failure_message.clone() };
            }
            Err(source) => {
                tracing::warn!(
                    set = set.id(),
                    command = %redactor.redact(&spec.line),
                    error = %source,
                    "{}",
                    spec.failure_message
                );
                failures += 1;
            }
        }
    }

    if failures > 0 {
        BatchStatus::SoftFailure { failures }
    } else {
        BatchStatus::Ok
    }
}

#[cfg(test)]
#[path = "send_tests.rs"]
mod tests;
