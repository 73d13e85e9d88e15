// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fail-fast streaming executor.

use std::process::Stdio;

use rigup_core::{CommandSet, Redactor};
use tokio::io::AsyncWrite;

use crate::error::{BatchError, ExecError};
use crate::prompt;
use crate::stream;

/// Run one command with stdout and stderr streamed live to the sink.
///
/// Distinguishes three failure classes: the shell could not be started
/// (`Launch`), the command exited non-zero (`Exit` with the numeric code),
/// and the wait/relay itself failed (`Wait`).
pub async fn try_command<W>(sink: &mut W, redactor: &Redactor, line: &str) -> Result<(), ExecError>
where
    W: AsyncWrite + Unpin + Send + ?Sized,
{
    run_streamed(sink, redactor, line, None).await
}

/// Drive a whole set through [`try_command`], in order.
///
/// Stops at the first failing command and returns a [`BatchError`] whose
/// `Display` is exactly that command's configured failure message. Commands
/// after the failure never run. The fatal flag is not consulted here: any
/// failure aborts a fail-fast batch.
pub async fn try_commands<W>(
    sink: &mut W,
    redactor: &Redactor,
    set: &CommandSet,
) -> Result<(), BatchError>
where
    W: AsyncWrite + Unpin + Send + ?Sized,
{
    for spec in set.iter() {
        if let Err(source) = try_command(sink, redactor, &spec.line).await {
            tracing::error!(
                set = set.id(),
                command = %redactor.redact(&spec.line),
                error = %source,
                "command failed, aborting batch"
            );
            return Err(BatchError { message: spec.failure_message.clone(), source });
        }
    }
    Ok(())
}

/// Shared spawn / stream / wait cycle for the streaming executors.
///
/// When `capture` is provided, stdout chunks are duplicated into it while
/// still reaching the sink live.
pub(crate) async fn run_streamed<W>(
    sink: &mut W,
    redactor: &Redactor,
    line: &str,
    capture: Option<&mut Vec<u8>>,
) -> Result<(), ExecError>
where
    W: AsyncWrite + Unpin + Send + ?Sized,
{
    prompt::write_prompt(sink, redactor, line).await;

    let mut child = tokio::process::Command::new("bash")
        .arg("-c")
        .arg(line)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| {
            tracing::error!(
                command = %redactor.redact(line),
                error = %source,
                "failed to start command"
            );
            ExecError::Launch { source }
        })?;

    if let Err(source) = stream::pump(&mut child, sink, capture).await {
        // The child cannot make progress against a dead sink; reap it
        // before reporting.
        let _ = child.start_kill();
        let _ = child.wait().await;
        tracing::error!(
            command = %redactor.redact(line),
            error = %source,
            "failed to relay command output"
        );
        return Err(ExecError::Wait { source });
    }

    let status = child.wait().await.map_err(|source| {
        tracing::error!(
            command = %redactor.redact(line),
            error = %source,
            "failed to wait on command"
        );
        ExecError::Wait { source }
    })?;

    if !status.success() {
        let code = status.code().unwrap_or(-1);
        tracing::debug!(
            command = %redactor.redact(line),
            code,
            "command exited with non-zero status"
        );
        return Err(ExecError::Exit { code });
    }
    Ok(())
}

#[cfg(test)]
#[path = "try_run_tests.rs"]
mod tests;
