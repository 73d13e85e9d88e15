// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inspecting executor: fail-fast streaming with stdout capture.

use rigup_core::{CommandSet, Redactor};
use tokio::io::AsyncWrite;

use crate::error::{ExecError, InspectError};
use crate::try_run;

/// Run one command with the same streaming semantics as
/// [`crate::try_command`], additionally duplicating stdout into a buffer
/// that is returned once the command completes successfully.
///
/// stderr still reaches the sink live but is never captured.
pub async fn inspect_command<W>(
    sink: &mut W,
    redactor: &Redactor,
    line: &str,
) -> Result<String, ExecError>
where
    W: AsyncWrite + Unpin + Send + ?Sized,
{
    let mut captured = Vec::new();
    try_run::run_streamed(sink, redactor, line, Some(&mut captured)).await?;
    Ok(String::from_utf8_lossy(&captured).into_owned())
}

/// Drive a whole set through [`inspect_command`], collecting one captured
/// stdout string per completed command.
///
/// The result is a tight sequence: index `i` holds the output of the `i`-th
/// command, nothing else. On the first failure an [`InspectError`] is
/// returned carrying that command's failure message and the outputs
/// collected so far. The fatal flag is not consulted here.
pub async fn inspect_commands<W>(
    sink: &mut W,
    redactor: &Redactor,
    set: &CommandSet,
) -> Result<Vec<String>, InspectError>
where
    W: AsyncWrite + Unpin + Send + ?Sized,
{
    let mut outputs = Vec::with_capacity(set.len());

    for spec in set.iter() {
        match inspect_command(sink, redactor, &spec.line).await {
            Ok(out) => outputs.push(out),
            Err(source) => {
                tracing::error!(
                    set = set.id(),
                    command = %redactor.redact(&spec.line),
                    error = %source,
                    "command failed, aborting inspection batch"
                );
                return Err(InspectError {
                    message: spec.failure_message.clone(),
                    partial: outputs,
                    source,
                });
            }
        }
    }

    Ok(outputs)
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
