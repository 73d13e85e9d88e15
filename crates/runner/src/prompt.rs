// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt-line logging shared by all executors.

use rigup_core::Redactor;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Prefix written before each redacted command line in the sink.
pub(crate) const PROMPT: &str = "[rigup] # ";

/// Write the redacted rendering of a command line to the sink before
/// execution.
///
/// A sink that refuses the write is a local warning only; the command runs
/// regardless of whether its invocation could be logged.
pub(crate) async fn write_prompt<W>(sink: &mut W, redactor: &Redactor, line: &str)
where
    W: AsyncWrite + Unpin + Send + ?Sized,
{
    let rendered = format!("{}{}\n", PROMPT, redactor.redact(line));
    if let Err(e) = sink.write_all(rendered.as_bytes()).await {
        tracing::warn!(error = %e, "failed to log command line before execution");
    }
}
