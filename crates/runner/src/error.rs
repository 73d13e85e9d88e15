// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for command execution.

use std::io;

/// Failure of a single command execution.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The shell process could not be created (missing interpreter,
    /// resource exhaustion).
    #[error("failed to launch command: {source}")]
    Launch {
        #[source]
        source: io::Error,
    },

    /// The command ran but exited with a failure status. `code` is `-1`
    /// when the child was terminated by a signal.
    #[error("command exited with status {code}")]
    Exit { code: i32 },

    /// Waiting on the child (or relaying its output) failed.
    #[error("failed to wait on command: {source}")]
    Wait {
        #[source]
        source: io::Error,
    },
}

/// First failure of a fail-fast batch.
///
/// Displays as the failing command's configured failure message; the
/// technical cause is available via `source()` and the diagnostic log only.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct BatchError {
    pub message: String,
    #[source]
    pub source: ExecError,
}

/// First failure of an inspecting batch, carrying the outputs collected
/// before the failing command.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct InspectError {
    pub message: String,
    /// Captured stdout of each command that completed before the failure,
    /// in execution order.
    pub partial: Vec<String>,
    #[source]
    pub source: ExecError,
}
