// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregate result of a best-effort batch.

/// Outcome tag returned by [`crate::run_commands`].
///
/// The runner itself never exits the process. A `FatalFailure` is a
/// decision handed to the outermost caller, which chooses whether and how
/// to terminate.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchStatus {
    /// Every command launched and exited cleanly.
    Ok,
    /// One or more non-fatal commands failed; the batch still ran to the end.
    SoftFailure { failures: usize },
    /// A fatal command failed; iteration stopped at it. Carries that
    /// command's configured failure message.
    FatalFailure { message: String },
}

impl BatchStatus {
    pub fn is_fatal(&self) -> bool {
        matches!(self, BatchStatus::FatalFailure { .. })
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
