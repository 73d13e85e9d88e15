// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rigup-runner: sequential shell-command execution with three strategies.
//!
//! - best-effort ([`send_command`] / [`run_commands`]): buffered capture,
//!   log and continue; failing fatal commands stop the batch with a
//!   [`BatchStatus::FatalFailure`] tag for the caller to act on.
//! - fail-fast ([`try_command`] / [`try_commands`]): live streaming, first
//!   failure aborts the batch and surfaces the configured failure message.
//! - inspecting ([`inspect_command`] / [`inspect_commands`]): fail-fast
//!   streaming plus per-command stdout capture returned to the caller.
//!
//! Commands run strictly one at a time; a child is spawned, drained, and
//! waited on before the next begins. No runner ever terminates the process.

pub mod error;
pub mod inspect;
pub mod outcome;
mod prompt;
pub mod send;
mod stream;
pub mod try_run;

pub use error::{BatchError, ExecError, InspectError};
pub use inspect::{inspect_command, inspect_commands};
pub use outcome::BatchStatus;
pub use send::{run_commands, send_command};
pub use try_run::{try_command, try_commands};
