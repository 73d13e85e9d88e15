// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rigup-core: command-set model and supporting utilities for rigup

pub mod command;
pub mod redact;
pub mod time_fmt;

pub use command::{CommandSet, CommandSpec};
pub use redact::Redactor;
pub use time_fmt::format_elapsed;
