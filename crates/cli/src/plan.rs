// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML plan files: ordered command sets plus redaction configuration.
//!
//! ```toml
//! redact = ["RIGUP_DB_PASS"]
//!
//! [[set]]
//! id = "ubuntu:22.04"
//! strategy = "run"
//!
//! [[set.command]]
//! run = "apt-get update"
//! on_failure = "failed to update the package index"
//! fatal = true
//! ```

use std::path::Path;

use rigup_core::{CommandSet, CommandSpec};
use serde::Deserialize;

/// Execution strategy for one command set.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Best-effort: log failures and keep going; fatal commands gate the run.
    Run,
    /// Fail-fast: stop at the first failure.
    Try,
    /// Fail-fast with per-command stdout capture.
    Inspect,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Plan {
    /// Environment variable names whose *values* are masked in logs.
    #[serde(default)]
    pub redact: Vec<String>,
    #[serde(default, rename = "set")]
    pub sets: Vec<SetDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetDef {
    pub id: String,
    pub strategy: Strategy,
    #[serde(default, rename = "command")]
    pub commands: Vec<CommandSpec>,
}

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("failed to read plan file: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
    #[error("invalid plan file: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },
}

impl Plan {
    pub fn load(path: &Path) -> Result<Self, PlanError> {
        let text = std::fs::read_to_string(path).map_err(|source| PlanError::Read { source })?;
        toml::from_str(&text).map_err(|source| PlanError::Parse { source })
    }
}

impl SetDef {
    /// Convert this definition into the runner-facing command set.
    pub fn to_command_set(&self) -> CommandSet {
        let mut set = CommandSet::new(&self.id);
        for c in &self.commands {
            set.push(&c.line, &c.failure_message, c.fatal);
        }
        set
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
