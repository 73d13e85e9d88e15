// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered shell-command sets for provisioning runs

use serde::Deserialize;

/// One shell command plus its failure policy.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CommandSpec {
    /// Shell text, executed verbatim via `bash -c`. No validation is applied.
    #[serde(rename = "run")]
    pub line: String,
    /// Human-readable message surfaced when this command fails.
    #[serde(rename = "on_failure")]
    pub failure_message: String,
    /// Whether a failure of this command must stop the whole batch.
    #[serde(default)]
    pub fatal: bool,
}

/// An ordered set of commands for one provisioning target.
///
/// Built up with [`CommandSet::push`] before execution and treated as
/// immutable once a runner starts iterating it. There is no removal API;
/// sets are cheap and created fresh per use.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandSet {
    id: String,
    commands: Vec<CommandSpec>,
}

impl CommandSet {
    /// Create an empty set tagged with an opaque identifier, e.g. a
    /// distro/release pair like `ubuntu:22.04`. The identifier is caller
    /// bookkeeping only; runners never interpret it.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), commands: Vec::new() }
    }

    /// The identifier this set was created with.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Append one command. The line, failure message, and fatal flag always
    /// move together; they cannot go out of step.
    pub fn push(
        &mut self,
        line: impl Into<String>,
        failure_message: impl Into<String>,
        fatal: bool,
    ) {
        self.commands.push(CommandSpec {
            line: line.into(),
            failure_message: failure_message.into(),
            fatal,
        });
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands in append order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
