// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Secret masking for logged command lines.

/// Fixed-width mask so log readers cannot infer secret length.
const MASK: &str = "********";

/// Masks configured secret values in text bound for logs.
///
/// The rules are an explicit value owned by the caller, not global state.
/// Redaction applies only to what gets *logged*; the executed command text
/// always stays untouched.
#[derive(Clone, Debug, Default)]
pub struct Redactor {
    rules: Vec<String>,
}

impl Redactor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: Vec<String>) -> Self {
        Self { rules }
    }

    /// Register one secret value to mask.
    pub fn add_rule(&mut self, rule: impl Into<String>) {
        self.rules.push(rule.into());
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Replace every occurrence of every non-empty rule with a fixed mask.
    ///
    /// Empty rules are skipped so they cannot corrupt whole lines.
    pub fn redact(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            if !rule.is_empty() && out.contains(rule) {
                out = out.replace(rule, MASK);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "redact_tests.rs"]
mod tests;
