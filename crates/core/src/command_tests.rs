// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_set_is_empty() {
    let set = CommandSet::new("ubuntu:22.04");
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.id(), "ubuntu:22.04");
}

#[test]
fn push_preserves_append_order() {
    let mut set = CommandSet::new("debian:12");
    set.push("apt-get update", "update failed", true);
    set.push("apt-get install -y curl", "curl install failed", false);
    set.push("curl --version", "curl missing", false);

    assert_eq!(set.len(), 3);
    let lines: Vec<&str> = set.iter().map(|c| c.line.as_str()).collect();
    assert_eq!(
        lines,
        vec!["apt-get update", "apt-get install -y curl", "curl --version"]
    );
}

#[test]
fn push_keeps_fields_associated() {
    let mut set = CommandSet::new("test");
    set.push("true", "first failed", false);
    set.push("false", "second failed", true);

    let specs: Vec<&CommandSpec> = set.iter().collect();
    assert_eq!(specs[0].line, "true");
    assert_eq!(specs[0].failure_message, "first failed");
    assert!(!specs[0].fatal);
    assert_eq!(specs[1].line, "false");
    assert_eq!(specs[1].failure_message, "second failed");
    assert!(specs[1].fatal);
}

#[test]
fn command_spec_deserializes_from_toml() {
    let spec: CommandSpec = toml::from_str(
        r#"
        run = "apt-get update"
        on_failure = "update failed"
        fatal = true
        "#,
    )
    .unwrap();
    assert_eq!(spec.line, "apt-get update");
    assert_eq!(spec.failure_message, "update failed");
    assert!(spec.fatal);
}

#[test]
fn command_spec_fatal_defaults_to_false() {
    let spec: CommandSpec = toml::from_str(
        r#"
        run = "true"
        on_failure = "nope"
        "#,
    )
    .unwrap();
    assert!(!spec.fatal);
}
