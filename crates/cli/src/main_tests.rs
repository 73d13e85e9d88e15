// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn quiet_defaults_to_off() {
    let cli = Cli::try_parse_from(["rigup", "plan.toml"]).unwrap();
    assert!(!cli.quiet);
    assert!(cli.log.is_none());
}

#[test]
fn quiet_flag_is_accepted() {
    let cli = Cli::try_parse_from(["rigup", "plan.toml", "--quiet"]).unwrap();
    assert!(cli.quiet);
}

#[test]
fn log_and_quiet_combine() {
    let cli = Cli::try_parse_from(["rigup", "plan.toml", "--log", "out.log", "--quiet"]).unwrap();
    assert_eq!(cli.log, Some(PathBuf::from("out.log")));
    assert!(cli.quiet);
}

#[test]
fn plan_path_is_required() {
    assert!(Cli::try_parse_from(["rigup"]).is_err());
}

#[parameterized(
    normal = { false, "info" },
    quiet = { true, "warn" },
)]
fn quiet_raises_the_default_filter(quiet: bool, expected: &str) {
    assert_eq!(default_log_level(quiet), expected);
}
