// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn sink_text(sink: &[u8]) -> String {
    String::from_utf8_lossy(sink).into_owned()
}

#[tokio::test]
async fn writes_prompt_and_captured_output() {
    let mut sink = Vec::new();
    let redactor = Redactor::new();

    send_command(&mut sink, &redactor, "printf hi").await.unwrap();

    let text = sink_text(&sink);
    assert!(text.contains("[rigup] # printf hi\n"));
    assert!(text.contains("hi"));
}

#[tokio::test]
async fn captures_stderr_too() {
    let mut sink = Vec::new();
    let redactor = Redactor::new();

    send_command(&mut sink, &redactor, "echo noise 1>&2").await.unwrap();

    assert!(sink_text(&sink).contains("noise"));
}

#[tokio::test]
async fn nonzero_exit_is_reported_with_code() {
    let mut sink = Vec::new();
    let redactor = Redactor::new();

    let err = send_command(&mut sink, &redactor, "exit 3").await.unwrap_err();
    assert!(matches!(err, ExecError::Exit { code: 3 }));
}

#[tokio::test]
async fn output_reaches_sink_even_on_failure() {
    let mut sink = Vec::new();
    let redactor = Redactor::new();

    let _ = send_command(&mut sink, &redactor, "echo partial; exit 1").await;
    assert!(sink_text(&sink).contains("partial"));
}

#[tokio::test]
async fn run_commands_continues_past_soft_failures() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first");
    let last = dir.path().join("last");

    let mut set = CommandSet::new("soft");
    set.push(format!("touch {}", first.display()), "first failed", false);
    set.push("exit 1", "middle failed", false);
    set.push(format!("touch {}", last.display()), "last failed", false);

    let mut sink = Vec::new();
    let status = run_commands(&mut sink, &Redactor::new(), &set).await;

    assert_eq!(status, BatchStatus::SoftFailure { failures: 1 });
    assert!(first.exists());
    assert!(last.exists());

    // Every command's prompt line made it to the sink.
    let text = sink_text(&sink);
    assert_eq!(text.matches("[rigup] # ").count(), 3);
}

#[tokio::test]
async fn run_commands_stops_at_failing_fatal_command() {
    let dir = tempfile::tempdir().unwrap();
    let before = dir.path().join("before");
    let after = dir.path().join("after");

    let mut set = CommandSet::new("fatal");
    set.push(format!("touch {}", before.display()), "setup failed", false);
    set.push("exit 7", "required step failed", true);
    set.push(format!("touch {}", after.display()), "cleanup failed", false);

    let mut sink = Vec::new();
    let status = run_commands(&mut sink, &Redactor::new(), &set).await;

    assert_eq!(
        status,
        BatchStatus::FatalFailure { message: "required step failed".to_string() }
    );
    assert!(status.is_fatal());
    assert!(before.exists());
    assert!(!after.exists(), "commands after the fatal failure must not run");
}

#[tokio::test]
async fn run_commands_empty_set_is_ok() {
    let mut sink = Vec::new();
    let status = run_commands(&mut sink, &Redactor::new(), &CommandSet::new("empty")).await;
    assert_eq!(status, BatchStatus::Ok);
    assert!(sink.is_empty());
}

#[tokio::test]
async fn prompt_is_redacted_but_execution_is_not() {
    let redactor = Redactor::with_rules(vec!["s3cr3t".to_string()]);
    let mut sink = Vec::new();

    send_command(&mut sink, &redactor, "echo s3cr3t").await.unwrap();

    let text = sink_text(&sink);
    let (prompt_line, rest) = text.split_once('\n').unwrap();
    assert!(prompt_line.contains("********"));
    assert!(!prompt_line.contains("s3cr3t"));
    // The child received the raw command text.
    assert!(rest.contains("s3cr3t"));
}
