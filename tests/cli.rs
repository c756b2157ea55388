mod common;

use assert_cmd::prelude::*;
use common::{cmd, run_json, GREETING};
use predicates::str::contains;
use std::process::{Command, Stdio};

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hello-printer"));
    cmd.env_remove("HELLO_PRINTER_LOG");
    cmd
}

#[test]
fn default_run_prints_greeting_exactly() {
    cmd().assert().success().stdout(GREETING);
}

#[test]
fn run_subcommand_matches_default() {
    cmd().arg("run").assert().success().stdout(GREETING);
}

#[test]
fn hello_prints_one_line() {
    cmd().arg("hello").assert().success().stdout("Hello\n");
}

#[test]
fn print_echoes_text() {
    cmd()
        .args(["print", "What's up?"])
        .assert()
        .success()
        .stdout("What's up?\n");
}

#[test]
fn print_multiple_joins_without_separator() {
    cmd()
        .args(["print-multiple", "print", "again"])
        .assert()
        .success()
        .stdout("printagain\n");
}

#[test]
fn print_multiple_accepts_empty_strings() {
    cmd()
        .args(["print-multiple", "", "x"])
        .assert()
        .success()
        .stdout("x\n");
}

#[test]
fn steps_lists_greeting_plan() {
    cmd()
        .arg("steps")
        .assert()
        .success()
        .stdout(contains("hello\n"))
        .stdout(contains("print-multiple\ttext1\ttext2"));
}

#[test]
fn verbose_logs_stay_off_stdout() {
    cmd()
        .arg("-vvv")
        .assert()
        .success()
        .stdout(GREETING)
        .stderr(contains("running command"));
}

#[test]
fn log_env_overrides_level() {
    cmd()
        .env("HELLO_PRINTER_LOG", "debug")
        .assert()
        .success()
        .stdout(GREETING)
        .stderr(contains("emitted"));
}

#[test]
fn quiet_run_has_empty_stderr() {
    cmd().arg("-q").assert().success().stdout(GREETING).stderr("");
}

#[test]
fn missing_argument_fails() {
    cmd()
        .args(["print-multiple", "only-one"])
        .assert()
        .failure()
        .stderr(contains("<SECOND>"));
}

#[test]
fn json_hello() {
    let v = run_json(&["hello"]);
    assert_eq!(v["data"]["lines"], serde_json::json!(["Hello"]));
}

#[test]
fn closed_stdout_exits_quietly() {
    let mut child = bin()
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn binary");
    drop(child.stdout.take());
    let out = child.wait_with_output().expect("wait for binary");
    assert!(out.status.success(), "status: {:?}", out.status);
    assert!(out.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
}

#[cfg(target_os = "linux")]
#[test]
fn full_device_fails_with_single_error_line() {
    let full = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("open /dev/full");
    let out = bin()
        .stdout(Stdio::from(full))
        .assert()
        .failure()
        .code(1)
        .get_output()
        .clone();
    let stderr = String::from_utf8(out.stderr).expect("utf8 stderr");
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 1, "stderr: {}", stderr);
    assert!(lines[0].starts_with("error: failed to write output: "));
    assert_eq!(stderr.matches("os error 28").count(), 1, "stderr: {}", stderr);
}
