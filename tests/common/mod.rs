use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;

pub const GREETING: &str = "Hello\nWhat's up?\ntext1text2\nprintagain\n";

pub fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("hello-printer");
    cmd.env_remove("HELLO_PRINTER_LOG");
    cmd
}

pub fn run_json(args: &[&str]) -> Value {
    let out = cmd()
        .arg("--json")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}
