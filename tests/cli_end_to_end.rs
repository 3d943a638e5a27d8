#![deny(clippy::all, clippy::pedantic)]

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn render() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("render"))
}

#[cfg(unix)]
const USAGE_EXIT: i32 = 254;
#[cfg(unix)]
const UNKNOWN_FLAG_EXIT: i32 = 253;
#[cfg(not(unix))]
const USAGE_EXIT: i32 = -2;
#[cfg(not(unix))]
const UNKNOWN_FLAG_EXIT: i32 = -3;

#[test]
fn missing_output_flag_prints_usage() {
    let dir = TempDir::new().expect("tmp dir");
    let output = dir.path().join("out.txt");

    render()
        .arg("-i")
        .arg("draft.xml")
        .arg("-f")
        .arg("text")
        .assert()
        .code(USAGE_EXIT)
        .stdout(contains("usage: render -i input_file -o output_file -f (text | html)"));

    assert!(!output.exists());
}

#[test]
fn missing_every_flag_is_a_usage_error() {
    render().assert().code(USAGE_EXIT).stdout(contains("usage: render"));
}

#[test]
fn unknown_flag_has_its_own_exit_code() {
    let dir = TempDir::new().expect("tmp dir");
    let output = dir.path().join("out.txt");

    render()
        .arg("-i")
        .arg("draft.xml")
        .arg("-o")
        .arg(&output)
        .arg("-f")
        .arg("text")
        .arg("-q")
        .assert()
        .code(UNKNOWN_FLAG_EXIT)
        .stdout(contains("usage: render"));

    assert!(!output.exists());
}

#[test]
fn unreadable_input_is_a_runtime_failure() {
    let dir = TempDir::new().expect("tmp dir");
    let output = dir.path().join("out.txt");

    render()
        .env_remove("RUST_LOG")
        .arg("-i")
        .arg(dir.path().join("missing.xml"))
        .arg("-o")
        .arg(&output)
        .arg("-f")
        .arg("text")
        .assert()
        .code(1)
        .stderr(contains("failed to read input file"));

    assert!(!output.exists());
}

#[test]
fn help_and_version_flags_are_unrecognized() {
    for flag in ["-h", "--help", "-V", "--version"] {
        render()
            .arg(flag)
            .assert()
            .code(UNKNOWN_FLAG_EXIT)
            .stdout(contains("usage: render"));
    }
}

#[test]
fn repeated_flags_and_trailing_operands_parse() {
    let dir = TempDir::new().expect("tmp dir");
    let output = dir.path().join("out.txt");

    // Parsing succeeds; the run then fails on the unreadable last -i value.
    render()
        .env_remove("RUST_LOG")
        .arg("-i")
        .arg("first.xml")
        .arg("-i")
        .arg(dir.path().join("missing.xml"))
        .arg("-o")
        .arg(&output)
        .arg("-f")
        .arg("text")
        .arg("extra")
        .assert()
        .code(1)
        .stderr(contains("missing.xml"));

    assert!(!output.exists());
}
