//! End-to-end tests for the `cardcheck` binary.

#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

const BRANDS: &str = "VISA: 4\nKASPI: 440043018030****\n";
const ISSUERS: &str = "Kaspi Gold: 440043\nHalyk Bonus: 440563\n";

fn cardcheck() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cardcheck"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_with_stdin(mut cmd: Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn table_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn test_validate_all_ok() {
    let output = cardcheck()
        .args(["validate", "4532015112830366", "4400430180300003"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["OK", "OK"]);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_validate_reports_invalid() {
    let output = cardcheck()
        .args(["validate", "4532015112830366", "123"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_lines(&output), vec!["OK"]);
    assert_eq!(String::from_utf8_lossy(&output.stderr).trim(), "INCORRECT");
}

#[test]
fn test_validate_stdin() {
    let mut cmd = cardcheck();
    cmd.args(["validate", "--stdin"]);
    let output = run_with_stdin(cmd, "4532015112830366\n4400430180300003 4532015112830366\n");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["OK", "OK", "OK"]);
}

#[test]
fn test_validate_without_numbers_is_usage_error() {
    let output = cardcheck().arg("validate").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_generate_lists_numbers() {
    let output = cardcheck()
        .args(["generate", "453201511283****"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(lines.contains(&"4532015112830366".to_string()));
    assert!(lines.iter().all(|n| cardcheck::is_valid(n)));
}

#[test]
fn test_generate_pick_with_seed_is_reproducible() {
    let run = || {
        cardcheck()
            .args(["generate", "--pick", "--seed", "11", "453201511283****"])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();

    assert!(first.status.success());
    assert_eq!(stdout_lines(&first).len(), 1);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_generate_bad_template() {
    let output = cardcheck().args(["generate", "1234"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_information() {
    let brands = table_file(BRANDS);
    let issuers = table_file(ISSUERS);

    let output = cardcheck()
        .arg("information")
        .arg(format!("--brands={}", brands.path().display()))
        .arg(format!("--issuers={}", issuers.path().display()))
        .arg("4400430180300003")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "4400430180300003",
            "Correct: yes",
            "Card Brand: VISA",
            "Card Issuer: Kaspi Gold",
        ]
    );
}

#[test]
fn test_information_json_from_stdin() {
    let brands = table_file(BRANDS);
    let issuers = table_file(ISSUERS);

    let mut cmd = cardcheck();
    cmd.arg("information")
        .arg(format!("--brands={}", brands.path().display()))
        .arg(format!("--issuers={}", issuers.path().display()))
        .args(["--stdin", "--output", "json"]);
    let output = run_with_stdin(cmd, "4400430180300004\n");

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    let record: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(record["number"], "4400430180300004");
    assert_eq!(record["valid"], false);
    assert_eq!(record["issuer"], serde_json::Value::Null);
}

#[test]
fn test_information_missing_table() {
    let issuers = table_file(ISSUERS);

    let output = cardcheck()
        .arg("information")
        .arg("--brands=/nonexistent/brands.txt")
        .arg(format!("--issuers={}", issuers.path().display()))
        .arg("4400430180300003")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("/nonexistent/brands.txt"));
}

#[test]
fn test_issue() {
    let brands = table_file(BRANDS);
    let issuers = table_file(ISSUERS);

    let output = cardcheck()
        .arg("issue")
        .arg(format!("--brands={}", brands.path().display()))
        .arg(format!("--issuers={}", issuers.path().display()))
        .args(["--brand=KASPI", "--issuer=Kaspi Gold"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(lines.contains(&"4400430180300003".to_string()));
}

#[test]
fn test_issue_unknown_issuer() {
    let brands = table_file(BRANDS);
    let issuers = table_file(ISSUERS);

    let output = cardcheck()
        .arg("issue")
        .arg(format!("--brands={}", brands.path().display()))
        .arg(format!("--issuers={}", issuers.path().display()))
        .args(["--brand=KASPI", "--issuer=Nobody"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("issuer not found"));
}
