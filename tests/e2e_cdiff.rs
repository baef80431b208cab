//! Black-box tests for the `cdiff` binary: spawn the compiled executable and
//! feed it through stdin/files, exactly as a user would invoke it.

use std::io::Write;
use std::process::{Command, Stdio};

fn run_stdin(args: &[&str], input: &str) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cdiff"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn cdiff");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().expect("wait cdiff");
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn masks_shared_prefixes_over_stdin() {
    let out = run_stdin(&[], "apple\nappliance\napricot\n");
    assert_eq!(out, "apple\n   liance\n  ricot\n");
}

#[test]
fn whitespace_flag_snaps_back() {
    let out = run_stdin(&["--whitespace"], "foo bar baz\nfoo bar qux\n");
    assert_eq!(out, "foo bar baz\n        qux\n");
}

#[test]
fn explicit_stdin_sentinel_is_accepted() {
    let out = run_stdin(&["-"], "alpha\nbeta\n");
    assert_eq!(out, "alpha\nbeta\n");
}

#[test]
fn multiple_files_share_state_across_the_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "apple\n").unwrap();
    std::fs::write(&b, "appliance\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_cdiff"))
        .arg(a.to_str().unwrap())
        .arg(b.to_str().unwrap())
        .output()
        .expect("spawn cdiff");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "apple\n   liance\n"
    );
}

#[test]
fn missing_file_is_reported_and_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_cdiff"))
        .arg("/nonexistent/streamtools-e2e-path")
        .output()
        .expect("spawn cdiff");
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}
