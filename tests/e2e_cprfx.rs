//! Black-box tests for the `cprfx` binary.

use std::io::Write;
use std::process::{Command, Stdio};

fn run_stdin(args: &[&str], input: &str) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cprfx"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn cprfx");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().expect("wait cprfx");
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn collapses_shared_prefix_group() {
    let out = run_stdin(&[], "abc\nabcd\nabce\nxyz\n");
    assert_eq!(out, "abc\t3\n");
}

#[test]
fn verbose_also_emits_the_trailing_singleton() {
    let out = run_stdin(&["--verbose"], "abc\nabcd\nabce\nxyz\n");
    assert_eq!(out, "abc\t3\nxyz\t1\n");
}

#[test]
fn unrelated_lines_emit_nothing_in_default_mode() {
    let out = run_stdin(&[], "alpha\nbeta\ngamma\n");
    assert_eq!(out, "");
}

#[test]
fn reads_from_a_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");
    std::fs::write(&path, "aaa\naab\naac\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_cprfx"))
        .arg(path.to_str().unwrap())
        .output()
        .expect("spawn cprfx");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "aa\t3\n");
}
