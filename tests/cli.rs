use std::io::Write;
use std::process::{Command, Output, Stdio};

fn test_file_path(filename: &str) -> String {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push(format!("tests/testdata/{}", filename));
    p.into_os_string()
        .into_string()
        .expect("failed to build filename")
}

fn epsilon_helper() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_epsilon-helper"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = epsilon_helper()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start epsilon-helper");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write grammar");
    child.wait_with_output().expect("epsilon-helper did not finish")
}

#[test]
fn failed_grammars_are_skipped_and_reported() {
    let bad = test_file_path("bad.cfg");
    let expr = test_file_path("expr.cfg");
    let missing = test_file_path("missing.cfg");
    let output = epsilon_helper()
        .args(["-o", "ee", bad.as_str(), expr.as_str(), missing.as_str()])
        .output()
        .expect("failed to run epsilon-helper");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "E → TR | T\nR → pTR | pT\nT → FU | F\nU → mFU | mF\nF → lEr | i\n"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(&format!("invalid grammar in {}", bad)),
        "{}",
        stderr
    );
    assert!(stderr.contains("Line 1: invalid symbol '+'"), "{}", stderr);
    assert!(
        stderr.contains(&format!("failed to read {}", missing)),
        "{}",
        stderr
    );
}

#[test]
fn all_outputs_from_stdin_by_default() {
    let output = run_with_stdin(&[], "S → AA\nA → ε\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "S → AA\nA → ε\nnullable: {S, A}\nS → AA | A\nA →\n"
    );
}

#[test]
fn json_format_on_stdin() {
    let output = run_with_stdin(&["-o", "nullable", "-f", "json"], "S → aA\nA → ε|b\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\"nullable\":[\"A\"]}\n"
    );
}
