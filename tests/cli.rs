use std::{
    fs,
    io::Write,
    process::{Command, Output, Stdio},
};

use pretty_assertions::assert_eq;

fn reckon() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_reckon"));
    command.env_remove("RECKON_LOG").env_remove("RUST_LOG");
    command
}

fn run(args: &[&str]) -> Output {
    reckon().args(args)
            .output()
            .unwrap_or_else(|e| panic!("Failed to run reckon {args:?}: {e}"))
}

fn run_with_stdin(input: &str) -> Output {
    let mut child = reckon().stdin(Stdio::piped())
                            .stdout(Stdio::piped())
                            .stderr(Stdio::piped())
                            .spawn()
                            .expect("Failed to start reckon");
    child.stdin.take().expect("stdin is piped").write_all(input.as_bytes()).unwrap();
    child.wait_with_output().expect("Failed to wait for reckon")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn single_expression_prints_result() {
    let output = run(&["2 + 3 * 4"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "14\n");

    let output = run(&["7 / 2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3.5\n");
}

#[test]
fn expression_may_start_with_a_minus() {
    for (expression, expected) in [("-(3+4)", "-7\n"), ("-5", "-5\n"), ("-2 * -3", "6\n")] {
        let output = run(&[expression]);
        assert!(output.status.success(), "{expression:?}: {}", stderr(&output));
        assert_eq!(stdout(&output), expected, "{expression:?}");
    }
}

#[test]
fn failed_expression_exits_with_error() {
    let output = run(&["1/0"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "Error at offset 1: Division by zero.\n");

    let output = run(&["1 +"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error at offset 3: "));
}

#[test]
fn ast_flag_prints_grouping_first() {
    let output = run(&["--ast", "1-2-3"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "((1 - 2) - 3)\n-4\n");
}

#[test]
fn prompt_reads_until_end_of_input() {
    let output = run_with_stdin("1+2\n\n   \n7/2\n1/0\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output),
               "calc> 3\ncalc> calc> calc> 3.5\ncalc> Error at offset 1: Division by zero.\ncalc> \n");
}

#[test]
fn file_lines_are_evaluated_in_order() {
    let path = std::env::temp_dir().join(format!("reckon-cli-{}.calc", std::process::id()));
    fs::write(&path, "1+2\n\n2*3\n1/0\n").unwrap();

    let output = run(&["--file", path.to_str().unwrap()]);
    fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "3\n6\nError at offset 1: Division by zero.\n");
}

#[test]
fn missing_file_is_reported() {
    let output = run(&["--file", "tests/cases/does-not-exist.calc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Failed to read the input file"));
}
