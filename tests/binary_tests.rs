// Run the interpreter binary both as a read loop fed through stdin and in batch mode on a script.

use std::{
    fs,
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

fn run_repl(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_miniforth"))
        .env_remove("MINIFORTH_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run interpreter");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("Failed to write to interpreter");

    child.wait_with_output().expect("Failed to wait for interpreter")
}

fn write_script(name: &str, source: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("miniforth-{}-{}.f", std::process::id(), name));
    fs::write(&path, source).expect("Failed to write script");

    path
}

fn run_script(path: &PathBuf) -> Output {
    Command::new(env!("CARGO_BIN_EXE_miniforth"))
        .env_remove("MINIFORTH_LOG")
        .arg(path)
        .output()
        .expect("Failed to run interpreter")
}

#[test]
fn repl_keeps_going_after_errors() {
    let output = run_repl("1 2 + .s\n+ +\n: sq 1 + ;\n41 sq .s\n");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stdout.starts_with("> 3\n"), "unexpected output: {:?}", stdout);
    assert!(stdout.contains("> 42\n"), "unexpected output: {:?}", stdout);
    assert!(stderr.contains("Error: <repl> (1, 1): Stack underflow."), "unexpected errors: {:?}", stderr);
}

#[test]
fn repl_exits_cleanly_on_end_of_input() {
    let output = run_repl("");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "> \n");
}

#[test]
fn script_runs_as_one_statement() {
    let path = write_script("ok", ": inc\n  1 +\n;\n\n41 inc .s\n");
    let output = run_script(&path);
    let _ = fs::remove_file(&path);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "42\n");
}

#[test]
fn script_failure_sets_exit_code() {
    let path = write_script("fail", "1 2\nmystery\n");
    let output = run_script(&path);
    let _ = fs::remove_file(&path);

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Word mystery not found."), "unexpected errors: {:?}", stderr);
}
