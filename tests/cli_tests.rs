// End-to-end tests for the todo binary
// Feed commands on stdin and check what the process prints

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a new command using a database inside `temp_dir`
fn new_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("todo").unwrap();
    cmd.arg("--db")
        .arg(temp_dir.path().join("tasks.db"))
        .arg("--no-color")
        .arg("--no-clear");
    cmd
}

#[test]
fn test_add_and_list() {
    let temp_dir = TempDir::new().unwrap();

    new_cmd(&temp_dir)
        .write_stdin("a\nbuy milk\nn\nadd\npay rent\ny\nl\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Pay rent [✅ Completed]"))
        .stdout(predicate::str::contains("2. Buy milk [⏳ Pending]"))
        .stdout(predicate::str::contains("Thanks for using To-Do List! 👋"));
}

#[test]
fn test_tasks_persist_between_runs() {
    let temp_dir = TempDir::new().unwrap();

    new_cmd(&temp_dir)
        .write_stdin("a\nbuy milk\nn\nq\n")
        .assert()
        .success();
    assert!(temp_dir.path().join("tasks.db").exists());

    new_cmd(&temp_dir)
        .write_stdin("l\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Buy milk [⏳ Pending]"));
}

#[test]
fn test_remove_across_runs() {
    let temp_dir = TempDir::new().unwrap();

    new_cmd(&temp_dir)
        .write_stdin("a\nbuy milk\nn\na\npay rent\ny\nq\n")
        .assert()
        .success();

    new_cmd(&temp_dir)
        .write_stdin("r\n2\ny\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 'Buy milk' deleted successfully!"));

    new_cmd(&temp_dir)
        .write_stdin("l\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Pay rent [✅ Completed]"))
        .stdout(predicate::str::contains("Buy milk").not());
}

#[test]
fn test_invalid_command_keeps_running() {
    let temp_dir = TempDir::new().unwrap();

    new_cmd(&temp_dir)
        .write_stdin("xyz\nhelp\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command. Type 'help' for commands. ❓"))
        .stdout(predicate::str::contains("Available Commands"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();

    new_cmd(&temp_dir)
        .write_stdin("")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Thanks for using To-Do List! 👋"));
}

#[test]
fn test_piped_output_is_plain() {
    let temp_dir = TempDir::new().unwrap();

    // Without --no-color/--no-clear: stdout is a pipe, so no escape codes
    Command::cargo_bin("todo")
        .unwrap()
        .arg("--db")
        .arg(temp_dir.path().join("tasks.db"))
        .write_stdin("l\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_schema_failure_tolerated_by_default() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("todo")
        .unwrap()
        .arg("--db")
        .arg(temp_dir.path().join("missing").join("tasks.db"))
        .write_stdin("l\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error initializing database:"))
        .stdout(predicate::str::contains("Error listing tasks:"));
}

#[test]
fn test_schema_failure_fatal_with_strict() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("todo")
        .unwrap()
        .arg("--strict")
        .arg("--db")
        .arg(temp_dir.path().join("missing").join("tasks.db"))
        .write_stdin("l\nq\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Internal error: Failed to initialize database schema"))
        .stdout(predicate::str::contains("Welcome").not());
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("todo")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[cfg(unix)]
#[test]
fn test_interrupt_prints_farewell_and_exits_zero() {
    use std::io::Read;
    use std::process::{Command as StdCommand, Stdio};
    use std::sync::mpsc;
    use std::thread;
    use std::time::{Duration, Instant};

    let temp_dir = TempDir::new().unwrap();
    let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("todo"))
        .arg("--db")
        .arg(temp_dir.path().join("tasks.db"))
        .arg("--no-color")
        .arg("--no-clear")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    // Hold stdin open so the session cannot end on EOF first
    let _stdin = child.stdin.take().unwrap();

    // Stream stdout so the prompt can be seen before the process exits
    let mut stdout = child.stdout.take().unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = [0u8; 256];
        loop {
            match stdout.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if tx.send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut seen = Vec::new();
    let deadline = Instant::now() + Duration::from_secs(10);
    while !String::from_utf8_lossy(&seen).contains(">>> ") {
        let left = deadline.saturating_duration_since(Instant::now());
        let chunk = rx.recv_timeout(left).expect("prompt never appeared");
        seen.extend(chunk);
    }

    let status = StdCommand::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    let exit = child.wait().unwrap();
    while let Ok(chunk) = rx.recv_timeout(Duration::from_secs(5)) {
        seen.extend(chunk);
    }
    let text = String::from_utf8(seen).unwrap();

    assert_eq!(exit.code(), Some(0));
    assert!(text.ends_with("\nThanks for using To-Do List! 👋\n"), "got {:?}", text);
}
