//! Runs the `verdict` binary and checks its console output and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn verdict() -> Command {
    let mut cmd = Command::cargo_bin("verdict").unwrap();
    cmd.env_remove("VERDICT_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn list_prints_every_case() {
    verdict()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("arithmetic_holds"))
        .stdout(predicate::str::contains("double_release"));
}

#[test]
fn passing_case_exits_zero() {
    verdict()
        .args(["run", "arithmetic_holds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[SUCCESS]: ("))
        .stdout(predicate::str::contains("-> OK"))
        .stdout(predicate::str::contains("[SUMMARY]\nFile: "))
        .stdout(predicate::str::contains("Error/s: 0"));
}

#[test]
fn failing_case_exits_nonzero() {
    verdict()
        .args(["run", "arithmetic_mismatch"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[FAILED]: "))
        .stdout(predicate::str::contains(
            "-> Given values are not equal, expected equal",
        ))
        .stdout(predicate::str::contains("Error/s: 1"));
}

#[test]
fn config_can_tolerate_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "fail_on_error = false").unwrap();

    verdict()
        .arg("--config")
        .arg(file.path())
        .args(["run", "arithmetic_mismatch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error/s: 1"));
}

#[test]
fn quiet_hides_success_lines() {
    verdict()
        .args(["run", "--quiet", "arithmetic_holds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[SUCCESS]").not())
        .stdout(predicate::str::contains("[SUMMARY]"));
}

#[test]
fn timed_callables_run_registered_bodies() {
    let output = verdict()
        .args(["run", "timed_callables"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    // One check in the primary body, one in each of the two registered bodies.
    assert_eq!(stdout.matches("[SUCCESS]").count(), 3);
    assert_eq!(stdout.matches("[SUMMARY]").count(), 1);
}

#[test]
fn unknown_case_is_an_error() {
    verdict()
        .args(["run", "no_such_case"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown test case: no_such_case"));
}

#[test]
fn double_release_aborts_after_summary() {
    let assert = verdict().args(["run", "double_release"]).assert().failure();
    let output = assert.get_output();

    // Aborted, not exited.
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(output.status.code(), None);
        assert_eq!(output.status.signal(), Some(6));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[CRITICAL]: "));
    assert!(stdout.contains("-> (RC < 0) Deallocating not allocated value"));
    assert!(stdout.contains("Error/s: 1"));
    assert!(!stdout.contains("[FAILED]"));
    assert_eq!(stdout.matches("[SUMMARY]").count(), 1);
}
