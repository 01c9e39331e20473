mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::write_roster;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_rejected_rows_are_skipped() {
    let roster = write_roster(&["Ada, 104000", ", 50000", "Bob, 0", "Cy, -5", "Di, 62400"]);

    let mut cmd = Command::new(cargo_bin!("meeting-cost"));
    cmd.arg(roster.path()).args(["--format", "csv"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Rejected roster row 2: Name is required"))
        .stderr(predicate::str::contains("Rejected roster row 3: Salary must be > 0"))
        .stderr(predicate::str::contains(
            "Rejected roster row 4: Salary must be a positive number; Salary must be > 0",
        ))
        .stdout(predicate::str::contains("Ada,104000,50"))
        .stdout(predicate::str::contains("Di,62400,30"))
        .stdout(predicate::str::contains("Bob").not())
        .stdout(predicate::str::contains("Total,166400,80"));
}

#[test]
fn test_non_numeric_salary() {
    let roster = write_roster(&["Ada, lots"]);

    let mut cmd = Command::new(cargo_bin!("meeting-cost"));
    cmd.arg(roster.path()).args(["--format", "csv"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Salary must be a number"))
        .stdout(predicate::str::contains("Total,0,0"));
}

#[test]
fn test_non_numeric_duration_renders_nan() {
    let roster = write_roster(&["Ada, 104000"]);

    let mut cmd = Command::new(cargo_bin!("meeting-cost"));
    cmd.arg(roster.path()).args(["--duration", "soon", "--format", "csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Ada,104000,NaN"))
        .stdout(predicate::str::contains("Total,104000,NaN"));
}
