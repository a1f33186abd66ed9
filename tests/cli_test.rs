use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(cargo_bin!("staffroll")).output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);

    assert_eq!(
        lines[0],
        concat!(
            r#"[{"name":"José","role":"intern","salary":"1000"},"#,
            r#"{"name":"Maria","role":"junior","salary":"2500"},"#,
            r#"{"name":"João","role":"mid-level","salary":"4000"}]"#
        )
    );

    let before: serde_json::Value = serde_json::from_str(lines[1])?;
    let after: serde_json::Value = serde_json::from_str(lines[2])?;
    assert_eq!(before["name"], "José");
    assert_eq!(before["balance"], "0");
    assert_eq!(after["id"], before["id"]);
    assert_eq!(after["balance"], "1000");

    let clients: Vec<serde_json::Value> = serde_json::from_str(lines[3])?;
    assert_eq!(clients.len(), 3);

    Ok(())
}

#[test]
fn test_key_value_store_overwrites_duplicate_client() {
    let mut cmd = Command::new(cargo_bin!("staffroll"));
    cmd.arg("--store").arg("key-value");

    cmd.assert().success().stdout(predicate::str::contains(
        r#"[{"id":1,"name":"Ana","attributes":{"email":"ana@example.com"}},{"id":2,"name":"Bruno","attributes":{"city":"Recife"}}]"#,
    ));
}

#[test]
fn test_in_memory_store_keeps_every_client() {
    let mut cmd = Command::new(cargo_bin!("staffroll"));
    cmd.arg("--store").arg("in-memory");

    cmd.assert().success().stdout(predicate::str::contains(
        r#"[{"id":1,"name":"Ana"},{"id":2,"name":"Bruno","attributes":{"city":"Recife"}},{"id":1,"name":"Ana","attributes":{"email":"ana@example.com"}}]"#,
    ));
}

#[test]
fn test_unknown_store_is_rejected() {
    let mut cmd = Command::new(cargo_bin!("staffroll"));
    cmd.arg("--store").arg("postgres");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'postgres'"));
}

#[test]
fn test_roster_file_replaces_demo_staff() {
    let roster = common::write_roster_csv(&[("Carla", "senior"), ("Davi", "intern")]).unwrap();

    let mut cmd = Command::new(cargo_bin!("staffroll"));
    cmd.arg("--roster").arg(roster.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            r#"[{"name":"Carla","role":"senior","salary":"7000"},{"name":"Davi","role":"intern","salary":"1000"}]"#,
        ))
        .stdout(predicate::str::contains("José").not())
        .stdout(predicate::str::contains(r#""name":"Carla","role":"senior","balance":"7000""#));
}

#[test]
fn test_malformed_roster_rows_are_skipped() {
    let roster =
        common::write_roster_csv(&[("Carla", "senior"), ("Eva", "ceo"), ("Davi", "intern")])
            .unwrap();

    let mut cmd = Command::new(cargo_bin!("staffroll"));
    cmd.arg("--roster").arg(roster.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading employee"))
        .stdout(predicate::str::contains("Eva").not())
        .stdout(predicate::str::contains(r#""name":"Davi","role":"intern","salary":"1000""#));
}

#[test]
fn test_empty_roster_reports_empty_array() {
    let roster = common::write_roster_csv(&[]).unwrap();

    let output = Command::new(cargo_bin!("staffroll"))
        .arg("--roster")
        .arg(roster.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "[]");
}

#[test]
fn test_missing_roster_file_fails() {
    let mut cmd = Command::new(cargo_bin!("staffroll"));
    cmd.arg("--roster").arg("does/not/exist.csv");

    cmd.assert().failure();
}

#[test]
fn test_salary_table_file_overrides_defaults() {
    let table = common::write_salary_table(
        r#"{"intern": 1100, "junior": "2600.5", "mid-level": 4200, "senior": 9000}"#,
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("staffroll"));
    cmd.arg("--salary-table").arg(table.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"name":"Maria","role":"junior","salary":"2600.5"}"#,
        ))
        .stdout(predicate::str::contains(r#""name":"José","role":"intern","balance":"1100""#));
}

#[test]
fn test_partial_salary_table_fails_report() {
    let table = common::write_salary_table(r#"{"intern": 1000}"#).unwrap();

    let mut cmd = Command::new(cargo_bin!("staffroll"));
    cmd.arg("--salary-table").arg(table.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No salary configured for role 'junior'"));
}

#[test]
fn test_salary_table_keeps_every_digit() {
    let table = common::write_salary_table(
        r#"{"intern": "12345678901234567.89", "junior": 2500, "mid-level": 4000, "senior": 7000}"#,
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("staffroll"));
    cmd.arg("--salary-table").arg(table.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"name":"José","role":"intern","salary":"12345678901234567.89"}"#,
        ))
        .stdout(predicate::str::contains(r#""balance":"12345678901234567.89""#));
}

#[test]
fn test_verbose_run_logs_base_salary() {
    let mut cmd = Command::new(cargo_bin!("staffroll"));
    cmd.arg("-v").env_remove("RUST_LOG");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("roster ready"))
        .stderr(predicate::str::contains("base_salary=1000"))
        .stderr(predicate::str::contains("employees=3"));
}

#[test]
fn test_missing_salary_table_fails() {
    let mut cmd = Command::new(cargo_bin!("staffroll"));
    cmd.arg("--salary-table").arg("nowhere/salaries.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_pretty_report_spans_lines() {
    let mut cmd = Command::new(cargo_bin!("staffroll"));
    cmd.arg("--pretty");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  {\n    \"name\": \"José\","));
}
