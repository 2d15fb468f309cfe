//! End-to-end tests for the fynix binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Build a command with its config isolated to a throwaway directory
fn fynix(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fynix").unwrap();
    cmd.env("FYNIX_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn budget_reports_disposable_income() {
    let dir = TempDir::new().unwrap();
    fynix(&dir)
        .args([
            "budget", "--income", "5000", "-e", "rent=1000", "-e", "food=500",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$3500.00"));
}

#[test]
fn budget_json_output() {
    let dir = TempDir::new().unwrap();
    let output = fynix(&dir)
        .args(["budget", "--income", "5000", "-e", "rent=1000", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["disposable_income"], 4000.0);
}

#[test]
fn budget_rejects_bad_expense() {
    let dir = TempDir::new().unwrap();
    fynix(&dir)
        .args(["budget", "--income", "5000", "-e", "rent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid expense format"));
}

#[test]
fn garnish_reports_both_amounts() {
    let dir = TempDir::new().unwrap();
    fynix(&dir)
        .args(["garnish", "--income", "4000", "--rate", "0.25"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("$1000.00").and(predicate::str::contains("$3000.00")),
        );
}

#[test]
fn garnish_rejects_rate_out_of_range() {
    let dir = TempDir::new().unwrap();
    fynix(&dir)
        .args(["garnish", "--income", "4000", "--rate", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn payoff_reports_never_pays_off() {
    let dir = TempDir::new().unwrap();
    fynix(&dir)
        .args(["payoff", "--balance", "1000", "--apr", "24", "--payment", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("never pays off"));
}

#[test]
fn payoff_reports_months() {
    let dir = TempDir::new().unwrap();
    fynix(&dir)
        .args([
            "payoff", "--balance", "1200", "--apr", "0", "--payment", "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paid off in 12 months"));
}

#[test]
fn growth_prints_yearly_milestones() {
    let dir = TempDir::new().unwrap();
    fynix(&dir)
        .args([
            "growth", "-P", "1000", "--monthly", "0", "--rate", "0", "--years", "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1000.00"));
}

#[test]
fn plan_even_fixed_cycle() {
    let dir = TempDir::new().unwrap();
    fynix(&dir)
        .args([
            "plan",
            "-b",
            "Rent=1200@1",
            "--cycle",
            "fixed-30",
            "--alloc",
            "even",
            "--date",
            "2025-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$40.00"));
}

#[test]
fn plan_until_due_wrap_around() {
    let dir = TempDir::new().unwrap();
    fynix(&dir)
        .args([
            "plan",
            "-b",
            "Bill=180@2",
            "--cycle",
            "actual-month-length",
            "--alloc",
            "until-due",
            "--date",
            "2025-01-28",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$30.00"));
}

#[test]
fn plan_reads_bills_from_file() {
    let dir = TempDir::new().unwrap();
    let bills_path = dir.path().join("bills.json");
    std::fs::write(
        &bills_path,
        r#"[{"name": "Internet", "amount": 65.0, "due_day": 10}]"#,
    )
    .unwrap();

    fynix(&dir)
        .args([
            "plan",
            "--file",
            bills_path.to_str().unwrap(),
            "--cycle",
            "fixed-30",
            "--date",
            "2025-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Internet"));
}

#[test]
fn plan_json_output_is_unrounded() {
    let dir = TempDir::new().unwrap();
    let output = fynix(&dir)
        .args([
            "plan",
            "-b",
            "Internet=65@10",
            "--cycle",
            "fixed-30",
            "--alloc",
            "even",
            "--date",
            "2025-01-01",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["cycle_days"], 30);
    let per_day = value["bills"][0]["per_day"].as_f64().unwrap();
    assert!((per_day - 65.0 / 30.0).abs() < 1e-9);
}

#[test]
fn config_shows_settings_path() {
    let dir = TempDir::new().unwrap();
    fynix(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("config.json")
                .and(predicate::str::contains("currency_symbol")),
        );
}
