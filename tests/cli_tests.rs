//! Tests for the `ledger` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("POCKET_LEDGER_DIR", temp_dir.path())
        .env_remove("POCKET_LEDGER_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_and_balance() {
    let temp_dir = TempDir::new().unwrap();

    ledger(&temp_dir)
        .args(["add", "income", "Salary", "50000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $50000.00"));

    ledger(&temp_dir)
        .args(["add", "expense", "Food", "5000", "-d", "groceries"])
        .assert()
        .success();

    ledger(&temp_dir)
        .args(["add", "expense", "Transport", "3000"])
        .assert()
        .success();

    ledger(&temp_dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $42000.00"));

    assert!(temp_dir.path().join("finance_data.json").exists());
}

#[test]
fn rejects_non_positive_amount() {
    let temp_dir = TempDir::new().unwrap();

    ledger(&temp_dir)
        .args(["add", "expense", "Food", "-50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount must be positive"));

    ledger(&temp_dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $0.00"));
}

#[test]
fn rejects_oversized_amount() {
    let temp_dir = TempDir::new().unwrap();

    ledger(&temp_dir)
        .args(["add", "income", "Salary", "79228162514264337593543950335"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount must not exceed"));

    ledger(&temp_dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $0.00"));
}

#[test]
fn history_for_month() {
    let temp_dir = TempDir::new().unwrap();

    ledger(&temp_dir)
        .args(["add", "expense", "Food", "100", "--at", "2024-12-05"])
        .assert()
        .success();
    ledger(&temp_dir)
        .args(["add", "income", "Salary", "500", "--at", "2025-01-12 09:00"])
        .assert()
        .success();

    ledger(&temp_dir)
        .args(["history", "--month", "2024-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn budget_set_and_show() {
    let temp_dir = TempDir::new().unwrap();

    ledger(&temp_dir)
        .args(["budget", "set", "10000", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget for 2025-01: $10000.00"));

    ledger(&temp_dir)
        .args(["add", "expense", "Food", "4000", "--at", "2025-01-10"])
        .assert()
        .success();

    ledger(&temp_dir)
        .args(["budget", "show", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining: $6000.00"));

    ledger(&temp_dir)
        .args(["budget", "set", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("budget must not be negative"));
}

#[test]
fn custom_categories_are_deduplicated() {
    let temp_dir = TempDir::new().unwrap();

    ledger(&temp_dir)
        .args(["category", "add", "Travel"])
        .assert()
        .success();
    ledger(&temp_dir)
        .args(["category", "add", "Travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    ledger(&temp_dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout("Travel\n");
}

#[test]
fn corrupt_data_file_starts_fresh() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("finance_data.json"), "not json").unwrap();

    ledger(&temp_dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $0.00"));
}

#[test]
fn explicit_file_flag() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("other.json");

    ledger(&temp_dir)
        .args(["add", "income", "Gift", "25"])
        .arg("--file")
        .arg(&file)
        .assert()
        .success();

    assert!(file.exists());
    assert!(!temp_dir.path().join("finance_data.json").exists());
}
