//! End-to-end tests for the `expenses` binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env_remove("EXPENSE_TRACKER_DIR")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(dir.path());
    cmd
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "12.50", "food", "--date", "2025-01-15", "--note", "lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Added expense #1: 2025-01-15 | 12.5 | food | lunch",
        ));

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-15"))
        .stdout(predicate::str::contains("food"))
        .stdout(predicate::str::contains("lunch"));

    let saved = fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    assert!(saved.contains("\"category\": \"food\""));
}

#[test]
fn list_when_empty() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "abc", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount 'abc'"));

    assert!(!dir.path().join("expenses.json").exists());
}

#[test]
fn date_is_stored_as_supplied() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "5", "food", "--date", "2025-1-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense #1: 2025-1-5 | 5 | food"));

    let saved = fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    assert!(saved.contains("\"date\": \"2025-1-5\""));
}

#[test]
fn delete_by_position() {
    let dir = TempDir::new().unwrap();
    for (amount, category) in [("10", "food"), ("5", "transport")] {
        expenses(&dir)
            .args(["add", amount, category, "--date", "2025-01-15"])
            .assert()
            .success();
    }

    expenses(&dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed: 2025-01-15 | 10 | food"));

    expenses(&dir)
        .args(["delete", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid index 5"));

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("transport"))
        .stdout(predicate::str::contains("food").not());
}

#[test]
fn summary_totals_by_category() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses to summarize."));

    for (amount, category) in [("10", "food"), ("5", "food"), ("3", "transport")] {
        expenses(&dir).args(["add", amount, category]).assert().success();
    }

    expenses(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spent: ₹18.00 (3 expenses)"))
        .stdout(predicate::str::contains("₹15.00"));
}

#[test]
fn export_writes_csv() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses to export."));
    assert!(!dir.path().join("exports").exists());

    expenses(&dir)
        .args(["add", "7.25", "coffee", "--date", "2025-02-01"])
        .assert()
        .success();

    expenses(&dir)
        .args(["export", "--xlsx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("report.csv"));

    let csv = fs::read_to_string(dir.path().join("exports").join("report.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("date,category,amount,note"));
    assert_eq!(lines.next(), Some("2025-02-01,coffee,7.25,"));
    assert!(dir.path().join("exports").join("report.xlsx").exists());
}

#[test]
fn corrupt_file_is_left_untouched() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("expenses.json");
    fs::write(&file, "{ not a list").unwrap();

    expenses(&dir)
        .args(["add", "1", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has not been modified"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "{ not a list");
}

#[test]
fn menu_over_stdin() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("menu")
        .write_stdin("1\n2025-03-01\nfood\n9\nsnack\n2\n5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== PERSONAL EXPENSE TRACKER ==="))
        .stdout(predicate::str::contains("Expense added!"))
        .stdout(predicate::str::contains("1. 2025-03-01 | ₹9 | food | snack"))
        .stdout(predicate::str::contains("Total Expenses: ₹9.00"))
        .stdout(predicate::str::contains("Exiting... All data saved."));
}

#[test]
fn menu_without_subcommand_exits_on_eof() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Try again."))
        .stdout(predicate::str::contains("Exiting... All data saved."));
}

#[test]
fn history_records_add_and_delete() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history recorded yet."));

    expenses(&dir).args(["add", "4", "bus"]).assert().success();
    expenses(&dir).args(["delete", "1"]).assert().success();

    expenses(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("DELETE"));
}

#[test]
fn config_save_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let settings_file = dir.path().join("settings.json");

    expenses(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:    ₹"));
    assert!(!settings_file.exists());

    expenses(&dir)
        .args(["config", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved settings to"));

    let saved = fs::read_to_string(&settings_file).unwrap();
    assert!(saved.contains("\"currency_symbol\": \"₹\""));
    assert!(saved.contains("\"export_spreadsheet\": true"));
}
