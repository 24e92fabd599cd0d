//! End-to-end tests of the `ledger` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.arg("--file")
        .arg(dir.path().join("expense_data.json"))
        .env_remove("EXPENSE_LEDGER_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_then_report() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["budget", "set", "groceries", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget for Groceries set to $500.00"));

    ledger(&dir)
        .args(["add", "expense", "350", "Groceries", "--date", "2024-05-10", "--note", "big shop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense of $350.00 to Groceries on 2024-05-10"));

    ledger(&dir)
        .args(["add", "income", "2000", "salary", "--date", "2024-05-01"])
        .assert()
        .success();

    ledger(&dir)
        .args(["report", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Report: May 2024"))
        .stdout(predicate::str::contains("$1650.00"))
        .stdout(predicate::str::contains("$350.00 / $500.00 ($150.00 left)"));

    ledger(&dir)
        .args(["list", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("big shop"))
        .stdout(predicate::str::contains("Salary"));
}

#[test]
fn unknown_category_fails() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["add", "expense", "10", "Spaceships"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown expense category: Spaceships"));

    assert!(!dir.path().join("expense_data.json").exists());
}

#[test]
fn currency_commands() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["currency", "set", "XXX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported currency: XXX"));

    ledger(&dir)
        .args(["currency", "set", "inr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency set to INR (₹)"));

    ledger(&dir)
        .args(["currency", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INR (₹)"));
}

#[test]
fn category_commands() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["category", "add", "dining out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense category: Dining Out"));

    ledger(&dir)
        .args(["category", "add", "Dining Out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    ledger(&dir)
        .args(["category", "add", "freelance", "--kind", "income"])
        .assert()
        .success();

    ledger(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dining Out"))
        .stdout(predicate::str::contains("Freelance"));
}

#[test]
fn corrupt_file_requires_confirmed_recovery() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expense_data.json");
    std::fs::write(&path, "{ definitely not json").unwrap();

    ledger(&dir)
        .args(["report"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ledger recover --yes"));

    ledger(&dir).args(["recover"]).assert().failure();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "{ definitely not json"
    );

    ledger(&dir)
        .args(["recover", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved unreadable ledger to"));

    ledger(&dir).args(["report"]).assert().success();

    let moved = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .any(|e| e.file_name().to_string_lossy().contains(".corrupt-"));
    assert!(moved);
}

#[test]
fn env_var_selects_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("from_env.json");

    Command::cargo_bin("ledger")
        .unwrap()
        .env("EXPENSE_LEDGER_FILE", &path)
        .args(["currency", "set", "EUR"])
        .assert()
        .success();

    assert!(path.exists());
}

#[test]
fn directory_as_ledger_file_fails() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("ledger")
        .unwrap()
        .arg("--file")
        .arg(dir.path())
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));
}

#[test]
fn recover_leaves_readable_ledger_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expense_data.json");

    ledger(&dir)
        .args(["add", "expense", "12.50", "Dining", "--date", "2024-05-02"])
        .assert()
        .success();
    let before = std::fs::read_to_string(&path).unwrap();

    ledger(&dir)
        .args(["recover", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to recover"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn non_utf8_ledger_is_treated_as_corrupt() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expense_data.json");
    std::fs::write(&path, [0xff, 0xfe, b'{', b'}']).unwrap();

    ledger(&dir)
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ledger recover --yes"));

    ledger(&dir).args(["recover", "--yes"]).assert().success();
    ledger(&dir).args(["list"]).assert().success();
}
