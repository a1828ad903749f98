use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendbook(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendbook").unwrap();
    cmd.arg("--show-input")
        .arg("--config-dir")
        .arg(config_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_register_login_and_track() {
    let dir = TempDir::new().unwrap();

    spendbook(&dir)
        .write_stdin("1\nalice\npw\n2\nalice\npw\n3\ncoffee\n3.50\n3\nbook\n12.99\n4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("User registered successfully."))
        .stdout(predicate::str::contains("Logged in successfully."))
        .stdout(predicate::str::contains(" - coffee: $3.50"))
        .stdout(predicate::str::contains(" - book: $12.99"))
        .stdout(predicate::str::contains("Total Expenses: $16.49"));
}

#[test]
fn test_expense_without_login_reports_error() {
    let dir = TempDir::new().unwrap();

    spendbook(&dir)
        .write_stdin("3\ncoffee\n3.50\n4\n5\ncoffee\n6\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("No user logged in."))
        .stdout(predicate::str::contains("Expense added successfully.").not());
}

#[test]
fn test_delete_twice_is_not_an_error() {
    let dir = TempDir::new().unwrap();

    spendbook(&dir)
        .write_stdin("1\na\np\n2\na\np\n3\ncoffee\n1\n5\ncoffee\n5\ncoffee\n4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 matching expense(s)."))
        .stdout(predicate::str::contains("Removed 0 matching expense(s)."))
        .stdout(predicate::str::contains("Total Expenses: $0.00"));
}

#[test]
fn test_wrong_password_rejected() {
    let dir = TempDir::new().unwrap();

    spendbook(&dir)
        .write_stdin("1\nalice\npw\n2\nalice\nnope\n2\nmallory\npw\n6\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid username or password.").count(2));
}

#[test]
fn test_settings_file_currency() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"currency_symbol": "€"}"#).unwrap();

    spendbook(&dir)
        .write_stdin("1\na\np\n2\na\np\n3\nbread\n2.40\n4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(" - bread: €2.40"));
}

#[test]
fn test_currency_flag_overrides_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"currency_symbol": "€"}"#).unwrap();

    spendbook(&dir)
        .args(["--currency", "£"])
        .write_stdin("1\na\np\n2\na\np\n4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses: £0.00"));
}

#[test]
fn test_malformed_settings_fail() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{broken").unwrap();

    spendbook(&dir)
        .write_stdin("6\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    spendbook(&dir).write_stdin("").assert().success();
}
