use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_commands_and_options() {
    cargo_bin_cmd!("solpick")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("--wallets"))
        .stdout(predicate::str::contains("--class"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("solpick")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
