use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn wallet_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp wallet file");
    file.write_all(json.as_bytes()).expect("write wallet file");
    file
}

#[test]
fn test_list_partitions_a_wallet_file() {
    let file = wallet_file(
        r#"[
            {"name": "Phantom", "readyState": "Installed", "icon": "👻"},
            {"name": "Ledger", "readyState": "NotDetected"},
            {"name": "Solflare", "readyState": "Loadable"}
        ]"#,
    );

    cargo_bin_cmd!("solpick")
        .args(["list", "--wallets"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("installed:\n  Phantom"))
        .stdout(predicate::str::contains(
            "other:\n  Solflare (loadable)\n  Ledger (not detected)",
        ))
        .stdout(predicate::str::contains("recommended: Phantom"));
}

#[test]
fn test_list_with_nothing_installed_recommends_by_name() {
    let file = wallet_file(
        r#"[
            {"name": "Torus", "readyState": "NotDetected"},
            {"name": "Phantom", "readyState": "NotDetected"}
        ]"#,
    );

    cargo_bin_cmd!("solpick")
        .args(["list", "--wallets"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("installed: (none)"))
        .stdout(predicate::str::contains("recommended: Phantom"));
}

#[test]
fn test_list_empty_file_has_no_recommendation() {
    let file = wallet_file("[]");

    cargo_bin_cmd!("solpick")
        .args(["list", "--wallets"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("installed: (none)"))
        .stdout(predicate::str::contains("other: (none)"))
        .stdout(predicate::str::contains("recommended: (none)"));
}

#[test]
fn test_list_uses_builtin_sample_without_a_file() {
    cargo_bin_cmd!("solpick")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("recommended: Phantom"));
}

#[test]
fn test_invalid_wallet_file_fails_with_context() {
    let file = wallet_file("{ not json ]");

    cargo_bin_cmd!("solpick")
        .args(["list", "--wallets"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid wallet list"));
}

#[test]
fn test_missing_wallet_file_fails_with_context() {
    cargo_bin_cmd!("solpick")
        .args(["list", "--wallets", "/nonexistent/wallets.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read wallet list"));
}
