use predicates::prelude::*;

#[test]
fn test_main_help_lists_commands() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("flowboard");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("hash-user-id"))
        .stdout(predicate::str::contains("--data-dir"));
}

#[test]
fn test_list_help_shows_sort_values() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("flowboard");
    cmd.args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("last-updated"))
        .stdout(predicate::str::contains("--desc"));
}

#[test]
fn test_unknown_sort_is_rejected() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("flowboard");
    cmd.args(["list", "--sort", "size"]).assert().failure();
}
