mod common;
use common::chatroll;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    chatroll()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("pipe"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_flag() {
    chatroll()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_config_path_points_at_conf_file() {
    chatroll()
        .args(["config", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chatroll.conf"));
}

#[test]
fn test_config_print_shows_output_dir() {
    chatroll()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output_dir"));
}

#[test]
fn test_scan_requires_a_file_argument() {
    chatroll().arg("scan").assert().failure();
}
