//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

fn netclasses_cli() -> Command {
    cargo_bin_cmd!("kicad-netclasses")
}

/// Path to the library's test fixtures (relative to workspace).
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("netclasses")
        .join("tests")
        .join("fixtures")
}

fn write_project(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_cli_help() {
    let mut cmd = netclasses_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("KiCad"));
}

#[test]
fn test_cli_version() {
    let mut cmd = netclasses_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_no_arguments() {
    let mut cmd = netclasses_cli();

    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_default_class() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_project(
        dir.path(),
        "demo.kicad_pro",
        r#"{"net_settings":{"classes":[{"name":"Default","nets":["GND","+5V"]}]}}"#,
    );

    let mut cmd = netclasses_cli();
    cmd.arg(path);
    cmd.assert()
        .success()
        .stdout("Default,\"GND\"\nDefault,\"+5V\"\n");
}

#[test]
fn test_cli_prefixed_class() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_project(
        dir.path(),
        "demo.kicad_pro",
        r#"{"net_settings":{"classes":[{"name":"pwr_supply_ma","nets":["VCC"]}]}}"#,
    );

    let mut cmd = netclasses_cli();
    cmd.arg(path);
    cmd.assert().success().stdout("supply,\"VCC\"\n");
}

#[test]
fn test_cli_bare_ma_class() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_project(
        dir.path(),
        "demo.kicad_pro",
        r#"{"net_settings":{"classes":[{"name":"ma","nets":["N1"]}]}}"#,
    );

    let mut cmd = netclasses_cli();
    cmd.arg(path);
    cmd.assert().success().stdout(",\"N1\"\n");
}

#[test]
fn test_cli_fixture_project() {
    let mut cmd = netclasses_cli();

    cmd.arg(fixtures_dir().join("legacy_classes.kicad_pro"));
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Default,\"GND\"\n"))
        .stdout(predicate::str::contains("1500,\"/FAN1_PWR\"\n"))
        .stdout(predicate::str::contains("Spare").not());
}

#[test]
fn test_cli_not_json() {
    let mut cmd = netclasses_cli();

    cmd.arg(fixtures_dir().join("not_json.kicad_pro"));
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("Parse error").count(1));
}

#[test]
fn test_cli_missing_net_settings() {
    let mut cmd = netclasses_cli();

    cmd.arg(fixtures_dir().join("no_net_settings.kicad_pro"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("net_settings"));
}

#[test]
fn test_cli_missing_then_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_project(
        dir.path(),
        "good.kicad_pro",
        r#"{"net_settings":{"classes":[{"name":"Default","nets":["GND"]}]}}"#,
    );
    let later = write_project(
        dir.path(),
        "later.kicad_pro",
        r#"{"net_settings":{"classes":[{"name":"Other","nets":["VCC"]}]}}"#,
    );

    let mut cmd = netclasses_cli();
    cmd.arg(dir.path().join("does_not_exist.kicad_pro"))
        .arg(good)
        .arg(later);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("does_not_exist.kicad_pro"))
        .stdout(predicate::str::contains("Default,\"GND\"\n"))
        .stdout(predicate::str::contains("VCC").not());
}

#[test]
fn test_cli_all_flag() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_project(
        dir.path(),
        "a.kicad_pro",
        r#"{"net_settings":{"classes":[{"name":"Default","nets":["GND"]}]}}"#,
    );
    let second = write_project(
        dir.path(),
        "b.kicad_pro",
        r#"{"net_settings":{"classes":[{"name":"Other","nets":["VCC"]}]}}"#,
    );

    let mut cmd = netclasses_cli();
    cmd.arg("--all").arg(first).arg(second);
    cmd.assert()
        .success()
        .stdout("Default,\"GND\"\nOther,\"VCC\"\n");
}

#[test]
fn test_cli_only_missing_files() {
    let mut cmd = netclasses_cli();

    cmd.arg("does_not_exist.kicad_pro");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("does_not_exist.kicad_pro"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_cli_directory_then_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let project_dir = dir.path().join("board");
    std::fs::create_dir_all(&project_dir).unwrap();
    write_project(
        &project_dir,
        "inner.kicad_pro",
        r#"{"net_settings":{"classes":[{"name":"Inner","nets":["X"]}]}}"#,
    );
    let good = write_project(
        dir.path(),
        "good.kicad_pro",
        r#"{"net_settings":{"classes":[{"name":"Default","nets":["GND"]}]}}"#,
    );

    let mut cmd = netclasses_cli();
    cmd.arg(&project_dir).arg(good);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(project_dir.display().to_string()))
        .stdout(predicate::str::ends_with("Default,\"GND\"\n"))
        .stdout(predicate::str::contains("Inner").not());
}

#[test]
fn test_cli_bad_record_after_good_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_project(
        dir.path(),
        "partial.kicad_pro",
        r#"{"net_settings":{"classes":[{"name":"Default","nets":["GND"]},{"nets":["VCC"]}]}}"#,
    );

    let mut cmd = netclasses_cli();
    cmd.arg(path);
    cmd.assert()
        .failure()
        .code(1)
        .stdout("Default,\"GND\"\n")
        .stderr(predicate::str::contains("name"));
}
