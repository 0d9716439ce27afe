//! Command-line integration tests for the `dk-tui` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn delvekeep() -> Command {
    Command::cargo_bin("delvekeep").unwrap()
}

#[test]
fn dump_map_prints_grid() {
    let output = delvekeep()
        .args(["--dump-map", "--seed", "7", "--width", "40", "--height", "20"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 20);
    assert!(rows.iter().all(|r| r.chars().count() == 40));
    assert!(rows[0].chars().all(|c| c == '#'));
    assert_eq!(text.matches('@').count(), 1);
}

#[test]
fn dump_map_is_reproducible() {
    let run = || {
        delvekeep()
            .args(["--dump-map", "--seed", "11", "--width", "30", "--height", "30"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn config_file_sets_dimensions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("game.json");
    fs::write(
        &path,
        r#"{ "seed": 3, "map_width": 25, "map_height": 15, "monster_count": 0 }"#,
    )
    .unwrap();

    let output = delvekeep()
        .arg("--dump-map")
        .arg("--config")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(text.lines().count(), 15);
    assert!(text.lines().all(|r| r.chars().count() == 25));
}

#[test]
fn flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("game.json");
    fs::write(&path, r#"{ "map_width": 25, "map_height": 15 }"#).unwrap();

    let output = delvekeep()
        .arg("--dump-map")
        .arg("--config")
        .arg(&path)
        .args(["--height", "12"])
        .output()
        .unwrap();
    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(text.lines().count(), 12);
    assert!(text.lines().all(|r| r.chars().count() == 25));
}

#[test]
fn bad_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("game.json");
    fs::write(&path, "{ not json").unwrap();

    delvekeep()
        .arg("--dump-map")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn tiny_map_is_rejected() {
    delvekeep()
        .args(["--dump-map", "--width", "2", "--height", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn huge_map_is_rejected_without_panicking() {
    delvekeep()
        .args(["--dump-map", "--width", "50000", "--height", "50000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the limit"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn log_file_receives_diagnostics() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("delvekeep.log");
    delvekeep()
        .args(["--dump-map", "--seed", "5", "--width", "30", "--height", "20"])
        .arg("--log-file")
        .arg(&log)
        .env("RUST_LOG", "info")
        .assert()
        .success();
    let text = fs::read_to_string(&log).unwrap();
    assert!(text.contains("new game"));
}
