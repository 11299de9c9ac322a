use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_gddoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// -- command surface --

#[test]
fn no_arguments_prints_usage() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_input_fails() {
    cmd()
        .arg("does_not_exist/player.gd")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input files"));
}

#[test]
fn unknown_format_fails() {
    cmd()
        .args(["-f", "markdown"])
        .arg(fixture_path("player.gd"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

// -- XML generation --

#[test]
fn xml_output_matches_fixture() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("player.gd"))
        .assert()
        .success()
        .stdout(predicate::str::contains("player.xml"));

    let output = fs::read_to_string(dir.path().join("player.xml")).unwrap();
    let expected = fs::read_to_string(fixture_path("player.expected.xml")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn class_name_falls_back_to_file_stem() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("state_machine.gd"))
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("state_machine.xml")).unwrap();
    let expected = fs::read_to_string(fixture_path("state_machine.expected.xml")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn doc_classes_directory_derived_next_to_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("player.gd");
    fs::copy(fixture_path("player.gd"), &input).unwrap();

    cmd()
        .arg(input.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("doc_classes"));

    assert!(dir.path().join("doc_classes/player.xml").exists());
}

#[test]
fn output_is_stable_across_runs() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();

    for dir in [&dir_a, &dir_b] {
        cmd()
            .args(["-o", dir.path().to_str().unwrap()])
            .arg(fixture_path("player.gd"))
            .assert()
            .success();
    }

    let a = fs::read(dir_a.path().join("player.xml")).unwrap();
    let b = fs::read(dir_b.path().join("player.xml")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn end_to_end_minimal_class() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("turret.gd");
    fs::write(
        &input,
        "class_name Turret\nextends Node2D\n\n## Rotation speed in radians.\n@export var turn_rate: float = 1.5\n\nfunc aim_at(target: Vector2, lead: float = 0.0) -> void:\n\tpass\n",
    )
    .unwrap();

    let out = TempDir::new().unwrap();
    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(input.to_str().unwrap())
        .assert()
        .success();

    let xml = fs::read_to_string(out.path().join("turret.xml")).unwrap();
    assert!(xml.contains("<class name=\"Turret\""));
    assert!(xml.contains(
        "<member name=\"turn_rate\" type=\"float\" default=\"1.5\">Rotation speed in radians.</member>"
    ));
    assert!(xml.contains("<param index=\"0\" name=\"target\" type=\"Vector2\"/>"));
    assert!(xml.contains("<param index=\"1\" name=\"lead\" type=\"float\" default=\"0.0\"/>"));
}

// -- input expansion --

#[test]
fn directory_input_processes_gd_files() {
    let dir = TempDir::new().unwrap();
    fs::copy(fixture_path("player.gd"), dir.path().join("player.gd")).unwrap();
    fs::write(dir.path().join("notes.txt"), "not a script").unwrap();

    let out = TempDir::new().unwrap();
    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(dir.path().to_str().unwrap())
        .assert()
        .success();

    assert!(out.path().join("player.xml").exists());
    assert!(!out.path().join("notes.xml").exists());
}

#[test]
fn multiple_files_each_get_a_document() {
    let out = TempDir::new().unwrap();

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(fixture_path("player.gd"))
        .arg(fixture_path("state_machine.gd"))
        .assert()
        .success();

    assert!(out.path().join("player.xml").exists());
    assert!(out.path().join("state_machine.xml").exists());
}

// -- JSON format --

#[test]
fn json_format_serializes_model() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "json"])
        .arg(fixture_path("player.gd"))
        .assert()
        .success()
        .stdout(predicate::str::contains("player.json"));

    let output = fs::read_to_string(dir.path().join("player.json")).unwrap();
    assert!(output.contains("\"class_name\": \"Player\""));
    assert!(output.contains("\"exported\": true"));
}
