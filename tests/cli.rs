use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn doodlepad_cmd() -> Command {
    Command::cargo_bin("doodlepad").expect("binary exists")
}

const SCRIPT: &str = r#"{
    "width": 64,
    "height": 48,
    "scale": 2.0,
    "events": [
        {"op": "set-color", "color": "coral"},
        {"op": "pointer-down", "event": {"kind": "mouse", "client_x": 8, "client_y": 8}},
        {"op": "pointer-move", "event": {"kind": "mouse", "client_x": 40, "client_y": 30}},
        {"op": "pointer-up"},
        {"op": "set-tool", "tool": "eraser"},
        {"op": "pointer-down", "event": {"kind": "mouse", "client_x": 20, "client_y": 20}},
        {"op": "pointer-move", "event": {"kind": "mouse", "client_x": 30, "client_y": 20}},
        {"op": "pointer-up"}
    ]
}"#;

#[test]
fn doodlepad_help_prints_usage() {
    doodlepad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand doodle surface with DPR-aware rendering",
        ));
}

#[test]
fn no_flags_prints_usage_guidance() {
    doodlepad_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("doodlepad --script"));
}

#[test]
fn replay_reports_surface_stats() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("sketch.json");
    std::fs::write(&script_path, SCRIPT).unwrap();

    doodlepad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--script", script_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replayed 8 events"))
        .stdout(predicate::str::contains("128x96 pixels"));
}

#[test]
fn replay_writes_png_output() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("sketch.json");
    let output_path = temp.path().join("sketch.png");
    std::fs::write(&script_path, SCRIPT).unwrap();

    doodlepad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args([
            "--script",
            script_path.to_str().unwrap(),
            "--output",
            output_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let bytes = std::fs::read(&output_path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn scale_flag_overrides_script_scale() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("sketch.json");
    std::fs::write(&script_path, SCRIPT).unwrap();

    doodlepad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--script", script_path.to_str().unwrap(), "--scale", "1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("64x48 pixels"));
}

#[test]
fn malformed_script_fails_with_context() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("broken.json");
    std::fs::write(&script_path, "{ not json").unwrap();

    doodlepad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--script", script_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid script file"));
}

#[test]
fn output_flag_requires_script() {
    doodlepad_cmd()
        .args(["--output", "out.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn config_defaults_apply_when_config_missing() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("sketch.json");
    // No scale in script: falls back to the configured default (1.0)
    std::fs::write(
        &script_path,
        r#"{"width": 32, "height": 32, "events": []}"#,
    )
    .unwrap();

    doodlepad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--script", script_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("32x32 pixels"));
}

#[test]
fn config_file_sets_default_scale() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("doodlepad");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[surface]\nscale = 3.0\n",
    )
    .unwrap();

    let script_path = temp.path().join("sketch.json");
    std::fs::write(
        &script_path,
        r#"{"width": 32, "height": 32, "events": []}"#,
    )
    .unwrap();

    doodlepad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--script", script_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("96x96 pixels"));
}
