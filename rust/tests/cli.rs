use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const ENV_KEYS: [&str; 4] = ["RECT_ORIGIN_X", "RECT_ORIGIN_Y", "RECT_WIDTH", "RECT_HEIGHT"];

fn run_in(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rect-coords"));
    cmd.current_dir(dir).args(args);
    for key in ENV_KEYS {
        cmd.env_remove(key);
    }
    for (k, v) in env {
        cmd.env(k, v);
    }
    cmd.output().expect("binary should run")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn default_run_prints_script_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &[], &[]);
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "900\n\
         Starting Point (X)): 50\n\
         Starting Point (Y)): 100\n\
         End Point X-Axis (Top Right): 140\n\
         End Point Y-Axis (Bottom Left): 110\n"
    );
}

#[test]
fn flags_accept_negative_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(
        dir.path(),
        &["--x", "-10", "--y", "-20", "--width", "5", "--height", "0"],
        &[],
    );
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "0\n\
         Starting Point (X)): -10\n\
         Starting Point (Y)): -20\n\
         End Point X-Axis (Top Right): -5\n\
         End Point Y-Axis (Bottom Left): -20\n"
    );
}

#[test]
fn flag_wins_over_environment_and_dotenv() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env"), "RECT_WIDTH=7\nRECT_HEIGHT=3\n").unwrap();

    let output = run_in(dir.path(), &["--width", "2"], &[("RECT_ORIGIN_X", "1")]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    // width from flag, height from .env, x from environment
    assert_eq!(lines[0], "6");
    assert_eq!(lines[1], "Starting Point (X)): 1");
    assert_eq!(lines[3], "End Point X-Axis (Top Right): 3");
    assert_eq!(lines[4], "End Point Y-Axis (Bottom Left): 103");
}

#[test]
fn json_format() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--format", "json"], &[]);
    assert!(output.status.success());
    let v: Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(v["area"], 900);
    assert_eq!(v["coordinates"]["top_right"], 140);
    assert_eq!(v["coordinates"]["bottom_left"], 110);
}

#[test]
fn real_mode_accepts_fractions() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--real", "--width", "1.5", "--height", "4"], &[]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "6");
    assert_eq!(lines[3], "End Point X-Axis (Top Right): 51.5");
}

#[test]
fn invalid_number_fails_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--width", "abc"], &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("RECT_WIDTH"), "stderr was {}", stderr);
}

#[test]
fn overflow_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--width", "9223372036854775807", "--height", "2"], &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("area does not fit"), "stderr was {}", stderr);
}
