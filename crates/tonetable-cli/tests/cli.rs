//! Integration tests for the `tonetable` binary: exit codes and streams.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn tonetable(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tonetable"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute tonetable")
}

fn write_module(dir: &Path, name: &str, tone: &str) -> String {
    let path = dir.join(format!("{}.json", name));
    fs::write(
        &path,
        format!(
            r#"{{"toneMaps": [{{"prog": 0, "bankM": 0, "toneRef": {{"name": "{}"}}}}]}}"#,
            tone
        ),
    )
    .unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_table_on_stdout() {
    let tmp = tempdir().unwrap();
    let a = write_module(tmp.path(), "A", "Piano");
    let b = write_module(tmp.path(), "B", "Organ");

    let output = tonetable(&[a.as_str(), b.as_str()]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.starts_with("{| class=\"wikitable\"\n"));
    assert!(stdout.ends_with("|}\n"));
    assert!(stdout.contains("| style=\"background: red;\" colspan=\"1\" | Piano\n"));
    assert!(stdout.contains("| colspan=\"1\" | Organ\n"));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_verbose_summary_goes_to_stderr() {
    let tmp = tempdir().unwrap();
    let a = write_module(tmp.path(), "A", "Piano");
    let b = write_module(tmp.path(), "B", "Piano");

    let output = tonetable(&["--verbose", a.as_str(), b.as_str()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stdout.contains("| colspan=\"2\" | Piano\n"));
    assert!(!stdout.contains("SUCCESS"));
    assert!(stderr.contains("SUCCESS"));
    assert!(stderr.contains("2 module(s), 1 program(s), 1 row(s)"));
}

#[test]
fn test_no_files_exits_1() {
    let output = tonetable(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Please specify .json filenames"));
}

#[test]
fn test_unknown_option_exits_1() {
    let tmp = tempdir().unwrap();
    let a = write_module(tmp.path(), "A", "Piano");

    let output = tonetable(&["--sort=numeric", a.as_str()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--sort"));
}

#[test]
fn test_missing_file_exits_1() {
    let tmp = tempdir().unwrap();
    let a = write_module(tmp.path(), "A", "Piano");
    let missing = tmp.path().join("B.json");

    let output = tonetable(&[a.as_str(), missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("couldn't open"));
}

#[test]
fn test_bad_shape_exits_1_without_partial_output() {
    let tmp = tempdir().unwrap();
    let a = write_module(tmp.path(), "A", "Piano");
    let bad = tmp.path().join("B.json");
    fs::write(&bad, r#"{"presets": []}"#).unwrap();

    let output = tonetable(&[a.as_str(), bad.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("JSON format not as expected"));
}

#[test]
fn test_single_dash_file_name_is_a_module() {
    let tmp = tempdir().unwrap();
    write_module(tmp.path(), "-SC55", "Piano");
    write_module(tmp.path(), "SC88", "Piano");

    // Relative names are what trip short-flag parsing.
    let output = Command::new(env!("CARGO_BIN_EXE_tonetable"))
        .current_dir(tmp.path())
        .args(["-SC55.json", "SC88.json"])
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute tonetable");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("! style=\"width: 6em;\" | -SC55\n"));
    assert!(stdout.contains("| colspan=\"2\" | Piano\n"));
}

#[test]
fn test_help_exits_0() {
    let output = tonetable(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--ignore-msb"));
    assert!(!stdout.contains("-h,"));
}
