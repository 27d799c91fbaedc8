//! Runs the built binary against temporary fixtures.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_css-color-analyzer"))
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    bin().current_dir(dir).args(args).output().unwrap()
}

fn fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("styles")).unwrap();
    fs::write(
        temp.path().join("styles/a.css"),
        "color: #0a40ff; border: rgb(10,64,255);",
    )
    .unwrap();
    fs::write(temp.path().join("styles/b.css"), "background: #0A40FF;").unwrap();
    temp
}

#[test]
fn test_no_arguments_prints_help_and_fails() {
    let temp = TempDir::new().unwrap();
    let output = run_in(temp.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--dir"));
}

#[test]
fn test_directory_to_stdout() {
    let temp = fixture();
    let output = run_in(temp.path(), &["-d", "styles"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let blue = &report["blue"][0];
    assert_eq!(blue["name"], "#0a40ff");
    assert_eq!(blue["count"], 3);
    assert_eq!(blue["unique"], false);
    assert_eq!(blue["color_format"], "hex");
    assert_eq!(blue["locations"].as_array().unwrap().len(), 2);
}

#[test]
fn test_output_file_and_parallel_jobs() {
    let temp = fixture();
    let output = run_in(
        temp.path(),
        &["-d", "styles", "-o", "colors.json", "--pretty", "-j", "2"],
    );
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Color analysis saved to colors.json"));

    let json = fs::read_to_string(temp.path().join("colors.json")).unwrap();
    assert!(json.starts_with("{\n  \"blue\""));
}

#[test]
fn test_single_input_file() {
    let temp = fixture();
    let output = run_in(temp.path(), &["-i", "styles/b.css"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["blue"][0]["variations"], serde_json::json!(["#0A40FF"]));
}

#[test]
fn test_missing_input_file_exit_code() {
    let temp = TempDir::new().unwrap();
    let output = run_in(temp.path(), &["-i", "nope.css"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Input is not a file"));
}

#[test]
fn test_missing_directory_exit_code() {
    let temp = TempDir::new().unwrap();
    let output = run_in(temp.path(), &["-d", "nope"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_empty_directory_exit_code() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("empty")).unwrap();
    let output = run_in(temp.path(), &["-d", "empty"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_config_pretty_and_extensions() {
    let temp = fixture();
    fs::write(temp.path().join("styles/c.scss"), "$c: red;").unwrap();
    fs::write(
        temp.path().join(".color-analyzer.toml"),
        "[scan]\nextensions = [\".scss\"]\n\n[output]\npretty = true\n",
    )
    .unwrap();

    let output = run_in(temp.path(), &["-d", "styles"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("{\n  \"red\""));
    assert!(!stdout.contains("#0a40ff"));
}

#[test]
fn test_init_config() {
    let temp = TempDir::new().unwrap();
    let output = run_in(temp.path(), &["--init-config"]);
    assert!(output.status.success());
    let written = fs::read_to_string(temp.path().join(".color-analyzer.toml")).unwrap();
    assert!(written.contains("[scan]"));
}
