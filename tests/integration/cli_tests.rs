//! CLI integration tests
//!
//! These tests verify that the CLI works correctly with various options.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn fixture_app() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "src/navigation/AppNavigator.tsx",
        r#"<Stack.Screen name="Home" component={HomeScreen} />
<Stack.Screen name="Profile" component={ProfileScreen} />"#,
    );
    write(
        dir.path(),
        "src/screens/HomeScreen.tsx",
        r#"export default function HomeScreen({ navigation }) { navigation.navigate("Profile"); }"#,
    );
    write(
        dir.path(),
        "src/screens/ProfileScreen.tsx",
        "export default function ProfileScreen() { return null; }",
    );
    dir
}

fn screenmap() -> Command {
    Command::cargo_bin("screenmap").unwrap()
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_help() {
    screenmap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--store"));
}

#[test]
fn test_version() {
    screenmap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("screenmap"));
}

#[test]
fn test_invalid_format() {
    let app = fixture_app();
    screenmap()
        .arg(app.path())
        .args(["--format", "sarif"])
        .assert()
        .failure();
}

// ============================================================================
// Output Formats
// ============================================================================

#[test]
fn test_terminal_output() {
    let app = fixture_app();
    screenmap()
        .arg(app.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("HomeScreen"))
        .stdout(predicate::str::contains("Profile"));
}

#[test]
fn test_json_output() {
    let app = fixture_app();
    let output = screenmap()
        .arg(app.path())
        .args(["--format", "json", "--quiet"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_screens"], 2);
    assert_eq!(value["total_navigation_paths"], 1);
    assert_eq!(value["navigation_paths"][0]["source"], "HomeScreen");
    assert_eq!(value["navigation_paths"][0]["target"], "Profile");
}

#[test]
fn test_json_output_file() {
    let app = fixture_app();
    let report = app.path().join("report.json");
    screenmap()
        .arg(app.path())
        .args(["--format", "json", "--quiet", "--output"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let contents = fs::read_to_string(&report).unwrap();
    assert!(contents.contains("\"HomeScreen\""));
}

#[test]
fn test_dot_output() {
    let app = fixture_app();
    screenmap()
        .arg(app.path())
        .args(["--format", "dot", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph navigation {"))
        .stdout(predicate::str::contains(
            "\"HomeScreen\" -> \"Profile\" [label=\"navigate\"];",
        ));
}

#[test]
fn test_format_from_config_file() {
    let app = fixture_app();
    write(app.path(), ".screenmap.yml", "report:\n  format: json\n");
    let output = screenmap().arg(app.path()).arg("--quiet").output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_screens"], 2);
}

// ============================================================================
// Store
// ============================================================================

#[test]
fn test_store_file_is_written() {
    let app = fixture_app();
    let store = app.path().join("store.json");

    for _ in 0..2 {
        screenmap()
            .arg(app.path())
            .args(["--format", "json", "--quiet", "--store"])
            .arg(&store)
            .assert()
            .success();
    }

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&store).unwrap()).unwrap();
    assert_eq!(value["screens"].as_array().unwrap().len(), 2);
    assert_eq!(value["navigation_paths"].as_array().unwrap().len(), 1);
}
