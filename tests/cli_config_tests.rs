//! End-to-end tests for `hexmatch config` commands.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Path to the hexmatch binary
fn hexmatch_bin() -> &'static str {
    env!("CARGO_BIN_EXE_hexmatch")
}

/// Creates a Command using an isolated config file.
fn isolated_config_command(args: &[&str], config_path: &Path) -> Command {
    let mut cmd = Command::new(hexmatch_bin());
    cmd.args(args);
    cmd.arg("--config").arg(config_path);
    cmd
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_defaults_when_file_missing() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let output = isolated_config_command(&["config", "show"], &config_path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PANTONE 18-1763 TPX Red"));
    assert!(stdout.contains("127.0.0.1:3001"));
    assert!(!config_path.exists(), "show must not create the file");
}

#[test]
fn test_config_show_json() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let output = isolated_config_command(&["config", "show", "--json"], &config_path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(json["matcher"]["hex"], "#C8102E");
    assert_eq!(json["matcher"]["delay_ms"], 1000);
    assert_eq!(json["web"]["port"], 3001);
    assert_eq!(json["ui"]["default_input"], "#ff0000");
    assert!(json["path"].as_str().unwrap().ends_with("config.toml"));
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_persists_values() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let output = isolated_config_command(
        &[
            "config",
            "set",
            "--port",
            "8080",
            "--delay-ms",
            "0",
            "--swatches",
            "false",
        ],
        &config_path,
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(config_path.exists());

    let output = isolated_config_command(&["config", "show", "--json"], &config_path)
        .output()
        .expect("Failed to execute command");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["web"]["port"], 8080);
    assert_eq!(json["matcher"]["delay_ms"], 0);
    assert_eq!(json["ui"]["swatches"], false);
    assert_eq!(json["matcher"]["timeout_ms"], 10_000);
}

#[test]
fn test_config_set_requires_an_option() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let output = isolated_config_command(&["config", "set"], &config_path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(!config_path.exists());
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let output = isolated_config_command(&["config", "set", "--timeout-ms", "0"], &config_path)
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));

    let output = isolated_config_command(
        &["config", "set", "--default-input", "ff0000"],
        &config_path,
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
    assert!(!config_path.exists());
}
