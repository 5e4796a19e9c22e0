//! Integration tests for the auto-patch CLI

use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{contents}").unwrap();
    file
}

fn auto_patch(config: &NamedTempFile) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_auto-patch"));
    cmd.arg("--config")
        .arg(config.path())
        .arg("--no-report")
        .env_remove("AUTO_PATCH_RETRY_MAX")
        .env_remove("AUTO_PATCH_RETRY_WAIT")
        .env_remove("AUTO_PATCH_MAILREPORT");
    cmd
}

#[test]
fn test_cli_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_auto-patch"))
        .arg("--version")
        .output()
        .expect("Failed to execute auto-patch");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("auto-patch"));
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_auto-patch"))
        .arg("--help")
        .output()
        .expect("Failed to execute auto-patch");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--no-report"));
    assert!(stdout.contains("--json"));
}

#[test]
fn test_no_patches_exits_zero() {
    let config = config_file("[zypper]\nbinary = \"true\"\n");
    let output = auto_patch(&config)
        .arg("--json")
        .output()
        .expect("Failed to execute auto-patch");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"exit_code\": 0"), "{stdout}");
    assert!(stdout.contains("\"patches_were_found\": false"), "{stdout}");
}

#[test]
fn test_zypper_exit_code_is_propagated() {
    // `false` exits 1, zypper's "unexpected situation" code
    let config = config_file("[zypper]\nbinary = \"false\"\n");
    let output = auto_patch(&config)
        .output()
        .expect("Failed to execute auto-patch");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_zypper_is_internal_error() {
    let config = config_file("[zypper]\nbinary = \"/nonexistent/zypper\"\n");
    let output = auto_patch(&config)
        .output()
        .expect("Failed to execute auto-patch");

    assert_eq!(output.status.code(), Some(255));
}

#[test]
fn test_invalid_config_is_internal_error() {
    let config = config_file("[retry]\nmax = \"many\"\n");
    let output = auto_patch(&config)
        .output()
        .expect("Failed to execute auto-patch");

    assert_eq!(output.status.code(), Some(255));
}
