// Process-level checks for the server binary

use std::process::{Command, Stdio};

#[test]
fn test_exits_nonzero_without_api_key() {
    let output = Command::new(env!("CARGO_BIN_EXE_propertydata-mcp"))
        .env_remove("PROPERTYDATA_API_KEY")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run binary");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "nothing may reach the protocol channel");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("PROPERTYDATA_API_KEY"), "stderr was: {}", stderr);
}

#[test]
fn test_exits_nonzero_with_blank_api_key() {
    let output = Command::new(env!("CARGO_BIN_EXE_propertydata-mcp"))
        .env("PROPERTYDATA_API_KEY", "")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_clean_exit_on_closed_stdin() {
    let output = Command::new(env!("CARGO_BIN_EXE_propertydata-mcp"))
        .env("PROPERTYDATA_API_KEY", "test-key")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}
