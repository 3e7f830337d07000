//! Common test utilities and helpers

use assert_cmd::Command;
use serde_json::Value;

/// Command handle for the mock agent binary.
pub fn mock_claude() -> Command {
    Command::cargo_bin("mock-claude").expect("mock-claude binary should be built")
}

/// Run the mock over a prompt in text mode and return stdout.
pub fn respond_to(prompt: &str) -> String {
    let output = mock_claude()
        .arg(prompt)
        .output()
        .expect("failed to run mock-claude");
    assert!(
        output.status.success(),
        "mock-claude exited with {:?}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be valid UTF-8")
}

/// Run the mock in an envelope mode and parse stdout as JSON.
pub fn respond_as_envelope(prompt: &str, format: &str) -> Value {
    let output = mock_claude()
        .arg("--output-format")
        .arg(format)
        .arg(prompt)
        .output()
        .expect("failed to run mock-claude");
    assert!(
        output.status.success(),
        "mock-claude exited with {:?}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be a JSON envelope")
}
