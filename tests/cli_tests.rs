/// Tests against the built binary that need no AWS access
use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_aws-credentials"))
}

#[test]
fn test_help_lists_commands() {
    let output = binary().arg("--help").output().expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["list", "all", "check", "new", "delete", "disable", "enable"] {
        assert!(stdout.contains(command), "Should include {} command", command);
    }
    assert!(stdout.contains("--max-age"), "Should include --max-age option");
}

#[test]
fn test_generate_completion_bash() {
    let output = binary()
        .args(["generate-completion", "bash"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("_aws__credentials()"),
        "Should contain bash completion function"
    );
    assert!(stdout.contains("COMPREPLY"), "Should contain COMPREPLY");
    assert!(
        stdout.contains("complete -F"),
        "Should register the completion function"
    );
    assert!(stdout.contains("check"), "Should include check command");
}

#[test]
fn test_delete_requires_key_id() {
    let output = binary().arg("delete").output().expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ACCESS_KEY_ID"));
}

#[test]
fn test_check_all_conflicts_with_username() {
    let output = binary()
        .args(["check", "--all", "--username", "alice"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_negative_max_age_rejected() {
    let output = binary()
        .args(["list", "--max-age", "-5"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}
