//! CLI tests against the real binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn cli() -> Command {
    Command::cargo_bin("cursor-full-flow").unwrap()
}

fn installed(project: &Path) -> usize {
    fs::read_dir(project.join(".cursor/commands"))
        .map(|entries| entries.count())
        .unwrap_or(0)
}

#[test]
fn test_help_output() {
    for flag in ["help", "-h", "--help"] {
        cli()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("init"))
            .stdout(predicate::str::contains("status"))
            .stdout(predicate::str::contains("list"))
            .stdout(predicate::str::contains("--skip-mcp"));
    }
}

#[test]
fn test_unknown_command_fails() {
    cli()
        .arg("frobnicate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown command: frobnicate"));
}

#[test]
fn test_status_not_installed() {
    let project = TempDir::new().unwrap();

    cli()
        .args(["status", "--project"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("not installed"))
        .stdout(predicate::str::contains("Installed Commands").not());

    assert!(!project.path().join(".cursor").exists());
}

#[test]
fn test_list_shows_catalog() {
    let project = TempDir::new().unwrap();

    cli()
        .args(["list", "--project"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("/full-flow"))
        .stdout(predicate::str::contains("/jira-fetch"))
        .stdout(predicate::str::contains("/pr-review"))
        .stdout(predicate::str::contains("/perf-review"));
}

#[test]
fn test_non_interactive_install() {
    let project = TempDir::new().unwrap();

    cli()
        .arg("-y")
        .arg("--project")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("INSTALLATION COMPLETE"));

    assert_eq!(installed(project.path()), 22);
    assert!(!project.path().join(".cursor/mcp.json").exists());
}

#[test]
fn test_bundle_flag_and_rerun() {
    let project = TempDir::new().unwrap();

    cli()
        .args(["init", "--bundle", "standard", "--skip-mcp", "--project"])
        .arg(project.path())
        .assert()
        .success();
    assert_eq!(installed(project.path()), 11);

    cli()
        .args(["init", "--bundle", "standard", "--skip-mcp", "--project"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(skipped)"));
    assert_eq!(installed(project.path()), 11);
}

#[test]
fn test_status_after_install() {
    let project = TempDir::new().unwrap();

    cli()
        .args(["--bundle", "minimal", "-y", "--project"])
        .arg(project.path())
        .assert()
        .success();

    cli()
        .args(["status", "--project"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("/full-flow"))
        .stdout(predicate::str::contains("5 installed"));
}

#[test]
fn test_interactive_install_from_stdin() {
    let project = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    // bundle 2, decline GitHub, configure Jira fully
    cli()
        .args(["--project"])
        .arg(project.path())
        .env("HOME", home.path())
        .write_stdin("2\nn\ny\nacme\ndev@acme.io\ntoken\n")
        .assert()
        .success();

    assert_eq!(installed(project.path()), 11);

    let doc: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(project.path().join(".cursor/mcp.json")).unwrap(),
    )
    .unwrap();
    assert!(doc["mcpServers"].get("github").is_none());
    assert_eq!(doc["mcpServers"]["jira"]["env"].as_object().unwrap().len(), 3);
}
