// End-to-end checks of the masjid-setup binary in throwaway workspaces

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const WORKFLOW_FILE: &str = "n8n_masjid_workflow_replit.json";

/// Workspace with its own working directory and HOME
struct Workspace {
    root: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn with_workflow() -> Self {
        let workspace = Self::new();
        std::fs::write(workspace.cwd().join(WORKFLOW_FILE), r#"{"nodes": []}"#).unwrap();
        workspace
    }

    fn cwd(&self) -> &Path {
        self.root.path()
    }

    fn home(&self) -> std::path::PathBuf {
        self.root.path().join("testhome")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("masjid-setup").unwrap();
        cmd.current_dir(self.cwd())
            .env("HOME", self.home())
            .env_remove("REPL_SLUG")
            .env_remove("REPL_OWNER")
            .env_remove("RUST_LOG");
        cmd
    }

    fn readme(&self) -> String {
        std::fs::read_to_string(self.cwd().join("README.md")).unwrap()
    }
}

#[test]
fn test_missing_workflow_exits_with_code_one() {
    let workspace = Workspace::new();

    workspace
        .command()
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "❌ Workflow file not found: n8n_masjid_workflow_replit.json",
        ))
        .stderr(predicate::str::contains("\"level\"").not())
        .stdout(predicate::str::contains("SETUP INSTRUCTIONS").not());

    assert!(!workspace.cwd().join("README.md").exists());
    assert!(!workspace.home().join(".n8n").exists());
}

#[test]
fn test_fresh_home_gets_config_directory() {
    let workspace = Workspace::with_workflow();
    assert!(!workspace.home().join(".n8n").exists());

    workspace
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Workflow file found\n"))
        .stdout(predicate::str::contains("✅ Created n8n config directory"));

    assert!(workspace.home().join(".n8n").is_dir());
}

#[test]
fn test_second_run_is_idempotent() {
    let workspace = Workspace::with_workflow();

    workspace.command().assert().success();
    let first_readme = workspace.readme();

    workspace
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Created n8n config directory").not());

    assert!(workspace.home().join(".n8n").is_dir());
    assert_eq!(workspace.readme(), first_readme);
}

#[test]
fn test_readme_uses_repl_identifiers() {
    let workspace = Workspace::with_workflow();

    workspace
        .command()
        .env("REPL_SLUG", "foo")
        .env("REPL_OWNER", "bar")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "   https://foo.bar.repl.co/webhook/webhook-masjid",
        ));

    assert!(workspace
        .readme()
        .contains("https://foo.bar.repl.co/webhook/webhook-masjid"));
}

#[test]
fn test_readme_uses_placeholders_when_unset() {
    let workspace = Workspace::with_workflow();

    workspace.command().assert().success();

    assert!(workspace
        .readme()
        .contains("https://your-repl.username.repl.co/webhook/webhook-masjid"));
}

#[test]
fn test_existing_readme_is_replaced_entirely() {
    let workspace = Workspace::with_workflow();
    std::fs::write(
        workspace.cwd().join("README.md"),
        "# My notes\n\nKeep this? No, setup owns this file.\n".repeat(50),
    )
    .unwrap();

    workspace
        .command()
        .env("REPL_SLUG", "foo")
        .env("REPL_OWNER", "bar")
        .assert()
        .success();

    let expected = masjid_setup::cli::commands::setup::readme::render_readme(
        &masjid_setup::SetupEnvironment {
            home: workspace.home().display().to_string(),
            repl_slug: "foo".to_string(),
            repl_owner: "bar".to_string(),
        },
    );
    assert_eq!(workspace.readme(), expected);
}

#[test]
fn test_dry_run_leaves_filesystem_untouched() {
    let workspace = Workspace::with_workflow();

    workspace
        .command()
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would create directory:"))
        .stdout(predicate::str::contains("Would write README.md"));

    assert!(!workspace.cwd().join("README.md").exists());
    assert!(!workspace.home().join(".n8n").exists());
}

#[test]
fn test_custom_workflow_path() {
    let workspace = Workspace::new();
    std::fs::create_dir(workspace.cwd().join("exports")).unwrap();
    std::fs::write(workspace.cwd().join("exports/masjid.json"), "{}").unwrap();

    workspace
        .command()
        .args(["--workflow", "exports/masjid.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Workflow file found"));
}

#[test]
fn test_unwritable_readme_location_fails() {
    let workspace = Workspace::with_workflow();

    workspace
        .command()
        .args(["--readme", "missing-dir/README.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write missing-dir/README.md"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_environment_variable_does_not_abort_setup() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let workspace = Workspace::with_workflow();

    workspace
        .command()
        .env("LS_COLORS", OsString::from_vec(b"\xff\xfe".to_vec()))
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Workflow file found"));

    assert!(workspace.cwd().join("README.md").exists());
    assert!(workspace.home().join(".n8n").is_dir());
}
