//! Replit bootstrap for the Masjid AI n8n workflow
//!
//! # Sequence
//!
//! The command runs one linear pass with a single early exit:
//!
//! 1. **Precondition**: the workflow JSON must exist. If it does not, the
//!    run stops before touching the filesystem or printing any instructions.
//! 2. **Config directory**: `<HOME>/.n8n` is created when missing. An existing
//!    directory is left alone.
//! 3. **Instructions**: the import steps and the webhook URL are printed.
//! 4. **README**: `README.md` is overwritten with the generated document.
//!
//! Re-running is safe. Steps 2 and 4 converge to the same state every time.
//!
//! With `dry_run` the precondition still applies, but steps 2 and 4 only
//! describe what they would do.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use crate::cli::commands::Command;
use crate::config::SetupEnvironment;
use crate::errors::SetupError;
use crate::fs::FileSystemOperations;

pub mod directories;
pub mod instructions;
pub mod readme;
pub mod validation;

/// Workflow export shipped with the Replit template
pub const DEFAULT_WORKFLOW_FILE: &str = "n8n_masjid_workflow_replit.json";
/// README location relative to the working directory
pub const DEFAULT_README_FILE: &str = "README.md";

pub struct SetupCommand {
    workflow_path: PathBuf,
    readme_path: PathBuf,
    pub dry_run: bool,
    environment: SetupEnvironment,
    fs_ops: Arc<dyn FileSystemOperations>,
}

/// What a completed run did
#[derive(Debug, PartialEq, Eq)]
pub struct SetupReport {
    pub workflow_path: PathBuf,
    pub config_dir: PathBuf,
    pub config_dir_created: bool,
    pub readme_path: PathBuf,
    pub readme_written: bool,
    pub webhook_url: String,
}

impl SetupCommand {
    pub fn new(
        workflow_path: impl Into<PathBuf>,
        readme_path: impl Into<PathBuf>,
        dry_run: bool,
        environment: SetupEnvironment,
        fs_ops: Arc<dyn FileSystemOperations>,
    ) -> Self {
        Self {
            workflow_path: workflow_path.into(),
            readme_path: readme_path.into(),
            dry_run,
            environment,
            fs_ops,
        }
    }

    pub fn workflow_path(&self) -> &Path {
        &self.workflow_path
    }

    pub fn readme_path(&self) -> &Path {
        &self.readme_path
    }

    pub fn environment(&self) -> &SetupEnvironment {
        &self.environment
    }

    pub fn fs_ops(&self) -> &dyn FileSystemOperations {
        self.fs_ops.as_ref()
    }

    /// Run the whole sequence, writing the transcript to `out`.
    pub async fn run(&self, out: &mut dyn Write) -> Result<SetupReport, SetupError> {
        instructions::print_banner(out)?;

        validation::ensure_workflow_present(self, out)?;
        let config_dir_created = directories::ensure_config_dir(self, out).await?;

        instructions::print_instructions(out, &self.environment)?;

        let readme_written = readme::write_readme(self, out).await?;
        instructions::print_completion(out)?;

        Ok(SetupReport {
            workflow_path: self.workflow_path.clone(),
            config_dir: self.environment.config_dir(),
            config_dir_created,
            readme_path: self.readme_path.clone(),
            readme_written,
            webhook_url: self.environment.webhook_url(),
        })
    }
}

impl Command for SetupCommand {
    async fn execute(&self) -> Result<()> {
        let mut stdout = std::io::stdout();
        let report = self.run(&mut stdout).await?;
        stdout.flush()?;

        tracing::info!(
            config_dir = %report.config_dir.display(),
            config_dir_created = report.config_dir_created,
            readme_written = report.readme_written,
            webhook_url = %report.webhook_url,
            "Setup finished"
        );
        Ok(())
    }
}
