//! n8n config directory preparation

use std::io::Write;
use std::path::PathBuf;

use crate::errors::SetupError;

use super::SetupCommand;

/// Create `<HOME>/.n8n` when it is missing.
///
/// Returns whether this run created it. An existing directory is not an
/// error and produces no output.
pub async fn ensure_config_dir(
    setup_command: &SetupCommand,
    out: &mut dyn Write,
) -> Result<bool, SetupError> {
    let config_dir: PathBuf = setup_command.environment().config_dir();

    if setup_command.fs_ops().exists(&config_dir) {
        tracing::debug!(path = %config_dir.display(), "n8n config directory already present");
        return Ok(false);
    }

    if setup_command.dry_run {
        writeln!(out, "Would create directory: {}", config_dir.display())?;
        return Ok(false);
    }

    setup_command
        .fs_ops()
        .create_dir_all(&config_dir)
        .await
        .map_err(|source| SetupError::CreateDir {
            path: config_dir.clone(),
            source,
        })?;

    tracing::info!(path = %config_dir.display(), "Created n8n config directory");
    writeln!(out, "✅ Created n8n config directory")?;
    Ok(true)
}
