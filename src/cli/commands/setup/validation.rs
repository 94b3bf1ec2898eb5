//! Precondition check for the workflow definition
//!
//! The workflow JSON is never parsed here. The only contract is that it is
//! present before anything else happens.

use std::io::Write;

use crate::errors::SetupError;

use super::SetupCommand;

/// Fail with `MissingInput` unless the workflow file exists.
pub fn ensure_workflow_present(
    setup_command: &SetupCommand,
    out: &mut dyn Write,
) -> Result<(), SetupError> {
    let path = setup_command.workflow_path();

    if !setup_command.fs_ops().exists(path) {
        tracing::debug!(path = %path.display(), "Workflow file missing");
        return Err(SetupError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    tracing::info!(path = %path.display(), "Workflow file present");
    writeln!(out, "✅ Workflow file found")?;
    Ok(())
}
