use std::path::PathBuf;
use thiserror::Error;

/// Failures the bootstrapper recognizes.
///
/// Only `MissingInput` is handled locally by the binary (dedicated message,
/// exit code 1). Everything else is fatal and propagates out of `main`.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Workflow file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Failed to create n8n config directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to write setup instructions: {0}")]
    Output(#[from] std::io::Error),

    #[error("Invalid environment configuration: {0}")]
    Config(#[from] config::ConfigError),
}
