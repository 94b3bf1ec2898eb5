// Masjid AI Replit bootstrapper
// Exposes the setup sequence for the binary and for integration tests

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod telemetry;

// Re-export key types for easy access
pub use cli::commands::setup::{SetupCommand, SetupReport};
pub use cli::commands::Command;
pub use config::SetupEnvironment;
pub use errors::SetupError;
pub use fs::{FileSystemOperations, StandardFileSystem};
pub use telemetry::{create_setup_span, generate_correlation_id, init_telemetry};
