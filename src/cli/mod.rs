use clap::Parser;
use std::path::PathBuf;

use crate::cli::commands::setup::{DEFAULT_README_FILE, DEFAULT_WORKFLOW_FILE};

pub mod commands;

#[derive(Parser, Debug)]
#[command(name = "masjid-setup")]
#[command(version)]
#[command(about = "Prepare a Replit workspace for the Masjid AI n8n workflow")]
#[command(long_about = "Checks that the exported n8n workflow is present, creates the n8n config \
                       directory under $HOME, prints import instructions with your webhook URL \
                       and regenerates README.md. Run it without arguments; REPL_SLUG and \
                       REPL_OWNER determine the webhook URL.")]
pub struct Cli {
    /// Workflow export that must exist before setup proceeds
    #[arg(long, value_name = "PATH", default_value = DEFAULT_WORKFLOW_FILE)]
    pub workflow: PathBuf,

    /// Where to write the generated README
    #[arg(long, value_name = "PATH", default_value = DEFAULT_README_FILE)]
    pub readme: PathBuf,

    /// Show what would be created without making changes
    #[arg(long, help = "Show what would be created without making changes")]
    pub dry_run: bool,
}
