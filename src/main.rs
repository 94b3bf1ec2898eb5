use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::Instrument;

use masjid_setup::cli::Cli;
use masjid_setup::{
    create_setup_span, generate_correlation_id, init_telemetry, Command, SetupCommand,
    SetupEnvironment, SetupError, StandardFileSystem,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_telemetry()?;

    let environment = SetupEnvironment::load().map_err(SetupError::Config)?;
    let setup_command = SetupCommand::new(
        cli.workflow,
        cli.readme,
        cli.dry_run,
        environment,
        Arc::new(StandardFileSystem),
    );

    let correlation_id = generate_correlation_id();
    let span = create_setup_span(&correlation_id, cli.dry_run);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(setup_command.execute().instrument(span));

    if let Err(e) = result {
        if let Some(SetupError::MissingInput { path }) = e.downcast_ref::<SetupError>() {
            eprintln!("❌ Workflow file not found: {}", path.display());
            std::process::exit(1);
        }
        return Err(e);
    }

    Ok(())
}
