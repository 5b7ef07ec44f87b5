//! SuperVideo CLI
//!
//! Split, concatenate, timelapse and inspect videos by driving ffmpeg.
//!
//! # Usage
//!
//! ```bash
//! supervideo split video.mp4 [--render]
//! supervideo concat a.mp4 b.mp4 c.mp4 -o out.mp4 [--render]
//! supervideo timelapse vid.mp4 --speed 0.05 -o fast.mp4
//! supervideo info video.mp4
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::{debug, info};

use supervideo_cli::cli::commands::{self, RunStatus};
use supervideo_cli::cli::Cli;
use supervideo_cli::config_initialization::{build_operation, initialize_configuration_hierarchy};
use supervideo_cli::output::ReportWriter;
use supervideo_cli::utils::logging::init_logging;
use supervideo_cli::utils::style::Palette;
use supervideo_cli::SuperVideoError;

/// Main entry point for the SuperVideo CLI
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(kind) = cli.verb else {
        // No verb: behave like --help
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    };

    match run(cli, kind).await {
        Ok(RunStatus::Success) => ExitCode::SUCCESS,
        Ok(RunStatus::Incomplete) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            exit_code_for(&err)
        }
    }
}

async fn run(cli: Cli, kind: supervideo_cli::OperationKind) -> Result<RunStatus> {
    let settings = initialize_configuration_hierarchy(&cli)?;
    init_logging(&settings.log_level, settings.log_json)?;
    if let Some(path) = &settings.config_source {
        info!("Loaded configuration from {}", path.display());
    }
    debug!("Resolved settings: {:?}", settings);

    info!("Starting SuperVideo {}", kind);

    let operation = build_operation(kind, &cli, &settings);
    let writer = ReportWriter::new(Palette::detect(settings.no_color), settings.format);
    let status = commands::execute(&operation, &settings, &writer).await?;

    info!("SuperVideo finished with {:?}", status);
    Ok(status)
}

/// Configuration errors exit with 2, everything else with 1
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<SuperVideoError>() {
        Some(e) if e.is_configuration() => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}
