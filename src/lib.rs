pub mod cli;
pub mod commands;
pub mod config;
pub mod medications; // Entry validation, session list, list view
pub mod models;
pub mod submission;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use medications::{try_create, MedicationCollection, ValidationError};
pub use models::{label_for, FrequencyCode, MedicationRecord};

pub fn run() -> ExitCode {
    // Initialize tracing; stderr keeps stdout free for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(config::LOG_ENV_VAR)
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    tracing::debug!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let cli = cli::Cli::parse();
    match cli::execute(cli, io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
