use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::interfaces::cli::{execute, Cli};

pub fn run() -> ExitCode {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match execute(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
