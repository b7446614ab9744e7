//! Command-line surface
//!
//! - `render`: load a CSV, normalize it, print text or JSON
//! - `inspect`: show the role assigned to every header
//! - `export`: print normalized display values as CSV

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::{MatrixLoader, MatrixNormalizer};
use crate::domain::error::{AppError, Result};
use crate::domain::matrix::MatrixOutcome;
use crate::infrastructure::config::ConfigService;
use crate::infrastructure::csv::{ColumnClassifier, CsvExporter};
use crate::interfaces::render::{render, OutputFormat, NO_DATA_MESSAGE};

#[derive(Parser, Debug)]
#[command(name = "llm-matrix")]
#[command(about = "Normalize and render LLM capability comparison tables")]
#[command(version)]
pub struct Cli {
    /// TOML file with visualization settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the capabilities matrix and context window chart
    Render {
        /// CSV file with one row per model
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List each header with the role it is classified as
    Inspect {
        file: PathBuf,
    },
    /// Write normalized display values as CSV
    Export {
        file: PathBuf,
    },
}

/// Run a parsed command and return what should be printed
pub fn execute(cli: &Cli) -> Result<String> {
    let mut service = ConfigService::new();
    if let Some(path) = &cli.config {
        service = service.with_file(path);
    }

    match &cli.command {
        Commands::Render { file, format } => {
            let normalizer = MatrixNormalizer::new(service.load()?);
            let outcome = normalizer.normalize_data(&MatrixLoader::load(file))?;
            render(&outcome, *format)
        }
        Commands::Inspect { file } => {
            let data = MatrixLoader::load(file);
            if data.headers.is_empty() {
                return Ok(NO_DATA_MESSAGE.to_string());
            }

            let headers = data.headers.as_slice();
            let report = ColumnClassifier::new(headers).report(headers);
            Ok(format!("{}\n\n{} records", report, data.records.len()))
        }
        Commands::Export { file } => {
            let normalizer = MatrixNormalizer::new(service.load()?);
            match normalizer.normalize_data(&MatrixLoader::load(file))? {
                MatrixOutcome::Matrix(matrix) => CsvExporter::new().export_matrix(&matrix),
                MatrixOutcome::MissingInput { .. } => Err(AppError::ValidationError(
                    "No data available to export".to_string(),
                )),
            }
        }
    }
}
