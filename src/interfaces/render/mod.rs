//! Output renderers for a normalization outcome
//!
//! - `text`: aligned table plus bar chart for the terminal
//! - `json`: the raw outcome for another rendering layer

mod text;

pub use text::{TextRenderer, DATA_ERROR_MESSAGE, NO_DATA_MESSAGE};

use clap::ValueEnum;

use crate::domain::error::{AppError, Result};
use crate::domain::matrix::MatrixOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render(outcome: &MatrixOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(TextRenderer::render(outcome)),
        OutputFormat::Json => serde_json::to_string_pretty(outcome)
            .map_err(|e| AppError::Internal(format!("Failed to serialize outcome: {}", e))),
    }
}
