// ============================================================
// CSV EXPORTER
// ============================================================
// Write headers and rows back out as CSV text

use csv::WriterBuilder;

use crate::domain::error::{AppError, Result};
use crate::domain::matrix::NormalizedMatrix;

/// CSV writer for tables and normalized matrices
pub struct CsvExporter {
    delimiter: u8,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write a header row followed by `rows`.
    ///
    /// Rows with a different width than the header are still written.
    pub fn write<S: AsRef<str>>(&self, headers: &[S], rows: &[Vec<String>]) -> Result<String> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                tracing::warn!(
                    row = i + 1,
                    columns = row.len(),
                    expected = headers.len(),
                    "Row width does not match header count"
                );
            }
        }

        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_writer(Vec::new());

        writer.write_record(headers.iter().map(|h| h.as_ref()))?;
        for row in rows {
            writer.write_record(row)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::IoError(format!("Failed to flush CSV writer: {}", e)))?;

        String::from_utf8(bytes)
            .map_err(|e| AppError::Internal(format!("CSV output is not UTF-8: {}", e)))
    }

    /// Write the display values of a normalized matrix
    pub fn export_matrix(&self, matrix: &NormalizedMatrix) -> Result<String> {
        let headers: Vec<&str> = matrix.columns.iter().map(|c| c.name.as_str()).collect();
        let rows: Vec<Vec<String>> = matrix
            .rows
            .iter()
            .map(|row| row.cells.iter().map(|c| c.display_value.clone()).collect())
            .collect();

        self.write(headers.as_slice(), &rows)
    }
}
