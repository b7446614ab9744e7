// ============================================================
// MATRIX LOADER USE CASE
// ============================================================
// Load comparison data from CSV; failures become flagged empty data

use std::path::Path;

use crate::domain::matrix::LoadedData;
use crate::infrastructure::csv::CsvParser;

/// Loads comparison tables without ever failing the caller
pub struct MatrixLoader;

impl MatrixLoader {
    /// Load a CSV file with delimiter auto-detection.
    ///
    /// Any read or parse error is logged and returned as empty data with
    /// `has_data_error` set.
    pub fn load(path: &Path) -> LoadedData {
        match CsvParser::parse_file_auto_detect(path) {
            Ok(data) => {
                tracing::info!(
                    path = %path.display(),
                    headers = data.headers.len(),
                    records = data.records.len(),
                    "Loaded comparison data"
                );
                Self::check_headers(data)
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Error loading comparison data");
                LoadedData::failed()
            }
        }
    }

    /// Load CSV text already in memory
    pub fn load_content(content: &str) -> LoadedData {
        match CsvParser::parse_content_auto_detect(content) {
            Ok(data) => Self::check_headers(data),
            Err(e) => {
                tracing::error!(error = %e, "Error parsing comparison data");
                LoadedData::failed()
            }
        }
    }

    /// A blank header between named ones cannot be keyed; treat it as bad data
    fn check_headers(data: LoadedData) -> LoadedData {
        match data.headers.iter().position(|h| h.is_empty()) {
            Some(position) => {
                tracing::warn!(column = position + 1, "Blank header in comparison data");
                LoadedData::failed()
            }
            None => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matrix::{cell, CellValue};
    use std::io::Write;

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Owner,Best Available Model,Read Docs (Context/RAG)").unwrap();
        writeln!(file, "xAI,Grok-3,Yes (Good - 131K)").unwrap();

        let data = MatrixLoader::load(file.path());

        assert!(!data.has_data_error);
        assert_eq!(data.headers.len(), 3);
        assert_eq!(
            cell(&data.records[0], "Read Docs (Context/RAG)"),
            &CellValue::from("Yes (Good - 131K)")
        );
    }

    #[test]
    fn test_missing_file_sets_error_flag() {
        let data = MatrixLoader::load(Path::new("/nonexistent/llms-data.csv"));

        assert!(data.has_data_error);
        assert!(data.headers.is_empty());
        assert!(data.records.is_empty());
    }

    #[test]
    fn test_header_only_content() {
        let data = MatrixLoader::load_content("Owner;Model\n");

        assert!(!data.has_data_error);
        assert_eq!(data.headers, vec!["Owner", "Model"]);
        assert!(data.records.is_empty());
    }

    #[test]
    fn test_trailing_comma_header_loads() {
        let data = MatrixLoader::load_content(
            "Owner,Best Available Model,Read Docs (Context/RAG),\n\
             OpenAI,GPT-4.1,Yes (Excellent - 1M tokens),\n",
        );

        assert!(!data.has_data_error);
        assert_eq!(data.headers.len(), 3);
        assert_eq!(data.records.len(), 1);
    }

    #[test]
    fn test_interior_blank_header_sets_error_flag() {
        let data = MatrixLoader::load_content("Owner,,Reasoning\nOpenAI,GPT-4.1,Yes\n");

        assert!(data.has_data_error);
        assert!(data.headers.is_empty());
        assert!(data.records.is_empty());
    }
}
