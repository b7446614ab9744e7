// ============================================================
// CSV PARSER
// ============================================================
// Parse CSV files into typed records with encoding fallback

use csv::{ReaderBuilder, StringRecord, Trim};
use encoding_rs::WINDOWS_1252;
use std::path::Path;

use crate::domain::error::{AppError, Result};
use crate::domain::matrix::{CellValue, LoadedData, Record};

/// Delimiters tried by auto-detection, in tie-break order
const DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Lines sampled for delimiter detection
const DETECTION_SAMPLE_LINES: usize = 10;

/// CSV parser producing header-keyed records.
/// Headers and values are always trimmed.
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse a CSV file
    pub fn parse_file(&self, path: &Path) -> Result<LoadedData> {
        let content = Self::read_with_encoding_detection(path)?;
        self.parse_content(&content)
    }

    /// Parse CSV content from string.
    ///
    /// Empty headers at the end of the header line (a trailing delimiter)
    /// are dropped together with their cells.
    pub fn parse_content(&self, content: &str) -> Result<LoadedData> {
        let content = content.trim_start_matches('\u{feff}');

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let mut headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let width = headers.len();
        while headers.last().is_some_and(|h| h.is_empty()) {
            headers.pop();
        }
        if headers.len() < width {
            tracing::warn!(
                dropped = width - headers.len(),
                "Dropped empty trailing header columns"
            );
        }

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            // Whitespace-only lines
            if record.iter().all(|value| value.trim().is_empty()) {
                continue;
            }

            records.push(Self::parse_record(&headers, &record));
        }

        Ok(LoadedData::new(headers, records))
    }

    /// Parse in-memory CSV text with automatic delimiter detection
    pub fn parse_content_auto_detect(content: &str) -> Result<LoadedData> {
        Self::default()
            .with_delimiter(Self::detect_delimiter(content))
            .parse_content(content)
    }

    /// Parse CSV file with automatic delimiter detection
    pub fn parse_file_auto_detect(path: &Path) -> Result<LoadedData> {
        let content = Self::read_with_encoding_detection(path)?;
        Self::parse_content_auto_detect(&content)
    }

    /// Read file as UTF-8, falling back to Windows-1252
    fn read_with_encoding_detection(path: &Path) -> Result<String> {
        let buffer = std::fs::read(path).map_err(|e| {
            AppError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        match String::from_utf8(buffer) {
            Ok(content) => Ok(content),
            Err(err) => {
                let bytes = err.into_bytes();
                let (decoded, _, _) = WINDOWS_1252.decode(&bytes);
                Ok(decoded.into_owned())
            }
        }
    }

    /// Map a row onto the headers; missing trailing cells become empty text
    fn parse_record(headers: &[String], record: &StringRecord) -> Record {
        headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = record.get(idx).map(CellValue::from_raw).unwrap_or_else(|| {
                    CellValue::Text(String::new())
                });
                (header.clone(), value)
            })
            .collect()
    }

    /// Pick the delimiter that appears most often and most evenly across
    /// the first lines. Falls back to a comma when none appears.
    pub fn detect_delimiter(content: &str) -> u8 {
        let sample: Vec<&str> = content.lines().take(DETECTION_SAMPLE_LINES).collect();

        DELIMITER_CANDIDATES
            .iter()
            .map(|&delimiter| (delimiter, Self::delimiter_score(&sample, delimiter)))
            .filter(|(_, score)| *score > 0.0)
            .fold(None, |best: Option<(u8, f32)>, candidate| match best {
                Some(current) if current.1 >= candidate.1 => Some(current),
                _ => Some(candidate),
            })
            .map_or(b',', |(delimiter, _)| delimiter)
    }

    /// Mean occurrences per line, penalized by their spread
    fn delimiter_score(sample: &[&str], delimiter: u8) -> f32 {
        if sample.is_empty() {
            return 0.0;
        }

        let counts: Vec<f32> = sample
            .iter()
            .map(|line| line.bytes().filter(|&b| b == delimiter).count() as f32)
            .collect();
        let lines = counts.len() as f32;
        let mean = counts.iter().sum::<f32>() / lines;
        let spread = (counts.iter().map(|c| (c - mean).powi(2)).sum::<f32>() / lines).sqrt();

        mean / (1.0 + spread)
    }
}
