// ============================================================
// CELL VALUE
// ============================================================
// Raw heterogeneous value of one field in a comparison record

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One record of the comparison table, keyed by column header
pub type Record = HashMap<String, CellValue>;

static EMPTY_CELL: CellValue = CellValue::Text(String::new());

/// Raw value of a single field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Build a typed value from raw CSV text.
    /// `true`/`false` become booleans, finite numbers become numbers,
    /// everything else stays text.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();

        if trimmed.eq_ignore_ascii_case("true") {
            return CellValue::Bool(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return CellValue::Bool(false);
        }

        if !trimmed.is_empty() {
            if let Ok(number) = trimmed.parse::<f64>() {
                if number.is_finite() {
                    return CellValue::Number(number);
                }
            }
        }

        CellValue::Text(raw.to_string())
    }

    /// Interpret this value as a capability flag.
    ///
    /// Booleans pass through. Text is matched leniently against a fixed
    /// vocabulary of truthy markers. Numbers are never truthy.
    pub fn as_capability(&self) -> bool {
        match self {
            CellValue::Bool(value) => *value,
            CellValue::Number(_) => false,
            CellValue::Text(text) => {
                let lower = text.to_lowercase();
                lower == "yes"
                    || lower == "true"
                    || lower.contains("yes")
                    || lower.contains('✓')
                    || lower.contains("advanced")
                    || lower.contains("excellent")
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Bool(value) => write!(f, "{}", value),
            CellValue::Number(value) => write!(f, "{}", value),
            CellValue::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// Look up a field, treating absent fields as empty text
pub fn cell<'a>(record: &'a Record, header: &str) -> &'a CellValue {
    record.get(header).unwrap_or(&EMPTY_CELL)
}
