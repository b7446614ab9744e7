// ============================================================
// LOADED DATA
// ============================================================
// Headers and records handed over by the data-loading side

use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadedData {
    /// Trimmed headers in file order
    pub headers: Vec<String>,

    pub records: Vec<Record>,

    /// Set when loading failed and the data was replaced by an empty set
    pub has_data_error: bool,
}

impl LoadedData {
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        Self {
            headers,
            records,
            has_data_error: false,
        }
    }

    /// Empty data flagged as a load failure
    pub fn failed() -> Self {
        Self {
            headers: Vec::new(),
            records: Vec::new(),
            has_data_error: true,
        }
    }
}
