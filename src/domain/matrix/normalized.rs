// ============================================================
// NORMALIZED MATRIX TYPES
// ============================================================
// Output of a normalization pass, ready for a renderer

use serde::{Deserialize, Serialize};

use super::{Category, ColumnRole, Tier};

/// A header with its role and the lines it is displayed on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnHeader {
    pub name: String,
    pub role: ColumnRole,
    pub lines: Vec<String>,
}

impl ColumnHeader {
    pub fn new(name: &str, role: ColumnRole) -> Self {
        let lines = name.split('/').map(|part| part.trim().to_string()).collect();
        Self {
            name: name.to_string(),
            role,
            lines,
        }
    }
}

/// One field of one record after normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCell {
    pub role: ColumnRole,
    pub display_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl NormalizedCell {
    pub fn plain(role: ColumnRole, display_value: String) -> Self {
        Self {
            role,
            display_value,
            capability: None,
            magnitude: None,
            tier: None,
            category: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRow {
    pub cells: Vec<NormalizedCell>,
}

/// Width of one bar slot, derived from bars per row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartWidth {
    Quarter,
    Sixth,
    Eighth,
}

impl ChartWidth {
    pub fn for_items_per_row(items_per_row: usize) -> Self {
        if items_per_row <= 4 {
            ChartWidth::Quarter
        } else if items_per_row <= 6 {
            ChartWidth::Sixth
        } else {
            ChartWidth::Eighth
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub label: String,
    pub display: String,
    pub magnitude: u64,
    pub height_percent: f64,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeChart {
    /// Header of the column the bars are read from
    pub column: String,
    pub max_magnitude: u64,
    pub items_per_row: usize,
    pub width: ChartWidth,
    pub bars: Vec<ChartBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMatrix {
    pub display_date: String,
    pub has_data_error: bool,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<NormalizedRow>,
    pub chart: Option<MagnitudeChart>,
}

/// Result of a normalization pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MatrixOutcome {
    /// No headers or no records; the renderer shows a placeholder
    MissingInput { has_data_error: bool },

    Matrix(NormalizedMatrix),
}

impl MatrixOutcome {
    pub fn has_data_error(&self) -> bool {
        match self {
            MatrixOutcome::MissingInput { has_data_error } => *has_data_error,
            MatrixOutcome::Matrix(matrix) => matrix.has_data_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lines_split_on_slash() {
        let header = ColumnHeader::new("Read Docs (Context/RAG)", ColumnRole::MagnitudeText);
        assert_eq!(header.lines, vec!["Read Docs (Context", "RAG)"]);

        let header = ColumnHeader::new("Live Mode / Web Access", ColumnRole::Plain);
        assert_eq!(header.lines, vec!["Live Mode", "Web Access"]);
    }

    #[test]
    fn test_chart_width() {
        assert_eq!(ChartWidth::for_items_per_row(3), ChartWidth::Quarter);
        assert_eq!(ChartWidth::for_items_per_row(6), ChartWidth::Sixth);
        assert_eq!(ChartWidth::for_items_per_row(8), ChartWidth::Eighth);
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = MatrixOutcome::MissingInput { has_data_error: true };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "missingInput");
        assert_eq!(json["has_data_error"], true);
    }
}
