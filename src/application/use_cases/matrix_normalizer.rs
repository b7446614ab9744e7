// ============================================================
// MATRIX NORMALIZER USE CASE
// ============================================================
// Classify columns and derive comparable values for every cell

use crate::domain::error::{AppError, Result};
use crate::domain::matrix::{
    cell, Category, ChartBar, ChartWidth, ColumnHeader, ColumnRole, LoadedData, Magnitude,
    MagnitudeChart, MatrixOutcome, NormalizedCell, NormalizedMatrix, NormalizedRow, Record,
    VisualizationConfig,
};
use crate::infrastructure::csv::ColumnClassifier;

/// Normalization pass over headers and records
pub struct MatrixNormalizer {
    config: VisualizationConfig,
}

/// Header positions looked up once per pass
struct ColumnIndex<'a> {
    identity: Option<&'a str>,
    category_type: Option<&'a str>,
    magnitude: Option<&'a str>,
}

impl MatrixNormalizer {
    /// Create a new normalizer
    pub fn new(config: VisualizationConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn default_config() -> Self {
        Self::new(VisualizationConfig::default())
    }

    /// Normalize loaded data, carrying its error flag through
    pub fn normalize_data(&self, data: &LoadedData) -> Result<MatrixOutcome> {
        self.normalize(&data.headers, &data.records, data.has_data_error)
    }

    /// Normalize `records` against `headers`.
    ///
    /// Empty headers or records are not an error: the outcome is
    /// `MissingInput` so a renderer can show a placeholder.
    pub fn normalize(
        &self,
        headers: &[String],
        records: &[Record],
        has_data_error: bool,
    ) -> Result<MatrixOutcome> {
        self.config.validate().map_err(|e| {
            AppError::ValidationError(format!("Invalid visualization config: {}", e))
        })?;

        if headers.is_empty() || records.is_empty() {
            tracing::info!(
                headers = headers.len(),
                records = records.len(),
                has_data_error,
                "No data to normalize"
            );
            return Ok(MatrixOutcome::MissingInput { has_data_error });
        }

        if let Some(position) = headers.iter().position(|h| h.trim().is_empty()) {
            return Err(AppError::ValidationError(format!(
                "Header {} is blank",
                position + 1
            )));
        }

        let classifier = ColumnClassifier::new(headers);
        let columns: Vec<ColumnHeader> = headers
            .iter()
            .map(|h| ColumnHeader::new(h, classifier.classify(h)))
            .collect();

        let index = ColumnIndex {
            identity: Self::first_with_role(&columns, ColumnRole::Identity),
            category_type: Self::first_with_role(&columns, ColumnRole::CategoryType),
            magnitude: Self::first_with_role(&columns, ColumnRole::MagnitudeText),
        };

        let rows = records
            .iter()
            .map(|record| self.normalize_row(&columns, &index, record))
            .collect();

        let chart = if self.config.show_magnitude_chart {
            index
                .magnitude
                .map(|column| self.build_chart(column, &index, records))
        } else {
            None
        };

        tracing::debug!(
            columns = columns.len(),
            records = records.len(),
            charted = chart.is_some(),
            "Matrix normalized"
        );

        Ok(MatrixOutcome::Matrix(NormalizedMatrix {
            display_date: self.config.display_date.clone(),
            has_data_error,
            columns,
            rows,
            chart,
        }))
    }

    fn first_with_role(columns: &[ColumnHeader], role: ColumnRole) -> Option<&str> {
        columns
            .iter()
            .find(|c| c.role == role)
            .map(|c| c.name.as_str())
    }

    fn normalize_row(
        &self,
        columns: &[ColumnHeader],
        index: &ColumnIndex<'_>,
        record: &Record,
    ) -> NormalizedRow {
        let cells = columns
            .iter()
            .map(|column| self.normalize_cell(column, index, record))
            .collect();

        NormalizedRow { cells }
    }

    fn normalize_cell(
        &self,
        column: &ColumnHeader,
        index: &ColumnIndex<'_>,
        record: &Record,
    ) -> NormalizedCell {
        let value = cell(record, &column.name);
        let mut normalized = NormalizedCell::plain(column.role, value.to_string());

        match column.role {
            ColumnRole::CapabilityFlag => {
                normalized.capability = Some(value.as_capability());
            }
            ColumnRole::MagnitudeText => {
                let magnitude = Magnitude::extract(&normalized.display_value);
                normalized.tier = Some(magnitude.tier(self.config.thresholds()));
                normalized.magnitude = Some(magnitude.value);
                normalized.display_value = magnitude.display;
            }
            ColumnRole::CategoryType => {
                normalized.category = Some(Category::from_type_text(&normalized.display_value));
            }
            ColumnRole::Organization => {
                // Owners are colored by the model type of the same record
                normalized.category = index
                    .category_type
                    .map(|h| Category::from_type_text(&cell(record, h).to_string()));
            }
            ColumnRole::Identity | ColumnRole::Plain => {}
        }

        normalized
    }

    fn build_chart(
        &self,
        column: &str,
        index: &ColumnIndex<'_>,
        records: &[Record],
    ) -> MagnitudeChart {
        let magnitudes: Vec<Magnitude> = records
            .iter()
            .map(|record| Magnitude::extract(&cell(record, column).to_string()))
            .collect();

        let max_magnitude = magnitudes.iter().map(|m| m.value).max().unwrap_or(0);

        let bars = records
            .iter()
            .zip(magnitudes)
            .map(|(record, magnitude)| {
                let height_percent = if max_magnitude == 0 {
                    0.0
                } else {
                    magnitude.value as f64 / max_magnitude as f64 * 100.0
                };

                ChartBar {
                    label: index
                        .identity
                        .map(|h| cell(record, h).to_string())
                        .unwrap_or_default(),
                    display: magnitude.display,
                    magnitude: magnitude.value,
                    height_percent,
                    category: index
                        .category_type
                        .map(|h| Category::from_type_text(&cell(record, h).to_string()))
                        .unwrap_or(Category::Other),
                }
            })
            .collect();

        let items_per_row = self.config.items_per_row.min(records.len());

        MagnitudeChart {
            column: column.to_string(),
            max_magnitude,
            items_per_row,
            width: ChartWidth::for_items_per_row(items_per_row),
            bars,
        }
    }
}

impl Default for MatrixNormalizer {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matrix::{CellValue, Tier};

    fn record(values: &[(&str, &str)]) -> Record {
        values
            .iter()
            .map(|(k, v)| (k.to_string(), CellValue::from(*v)))
            .collect()
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn matrix(outcome: MatrixOutcome) -> NormalizedMatrix {
        match outcome {
            MatrixOutcome::Matrix(matrix) => matrix,
            other => panic!("expected a matrix, got {:?}", other),
        }
    }

    #[test]
    fn test_end_to_end_single_record() {
        let headers = headers(&[
            "Owner",
            "Best Available Model",
            "Reasoning",
            "Read Docs (Context/RAG)",
        ]);
        let records = vec![record(&[
            ("Owner", "OpenAI"),
            ("Best Available Model", "GPT-4.1"),
            ("Reasoning", "Strong"),
            ("Read Docs (Context/RAG)", "Yes (Excellent - 1M tokens)"),
        ])];

        let matrix = matrix(
            MatrixNormalizer::default()
                .normalize(&headers, &records, false)
                .unwrap(),
        );

        let cells = &matrix.rows[0].cells;
        assert_eq!(cells[0].role, ColumnRole::Organization);
        assert_eq!(cells[0].display_value, "OpenAI");
        assert_eq!(cells[0].category, None);
        assert_eq!(cells[1].role, ColumnRole::Identity);
        assert_eq!(cells[2].role, ColumnRole::CapabilityFlag);
        assert_eq!(cells[2].capability, Some(false));

        let docs = &cells[3];
        assert_eq!(docs.role, ColumnRole::MagnitudeText);
        assert_eq!(docs.display_value, "1M");
        assert_eq!(docs.magnitude, Some(1000));
        assert_eq!(docs.tier, Some(Tier::High));
    }

    #[test]
    fn test_empty_input_is_missing_input() {
        let normalizer = MatrixNormalizer::default();

        let outcome = normalizer.normalize(&[], &[], true).unwrap();
        assert_eq!(outcome, MatrixOutcome::MissingInput { has_data_error: true });

        let outcome = normalizer
            .normalize(&headers(&["Owner"]), &[], false)
            .unwrap();
        assert_eq!(outcome, MatrixOutcome::MissingInput { has_data_error: false });
    }

    #[test]
    fn test_blank_header_is_rejected() {
        let records = vec![record(&[("Owner", "OpenAI")])];
        let result = MatrixNormalizer::default().normalize(&headers(&["Owner", "  "]), &records, false);

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = VisualizationConfig {
            items_per_row: 0,
            ..Default::default()
        };
        let result = MatrixNormalizer::new(config).normalize(&[], &[], false);

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_owner_takes_category_from_type_column() {
        let headers = headers(&["Owner", "Commercial / Open Source", "Model"]);
        let records = vec![
            record(&[
                ("Owner", "Meta AI"),
                ("Commercial / Open Source", "Open Source"),
                ("Model", "Llama 4"),
            ]),
            record(&[
                ("Owner", "Anthropic"),
                ("Commercial / Open Source", "Commercial"),
                ("Model", "Claude 3.7 Sonnet"),
            ]),
        ];

        let matrix = matrix(
            MatrixNormalizer::default()
                .normalize(&headers, &records, false)
                .unwrap(),
        );

        assert_eq!(matrix.rows[0].cells[0].category, Some(Category::OpenSource));
        assert_eq!(matrix.rows[0].cells[1].category, Some(Category::OpenSource));
        assert_eq!(matrix.rows[1].cells[0].category, Some(Category::Commercial));
        assert!(matrix.chart.is_none());
    }

    #[test]
    fn test_absent_fields_are_empty() {
        let headers = headers(&["Model", "Read Docs", "See Video"]);
        let records = vec![record(&[("Model", "Command A")])];

        let matrix = matrix(
            MatrixNormalizer::default()
                .normalize(&headers, &records, false)
                .unwrap(),
        );

        let cells = &matrix.rows[0].cells;
        assert_eq!(cells[1].display_value, "0K");
        assert_eq!(cells[1].tier, Some(Tier::Low));
        assert_eq!(cells[2].display_value, "");
        assert_eq!(cells[2].capability, Some(false));
    }

    #[test]
    fn test_native_boolean_capability() {
        let headers = headers(&["Model", "Code Execution"]);
        let mut record = record(&[("Model", "Grok-3")]);
        record.insert("Code Execution".to_string(), CellValue::Bool(true));

        let matrix = matrix(
            MatrixNormalizer::default()
                .normalize(&headers, &[record], false)
                .unwrap(),
        );

        assert_eq!(matrix.rows[0].cells[1].capability, Some(true));
    }

    #[test]
    fn test_chart_scales_to_largest_magnitude() {
        let headers = headers(&["Best Available Model", "Model Type", "Read Docs (Context/RAG)"]);
        let records = vec![
            record(&[
                ("Best Available Model", "Gemini 2.0"),
                ("Read Docs (Context/RAG)", "Yes (Excellent - 2M tokens)"),
            ]),
            record(&[
                ("Best Available Model", "Grok-3"),
                ("Read Docs (Context/RAG)", "Yes (Good - 131K)"),
            ]),
            record(&[("Best Available Model", "Command A"), ("Read Docs (Context/RAG)", "No")]),
        ];

        let matrix = matrix(
            MatrixNormalizer::default()
                .normalize(&headers, &records, false)
                .unwrap(),
        );

        let chart = matrix.chart.expect("chart enabled by default");
        assert_eq!(chart.column, "Read Docs (Context/RAG)");
        assert_eq!(chart.max_magnitude, 2000);
        assert_eq!(chart.items_per_row, 3);
        assert_eq!(chart.width, ChartWidth::Quarter);
        assert_eq!(chart.bars[0].label, "Gemini 2.0");
        assert_eq!(chart.bars[0].height_percent, 100.0);
        assert!((chart.bars[1].height_percent - 6.55).abs() < 0.01);
        assert_eq!(chart.bars[2].height_percent, 0.0);
        assert_eq!(chart.bars[2].display, "0K");
        assert_eq!(chart.bars[0].category, Category::Other);
    }

    #[test]
    fn test_chart_disabled_by_config() {
        let config = VisualizationConfig {
            show_magnitude_chart: false,
            ..Default::default()
        };
        let headers = headers(&["Model", "Read Docs"]);
        let records = vec![record(&[("Model", "Jamba"), ("Read Docs", "256K")])];

        let matrix = matrix(
            MatrixNormalizer::new(config)
                .normalize(&headers, &records, false)
                .unwrap(),
        );

        assert!(matrix.chart.is_none());
        assert_eq!(matrix.rows[0].cells[1].magnitude, Some(256));
    }

    #[test]
    fn test_all_zero_magnitudes_do_not_divide_by_zero() {
        let headers = headers(&["Model", "Context Window"]);
        let records = vec![record(&[("Model", "a"), ("Context Window", "n/a")])];

        let matrix = matrix(
            MatrixNormalizer::default()
                .normalize(&headers, &records, false)
                .unwrap(),
        );

        let chart = matrix.chart.unwrap();
        assert_eq!(chart.max_magnitude, 0);
        assert_eq!(chart.bars[0].height_percent, 0.0);
    }

    #[test]
    fn test_thresholds_come_from_config() {
        let config = VisualizationConfig {
            high_threshold: 1000,
            medium_threshold: 200,
            ..Default::default()
        };
        let headers = headers(&["Model", "Read Docs"]);
        let records = vec![record(&[("Model", "Cohere"), ("Read Docs", "256K")])];

        let matrix = matrix(
            MatrixNormalizer::new(config)
                .normalize(&headers, &records, false)
                .unwrap(),
        );

        assert_eq!(matrix.rows[0].cells[1].tier, Some(Tier::Medium));
    }
}
