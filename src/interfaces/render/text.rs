// ============================================================
// TEXT RENDERER
// ============================================================
// Terminal rendering of the capabilities matrix and bar chart

use crate::domain::matrix::{
    Category, ColumnRole, MagnitudeChart, MatrixOutcome, NormalizedCell, NormalizedMatrix,
};

const BAR_WIDTH: usize = 40;
const COMMERCIAL_BAR: char = '█';
const OTHER_BAR: char = '▒';

pub const NO_DATA_MESSAGE: &str = "No data available";
pub const DATA_ERROR_MESSAGE: &str =
    "There was an issue loading the data. Some features may be unavailable.";

pub struct TextRenderer;

impl TextRenderer {
    pub fn render(outcome: &MatrixOutcome) -> String {
        let mut out = String::new();

        if outcome.has_data_error() {
            out.push_str(&format!("! {}\n\n", DATA_ERROR_MESSAGE));
        }

        match outcome {
            MatrixOutcome::MissingInput { .. } => {
                out.push_str(NO_DATA_MESSAGE);
                out.push('\n');
            }
            MatrixOutcome::Matrix(matrix) => Self::render_matrix(matrix, &mut out),
        }

        out
    }

    fn render_matrix(matrix: &NormalizedMatrix, out: &mut String) {
        out.push_str(&format!("LLMs Comparison ({})\n\n", matrix.display_date));
        out.push_str("LLMs Capabilities Comparison\n");
        out.push_str(&Self::render_table(matrix));

        if let Some(chart) = &matrix.chart {
            out.push('\n');
            out.push_str(&Self::render_chart(chart));
        }

        out.push_str(&format!(
            "\nNote: This visualization is generated from the LLM comparison data as of {}.\n",
            matrix.display_date
        ));
    }

    fn cell_text(cell: &NormalizedCell) -> String {
        match cell.role {
            ColumnRole::CapabilityFlag => {
                if cell.capability.unwrap_or(false) {
                    "✓".to_string()
                } else {
                    "✗".to_string()
                }
            }
            ColumnRole::MagnitudeText => match cell.tier {
                Some(tier) => format!("{} {}", cell.display_value, tier.marker()),
                None => cell.display_value.clone(),
            },
            _ => cell.display_value.clone(),
        }
    }

    fn render_table(matrix: &NormalizedMatrix) -> String {
        let body: Vec<Vec<String>> = matrix
            .rows
            .iter()
            .map(|row| row.cells.iter().map(Self::cell_text).collect())
            .collect();

        let header_height = matrix.columns.iter().map(|c| c.lines.len()).max().unwrap_or(1);

        let widths: Vec<usize> = matrix
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let header_width = column.lines.iter().map(|l| width(l)).max().unwrap_or(0);
                let body_width = body
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|v| width(v))
                    .max()
                    .unwrap_or(0);
                header_width.max(body_width)
            })
            .collect();

        let mut lines = Vec::new();
        for line_idx in 0..header_height {
            let parts: Vec<String> = matrix
                .columns
                .iter()
                .zip(&widths)
                .map(|(column, w)| pad(column.lines.get(line_idx).map_or("", |s| s.as_str()), *w))
                .collect();
            lines.push(format!("| {} |", parts.join(" | ")));
        }

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        lines.push(format!("|-{}-|", rule.join("-|-")));

        for row in &body {
            let parts: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(value, w)| pad(value, *w))
                .collect();
            lines.push(format!("| {} |", parts.join(" | ")));
        }

        let mut table = lines.join("\n");
        table.push('\n');
        table
    }

    fn render_chart(chart: &MagnitudeChart) -> String {
        let label_width = chart.bars.iter().map(|b| width(&b.label)).max().unwrap_or(0);

        let mut out = format!("Context Window Size Comparison ({})\n", chart.column);

        for (idx, bar) in chart.bars.iter().enumerate() {
            if idx > 0 && chart.items_per_row > 0 && idx % chart.items_per_row == 0 {
                out.push('\n');
            }

            let mut filled = (bar.height_percent / 100.0 * BAR_WIDTH as f64).round() as usize;
            if bar.magnitude > 0 && filled == 0 {
                filled = 1;
            }
            let fill = match bar.category {
                Category::Commercial => COMMERCIAL_BAR,
                _ => OTHER_BAR,
            };

            out.push_str(&format!(
                "{} {} {}\n",
                pad(&bar.label, label_width),
                fill.to_string().repeat(filled.min(BAR_WIDTH)),
                bar.display
            ));
        }

        out.push_str(&format!(
            "{} commercial  {} other\n",
            COMMERCIAL_BAR, OTHER_BAR
        ));
        out
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, target: usize) -> String {
    let mut padded = text.to_string();
    padded.push_str(&" ".repeat(target.saturating_sub(width(text))));
    padded
}
