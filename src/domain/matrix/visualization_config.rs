// ============================================================
// VISUALIZATION CONFIGURATION
// ============================================================
// Thresholds and chart layout passed explicitly into the normalizer

use serde::{Deserialize, Serialize};

use super::TierThresholds;

/// Configuration for matrix normalization and rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationConfig {
    /// Magnitude at or above which a value is `high` (default: 100, K-units)
    pub high_threshold: u64,

    /// Magnitude at or above which a value is `medium` (default: 20, K-units)
    pub medium_threshold: u64,

    /// Build the magnitude bar chart (default: true)
    pub show_magnitude_chart: bool,

    /// Bars per chart row before wrapping (default: 6)
    pub items_per_row: usize,

    /// Date shown in the title and footnote
    pub display_date: String,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            high_threshold: 100,
            medium_threshold: 20,
            show_magnitude_chart: true,
            items_per_row: 6,
            display_date: chrono::Local::now().format("%B %-d %Y").to_string(),
        }
    }
}

impl VisualizationConfig {
    pub fn thresholds(&self) -> TierThresholds {
        TierThresholds {
            high: self.high_threshold,
            medium: self.medium_threshold,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.medium_threshold > self.high_threshold {
            return Err("medium_threshold must be <= high_threshold".to_string());
        }
        if self.items_per_row == 0 {
            return Err("items_per_row must be > 0".to_string());
        }
        Ok(())
    }
}
