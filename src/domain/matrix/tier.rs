// ============================================================
// TIER
// ============================================================
// Coarse high/medium/low bucket used for color coding

use serde::{Deserialize, Serialize};

/// Threshold pair in thousand-token units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub high: u64,
    pub medium: u64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: 100,
            medium: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn classify(magnitude: u64, thresholds: TierThresholds) -> Self {
        if magnitude >= thresholds.high {
            Tier::High
        } else if magnitude >= thresholds.medium {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    /// Single-character marker for terminal output
    pub fn marker(&self) -> &'static str {
        match self {
            Tier::High => "+",
            Tier::Medium => "~",
            Tier::Low => "-",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::High => write!(f, "high"),
            Tier::Medium => write!(f, "medium"),
            Tier::Low => write!(f, "low"),
        }
    }
}
