// ============================================================
// MAGNITUDE
// ============================================================
// Context-window sizes pulled out of free text like "Good - 131K"

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Tier, TierThresholds};

static MAGNITUDE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)([KMGkmg])?").unwrap());

/// A size in thousand-token units plus the short form it was read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magnitude {
    /// Scaled value used for comparison (K-equivalent)
    pub value: u64,

    /// Digit run and unit as matched, e.g. "1M" or "131K"
    pub display: String,
}

impl Magnitude {
    pub fn zero() -> Self {
        Self {
            value: 0,
            display: "0K".to_string(),
        }
    }

    /// Extract the first `digits[K|M|G]` occurrence from `text`.
    ///
    /// Only the first match is used, so "128K/200K" reads as 128.
    /// Bare digits are already in the base unit and display with a `K`.
    pub fn extract(text: &str) -> Self {
        let Some(caps) = MAGNITUDE_PATTERN.captures(text) else {
            return Self::zero();
        };

        let digits = &caps[1];
        let unit = caps
            .get(2)
            .map(|m| m.as_str().to_ascii_uppercase())
            .unwrap_or_else(|| "K".to_string());

        let base = digits.parse::<u64>().unwrap_or(u64::MAX);
        let factor = match unit.as_str() {
            "M" => 1_000,
            "G" => 1_000_000,
            _ => 1,
        };

        Self {
            value: base.saturating_mul(factor),
            display: format!("{}{}", digits, unit),
        }
    }

    pub fn tier(&self, thresholds: TierThresholds) -> Tier {
        Tier::classify(self.value, thresholds)
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Self::zero()
    }
}
