// ============================================================
// CATEGORY
// ============================================================
// Label derived from the text of a model-type column

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Commercial,
    OpenSource,
    Api,
    Other,
}

impl Category {
    /// Ordered substring checks, first match wins
    pub fn from_type_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("commercial") {
            Category::Commercial
        } else if lower.contains("open source") {
            Category::OpenSource
        } else if lower.contains("api") {
            Category::Api
        } else {
            Category::Other
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Commercial => write!(f, "commercial"),
            Category::OpenSource => write!(f, "open source"),
            Category::Api => write!(f, "api"),
            Category::Other => write!(f, "other"),
        }
    }
}
