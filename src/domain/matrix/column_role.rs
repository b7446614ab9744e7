// ============================================================
// COLUMN ROLE ENUM
// ============================================================
// Semantic role of a column, derived from its header text only

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnRole {
    /// Names the entity being compared (the model)
    Identity,

    /// Owning organization
    Organization,

    /// Commercial / open source style type column
    CategoryType,

    /// Yes/no capability rendered as a check mark
    CapabilityFlag,

    /// Free text carrying a size such as "1M tokens"
    MagnitudeText,

    /// Anything else, displayed as-is
    Plain,
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnRole::Identity => write!(f, "identity"),
            ColumnRole::Organization => write!(f, "organization"),
            ColumnRole::CategoryType => write!(f, "categoryType"),
            ColumnRole::CapabilityFlag => write!(f, "capabilityFlag"),
            ColumnRole::MagnitudeText => write!(f, "magnitudeText"),
            ColumnRole::Plain => write!(f, "plain"),
        }
    }
}
