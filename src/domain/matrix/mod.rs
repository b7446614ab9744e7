// ============================================================
// CAPABILITY MATRIX DOMAIN LAYER
// ============================================================
// Core types and value objects for normalizing comparison tables
// No I/O, no external state

mod category;
mod cell_value;
mod column_role;
mod loaded_data;
mod magnitude;
mod normalized;
mod tier;
mod visualization_config;

pub use category::Category;
pub use cell_value::{cell, CellValue, Record};
pub use column_role::ColumnRole;
pub use loaded_data::LoadedData;
pub use magnitude::Magnitude;
pub use normalized::{
    ChartBar, ChartWidth, ColumnHeader, MagnitudeChart, MatrixOutcome, NormalizedCell,
    NormalizedMatrix, NormalizedRow,
};
pub use tier::{Tier, TierThresholds};
pub use visualization_config::VisualizationConfig;
