// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV parsing, encoding fallback, column classification, and export

mod column_classifier;
mod csv_parser;
mod csv_writer;

pub use column_classifier::{classify_columns, ColumnClassifier};
pub use csv_parser::CsvParser;
pub use csv_writer::CsvExporter;
