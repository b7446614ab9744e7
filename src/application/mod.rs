pub mod use_cases;

pub use use_cases::matrix_loader::MatrixLoader;
pub use use_cases::matrix_normalizer::MatrixNormalizer;
