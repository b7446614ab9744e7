pub mod matrix_loader;
pub mod matrix_normalizer;
