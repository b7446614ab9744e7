pub mod error;

// Capability matrix module
pub mod matrix;
