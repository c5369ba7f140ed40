//! PyO3 bindings
//!
//! Exposes [`crate::Generator`] to Python as `Generator`.

pub mod generator;

pub use generator::PyGenerator;
