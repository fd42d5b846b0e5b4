//! Common types and utilities shared by the writer, the reader and the fixtures.

// Submodule declarations
pub mod color;
pub mod error;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use color::RGBColor;
pub use error::{Error, Result};
pub use unit::{Emu, inches};
