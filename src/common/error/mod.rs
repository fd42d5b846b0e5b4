//! Unified error types for the fixture generator.
//!
//! Format-layer failures (`OoxmlError`) are folded into a single crate-level
//! error so the driver can report any failure the same way.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
