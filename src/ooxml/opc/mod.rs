//! Open Packaging Conventions (OPC) support for writing packages.
//!
//! - Relationship parts (`rel`)
//! - Content type management and the ZIP container (`pkgwriter`)
//! - Well-known content types and relationship types (`constants`)

pub mod constants;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use pkgwriter::{CONTENT_TYPES_URI, PACKAGE_URI, PackageWriter};
pub use rel::{Relationship, Relationships};
