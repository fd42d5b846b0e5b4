//! Office Open XML (OOXML) PresentationML support.
//!
//! The module is organized in two layers:
//!
//! 1. **OPC Layer** (`opc`): package structure, relationships, content types
//!    and the ZIP container.
//! 2. **PresentationML** (`pptx`): the in-memory slide model, its XML
//!    serialization and a structural reader for generated packages.
//!
//! # Example
//!
//! ```rust,no_run
//! use pptx_fixtures::common::{RGBColor, inches};
//! use pptx_fixtures::ooxml::pptx::{BoundingBox, Fill, MutablePresentation, ShapeKind};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! let shape = slide.add_shape(
//!     ShapeKind::Rectangle,
//!     BoundingBox::new(inches(0.5), inches(0.5), inches(2.0), inches(1.0))?,
//! );
//! shape.set_fill(Fill::Solid(RGBColor::new(0x41, 0x69, 0xE1)));
//! shape.set_text("Rectangle");
//! pres.save("rectangle.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
