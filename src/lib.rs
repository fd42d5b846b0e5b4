//! pptx-fixtures - a generator for a fixed corpus of PowerPoint test files
//!
//! The crate writes seven small `.pptx` presentations that exercise
//! preset shapes, run-level text formatting, gradient fills, tables and
//! multi-slide navigation. The files are meant to be checked in as test
//! fixtures for presentation readers and renderers.
//!
//! # Layout
//!
//! - [`ooxml::opc`]: relationships, content types and the ZIP container
//! - [`ooxml::pptx`]: the mutable slide model and its XML serialization,
//!   plus a structural reader (feature `reader`, on by default)
//! - [`fixtures`]: the seven recipes and the driver that writes them
//!
//! # Example - Generating the corpus
//!
//! ```no_run
//! use pptx_fixtures::fixtures;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let written = fixtures::generate_all("target/fixtures")?;
//! assert_eq!(written.len(), 7);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building one presentation
//!
//! ```no_run
//! use pptx_fixtures::common::{RGBColor, inches};
//! use pptx_fixtures::ooxml::pptx::{Alignment, BoundingBox, MutablePresentation};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pres = MutablePresentation::new();
//! let title = pres
//!     .add_slide()
//!     .add_text_box(BoundingBox::new(inches(0.5), inches(0.3), inches(9.0), inches(0.8))?);
//! let p = title.text_frame_mut().first_paragraph();
//! p.set_alignment(Alignment::Center);
//! p.add_run("Hello").font_mut().size(36.0).bold(true).color(RGBColor::BLACK);
//! pres.save("hello.pptx")?;
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod fixtures;
pub mod ooxml;

pub use common::{Error, Result};
