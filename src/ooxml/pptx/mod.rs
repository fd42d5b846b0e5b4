//! PowerPoint (.pptx) presentation support.
//!
//! - [`writer`]: mutable slide model (shapes, text boxes, tables) serialized
//!   to a complete package by [`MutablePresentation::save`].
//! - [`Package`] (feature `reader`): opens a `.pptx` and returns a structural
//!   read model, used to verify what the writer produced.
//!
//! # Example
//!
//! ```rust,ignore
//! use pptx_fixtures::ooxml::pptx::Package;
//!
//! let pres = Package::open("tests/fixtures/multi-slide.pptx")?.presentation()?;
//! for slide in &pres.slides {
//!     println!("{} shapes: {}", slide.shape_count(), slide.text());
//! }
//! ```

pub mod format;
pub mod template;
pub mod writer;

#[cfg(feature = "reader")]
pub mod package;
#[cfg(feature = "reader")]
pub mod presentation;
#[cfg(feature = "reader")]
pub mod slide;

pub use format::{Alignment, BoundingBox, Fill, LinearGradient, ShapeKind, TextFormat};
pub use writer::{
    AutoShape, Cell, MutablePresentation, MutableShape, MutableSlide, Paragraph, Run, Table,
    TextBox, TextFrame,
};

#[cfg(feature = "reader")]
pub use package::Package;
#[cfg(feature = "reader")]
pub use presentation::Presentation;
#[cfg(feature = "reader")]
pub use slide::{CellInfo, FillInfo, ParagraphInfo, RunInfo, ShapeInfo, ShapeInfoKind, Slide};
