//! XML helpers.

mod escape;

pub use escape::{escape_xml, unescape_xml};
