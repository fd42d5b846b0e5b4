//! Mutable presentation writer components for PPTX.

pub mod pres;
pub mod shape;
pub mod slide;
pub mod table;
pub mod text;

// Re-export main types
pub use pres::MutablePresentation;
pub use shape::{AutoShape, MutableShape, TextBox};
pub use slide::MutableSlide;
pub use table::{Cell, Table};
pub use text::{Paragraph, Run, TextFrame};

use crate::common::RGBColor;
use crate::ooxml::pptx::format::{BoundingBox, Fill, LinearGradient};

/// Append an integer without going through `fmt`.
#[inline]
pub(crate) fn push_int<I: itoa::Integer>(xml: &mut String, value: I) {
    let mut buffer = itoa::Buffer::new();
    xml.push_str(buffer.format(value));
}

/// `<{prefix}:xfrm>` with offset and extent.
pub(crate) fn write_xfrm(xml: &mut String, prefix: &str, bbox: &BoundingBox) {
    xml.push('<');
    xml.push_str(prefix);
    xml.push_str(r#":xfrm><a:off x=""#);
    push_int(xml, bbox.left);
    xml.push_str(r#"" y=""#);
    push_int(xml, bbox.top);
    xml.push_str(r#""/><a:ext cx=""#);
    push_int(xml, bbox.width);
    xml.push_str(r#"" cy=""#);
    push_int(xml, bbox.height);
    xml.push_str(r#""/></"#);
    xml.push_str(prefix);
    xml.push_str(":xfrm>");
}

pub(crate) fn write_srgb(xml: &mut String, color: RGBColor) {
    xml.push_str(r#"<a:srgbClr val=""#);
    xml.push_str(&color.to_hex());
    xml.push_str(r#""/>"#);
}

pub(crate) fn write_solid_fill(xml: &mut String, color: RGBColor) {
    xml.push_str("<a:solidFill>");
    write_srgb(xml, color);
    xml.push_str("</a:solidFill>");
}

pub(crate) fn write_gradient_fill(xml: &mut String, gradient: &LinearGradient) {
    xml.push_str(r#"<a:gradFill rotWithShape="1"><a:gsLst>"#);
    for (pos, color) in gradient.stops() {
        xml.push_str(r#"<a:gs pos=""#);
        push_int(xml, pos);
        xml.push_str(r#"">"#);
        write_srgb(xml, color);
        xml.push_str("</a:gs>");
    }
    xml.push_str(r#"</a:gsLst><a:lin ang=""#);
    push_int(xml, gradient.drawingml_angle());
    xml.push_str(r#"" scaled="0"/></a:gradFill>"#);
}

pub(crate) fn write_fill(xml: &mut String, fill: &Fill) {
    match fill {
        Fill::Solid(color) => write_solid_fill(xml, *color),
        Fill::Gradient(gradient) => write_gradient_fill(xml, gradient),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xfrm() {
        let mut xml = String::new();
        write_xfrm(&mut xml, "a", &BoundingBox::new(1, 2, 3, 4).unwrap());
        assert_eq!(
            xml,
            r#"<a:xfrm><a:off x="1" y="2"/><a:ext cx="3" cy="4"/></a:xfrm>"#
        );
    }

    #[test]
    fn test_gradient_fill() {
        let mut xml = String::new();
        let gradient = LinearGradient::new(
            90.0,
            RGBColor::new(0x00, 0xFF, 0x00),
            RGBColor::new(0xFF, 0xFF, 0x00),
        );
        write_fill(&mut xml, &Fill::Gradient(gradient));
        assert_eq!(
            xml,
            concat!(
                r#"<a:gradFill rotWithShape="1"><a:gsLst>"#,
                r#"<a:gs pos="0"><a:srgbClr val="00FF00"/></a:gs>"#,
                r#"<a:gs pos="100000"><a:srgbClr val="FFFF00"/></a:gs>"#,
                r#"</a:gsLst><a:lin ang="16200000" scaled="0"/></a:gradFill>"#
            )
        );
    }
}
