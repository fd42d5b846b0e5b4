/// Shape types and implementation for PPTX presentations.
use super::table::Table;
use super::text::{Paragraph, TextFrame};
use super::{push_int, write_fill, write_xfrm};
use crate::common::xml::escape_xml;
use crate::ooxml::pptx::format::{Alignment, BoundingBox, Fill, ShapeKind};

/// Theme style references for autoshapes: accent-1 line, fill and effect,
/// light-1 text on the minor font.
const AUTOSHAPE_STYLE: &str = concat!(
    "<p:style>",
    r#"<a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#,
    r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#,
    r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#,
    r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#,
    "</p:style>"
);

/// An element of a slide's shape tree.
#[derive(Debug, Clone)]
pub enum MutableShape {
    AutoShape(AutoShape),
    TextBox(TextBox),
    Table(Table),
}

impl MutableShape {
    pub fn id(&self) -> u32 {
        match self {
            Self::AutoShape(s) => s.id,
            Self::TextBox(s) => s.id,
            Self::Table(t) => t.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::AutoShape(s) => &s.name,
            Self::TextBox(s) => &s.name,
            Self::Table(t) => t.name(),
        }
    }

    pub fn bbox(&self) -> BoundingBox {
        match self {
            Self::AutoShape(s) => s.bbox,
            Self::TextBox(s) => s.bbox,
            Self::Table(t) => t.bbox(),
        }
    }

    pub(crate) fn write_xml(&self, xml: &mut String) {
        match self {
            Self::AutoShape(s) => s.write_xml(xml),
            Self::TextBox(s) => s.write_xml(xml),
            Self::Table(t) => t.write_xml(xml),
        }
    }
}

/// A preset-geometry shape with optional fill and text.
#[derive(Debug, Clone)]
pub struct AutoShape {
    id: u32,
    name: String,
    kind: ShapeKind,
    bbox: BoundingBox,
    fill: Option<Fill>,
    text_frame: TextFrame,
}

impl AutoShape {
    pub(crate) fn new(id: u32, kind: ShapeKind, bbox: BoundingBox) -> Self {
        let mut paragraph = Paragraph::new();
        paragraph.set_alignment(Alignment::Center);
        Self {
            id,
            name: format!("{} {}", kind.base_name(), id - 1),
            kind,
            bbox,
            fill: None,
            text_frame: TextFrame::with_paragraph(paragraph),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    pub fn fill(&self) -> Option<&Fill> {
        self.fill.as_ref()
    }

    /// Set the fill. Without one the theme's accent fill applies.
    pub fn set_fill(&mut self, fill: Fill) -> &mut Self {
        self.fill = Some(fill);
        self
    }

    /// Replace the shape's text with one plain run.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.text_frame.set_text(text);
        self
    }

    pub fn text_frame(&self) -> &TextFrame {
        &self.text_frame
    }

    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        &mut self.text_frame
    }

    fn write_xml(&self, xml: &mut String) {
        xml.push_str("<p:sp>");
        write_nv_sp_pr(xml, self.id, &self.name, false);
        xml.push_str("<p:spPr>");
        write_xfrm(xml, "a", &self.bbox);
        xml.push_str(r#"<a:prstGeom prst=""#);
        xml.push_str(self.kind.preset());
        xml.push_str(r#""><a:avLst/></a:prstGeom>"#);
        if let Some(fill) = &self.fill {
            write_fill(xml, fill);
        }
        xml.push_str("</p:spPr>");
        xml.push_str(AUTOSHAPE_STYLE);
        self.text_frame
            .write_xml(xml, "p:txBody", r#" rtlCol="0" anchor="ctr""#, false);
        xml.push_str("</p:sp>");
    }
}

/// A borderless, unfilled rectangle that exists to hold text.
#[derive(Debug, Clone)]
pub struct TextBox {
    id: u32,
    name: String,
    bbox: BoundingBox,
    text_frame: TextFrame,
}

impl TextBox {
    pub(crate) fn new(id: u32, bbox: BoundingBox) -> Self {
        let mut text_frame = TextFrame::new();
        text_frame.set_word_wrap(false);
        Self {
            id,
            name: format!("TextBox {}", id - 1),
            bbox,
            text_frame,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    pub fn text_frame(&self) -> &TextFrame {
        &self.text_frame
    }

    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        &mut self.text_frame
    }

    fn write_xml(&self, xml: &mut String) {
        xml.push_str("<p:sp>");
        write_nv_sp_pr(xml, self.id, &self.name, true);
        xml.push_str("<p:spPr>");
        write_xfrm(xml, "a", &self.bbox);
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>"#);
        self.text_frame
            .write_xml(xml, "p:txBody", r#" rtlCol="0""#, true);
        xml.push_str("</p:sp>");
    }
}

fn write_nv_sp_pr(xml: &mut String, id: u32, name: &str, text_box: bool) {
    xml.push_str(r#"<p:nvSpPr><p:cNvPr id=""#);
    push_int(xml, id);
    xml.push_str(r#"" name=""#);
    xml.push_str(&escape_xml(name));
    xml.push_str(r#""/>"#);
    if text_box {
        xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
    } else {
        xml.push_str("<p:cNvSpPr/>");
    }
    xml.push_str("<p:nvPr/></p:nvSpPr>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::common::unit::inches;
    use crate::ooxml::pptx::format::LinearGradient;

    fn bbox() -> BoundingBox {
        BoundingBox::new(inches(0.5), inches(0.5), inches(2.0), inches(1.0)).unwrap()
    }

    #[test]
    fn test_autoshape_naming() {
        let shape = AutoShape::new(2, ShapeKind::Rectangle, bbox());
        assert_eq!(shape.name(), "Rectangle 1");
        let shape = AutoShape::new(4, ShapeKind::Ellipse, bbox());
        assert_eq!(shape.name(), "Oval 3");
        assert_eq!(TextBox::new(3, bbox()).name(), "TextBox 2");
    }

    #[test]
    fn test_autoshape_xml() {
        let mut shape = AutoShape::new(2, ShapeKind::RoundedRectangle, bbox());
        shape
            .set_fill(Fill::Solid(RGBColor::new(0x32, 0xCD, 0x32)))
            .set_text("Rounded Rect");

        let mut xml = String::new();
        MutableShape::AutoShape(shape).write_xml(&mut xml);

        assert!(xml.contains(r#"<p:cNvPr id="2" name="Rounded Rectangle 1"/><p:cNvSpPr/>"#));
        assert!(xml.contains(r#"<a:prstGeom prst="roundRect"><a:avLst/></a:prstGeom><a:solidFill><a:srgbClr val="32CD32"/></a:solidFill></p:spPr>"#));
        assert!(xml.contains("<p:style>"));
        assert!(xml.contains(r#"<a:bodyPr rtlCol="0" anchor="ctr"/>"#));
        assert!(xml.contains(r#"<a:p><a:pPr algn="ctr"/><a:r>"#));
        assert!(xml.contains("<a:t>Rounded Rect</a:t>"));
    }

    #[test]
    fn test_gradient_shape_xml() {
        let mut shape = AutoShape::new(2, ShapeKind::Rectangle, bbox());
        shape.set_fill(Fill::Gradient(LinearGradient::new(
            45.0,
            RGBColor::new(0x80, 0x00, 0x80),
            RGBColor::new(0xFF, 0xA5, 0x00),
        )));
        let mut xml = String::new();
        shape.write_xml(&mut xml);
        assert!(xml.contains(r#"<a:lin ang="18900000" scaled="0"/>"#));
    }

    #[test]
    fn test_text_box_xml() {
        let mut text_box = TextBox::new(2, bbox());
        text_box.text_frame_mut().first_paragraph().add_run("Hello");
        let mut xml = String::new();
        text_box.write_xml(&mut xml);

        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains("<a:noFill/>"));
        assert!(xml.contains(r#"<a:bodyPr wrap="none" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#));
        assert!(!xml.contains("<p:style>"));
    }
}
