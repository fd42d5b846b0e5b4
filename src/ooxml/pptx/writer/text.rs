/// Text frames, paragraphs and runs.
///
/// Shapes, text boxes and table cells all own a [`TextFrame`]. Only the body
/// properties differ between owners, so the owner passes them in when the
/// frame is serialized.
use super::{push_int, write_solid_fill};
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::ooxml::pptx::format::{Alignment, TextFormat};

/// A run of text sharing one set of character properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    text: String,
    font: TextFormat,
}

impl Run {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            font: TextFormat::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.text = text.to_string();
        self
    }

    pub fn font(&self) -> &TextFormat {
        &self.font
    }

    pub fn font_mut(&mut self) -> &mut TextFormat {
        &mut self.font
    }

    fn write_xml(&self, xml: &mut String) {
        xml.push_str("<a:r>");
        write_char_props(xml, "a:rPr", &self.font, true);
        xml.push_str("<a:t>");
        xml.push_str(&escape_xml(&self.text));
        xml.push_str("</a:t></a:r>");
    }
}

/// A paragraph: alignment, default character properties and runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    alignment: Option<Alignment>,
    font: TextFormat,
    runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    /// Paragraph-level character defaults, inherited by runs that leave a
    /// property unset.
    pub fn font(&self) -> &TextFormat {
        &self.font
    }

    pub fn font_mut(&mut self) -> &mut TextFormat {
        &mut self.font
    }

    /// Append a run and return it for formatting.
    pub fn add_run(&mut self, text: &str) -> &mut Run {
        let index = self.runs.len();
        self.runs.push(Run::new(text));
        &mut self.runs[index]
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Replace all runs with a single unformatted run.
    ///
    /// Alignment and paragraph defaults are kept.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.runs.clear();
        self.runs.push(Run::new(text));
        self
    }

    /// Concatenated run text.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    fn write_xml(&self, xml: &mut String) {
        xml.push_str("<a:p>");
        if self.alignment.is_some() || !self.font.is_empty() {
            xml.push_str("<a:pPr");
            if let Some(alignment) = self.alignment {
                xml.push_str(r#" algn=""#);
                xml.push_str(alignment.as_xml());
                xml.push('"');
            }
            if self.font.is_empty() {
                xml.push_str("/>");
            } else {
                xml.push('>');
                write_char_props(xml, "a:defRPr", &self.font, false);
                xml.push_str("</a:pPr>");
            }
        }
        for run in &self.runs {
            run.write_xml(xml);
        }
        xml.push_str("</a:p>");
    }
}

/// Text body of a shape, text box or table cell.
///
/// A frame always holds at least one paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    /// `None` inherits the wrapping of the owner's defaults
    word_wrap: Option<bool>,
    paragraphs: Vec<Paragraph>,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self {
            word_wrap: None,
            paragraphs: vec![Paragraph::new()],
        }
    }
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_paragraph(paragraph: Paragraph) -> Self {
        Self {
            word_wrap: None,
            paragraphs: vec![paragraph],
        }
    }

    pub fn word_wrap(&self) -> Option<bool> {
        self.word_wrap
    }

    /// `true` wraps at the shape edge (`wrap="square"`), `false` keeps each
    /// paragraph on one line (`wrap="none"`).
    pub fn set_word_wrap(&mut self, wrap: bool) -> &mut Self {
        self.word_wrap = Some(wrap);
        self
    }

    pub fn first_paragraph(&mut self) -> &mut Paragraph {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::new());
        }
        &mut self.paragraphs[0]
    }

    /// Append an empty paragraph.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        let index = self.paragraphs.len();
        self.paragraphs.push(Paragraph::new());
        &mut self.paragraphs[index]
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Replace the frame's content with `text` as one plain run.
    ///
    /// Extra paragraphs are dropped; the first paragraph keeps its
    /// alignment and defaults.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.paragraphs.truncate(1);
        self.first_paragraph().set_text(text);
        self
    }

    /// Paragraph texts joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serialize as `<{tag}>` with the given extra `a:bodyPr` attributes.
    pub(crate) fn write_xml(&self, xml: &mut String, tag: &str, body_attrs: &str, autofit: bool) {
        xml.push('<');
        xml.push_str(tag);
        xml.push_str("><a:bodyPr");
        match self.word_wrap {
            Some(true) => xml.push_str(r#" wrap="square""#),
            Some(false) => xml.push_str(r#" wrap="none""#),
            None => {},
        }
        xml.push_str(body_attrs);
        if autofit {
            xml.push_str("><a:spAutoFit/></a:bodyPr>");
        } else {
            xml.push_str("/>");
        }
        xml.push_str("<a:lstStyle/>");
        for paragraph in &self.paragraphs {
            paragraph.write_xml(xml);
        }
        xml.push_str("</");
        xml.push_str(tag);
        xml.push('>');
    }
}

/// Character properties element (`a:rPr` for runs, `a:defRPr` for
/// paragraph defaults).
fn write_char_props(xml: &mut String, tag: &str, format: &TextFormat, is_run: bool) {
    xml.push('<');
    xml.push_str(tag);
    if is_run {
        xml.push_str(r#" lang="en-US""#);
    }
    if let Some(size) = format.size {
        xml.push_str(r#" sz=""#);
        push_int(xml, pt_to_centipoints(size));
        xml.push('"');
    }
    if let Some(bold) = format.bold {
        xml.push_str(if bold { r#" b="1""# } else { r#" b="0""# });
    }
    if let Some(italic) = format.italic {
        xml.push_str(if italic { r#" i="1""# } else { r#" i="0""# });
    }
    if let Some(underline) = format.underline {
        xml.push_str(if underline { r#" u="sng""# } else { r#" u="none""# });
    }
    if is_run {
        xml.push_str(r#" dirty="0""#);
    }
    match format.color {
        Some(color) => {
            xml.push('>');
            write_solid_fill(xml, color);
            xml.push_str("</");
            xml.push_str(tag);
            xml.push('>');
        },
        None => xml.push_str("/>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;

    fn frame_xml(frame: &TextFrame) -> String {
        let mut xml = String::new();
        frame.write_xml(&mut xml, "p:txBody", "", false);
        xml
    }

    #[test]
    fn test_frame_always_has_paragraph() {
        let mut frame = TextFrame::new();
        assert_eq!(frame.paragraphs().len(), 1);
        frame.add_paragraph();
        frame.add_paragraph();
        frame.set_text("only");
        assert_eq!(frame.paragraphs().len(), 1);
        assert_eq!(frame.text(), "only");
    }

    #[test]
    fn test_set_text_keeps_alignment() {
        let mut frame = TextFrame::new();
        frame.first_paragraph().set_alignment(Alignment::Center);
        frame.set_text("Rectangle");
        assert_eq!(frame.paragraphs()[0].alignment(), Some(Alignment::Center));
        assert_eq!(frame.paragraphs()[0].runs().len(), 1);
    }

    #[test]
    fn test_run_properties() {
        let mut paragraph = Paragraph::new();
        paragraph
            .add_run("Bold ")
            .font_mut()
            .bold(true)
            .size(18.0);
        paragraph
            .add_run("Red")
            .font_mut()
            .color(RGBColor::new(0xFF, 0, 0));
        let mut xml = String::new();
        paragraph.write_xml(&mut xml);

        assert!(xml.contains(r#"<a:rPr lang="en-US" sz="1800" b="1" dirty="0"/><a:t>Bold </a:t>"#));
        assert!(xml.contains(
            r#"<a:rPr lang="en-US" dirty="0"><a:solidFill><a:srgbClr val="FF0000"/></a:solidFill></a:rPr>"#
        ));
        assert_eq!(paragraph.text(), "Bold Red");
    }

    #[test]
    fn test_paragraph_defaults() {
        let mut frame = TextFrame::new();
        frame.set_word_wrap(true);
        let p = frame.first_paragraph();
        p.set_text("Header").set_alignment(Alignment::Center);
        p.font_mut().bold(true).color(RGBColor::WHITE);

        let xml = frame_xml(&frame);
        assert!(xml.starts_with(r#"<p:txBody><a:bodyPr wrap="square"/><a:lstStyle/>"#));
        assert!(xml.contains(
            r#"<a:pPr algn="ctr"><a:defRPr b="1"><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill></a:defRPr></a:pPr>"#
        ));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut frame = TextFrame::new();
        frame.set_text("A & B <C>");
        assert!(frame_xml(&frame).contains("<a:t>A &amp; B &lt;C&gt;</a:t>"));
    }
}
