/// Slide types and implementation for PPTX presentations.
use super::shape::{AutoShape, MutableShape, TextBox};
use super::table::Table;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::format::{BoundingBox, ShapeKind};
use crate::ooxml::pptx::template;

/// Id 1 belongs to the shape tree itself.
const FIRST_SHAPE_ID: u32 = 2;

/// A mutable slide in a presentation.
///
/// Elements are kept in insertion order, which is also their z-order.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    /// Shapes on the slide
    pub(crate) shapes: Vec<MutableShape>,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    fn next_shape_id(&self) -> u32 {
        FIRST_SHAPE_ID + self.shapes.len() as u32
    }

    /// Add a preset-geometry shape.
    pub fn add_shape(&mut self, kind: ShapeKind, bbox: BoundingBox) -> &mut AutoShape {
        let shape = AutoShape::new(self.next_shape_id(), kind, bbox);
        self.shapes.push(MutableShape::AutoShape(shape));
        match self.shapes.last_mut() {
            Some(MutableShape::AutoShape(shape)) => shape,
            _ => unreachable!("just pushed an autoshape"),
        }
    }

    /// Add an empty text box that does not wrap.
    pub fn add_text_box(&mut self, bbox: BoundingBox) -> &mut TextBox {
        let text_box = TextBox::new(self.next_shape_id(), bbox);
        self.shapes.push(MutableShape::TextBox(text_box));
        match self.shapes.last_mut() {
            Some(MutableShape::TextBox(text_box)) => text_box,
            _ => unreachable!("just pushed a text box"),
        }
    }

    /// Add a table with evenly sized columns and rows.
    pub fn add_table(&mut self, rows: usize, cols: usize, bbox: BoundingBox) -> Result<&mut Table> {
        let table = Table::new(self.next_shape_id(), rows, cols, bbox)?;
        self.shapes.push(MutableShape::Table(table));
        match self.shapes.last_mut() {
            Some(MutableShape::Table(table)) => Ok(table),
            _ => unreachable!("just pushed a table"),
        }
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Generate the slide part XML.
    pub fn to_xml(&self) -> String {
        let mut xml = template::slide_xml_prefix();
        xml.reserve(self.shapes.len() * 1024);
        for shape in &self.shapes {
            shape.write_xml(&mut xml);
        }
        xml.push_str(template::SLIDE_XML_SUFFIX);
        xml
    }
}
