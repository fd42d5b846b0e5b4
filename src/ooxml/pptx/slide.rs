/// Read model of a slide's shape tree.
///
/// Only top-level shapes are reported: autoshapes, text boxes and tables,
/// with their geometry, fill and text.
use crate::common::RGBColor;
use crate::common::unit::{Emu, centipoints_to_pt};
use crate::common::xml::unescape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::format::{Alignment, BoundingBox, LinearGradient, ShapeKind};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A parsed slide.
#[derive(Debug, Clone, Default)]
pub struct Slide {
    pub shapes: Vec<ShapeInfo>,
}

impl Slide {
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Text of every shape, one line per paragraph.
    pub fn text(&self) -> String {
        self.shapes
            .iter()
            .map(ShapeInfo::text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Parse slide part XML.
    pub fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        let mut parser = SlideParser::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => parser.open(&e),
                Event::Empty(e) => {
                    parser.open(&e);
                    parser.close(e.local_name().as_ref());
                },
                Event::End(e) => parser.close(e.local_name().as_ref()),
                Event::Text(e) if parser.in_text => {
                    parser.text.push_str(&String::from_utf8_lossy(&e));
                },
                Event::GeneralRef(e) if parser.in_text => match e.resolve_char_ref() {
                    Ok(Some(ch)) => parser.text.push(ch),
                    _ => {
                        parser.text.push('&');
                        parser.text.push_str(&String::from_utf8_lossy(&e));
                        parser.text.push(';');
                    },
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(Self {
            shapes: parser.shapes,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeInfoKind {
    /// Preset geometry name, e.g. `roundRect`
    AutoShape { geometry: String },
    TextBox,
    Table { rows: usize, cols: usize },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FillInfo {
    #[default]
    None,
    Solid(RGBColor),
    /// `angle` in degrees counter-clockwise; stops as (position, color)
    Gradient {
        angle: f64,
        stops: Vec<(u32, RGBColor)>,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunInfo {
    pub text: String,
    /// Points
    pub size: Option<f64>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub color: Option<RGBColor>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParagraphInfo {
    pub alignment: Option<Alignment>,
    pub runs: Vec<RunInfo>,
}

impl ParagraphInfo {
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellInfo {
    pub paragraphs: Vec<ParagraphInfo>,
    pub fill: Option<RGBColor>,
}

impl CellInfo {
    pub fn text(&self) -> String {
        join_paragraphs(&self.paragraphs)
    }
}

/// One element of the shape tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeInfo {
    pub id: u32,
    pub name: String,
    pub kind: ShapeInfoKind,
    pub bbox: BoundingBox,
    pub fill: FillInfo,
    pub paragraphs: Vec<ParagraphInfo>,
    /// Rows of cells; empty unless `kind` is a table
    pub cells: Vec<Vec<CellInfo>>,
}

impl ShapeInfo {
    fn new(kind: ShapeInfoKind) -> Self {
        Self {
            id: 0,
            name: String::new(),
            kind,
            bbox: BoundingBox::default(),
            fill: FillInfo::None,
            paragraphs: Vec::new(),
            cells: Vec::new(),
        }
    }

    /// Preset geometry as a known [`ShapeKind`], for autoshapes.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match &self.kind {
            ShapeInfoKind::AutoShape { geometry } => ShapeKind::from_preset(geometry),
            _ => None,
        }
    }

    /// Shape text, or cell texts row by row for tables.
    pub fn text(&self) -> String {
        if self.cells.is_empty() {
            return join_paragraphs(&self.paragraphs);
        }
        self.cells
            .iter()
            .flatten()
            .map(CellInfo::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn join_paragraphs(paragraphs: &[ParagraphInfo]) -> String {
    paragraphs
        .iter()
        .map(ParagraphInfo::text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .map(|a| unescape_xml(&String::from_utf8_lossy(&a.value)))
}

fn attr_parse<T: std::str::FromStr>(e: &BytesStart<'_>, key: &[u8]) -> Option<T> {
    attr(e, key).and_then(|v| v.parse().ok())
}

fn attr_flag(e: &BytesStart<'_>, key: &[u8]) -> bool {
    matches!(attr(e, key).as_deref(), Some("1" | "true"))
}

/// Event-driven state for one slide.
#[derive(Debug, Default)]
struct SlideParser {
    shapes: Vec<ShapeInfo>,
    shape: Option<ShapeInfo>,

    in_sp_pr: bool,
    gradient: Option<(i64, Vec<(u32, RGBColor)>)>,
    stop_pos: u32,

    paragraph: Option<ParagraphInfo>,
    run: Option<RunInfo>,
    in_run_props: bool,
    in_text: bool,
    text: String,

    row: Option<Vec<CellInfo>>,
    cell: Option<CellInfo>,
    in_cell_props: bool,
}

impl SlideParser {
    fn open(&mut self, e: &BytesStart<'_>) {
        match e.local_name().as_ref() {
            b"sp" => {
                self.shape = Some(ShapeInfo::new(ShapeInfoKind::AutoShape {
                    geometry: String::new(),
                }));
            },
            b"graphicFrame" => {
                self.shape = Some(ShapeInfo::new(ShapeInfoKind::Table { rows: 0, cols: 0 }));
            },
            _ if self.shape.is_none() => {},
            b"cNvPr" => {
                if let Some(shape) = self.shape.as_mut() {
                    shape.id = attr_parse(e, b"id").unwrap_or_default();
                    shape.name = attr(e, b"name").unwrap_or_default();
                }
            },
            b"cNvSpPr" if attr_flag(e, b"txBox") => {
                if let Some(shape) = self.shape.as_mut() {
                    shape.kind = ShapeInfoKind::TextBox;
                }
            },
            b"prstGeom" => {
                if let Some(ShapeInfo {
                    kind: ShapeInfoKind::AutoShape { geometry },
                    ..
                }) = self.shape.as_mut()
                {
                    *geometry = attr(e, b"prst").unwrap_or_default();
                }
            },
            b"off" => {
                if let Some(shape) = self.shape.as_mut() {
                    shape.bbox.left = attr_parse::<Emu>(e, b"x").unwrap_or_default();
                    shape.bbox.top = attr_parse::<Emu>(e, b"y").unwrap_or_default();
                }
            },
            b"ext" => {
                if let Some(shape) = self.shape.as_mut() {
                    shape.bbox.width = attr_parse::<Emu>(e, b"cx").unwrap_or_default();
                    shape.bbox.height = attr_parse::<Emu>(e, b"cy").unwrap_or_default();
                }
            },
            b"spPr" => self.in_sp_pr = true,
            b"gradFill" if self.in_sp_pr => self.gradient = Some((0, Vec::new())),
            b"gs" => self.stop_pos = attr_parse(e, b"pos").unwrap_or_default(),
            b"lin" => {
                if let Some((angle, _)) = self.gradient.as_mut() {
                    *angle = attr_parse(e, b"ang").unwrap_or_default();
                }
            },
            b"srgbClr" => {
                if let Some(color) = attr(e, b"val").and_then(|v| RGBColor::from_hex(&v)) {
                    self.color(color);
                }
            },
            b"gridCol" => {
                if let Some(ShapeInfo {
                    kind: ShapeInfoKind::Table { cols, .. },
                    ..
                }) = self.shape.as_mut()
                {
                    *cols += 1;
                }
            },
            b"tr" => self.row = Some(Vec::new()),
            b"tc" => self.cell = Some(CellInfo::default()),
            b"tcPr" => self.in_cell_props = true,
            b"p" => self.paragraph = Some(ParagraphInfo::default()),
            b"pPr" => {
                if let Some(paragraph) = self.paragraph.as_mut() {
                    paragraph.alignment = attr(e, b"algn").and_then(|v| Alignment::from_xml(&v));
                }
            },
            b"r" => self.run = Some(RunInfo::default()),
            b"rPr" => {
                if let Some(run) = self.run.as_mut() {
                    self.in_run_props = true;
                    run.size = attr_parse::<u32>(e, b"sz").map(centipoints_to_pt);
                    run.bold = attr_flag(e, b"b");
                    run.italic = attr_flag(e, b"i");
                    run.underline = attr(e, b"u").is_some_and(|u| u != "none");
                }
            },
            b"t" if self.run.is_some() => {
                self.in_text = true;
                self.text.clear();
            },
            _ => {},
        }
    }

    /// Route an `a:srgbClr` to whatever it colors in the current context.
    fn color(&mut self, color: RGBColor) {
        if self.in_run_props {
            if let Some(run) = self.run.as_mut() {
                run.color = Some(color);
            }
        } else if self.in_cell_props {
            if let Some(cell) = self.cell.as_mut() {
                cell.fill = Some(color);
            }
        } else if let Some((_, stops)) = self.gradient.as_mut() {
            stops.push((self.stop_pos, color));
        } else if self.in_sp_pr {
            if let Some(shape) = self.shape.as_mut() {
                shape.fill = FillInfo::Solid(color);
            }
        }
    }

    fn close(&mut self, local_name: &[u8]) {
        match local_name {
            b"sp" | b"graphicFrame" => {
                if let Some(shape) = self.shape.take() {
                    self.shapes.push(shape);
                }
            },
            b"spPr" => self.in_sp_pr = false,
            b"gradFill" => {
                if let (Some((ang, stops)), Some(shape)) =
                    (self.gradient.take(), self.shape.as_mut())
                {
                    shape.fill = FillInfo::Gradient {
                        angle: LinearGradient::angle_from_drawingml(ang),
                        stops,
                    };
                }
            },
            b"t" => {
                if self.in_text {
                    self.in_text = false;
                    if let Some(run) = self.run.as_mut() {
                        run.text = unescape_xml(&self.text);
                    }
                }
            },
            b"rPr" => self.in_run_props = false,
            b"r" => {
                if let (Some(run), Some(paragraph)) = (self.run.take(), self.paragraph.as_mut()) {
                    paragraph.runs.push(run);
                }
            },
            b"p" => {
                if let Some(paragraph) = self.paragraph.take() {
                    if let Some(cell) = self.cell.as_mut() {
                        cell.paragraphs.push(paragraph);
                    } else if let Some(shape) = self.shape.as_mut() {
                        shape.paragraphs.push(paragraph);
                    }
                }
            },
            b"tcPr" => self.in_cell_props = false,
            b"tc" => {
                if let (Some(cell), Some(row)) = (self.cell.take(), self.row.as_mut()) {
                    row.push(cell);
                }
            },
            b"tr" => {
                if let (Some(row), Some(shape)) = (self.row.take(), self.shape.as_mut()) {
                    if let ShapeInfoKind::Table { rows, .. } = &mut shape.kind {
                        *rows += 1;
                    }
                    shape.cells.push(row);
                }
            },
            _ => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::inches;
    use crate::ooxml::pptx::format::{Fill, TextFormat};
    use crate::ooxml::pptx::writer::MutableSlide;

    fn bbox() -> BoundingBox {
        BoundingBox::new(inches(0.5), inches(1.0), inches(2.0), inches(1.5)).unwrap()
    }

    fn parse(slide: &MutableSlide) -> Slide {
        Slide::from_xml(slide.to_xml().as_bytes()).unwrap()
    }

    #[test]
    fn test_autoshape_round_trip() {
        let mut slide = MutableSlide::new(256);
        slide
            .add_shape(ShapeKind::Star5, bbox())
            .set_fill(Fill::Solid(RGBColor::new(0xFF, 0xD7, 0x00)))
            .set_text("Star");

        let parsed = parse(&slide);
        let shape = &parsed.shapes[0];
        assert_eq!(shape.id, 2);
        assert_eq!(shape.name, "5-Point Star 1");
        assert_eq!(shape.shape_kind(), Some(ShapeKind::Star5));
        assert_eq!(shape.bbox, bbox());
        assert_eq!(shape.fill, FillInfo::Solid(RGBColor::new(0xFF, 0xD7, 0x00)));
        assert_eq!(shape.paragraphs[0].alignment, Some(Alignment::Center));
        assert_eq!(shape.text(), "Star");
    }

    #[test]
    fn test_gradient_round_trip() {
        let mut slide = MutableSlide::new(256);
        slide
            .add_shape(ShapeKind::RoundedRectangle, bbox())
            .set_fill(Fill::Gradient(LinearGradient::new(
                135.0,
                RGBColor::new(0x00, 0x80, 0x80),
                RGBColor::new(0xFF, 0x69, 0xB4),
            )));

        let parsed = parse(&slide);
        match &parsed.shapes[0].fill {
            FillInfo::Gradient { angle, stops } => {
                assert_eq!(*angle, 135.0);
                assert_eq!(
                    stops,
                    &[
                        (0, RGBColor::new(0x00, 0x80, 0x80)),
                        (100_000, RGBColor::new(0xFF, 0x69, 0xB4))
                    ]
                );
            },
            other => panic!("expected gradient, got {:?}", other),
        }
    }

    #[test]
    fn test_run_formatting_and_whitespace() {
        let mut slide = MutableSlide::new(256);
        let text_box = slide.add_text_box(bbox());
        let p = text_box.text_frame_mut().first_paragraph();
        p.add_run("Bold ").font_mut().bold(true).size(18.0);
        *p.add_run("Red & Blue").font_mut() = TextFormat {
            color: Some(RGBColor::new(0xFF, 0, 0)),
            underline: Some(true),
            ..Default::default()
        };

        let parsed = parse(&slide);
        let shape = &parsed.shapes[0];
        assert_eq!(shape.kind, ShapeInfoKind::TextBox);
        assert_eq!(shape.fill, FillInfo::None);

        let runs = &shape.paragraphs[0].runs;
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "Bold ");
        assert!(runs[0].bold);
        assert_eq!(runs[0].size, Some(18.0));
        assert_eq!(runs[1].text, "Red & Blue");
        assert!(runs[1].underline);
        assert_eq!(runs[1].color, Some(RGBColor::new(0xFF, 0, 0)));
    }

    #[test]
    fn test_table_round_trip() {
        let mut slide = MutableSlide::new(256);
        let table = slide.add_table(2, 3, bbox()).unwrap();
        table
            .cell_mut(0, 0)
            .unwrap()
            .set_text("Column A")
            .set_fill(RGBColor::new(0x2C, 0x3E, 0x50));
        table
            .cell_mut(0, 0)
            .unwrap()
            .first_paragraph()
            .font_mut()
            .color(RGBColor::WHITE);
        table.cell_mut(1, 2).unwrap().set_text("Value 3");

        let parsed = parse(&slide);
        let shape = &parsed.shapes[0];
        assert_eq!(shape.kind, ShapeInfoKind::Table { rows: 2, cols: 3 });
        assert_eq!(shape.fill, FillInfo::None);
        assert_eq!(shape.cells.len(), 2);
        assert_eq!(shape.cells[0].len(), 3);
        assert_eq!(shape.cells[0][0].text(), "Column A");
        assert_eq!(shape.cells[0][0].fill, Some(RGBColor::new(0x2C, 0x3E, 0x50)));
        assert_eq!(shape.cells[0][1].fill, None);
        assert_eq!(shape.cells[1][2].text(), "Value 3");
    }
}
