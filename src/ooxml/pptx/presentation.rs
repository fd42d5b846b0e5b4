/// Read model of a presentation part.
use crate::common::unit::Emu;
use crate::common::xml::unescape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::pptx::package::{Package, resolve_partname};
use crate::ooxml::pptx::slide::{ShapeInfo, ShapeInfoKind, Slide};
use quick_xml::Reader;
use quick_xml::events::Event;

/// A parsed presentation: slide size plus slides in display order.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub slide_width: Emu,
    pub slide_height: Emu,
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Load the main part of `pkg` and every slide in `sldIdLst` order.
    pub(crate) fn load(pkg: &Package) -> Result<Self> {
        let partname = pkg.main_partname();
        let (slide_width, slide_height, slide_rel_ids) =
            parse_presentation_xml(pkg.require_part(partname)?)?;
        let rels = pkg.relationships(partname)?;

        let mut slides = Vec::with_capacity(slide_rel_ids.len());
        for r_id in &slide_rel_ids {
            let rel = rels
                .get(r_id)
                .filter(|rel| rel.reltype() == rt::SLIDE)
                .ok_or_else(|| OoxmlError::PartNotFound(format!("slide relationship {}", r_id)))?;
            let slide_partname = resolve_partname(partname, rel.target_ref());
            slides.push(Slide::from_xml(pkg.require_part(&slide_partname)?)?);
        }

        Ok(Self {
            slide_width,
            slide_height,
            slides,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Total number of shapes over all slides.
    pub fn shape_count(&self) -> usize {
        self.slides.iter().map(Slide::shape_count).sum()
    }

    /// All tables, in slide order.
    pub fn tables(&self) -> impl Iterator<Item = &ShapeInfo> {
        self.slides
            .iter()
            .flat_map(|slide| slide.shapes.iter())
            .filter(|shape| matches!(shape.kind, ShapeInfoKind::Table { .. }))
    }

    /// All text in the presentation, one line per paragraph.
    pub fn text(&self) -> String {
        self.slides
            .iter()
            .map(Slide::text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Returns (slide width, slide height, slide rIds in order).
fn parse_presentation_xml(xml: &[u8]) -> Result<(Emu, Emu, Vec<String>)> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut width = 0;
    let mut height = 0;
    let mut rel_ids = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"sldId" => {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"r:id" {
                            rel_ids.push(unescape_xml(&String::from_utf8_lossy(&attr.value)));
                        }
                    }
                },
                b"sldSz" => {
                    for attr in e.attributes().flatten() {
                        let value = String::from_utf8_lossy(&attr.value).parse::<Emu>().ok();
                        match attr.key.as_ref() {
                            b"cx" => width = value.unwrap_or_default(),
                            b"cy" => height = value.unwrap_or_default(),
                            _ => {},
                        }
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok((width, height, rel_ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::inches;
    use crate::ooxml::pptx::format::{BoundingBox, ShapeKind};
    use crate::ooxml::pptx::writer::MutablePresentation;

    #[test]
    fn test_parse_presentation_xml() {
        let xml = br#"<p:presentation xmlns:p="p" xmlns:r="r"><p:sldIdLst><p:sldId id="256" r:id="rId7"/><p:sldId id="257" r:id="rId6"/></p:sldIdLst><p:sldSz cx="9144000" cy="6858000"/></p:presentation>"#;
        let (w, h, ids) = parse_presentation_xml(xml).unwrap();
        assert_eq!((w, h), (9_144_000, 6_858_000));
        assert_eq!(ids, ["rId7", "rId6"]);
    }

    #[test]
    fn test_load_slides_in_order() {
        let mut pres = MutablePresentation::new();
        pres.set_slide_width(inches(13.333));
        let bbox = BoundingBox::new(0, 0, inches(1.0), inches(1.0)).unwrap();
        pres.add_slide().add_shape(ShapeKind::Rectangle, bbox);
        let second = pres.add_slide();
        second.add_shape(ShapeKind::Ellipse, bbox);
        second.add_shape(ShapeKind::Heart, bbox);
        second.add_table(2, 2, bbox).unwrap();

        let pkg = Package::from_bytes(pres.to_bytes().unwrap()).unwrap();
        let loaded = pkg.presentation().unwrap();

        assert_eq!(loaded.slide_width, inches(13.333));
        assert_eq!(loaded.slide_height, inches(7.5));
        assert_eq!(loaded.slide_count(), 2);
        assert_eq!(loaded.slides[0].shape_count(), 1);
        assert_eq!(loaded.slides[1].shape_count(), 3);
        assert_eq!(loaded.shape_count(), 4);
        assert_eq!(loaded.tables().count(), 1);
    }
}
