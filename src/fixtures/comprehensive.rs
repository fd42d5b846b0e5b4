//! `comprehensive.pptx`: one dense slide combining every feature the other
//! fixtures cover individually.

use super::{ShapeSpec, bbox};
use crate::common::error::Result;
use crate::common::{RGBColor, inches};
use crate::ooxml::pptx::{
    Alignment, Fill, LinearGradient, MutablePresentation, MutableSlide, ShapeKind,
};

const LABELLED: [ShapeSpec; 5] = [
    ShapeSpec {
        kind: ShapeKind::Rectangle,
        left: 0.3,
        top: 1.0,
        width: 1.8,
        height: 1.2,
        fill: RGBColor::new(0x41, 0x69, 0xE1),
        label: Some("Rect"),
    },
    ShapeSpec {
        kind: ShapeKind::RoundedRectangle,
        left: 2.3,
        top: 1.0,
        width: 1.8,
        height: 1.2,
        fill: RGBColor::new(0x32, 0xCD, 0x32),
        label: Some("Round"),
    },
    ShapeSpec {
        kind: ShapeKind::Ellipse,
        left: 4.3,
        top: 1.0,
        width: 1.8,
        height: 1.2,
        fill: RGBColor::new(0xFF, 0x69, 0xB4),
        label: Some("Oval"),
    },
    ShapeSpec {
        kind: ShapeKind::Diamond,
        left: 6.3,
        top: 1.0,
        width: 1.8,
        height: 1.2,
        fill: RGBColor::new(0xFF, 0xA5, 0x00),
        label: Some("Diamond"),
    },
    ShapeSpec {
        kind: ShapeKind::Star5,
        left: 8.1,
        top: 1.0,
        width: 1.6,
        height: 1.2,
        fill: RGBColor::new(0xFF, 0xD7, 0x00),
        label: Some("Star"),
    },
];

const UNLABELLED: [ShapeSpec; 5] = [
    ShapeSpec {
        kind: ShapeKind::RightArrow,
        left: 0.3,
        top: 2.5,
        width: 2.0,
        height: 0.8,
        fill: RGBColor::new(0x00, 0x80, 0x80),
        label: None,
    },
    ShapeSpec {
        kind: ShapeKind::LeftArrow,
        left: 2.5,
        top: 2.5,
        width: 2.0,
        height: 0.8,
        fill: RGBColor::new(0x80, 0x00, 0x80),
        label: None,
    },
    ShapeSpec {
        kind: ShapeKind::Chevron,
        left: 4.7,
        top: 2.5,
        width: 2.0,
        height: 0.8,
        fill: RGBColor::new(0xDC, 0x14, 0x3C),
        label: None,
    },
    ShapeSpec {
        kind: ShapeKind::Hexagon,
        left: 6.9,
        top: 2.4,
        width: 1.4,
        height: 1.0,
        fill: RGBColor::new(0x4B, 0x00, 0x82),
        label: None,
    },
    ShapeSpec {
        kind: ShapeKind::Heart,
        left: 8.5,
        top: 2.4,
        width: 1.2,
        height: 1.0,
        fill: RGBColor::new(0xFF, 0x00, 0x00),
        label: None,
    },
];

const TABLE_HEADER_FILL: RGBColor = RGBColor::new(0x2C, 0x3E, 0x50);

pub fn build() -> Result<MutablePresentation> {
    let mut pres = MutablePresentation::new();
    pres.set_slide_width(inches(10.0));
    pres.set_slide_height(inches(7.5));
    let slide = pres.add_slide();

    let title = slide.add_text_box(bbox(0.5, 0.2, 9.0, 0.7)?);
    let p = title.text_frame_mut().first_paragraph();
    p.set_text("Comprehensive Feature Test");
    p.font_mut()
        .size(32.0)
        .bold(true)
        .color(RGBColor::new(0x1A, 0x1A, 0x2E));
    p.set_alignment(Alignment::Center);

    add_shape_rows(slide)?;
    add_text_samples(slide)?;
    add_table(slide)?;

    let list = slide.add_text_box(bbox(5.5, 5.2, 4.0, 1.5)?);
    let frame = list.text_frame_mut();
    frame.set_word_wrap(true);
    for (i, item) in ["First item", "Second item", "Third item"].into_iter().enumerate() {
        let p = if i == 0 {
            frame.first_paragraph()
        } else {
            frame.add_paragraph()
        };
        p.set_text(&format!("\u{2022} {}", item));
        p.font_mut().size(12.0);
    }

    Ok(pres)
}

fn add_shape_rows(slide: &mut MutableSlide) -> Result<()> {
    for spec in LABELLED {
        let shape = slide.add_shape(spec.kind, spec.bbox()?);
        shape
            .set_fill(Fill::Solid(spec.fill))
            .set_text(spec.label.unwrap_or_default());
        let p = shape.text_frame_mut().first_paragraph();
        p.font_mut().size(12.0).bold(true);
        p.set_alignment(Alignment::Center);
    }

    for spec in UNLABELLED {
        slide
            .add_shape(spec.kind, spec.bbox()?)
            .set_fill(Fill::Solid(spec.fill));
    }

    Ok(())
}

fn add_text_samples(slide: &mut MutableSlide) -> Result<()> {
    let styles = slide.add_text_box(bbox(0.3, 3.6, 4.5, 1.2)?);
    let frame = styles.text_frame_mut();
    frame.set_word_wrap(true);
    let p = frame.first_paragraph();
    p.add_run("Bold ").font_mut().bold(true).size(14.0);
    p.add_run("Italic ").font_mut().italic(true).size(14.0);
    p.add_run("Underline ").font_mut().underline(true).size(14.0);
    p.add_run("Color")
        .font_mut()
        .color(RGBColor::new(0xFF, 0x00, 0x00))
        .size(14.0);

    let gradient = slide.add_shape(ShapeKind::RoundedRectangle, bbox(5.0, 3.6, 4.5, 1.2)?);
    gradient
        .set_fill(Fill::Gradient(LinearGradient::new(
            45.0,
            RGBColor::new(0x66, 0x00, 0xFF),
            RGBColor::new(0x00, 0xFF, 0xFF),
        )))
        .set_text("Gradient Fill");
    let p = gradient.text_frame_mut().first_paragraph();
    p.font_mut().size(14.0).bold(true).color(RGBColor::WHITE);
    p.set_alignment(Alignment::Center);

    Ok(())
}

fn add_table(slide: &mut MutableSlide) -> Result<()> {
    let table = slide.add_table(2, 3, bbox(0.3, 5.2, 5.0, 1.0)?)?;

    for (col, header) in ["Column A", "Column B", "Column C"].into_iter().enumerate() {
        let cell = table.cell_mut(0, col)?;
        cell.set_text(header).set_fill(TABLE_HEADER_FILL);
        cell.first_paragraph()
            .font_mut()
            .bold(true)
            .size(11.0)
            .color(RGBColor::WHITE);
    }

    for (col, value) in ["Value 1", "Value 2", "Value 3"].into_iter().enumerate() {
        let cell = table.cell_mut(1, col)?;
        cell.set_text(value);
        cell.first_paragraph().font_mut().size(11.0);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::MutableShape;

    #[test]
    fn test_element_mix() {
        let pres = build().unwrap();
        assert_eq!(pres.slide_count(), 1);
        let shapes = pres.slides()[0].shapes();

        let autoshapes = shapes.iter().filter(|s| matches!(s, MutableShape::AutoShape(_))).count();
        let text_boxes = shapes.iter().filter(|s| matches!(s, MutableShape::TextBox(_))).count();
        let tables = shapes.iter().filter(|s| matches!(s, MutableShape::Table(_))).count();
        assert_eq!((autoshapes, text_boxes, tables), (11, 3, 1));
        assert_eq!(shapes.len(), 15);
    }

    #[test]
    fn test_bullets_use_literal_prefix() {
        let pres = build().unwrap();
        let Some(MutableShape::TextBox(list)) = pres.slides()[0].shapes().last() else {
            panic!("expected the list text box last");
        };
        assert_eq!(
            list.text_frame().text(),
            "\u{2022} First item\n\u{2022} Second item\n\u{2022} Third item"
        );
    }
}
