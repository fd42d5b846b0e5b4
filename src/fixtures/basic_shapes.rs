//! `basic-shapes.pptx`: nine solid-filled preset shapes on one slide.

use super::ShapeSpec;
use crate::common::error::Result;
use crate::common::{RGBColor, inches};
use crate::ooxml::pptx::{Fill, MutablePresentation, ShapeKind};

const SHAPES: [ShapeSpec; 9] = [
    ShapeSpec {
        kind: ShapeKind::Rectangle,
        left: 0.5,
        top: 0.5,
        width: 2.0,
        height: 1.0,
        fill: RGBColor::new(0x41, 0x69, 0xE1),
        label: Some("Rectangle"),
    },
    ShapeSpec {
        kind: ShapeKind::RoundedRectangle,
        left: 3.0,
        top: 0.5,
        width: 2.0,
        height: 1.0,
        fill: RGBColor::new(0x32, 0xCD, 0x32),
        label: Some("Rounded Rect"),
    },
    ShapeSpec {
        kind: ShapeKind::Ellipse,
        left: 5.5,
        top: 0.5,
        width: 2.0,
        height: 1.0,
        fill: RGBColor::new(0xFF, 0x69, 0xB4),
        label: Some("Ellipse"),
    },
    ShapeSpec {
        kind: ShapeKind::IsoscelesTriangle,
        left: 0.5,
        top: 2.0,
        width: 2.0,
        height: 1.5,
        fill: RGBColor::new(0xFF, 0xA5, 0x00),
        label: None,
    },
    ShapeSpec {
        kind: ShapeKind::Diamond,
        left: 3.0,
        top: 2.0,
        width: 2.0,
        height: 1.5,
        fill: RGBColor::new(0x94, 0x00, 0xD3),
        label: None,
    },
    ShapeSpec {
        kind: ShapeKind::Star5,
        left: 5.5,
        top: 2.0,
        width: 2.0,
        height: 1.5,
        fill: RGBColor::new(0xFF, 0xD7, 0x00),
        label: None,
    },
    ShapeSpec {
        kind: ShapeKind::RightArrow,
        left: 0.5,
        top: 4.0,
        width: 2.5,
        height: 1.0,
        fill: RGBColor::new(0x00, 0x80, 0x80),
        label: None,
    },
    ShapeSpec {
        kind: ShapeKind::Heart,
        left: 3.5,
        top: 4.0,
        width: 1.5,
        height: 1.5,
        fill: RGBColor::new(0xFF, 0x00, 0x00),
        label: None,
    },
    ShapeSpec {
        kind: ShapeKind::Cloud,
        left: 5.5,
        top: 4.0,
        width: 2.5,
        height: 1.5,
        fill: RGBColor::new(0x87, 0xCE, 0xEB),
        label: None,
    },
];

pub fn build() -> Result<MutablePresentation> {
    let mut pres = MutablePresentation::new();
    pres.set_slide_width(inches(10.0));
    pres.set_slide_height(inches(7.5));

    let slide = pres.add_slide();
    for spec in SHAPES {
        let shape = slide.add_shape(spec.kind, spec.bbox()?);
        shape.set_fill(Fill::Solid(spec.fill));
        if let Some(label) = spec.label {
            shape.set_text(label);
        }
    }

    Ok(pres)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::MutableShape;

    #[test]
    fn test_nine_filled_shapes() {
        let pres = build().unwrap();
        assert_eq!(pres.slide_count(), 1);
        let shapes = pres.slides()[0].shapes();
        assert_eq!(shapes.len(), 9);

        for shape in shapes {
            match shape {
                MutableShape::AutoShape(s) => assert!(matches!(s.fill(), Some(Fill::Solid(_)))),
                other => panic!("unexpected element {}", other.name()),
            }
        }
    }

    #[test]
    fn test_only_first_row_is_labelled() {
        let pres = build().unwrap();
        let labels: Vec<String> = pres.slides()[0]
            .shapes()
            .iter()
            .filter_map(|shape| match shape {
                MutableShape::AutoShape(s) => Some(s.text_frame().text()),
                _ => None,
            })
            .collect();
        assert_eq!(&labels[..3], ["Rectangle", "Rounded Rect", "Ellipse"]);
        assert!(labels[3..].iter().all(String::is_empty));
    }
}
