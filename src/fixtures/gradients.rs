//! `gradients.pptx`: four two-stop linear gradients at different angles.

use super::bbox;
use crate::common::RGBColor;
use crate::common::error::Result;
use crate::ooxml::pptx::{Fill, LinearGradient, MutablePresentation, ShapeKind};

/// A 3x2 inch shape filled with a two-stop linear gradient.
struct GradientSpec {
    kind: ShapeKind,
    left: f64,
    top: f64,
    /// Counter-clockwise degrees
    angle: f64,
    start: RGBColor,
    end: RGBColor,
    label: &'static str,
}

const SHAPES: [GradientSpec; 4] = [
    GradientSpec {
        kind: ShapeKind::Rectangle,
        left: 0.5,
        top: 0.5,
        angle: 0.0,
        start: RGBColor::new(0xFF, 0x00, 0x00),
        end: RGBColor::new(0x00, 0x00, 0xFF),
        label: "Linear H",
    },
    GradientSpec {
        kind: ShapeKind::Rectangle,
        left: 4.0,
        top: 0.5,
        angle: 90.0,
        start: RGBColor::new(0x00, 0xFF, 0x00),
        end: RGBColor::new(0xFF, 0xFF, 0x00),
        label: "Linear V",
    },
    GradientSpec {
        kind: ShapeKind::Rectangle,
        left: 0.5,
        top: 3.0,
        angle: 45.0,
        start: RGBColor::new(0x80, 0x00, 0x80),
        end: RGBColor::new(0xFF, 0xA5, 0x00),
        label: "Diagonal",
    },
    GradientSpec {
        kind: ShapeKind::RoundedRectangle,
        left: 4.0,
        top: 3.0,
        angle: 135.0,
        start: RGBColor::new(0x00, 0x80, 0x80),
        end: RGBColor::new(0xFF, 0x69, 0xB4),
        label: "Rounded Gradient",
    },
];

pub fn build() -> Result<MutablePresentation> {
    let mut pres = MutablePresentation::new();
    let slide = pres.add_slide();
    for spec in SHAPES {
        let gradient = LinearGradient::new(spec.angle, spec.start, spec.end);
        slide
            .add_shape(spec.kind, bbox(spec.left, spec.top, 3.0, 2.0)?)
            .set_fill(Fill::Gradient(gradient))
            .set_text(spec.label);
    }

    Ok(pres)
}
