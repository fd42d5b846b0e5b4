//! Format types for PPTX presentations.

use crate::common::RGBColor;
use crate::common::unit::Emu;
use crate::ooxml::error::{OoxmlError, Result};

/// Preset geometries placed by the fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    RoundedRectangle,
    Ellipse,
    IsoscelesTriangle,
    Diamond,
    Star5,
    RightArrow,
    LeftArrow,
    Heart,
    Cloud,
    Hexagon,
    Chevron,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 12] = [
        Self::Rectangle,
        Self::RoundedRectangle,
        Self::Ellipse,
        Self::IsoscelesTriangle,
        Self::Diamond,
        Self::Star5,
        Self::RightArrow,
        Self::LeftArrow,
        Self::Heart,
        Self::Cloud,
        Self::Hexagon,
        Self::Chevron,
    ];

    /// DrawingML `prstGeom/@prst` value.
    pub fn preset(&self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::RoundedRectangle => "roundRect",
            Self::Ellipse => "ellipse",
            Self::IsoscelesTriangle => "triangle",
            Self::Diamond => "diamond",
            Self::Star5 => "star5",
            Self::RightArrow => "rightArrow",
            Self::LeftArrow => "leftArrow",
            Self::Heart => "heart",
            Self::Cloud => "cloud",
            Self::Hexagon => "hexagon",
            Self::Chevron => "chevron",
        }
    }

    /// Base of the shape name PowerPoint shows in the selection pane.
    pub fn base_name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
            Self::Ellipse => "Oval",
            Self::IsoscelesTriangle => "Isosceles Triangle",
            Self::Diamond => "Diamond",
            Self::Star5 => "5-Point Star",
            Self::RightArrow => "Right Arrow",
            Self::LeftArrow => "Left Arrow",
            Self::Heart => "Heart",
            Self::Cloud => "Cloud",
            Self::Hexagon => "Hexagon",
            Self::Chevron => "Chevron",
        }
    }

    pub fn from_preset(preset: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.preset() == preset)
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// `a:pPr/@algn` value.
    pub fn as_xml(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Justify => "just",
        }
    }

    pub fn from_xml(value: &str) -> Option<Self> {
        match value {
            "l" => Some(Self::Left),
            "ctr" => Some(Self::Center),
            "r" => Some(Self::Right),
            "just" => Some(Self::Justify),
            _ => None,
        }
    }
}

/// Text formatting properties for runs and paragraph defaults.
///
/// Unset fields are omitted from the XML so the value is inherited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Single underline
    pub underline: Option<bool>,
    /// Text color
    pub color: Option<RGBColor>,
}

impl TextFormat {
    pub fn is_empty(&self) -> bool {
        self.size.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.underline.is_none()
            && self.color.is_none()
    }

    /// Builder method: set font size in points.
    pub fn size(&mut self, size: f64) -> &mut Self {
        self.size = Some(size);
        self
    }

    /// Builder method: set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.bold = Some(bold);
        self
    }

    /// Builder method: set italic.
    pub fn italic(&mut self, italic: bool) -> &mut Self {
        self.italic = Some(italic);
        self
    }

    /// Builder method: set underline.
    pub fn underline(&mut self, underline: bool) -> &mut Self {
        self.underline = Some(underline);
        self
    }

    /// Builder method: set text color.
    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        self.color = Some(color);
        self
    }
}

/// Two-stop linear gradient.
///
/// `angle` is measured in degrees counter-clockwise from the horizontal, so
/// 90 runs bottom-to-top. The stops sit at 0% (`start`) and 100% (`end`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub angle: f64,
    pub start: RGBColor,
    pub end: RGBColor,
}

impl LinearGradient {
    pub fn new(angle: f64, start: RGBColor, end: RGBColor) -> Self {
        Self { angle, start, end }
    }

    /// Clockwise angle in 60000ths of a degree, as stored in `a:lin/@ang`.
    pub fn drawingml_angle(&self) -> i64 {
        let clockwise = (360.0 - self.angle).rem_euclid(360.0);
        (clockwise * 60_000.0).round() as i64 % 21_600_000
    }

    /// Inverse of [`drawingml_angle`](Self::drawingml_angle).
    pub fn angle_from_drawingml(ang: i64) -> f64 {
        let clockwise = ang as f64 / 60_000.0;
        (360.0 - clockwise).rem_euclid(360.0)
    }

    /// Stops as (position in 1000ths of a percent, color).
    pub fn stops(&self) -> [(u32, RGBColor); 2] {
        [(0, self.start), (100_000, self.end)]
    }
}

/// Shape fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid(RGBColor),
    Gradient(LinearGradient),
}

/// Position and size of a slide element, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl BoundingBox {
    /// Create a bounding box, rejecting negative components.
    pub fn new(left: Emu, top: Emu, width: Emu, height: Emu) -> Result<Self> {
        for (label, value) in [
            ("left", left),
            ("top", top),
            ("width", width),
            ("height", height),
        ] {
            if value < 0 {
                return Err(OoxmlError::InvalidGeometry(format!(
                    "{} must be non-negative, got {}",
                    label, value
                )));
            }
        }
        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    #[inline]
    pub fn right(&self) -> Emu {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> Emu {
        self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::inches;

    #[test]
    fn test_preset_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_preset(kind.preset()), Some(kind));
        }
        assert_eq!(ShapeKind::from_preset("flowChartProcess"), None);
    }

    #[test]
    fn test_gradient_angles() {
        let g = |angle| LinearGradient::new(angle, RGBColor::BLACK, RGBColor::WHITE);
        assert_eq!(g(0.0).drawingml_angle(), 0);
        assert_eq!(g(90.0).drawingml_angle(), 16_200_000);
        assert_eq!(g(45.0).drawingml_angle(), 18_900_000);
        assert_eq!(g(135.0).drawingml_angle(), 13_500_000);

        for angle in [0.0, 45.0, 90.0, 135.0] {
            let ang = g(angle).drawingml_angle();
            assert_eq!(LinearGradient::angle_from_drawingml(ang), angle);
        }
    }

    #[test]
    fn test_gradient_has_two_stops() {
        let stops = LinearGradient::new(45.0, RGBColor::BLACK, RGBColor::WHITE).stops();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0], (0, RGBColor::BLACK));
        assert_eq!(stops[1], (100_000, RGBColor::WHITE));
    }

    #[test]
    fn test_bounding_box_rejects_negative() {
        assert!(BoundingBox::new(0, 0, inches(1.0), inches(1.0)).is_ok());
        let err = BoundingBox::new(0, 0, -1, 10).unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidGeometry(ref s) if s.contains("width")));
    }

    #[test]
    fn test_text_format_builder() {
        let mut format = TextFormat::default();
        assert!(format.is_empty());
        format.size(18.0).bold(true).color(RGBColor::WHITE);
        assert_eq!(format.size, Some(18.0));
        assert_eq!(format.bold, Some(true));
        assert_eq!(format.italic, None);
        assert!(!format.is_empty());
    }
}
