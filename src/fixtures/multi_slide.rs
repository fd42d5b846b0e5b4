//! `multi-slide.pptx`: three slides for navigation tests.

use super::bbox;
use crate::common::RGBColor;
use crate::common::error::Result;
use crate::ooxml::pptx::{Alignment, Fill, MutablePresentation, ShapeKind};

const CLOSING_TEXT: &str = "This is the final slide of the presentation. \
It contains text content to verify multi-slide navigation works correctly.";

pub fn build() -> Result<MutablePresentation> {
    let mut pres = MutablePresentation::new();

    // Title slide
    let title = pres.add_slide().add_text_box(bbox(1.0, 2.5, 8.0, 1.5)?);
    let frame = title.text_frame_mut();
    let p = frame.first_paragraph();
    p.set_text("Multi-Slide Presentation");
    p.font_mut().size(44.0).bold(true);
    p.set_alignment(Alignment::Center);
    let p = frame.add_paragraph();
    p.set_text("Testing slide navigation");
    p.font_mut().size(24.0);
    p.set_alignment(Alignment::Center);

    // Content slide
    let slide = pres.add_slide();
    let heading = slide.add_text_box(bbox(0.5, 0.5, 9.0, 0.8)?);
    let p = heading.text_frame_mut().first_paragraph();
    p.set_text("Slide 2: Content Slide");
    p.font_mut().size(32.0).bold(true);

    slide
        .add_shape(ShapeKind::Rectangle, bbox(1.0, 2.0, 3.0, 2.0)?)
        .set_fill(Fill::Solid(RGBColor::new(0x41, 0x69, 0xE1)))
        .set_text("Shape 1");
    slide
        .add_shape(ShapeKind::Ellipse, bbox(5.0, 2.0, 3.0, 2.0)?)
        .set_fill(Fill::Solid(RGBColor::new(0x32, 0xCD, 0x32)))
        .set_text("Shape 2");

    // Closing slide
    let slide = pres.add_slide();
    let heading = slide.add_text_box(bbox(0.5, 0.5, 9.0, 0.8)?);
    let p = heading.text_frame_mut().first_paragraph();
    p.set_text("Slide 3: Final Slide");
    p.font_mut().size(32.0).bold(true);

    let body = slide.add_text_box(bbox(1.0, 2.0, 8.0, 3.0)?);
    let frame = body.text_frame_mut();
    frame.set_word_wrap(true);
    let p = frame.first_paragraph();
    p.set_text(CLOSING_TEXT);
    p.font_mut().size(18.0);

    Ok(pres)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_slides() {
        let pres = build().unwrap();
        let counts: Vec<_> = pres.slides().iter().map(|s| s.shape_count()).collect();
        assert_eq!(counts, [1, 3, 2]);
    }

    #[test]
    fn test_closing_text_is_one_sentence_pair() {
        assert!(
            CLOSING_TEXT.starts_with("This is the final slide of the presentation. It contains")
        );
        assert!(CLOSING_TEXT.ends_with("works correctly."));
    }
}
