//! `images.pptx`: a placeholder slide that only carries a note.

use super::bbox;
use crate::common::error::Result;
use crate::ooxml::pptx::{Alignment, MutablePresentation};

pub fn build() -> Result<MutablePresentation> {
    let mut pres = MutablePresentation::new();
    let note = pres.add_slide().add_text_box(bbox(1.0, 2.0, 8.0, 2.0)?);

    let p = note.text_frame_mut().first_paragraph();
    p.set_text("Image test - add images manually or use a sample image");
    p.font_mut().size(24.0);
    p.set_alignment(Alignment::Center);

    Ok(pres)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_note() {
        let pres = build().unwrap();
        assert_eq!(pres.slide_count(), 1);
        assert_eq!(pres.slides()[0].shape_count(), 1);
    }
}
