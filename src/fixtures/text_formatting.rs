//! `text-formatting.pptx`: run styles, colors, sizes and two plain lists.

use super::bbox;
use crate::common::RGBColor;
use crate::common::error::Result;
use crate::ooxml::pptx::{Alignment, MutablePresentation};

const COLORS: [(&str, RGBColor); 5] = [
    ("Red ", RGBColor::new(0xFF, 0x00, 0x00)),
    ("Green ", RGBColor::new(0x00, 0x80, 0x00)),
    ("Blue ", RGBColor::new(0x00, 0x00, 0xFF)),
    ("Orange ", RGBColor::new(0xFF, 0xA5, 0x00)),
    ("Purple", RGBColor::new(0x80, 0x00, 0x80)),
];

const SIZES: [u32; 5] = [12, 18, 24, 36, 48];

const BULLETS: [&str; 3] = ["First bullet item", "Second bullet item", "Third bullet item"];

// Numbering is literal text, not auto-numbering
const NUMBERED: [&str; 3] = [
    "1. First numbered item",
    "2. Second numbered item",
    "3. Third numbered item",
];

pub fn build() -> Result<MutablePresentation> {
    let mut pres = MutablePresentation::new();
    let slide = pres.add_slide();

    let title = slide.add_text_box(bbox(0.5, 0.3, 9.0, 0.8)?);
    let p = title.text_frame_mut().first_paragraph();
    p.set_alignment(Alignment::Center);
    p.add_run("Text Formatting Test")
        .font_mut()
        .size(36.0)
        .bold(true)
        .color(RGBColor::new(0x33, 0x33, 0x33));

    let styles = slide.add_text_box(bbox(0.5, 1.2, 4.0, 0.5)?);
    let p = styles.text_frame_mut().first_paragraph();
    p.add_run("Bold ").font_mut().bold(true).size(18.0);
    p.add_run("Italic ").font_mut().italic(true).size(18.0);
    p.add_run("Underline ").font_mut().underline(true).size(18.0);
    // No strike attribute; the run only carries its size
    p.add_run("Strikethrough").font_mut().size(18.0);

    let colors = slide.add_text_box(bbox(0.5, 1.8, 8.0, 0.5)?);
    let p = colors.text_frame_mut().first_paragraph();
    for (text, color) in COLORS {
        p.add_run(text).font_mut().color(color).size(18.0);
    }

    let sizes = slide.add_text_box(bbox(0.5, 2.4, 8.0, 1.0)?);
    let p = sizes.text_frame_mut().first_paragraph();
    for size in SIZES {
        p.add_run(&format!("{}pt ", size))
            .font_mut()
            .size(f64::from(size));
    }

    for (left, items) in [(0.5, BULLETS), (5.0, NUMBERED)] {
        let list = slide.add_text_box(bbox(left, 3.8, 4.0, 2.0)?);
        let frame = list.text_frame_mut();
        frame.set_word_wrap(true);
        for (i, item) in items.into_iter().enumerate() {
            let p = if i == 0 {
                frame.first_paragraph()
            } else {
                frame.add_paragraph()
            };
            p.set_text(item);
            p.font_mut().size(16.0);
        }
    }

    Ok(pres)
}
