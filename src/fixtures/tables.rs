//! `tables.pptx`: a title and a 4x3 table with a filled header row.

use super::bbox;
use crate::common::error::Result;
use crate::common::{RGBColor, inches};
use crate::ooxml::pptx::{Alignment, MutablePresentation};

const HEADERS: [&str; 3] = ["Name", "Department", "Status"];

const DATA: [[&str; 3]; 3] = [
    ["Alice Smith", "Engineering", "Active"],
    ["Bob Johnson", "Marketing", "Active"],
    ["Carol Williams", "Sales", "On Leave"],
];

const HEADER_FILL: RGBColor = RGBColor::new(0x41, 0x69, 0xE1);

pub fn build() -> Result<MutablePresentation> {
    let mut pres = MutablePresentation::new();
    let slide = pres.add_slide();

    let title = slide.add_text_box(bbox(0.5, 0.3, 9.0, 0.6)?);
    let p = title.text_frame_mut().first_paragraph();
    p.set_text("Table Test");
    p.font_mut().size(28.0).bold(true);
    p.set_alignment(Alignment::Center);

    let table = slide.add_table(4, 3, bbox(1.0, 1.2, 8.0, 2.0)?)?;
    for col in 0..3 {
        table.set_column_width(col, inches(2.5))?;
    }

    for (col, header) in HEADERS.into_iter().enumerate() {
        let cell = table.cell_mut(0, col)?;
        cell.set_text(header).set_fill(HEADER_FILL);
        cell.first_paragraph()
            .font_mut()
            .bold(true)
            .color(RGBColor::WHITE);
    }

    for (row, values) in DATA.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            table.cell_mut(row + 1, col)?.set_text(value);
        }
    }

    Ok(pres)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::MutableShape;

    #[test]
    fn test_table_layout() {
        let pres = build().unwrap();
        let shapes = pres.slides()[0].shapes();
        assert_eq!(shapes.len(), 2);

        let MutableShape::Table(table) = &shapes[1] else {
            panic!("expected a table");
        };
        assert_eq!((table.rows(), table.cols()), (4, 3));
        assert_eq!(table.column_widths(), &[inches(2.5); 3]);
        assert_eq!(table.bbox().width, inches(7.5));
        assert_eq!(table.cell(0, 1).unwrap().text(), "Department");
        assert_eq!(table.cell(0, 2).unwrap().fill(), Some(HEADER_FILL));
        assert_eq!(table.cell(3, 2).unwrap().text(), "On Leave");
        assert_eq!(table.cell(1, 0).unwrap().fill(), None);
    }
}
