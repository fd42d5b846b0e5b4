/// Tables placed in a graphic frame.
use super::text::{Paragraph, TextFrame};
use super::{push_int, write_solid_fill, write_xfrm};
use crate::common::RGBColor;
use crate::common::unit::Emu;
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::format::BoundingBox;
use crate::ooxml::pptx::template::DEFAULT_TABLE_STYLE_ID;

/// A table cell: text plus an optional solid background.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    text_frame: TextFrame,
    fill: Option<RGBColor>,
}

impl Cell {
    /// Replace the cell's text with one plain run.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.text_frame.set_text(text);
        self
    }

    pub fn text(&self) -> String {
        self.text_frame.text()
    }

    pub fn fill(&self) -> Option<RGBColor> {
        self.fill
    }

    pub fn set_fill(&mut self, color: RGBColor) -> &mut Self {
        self.fill = Some(color);
        self
    }

    pub fn first_paragraph(&mut self) -> &mut Paragraph {
        self.text_frame.first_paragraph()
    }

    pub fn text_frame(&self) -> &TextFrame {
        &self.text_frame
    }

    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        &mut self.text_frame
    }

    fn write_xml(&self, xml: &mut String) {
        xml.push_str("<a:tc>");
        self.text_frame.write_xml(xml, "a:txBody", "", false);
        match self.fill {
            Some(color) => {
                xml.push_str("<a:tcPr>");
                write_solid_fill(xml, color);
                xml.push_str("</a:tcPr>");
            },
            None => xml.push_str("<a:tcPr/>"),
        }
        xml.push_str("</a:tc>");
    }
}

/// A rows x cols grid of cells with per-column widths and per-row heights.
#[derive(Debug, Clone)]
pub struct Table {
    id: u32,
    name: String,
    bbox: BoundingBox,
    rows: usize,
    cols: usize,
    col_widths: Vec<Emu>,
    row_heights: Vec<Emu>,
    /// Row-major
    cells: Vec<Cell>,
}

impl Table {
    /// Create a table whose columns and rows evenly divide `bbox`.
    pub(crate) fn new(id: u32, rows: usize, cols: usize, bbox: BoundingBox) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(OoxmlError::InvalidGeometry(format!(
                "table must have at least one row and column, got {}x{}",
                rows, cols
            )));
        }
        Ok(Self {
            id,
            name: format!("Table {}", id - 1),
            bbox,
            rows,
            cols,
            col_widths: vec![bbox.width / cols as Emu; cols],
            row_heights: vec![bbox.height / rows as Emu; rows],
            cells: vec![Cell::default(); rows * cols],
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn column_widths(&self) -> &[Emu] {
        &self.col_widths
    }

    pub fn row_heights(&self) -> &[Emu] {
        &self.row_heights
    }

    fn check(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(OoxmlError::CellOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell> {
        let index = self.check(row, col)?;
        Ok(&self.cells[index])
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell> {
        let index = self.check(row, col)?;
        Ok(&mut self.cells[index])
    }

    /// Set one column's width; the frame width becomes the sum of all columns.
    pub fn set_column_width(&mut self, col: usize, width: Emu) -> Result<()> {
        if col >= self.cols {
            return Err(OoxmlError::CellOutOfRange {
                row: 0,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if width < 0 {
            return Err(OoxmlError::InvalidGeometry(format!(
                "column width must be non-negative, got {}",
                width
            )));
        }
        self.col_widths[col] = width;
        self.bbox.width = self.col_widths.iter().sum();
        Ok(())
    }

    /// Set one row's height; the frame height becomes the sum of all rows.
    pub fn set_row_height(&mut self, row: usize, height: Emu) -> Result<()> {
        if row >= self.rows {
            return Err(OoxmlError::CellOutOfRange {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if height < 0 {
            return Err(OoxmlError::InvalidGeometry(format!(
                "row height must be non-negative, got {}",
                height
            )));
        }
        self.row_heights[row] = height;
        self.bbox.height = self.row_heights.iter().sum();
        Ok(())
    }

    pub(crate) fn write_xml(&self, xml: &mut String) {
        xml.push_str(r#"<p:graphicFrame><p:nvGraphicFramePr><p:cNvPr id=""#);
        push_int(xml, self.id);
        xml.push_str(r#"" name=""#);
        xml.push_str(&escape_xml(&self.name));
        xml.push_str(r#""/><p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr><p:nvPr/></p:nvGraphicFramePr>"#);
        write_xfrm(xml, "p", &self.bbox);
        xml.push_str(r#"<a:graphic><a:graphicData uri=""#);
        xml.push_str(namespace::DML_TABLE);
        xml.push_str(r#""><a:tbl><a:tblPr firstRow="1" bandRow="1"><a:tableStyleId>"#);
        xml.push_str(DEFAULT_TABLE_STYLE_ID);
        xml.push_str("</a:tableStyleId></a:tblPr><a:tblGrid>");
        for width in &self.col_widths {
            xml.push_str(r#"<a:gridCol w=""#);
            push_int(xml, *width);
            xml.push_str(r#""/>"#);
        }
        xml.push_str("</a:tblGrid>");
        for (row, height) in self.row_heights.iter().enumerate() {
            xml.push_str(r#"<a:tr h=""#);
            push_int(xml, *height);
            xml.push_str(r#"">"#);
            for cell in &self.cells[row * self.cols..(row + 1) * self.cols] {
                cell.write_xml(xml);
            }
            xml.push_str("</a:tr>");
        }
        xml.push_str("</a:tbl></a:graphicData></a:graphic></p:graphicFrame>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::inches;
    use proptest::prelude::*;

    fn table(rows: usize, cols: usize) -> Table {
        let bbox = BoundingBox::new(inches(1.0), inches(1.2), inches(8.0), inches(2.0)).unwrap();
        Table::new(2, rows, cols, bbox).unwrap()
    }

    #[test]
    fn test_default_grid() {
        let t = table(4, 3);
        assert_eq!(t.name(), "Table 1");
        assert_eq!(t.column_widths(), &[inches(8.0) / 3; 3]);
        assert_eq!(t.row_heights(), &[inches(2.0) / 4; 4]);
    }

    #[test]
    fn test_empty_table_rejected() {
        let bbox = BoundingBox::default();
        assert!(matches!(
            Table::new(2, 0, 3, bbox),
            Err(OoxmlError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_cell_out_of_range() {
        let mut t = table(2, 3);
        assert!(t.cell_mut(1, 2).is_ok());
        let err = t.cell_mut(2, 0).unwrap_err();
        assert!(matches!(
            err,
            OoxmlError::CellOutOfRange {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            }
        ));
        assert!(t.cell(0, 3).is_err());
    }

    #[test]
    fn test_column_widths_drive_frame_width() {
        let mut t = table(4, 3);
        for col in 0..3 {
            t.set_column_width(col, inches(2.5)).unwrap();
        }
        assert_eq!(t.bbox().width, inches(7.5));
        assert!(t.set_column_width(3, inches(1.0)).is_err());
    }

    #[test]
    fn test_table_xml() {
        let mut t = table(2, 2);
        t.cell_mut(0, 0)
            .unwrap()
            .set_text("Name")
            .set_fill(RGBColor::new(0x41, 0x69, 0xE1));
        t.cell_mut(1, 1).unwrap().set_text("Active");

        let mut xml = String::new();
        t.write_xml(&mut xml);

        assert!(xml.contains(r#"<p:cNvPr id="2" name="Table 1"/>"#));
        assert!(xml.contains("<p:xfrm>"));
        assert!(xml.contains("{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}"));
        assert_eq!(xml.matches("<a:gridCol ").count(), 2);
        assert_eq!(xml.matches("<a:tr ").count(), 2);
        assert_eq!(xml.matches("<a:tc>").count(), 4);
        assert!(xml.contains(
            r#"<a:tcPr><a:solidFill><a:srgbClr val="4169E1"/></a:solidFill></a:tcPr>"#
        ));
    }

    proptest! {
        #[test]
        fn prop_cell_bounds(rows in 1usize..8, cols in 1usize..8, r in 0usize..10, c in 0usize..10) {
            let mut t = table(rows, cols);
            prop_assert_eq!(t.cell_mut(r, c).is_ok(), r < rows && c < cols);
        }
    }
}
