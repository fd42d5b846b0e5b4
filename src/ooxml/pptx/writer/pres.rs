/// Presentation writer for PPTX.
use super::push_int;
use super::slide::MutableSlide;
use crate::common::unit::{Emu, inches};
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{PACKAGE_URI, PackageWriter, Relationships};
use crate::ooxml::pptx::template;
use std::path::Path;

const PRESENTATION_URI: &str = "/ppt/presentation.xml";
const SLIDE_MASTER_URI: &str = "/ppt/slideMasters/slideMaster1.xml";
const SLIDE_LAYOUT_URI: &str = "/ppt/slideLayouts/slideLayout1.xml";
const THEME_URI: &str = "/ppt/theme/theme1.xml";

/// A mutable PowerPoint presentation for writing.
///
/// Every presentation carries one blank master and layout; slides only hold
/// the shapes added to them.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: Emu,
    /// Slide height in EMUs
    slide_height: Emu,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: inches(10.0),
            slide_height: inches(7.5),
        }
    }

    /// Append a blank slide.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let index = self.slides.len();
        self.slides
            .push(MutableSlide::new(template::FIRST_SLIDE_ID + index as u32));
        &mut self.slides[index]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut MutableSlide> {
        self.slides.get_mut(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> Emu {
        self.slide_width
    }

    /// Set the slide width in EMUs.
    pub fn set_slide_width(&mut self, width: Emu) {
        self.slide_width = width;
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> Emu {
        self.slide_height
    }

    /// Set the slide height in EMUs.
    pub fn set_slide_height(&mut self, height: Emu) {
        self.slide_height = height;
    }

    /// Generate presentation.xml content.
    ///
    /// `slide_rel_ids` holds the presentation relationship id of each slide.
    pub(crate) fn generate_presentation_xml(&self, slide_rel_ids: &[String]) -> String {
        let mut xml = template::presentation_xml_prefix();
        xml.reserve(512 + self.slides.len() * 48);

        // The master is always the presentation part's rId1
        xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id=""#);
        push_int(&mut xml, template::SLIDE_MASTER_ID);
        xml.push_str(r#"" r:id="rId1"/></p:sldMasterIdLst>"#);

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                xml.push_str(r#"<p:sldId id=""#);
                push_int(&mut xml, slide.slide_id());
                xml.push_str(r#"" r:id=""#);
                xml.push_str(rel_id);
                xml.push_str(r#""/>"#);
            }
            xml.push_str("</p:sldIdLst>");
        }

        xml.push_str(r#"<p:sldSz cx=""#);
        push_int(&mut xml, self.slide_width);
        xml.push_str(r#"" cy=""#);
        push_int(&mut xml, self.slide_height);
        xml.push_str(r#""/><p:notesSz cx=""#);
        push_int(&mut xml, template::NOTES_WIDTH);
        xml.push_str(r#"" cy=""#);
        push_int(&mut xml, template::NOTES_HEIGHT);
        xml.push_str(r#""/></p:presentation>"#);

        xml
    }

    /// Assemble every part of the package.
    fn package(&self) -> PackageWriter {
        let mut writer = PackageWriter::new();

        let mut pkg_rels = Relationships::new();
        pkg_rels.add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
        pkg_rels.add(rt::CORE_PROPERTIES, "docProps/core.xml");
        pkg_rels.add(rt::EXTENDED_PROPERTIES, "docProps/app.xml");
        writer.add_rels(PACKAGE_URI, &pkg_rels);

        writer.add_part(
            "/docProps/core.xml",
            ct::OPC_CORE_PROPERTIES,
            template::default_core_props_xml().as_bytes(),
        );
        writer.add_part(
            "/docProps/app.xml",
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(self.slides.len()).as_bytes(),
        );

        let mut pres_rels = Relationships::new();
        pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        pres_rels.add(rt::PRES_PROPS, "presProps.xml");
        pres_rels.add(rt::VIEW_PROPS, "viewProps.xml");
        pres_rels.add(rt::THEME, "theme/theme1.xml");
        pres_rels.add(rt::TABLE_STYLES, "tableStyles.xml");
        let slide_rel_ids: Vec<String> = (1..=self.slides.len())
            .map(|n| pres_rels.add(rt::SLIDE, &format!("slides/slide{}.xml", n)))
            .collect();

        writer.add_part(
            PRESENTATION_URI,
            ct::PML_PRESENTATION_MAIN,
            self.generate_presentation_xml(&slide_rel_ids).as_bytes(),
        );
        writer.add_rels(PRESENTATION_URI, &pres_rels);

        let mut master_rels = Relationships::new();
        master_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master_rels.add(rt::THEME, "../theme/theme1.xml");
        writer.add_part(
            SLIDE_MASTER_URI,
            ct::PML_SLIDE_MASTER,
            template::default_slide_master_xml().as_bytes(),
        );
        writer.add_rels(SLIDE_MASTER_URI, &master_rels);

        let mut layout_rels = Relationships::new();
        layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        writer.add_part(
            SLIDE_LAYOUT_URI,
            ct::PML_SLIDE_LAYOUT,
            template::blank_slide_layout_xml().as_bytes(),
        );
        writer.add_rels(SLIDE_LAYOUT_URI, &layout_rels);

        writer.add_part(
            THEME_URI,
            ct::OFC_THEME,
            template::default_theme_xml().as_bytes(),
        );
        writer.add_part(
            "/ppt/presProps.xml",
            ct::PML_PRES_PROPS,
            template::default_pres_props_xml().as_bytes(),
        );
        writer.add_part(
            "/ppt/viewProps.xml",
            ct::PML_VIEW_PROPS,
            template::default_view_props_xml().as_bytes(),
        );
        writer.add_part(
            "/ppt/tableStyles.xml",
            ct::PML_TABLE_STYLES,
            template::default_table_styles_xml().as_bytes(),
        );

        let mut slide_rels = Relationships::new();
        slide_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        for (index, slide) in self.slides.iter().enumerate() {
            let partname = format!("/ppt/slides/slide{}.xml", index + 1);
            writer.add_part(&partname, ct::PML_SLIDE, slide.to_xml().as_bytes());
            writer.add_rels(&partname, &slide_rels);
        }

        writer
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.package().finish()
    }

    /// Save the presentation to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.package().write(path)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}
