//! Package writer for OPC packages.
//!
//! Collects parts and their relationships in memory and serializes them to a
//! ZIP container with `[Content_Types].xml` as the first member.

use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::rel::Relationships;
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Partname of the package itself, used as the source of package relationships.
pub const PACKAGE_URI: &str = "/";

/// Member name of the content types part.
pub const CONTENT_TYPES_URI: &str = "[Content_Types].xml";

/// Package writer that serializes parts to a ZIP file.
///
/// # Example
///
/// ```no_run
/// use pptx_fixtures::ooxml::opc::PackageWriter;
/// use pptx_fixtures::ooxml::opc::constants::content_type as ct;
///
/// let mut writer = PackageWriter::new();
/// writer.add_part("/ppt/presProps.xml", ct::PML_PRES_PROPS, b"<p:presentationPr/>");
/// let bytes = writer.finish()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct PackageWriter {
    /// Members in insertion order: (member name, blob)
    members: Vec<(String, Vec<u8>)>,
    content_types: ContentTypesItem,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            content_types: ContentTypesItem::new(),
        }
    }

    /// Add a part under an absolute partname such as `/ppt/slides/slide1.xml`.
    pub fn add_part(&mut self, partname: &str, content_type: &str, blob: &[u8]) {
        self.content_types.add_content_type(partname, content_type);
        self.members.push((membername(partname).to_string(), blob.to_vec()));
    }

    /// Add the relationships part belonging to `source_partname`.
    ///
    /// Empty collections are skipped, matching what Office writes.
    pub fn add_rels(&mut self, source_partname: &str, rels: &Relationships) {
        if rels.is_empty() {
            return;
        }
        self.members
            .push((rels_membername(source_partname), rels.to_xml().into_bytes()));
    }

    /// Number of members added so far, not counting `[Content_Types].xml`.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Serialize all parts to ZIP bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        zip.start_file(CONTENT_TYPES_URI, deflated())?;
        zip.write_all(self.content_types.to_xml().as_bytes())?;

        for (name, blob) in &self.members {
            tracing::debug!(member = %name, bytes = blob.len(), "writing package member");
            zip.start_file(name.as_str(), deflated())?;
            zip.write_all(blob)?;
        }

        Ok(zip.finish()?.into_inner())
    }

    /// Serialize and write to `path`, replacing any existing file.
    pub fn write<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let bytes = self.finish()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// Every OOXML member is deflated and stamped with the ZIP epoch (1980-01-01),
/// so identical input gives identical bytes.
#[inline]
fn deflated() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default())
}

/// Member name inside the ZIP for an absolute partname (leading slash dropped).
#[inline]
pub fn membername(partname: &str) -> &str {
    partname.trim_start_matches('/')
}

/// Member name of the relationships part for `source_partname`.
///
/// `/ppt/slides/slide1.xml` maps to `ppt/slides/_rels/slide1.xml.rels` and the
/// package itself (`/`) maps to `_rels/.rels`.
pub fn rels_membername(source_partname: &str) -> String {
    if source_partname == PACKAGE_URI {
        return "_rels/.rels".to_string();
    }
    let member = membername(source_partname);
    match member.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", member),
    }
}

/// Helper for building `[Content_Types].xml` content.
///
/// Manages Default and Override elements for content type mapping. Both maps
/// are ordered so the output is stable.
#[derive(Debug, Default)]
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();

        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// Add a content type for a part.
    ///
    /// Uses a default mapping if the extension matches a well-known type,
    /// otherwise uses an override for the specific partname.
    fn add_content_type(&mut self, partname: &str, content_type: &str) {
        let ext = partname.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");

        if Self::is_default_content_type(ext, content_type) {
            self.defaults
                .insert(ext.to_string(), content_type.to_string());
        } else {
            self.overrides
                .insert(partname.to_string(), content_type.to_string());
        }
    }

    fn is_default_content_type(ext: &str, content_type: &str) -> bool {
        matches!(
            (ext, content_type),
            ("rels", ct::OPC_RELATIONSHIPS)
                | ("xml", ct::XML)
                | ("png", "image/png")
                | ("jpg", "image/jpeg")
                | ("jpeg", "image/jpeg")
                | ("gif", "image/gif")
        )
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Types xmlns=""#);
        xml.push_str(namespace::OPC_CONTENT_TYPES);
        xml.push_str(r#"">"#);

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;
    use std::io::Read;

    #[test]
    fn test_rels_membername() {
        assert_eq!(rels_membername("/"), "_rels/.rels");
        assert_eq!(
            rels_membername("/ppt/presentation.xml"),
            "ppt/_rels/presentation.xml.rels"
        );
        assert_eq!(
            rels_membername("/ppt/slides/slide3.xml"),
            "ppt/slides/_rels/slide3.xml.rels"
        );
    }

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypesItem::new();
        cti.add_content_type("/ppt/slides/slide1.xml", ct::PML_SLIDE);
        cti.add_content_type("/ppt/media/image1.png", "image/png");

        let xml = cti.to_xml();

        assert!(xml.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(xml.contains(r#"<Default Extension="rels""#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
        assert!(!xml.contains(r#"PartName="/ppt/media/image1.png""#));
    }

    #[test]
    fn test_finish_produces_zip_with_content_types_first() {
        let mut writer = PackageWriter::new();
        let mut rels = Relationships::new();
        rels.add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
        writer.add_rels(PACKAGE_URI, &rels);
        writer.add_part(
            "/ppt/presentation.xml",
            ct::PML_PRESENTATION_MAIN,
            b"<p:presentation/>",
        );
        writer.add_rels("/ppt/presentation.xml", &Relationships::new());
        assert_eq!(writer.len(), 2);

        let bytes = writer.finish().unwrap();
        assert_eq!(&bytes[..4], b"PK\x03\x04");

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 3);
        assert_eq!(archive.by_index(0).unwrap().name(), CONTENT_TYPES_URI);

        let mut content = String::new();
        archive
            .by_name("ppt/presentation.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "<p:presentation/>");
        assert!(archive.by_name("_rels/.rels").is_ok());
    }
}
