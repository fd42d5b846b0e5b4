/// Package implementation for PowerPoint presentations.
use crate::common::xml::unescape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::pkgwriter::{membername, rels_membername};
use crate::ooxml::opc::{CONTENT_TYPES_URI, PACKAGE_URI, Relationships};
use crate::ooxml::pptx::presentation::Presentation;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// A PowerPoint (.pptx) package read fully into memory.
///
/// # Examples
///
/// ```rust,no_run
/// use pptx_fixtures::ooxml::pptx::Package;
///
/// let pkg = Package::open("tests/fixtures/tables.pptx")?;
/// let pres = pkg.presentation()?;
/// println!("Presentation has {} slides", pres.slide_count());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Package {
    /// Member name -> bytes
    members: HashMap<String, Vec<u8>>,
    content_types: ContentTypes,
    /// Partname of the main presentation part
    main_partname: String,
}

impl Package {
    /// Open a .pptx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Open a .pptx package held in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }

    /// Create a .pptx package from a reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = zip::ZipArchive::new(reader)?;
        let mut members = HashMap::with_capacity(archive.len());

        for index in 0..archive.len() {
            let mut file = archive.by_index(index)?;
            if file.is_dir() {
                continue;
            }
            let mut blob = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut blob)?;
            members.insert(file.name().to_string(), blob);
        }

        let content_types = members
            .get(CONTENT_TYPES_URI)
            .ok_or_else(|| OoxmlError::PartNotFound(CONTENT_TYPES_URI.to_string()))
            .and_then(|xml| ContentTypes::from_xml(xml))?;

        let pkg_rels = members
            .get(&rels_membername(PACKAGE_URI))
            .ok_or_else(|| OoxmlError::PartNotFound("package relationships".to_string()))
            .and_then(|xml| Relationships::from_xml(xml))?;
        let main_rel = pkg_rels.first_of_type(rt::OFFICE_DOCUMENT).ok_or_else(|| {
            OoxmlError::PartNotFound("main presentation part relationship".to_string())
        })?;
        let main_partname = resolve_partname(PACKAGE_URI, main_rel.target_ref());

        // Support both regular and macro-enabled presentations
        let content_type = content_types.get(&main_partname).unwrap_or_default();
        if content_type != ct::PML_PRESENTATION_MAIN && content_type != ct::PML_PRES_MACRO_MAIN {
            return Err(OoxmlError::InvalidContentType {
                expected: format!(
                    "{} or {}",
                    ct::PML_PRESENTATION_MAIN,
                    ct::PML_PRES_MACRO_MAIN
                ),
                got: content_type.to_string(),
            });
        }

        Ok(Self {
            members,
            content_types,
            main_partname,
        })
    }

    /// Bytes of the part at an absolute partname.
    pub fn part(&self, partname: &str) -> Option<&[u8]> {
        self.members.get(membername(partname)).map(Vec::as_slice)
    }

    /// Like [`part`](Self::part), but a missing part is an error.
    pub fn require_part(&self, partname: &str) -> Result<&[u8]> {
        self.part(partname)
            .ok_or_else(|| OoxmlError::PartNotFound(partname.to_string()))
    }

    /// Content type registered for a partname.
    pub fn content_type(&self, partname: &str) -> Option<&str> {
        self.content_types.get(partname)
    }

    /// Relationships of a part; a part without a `.rels` member has none.
    pub fn relationships(&self, source_partname: &str) -> Result<Relationships> {
        match self.members.get(&rels_membername(source_partname)) {
            Some(xml) => Relationships::from_xml(xml),
            None => Ok(Relationships::new()),
        }
    }

    pub fn main_partname(&self) -> &str {
        &self.main_partname
    }

    /// Number of ZIP members, `[Content_Types].xml` included.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Parse the presentation and all of its slides.
    pub fn presentation(&self) -> Result<Presentation> {
        Presentation::load(self)
    }
}

/// Resolve a relationship target against its source part's directory.
///
/// `("/ppt/slides/slide1.xml", "../slideLayouts/slideLayout1.xml")` resolves
/// to `/ppt/slideLayouts/slideLayout1.xml`.
pub fn resolve_partname(source_partname: &str, target_ref: &str) -> String {
    if target_ref.starts_with('/') {
        return target_ref.to_string();
    }
    let base = match source_partname.rsplit_once('/') {
        Some((dir, _)) => dir,
        None => "",
    };
    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target_ref.split('/') {
        match segment {
            "" | "." => {},
            ".." => {
                segments.pop();
            },
            _ => segments.push(segment),
        }
    }
    format!("/{}", segments.join("/"))
}

/// Parsed `[Content_Types].xml`.
#[derive(Debug, Default)]
struct ContentTypes {
    /// Lower-cased extension -> content type
    defaults: HashMap<String, String>,
    /// Partname -> content type
    overrides: HashMap<String, String>,
}

impl ContentTypes {
    fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut types = Self::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) | Event::Empty(e) => {
                    let mut key = None;
                    let mut content_type = None;
                    for attr in e.attributes().flatten() {
                        let value = unescape_xml(&String::from_utf8_lossy(&attr.value));
                        match attr.key.as_ref() {
                            b"Extension" | b"PartName" => key = Some(value),
                            b"ContentType" => content_type = Some(value),
                            _ => {},
                        }
                    }
                    if let (Some(key), Some(content_type)) = (key, content_type) {
                        match e.local_name().as_ref() {
                            b"Default" => {
                                types.defaults.insert(key.to_ascii_lowercase(), content_type);
                            },
                            b"Override" => {
                                types.overrides.insert(key, content_type);
                            },
                            _ => {},
                        }
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(types)
    }

    fn get(&self, partname: &str) -> Option<&str> {
        if let Some(content_type) = self.overrides.get(partname) {
            return Some(content_type.as_str());
        }
        let ext = partname.rsplit_once('.')?.1.to_ascii_lowercase();
        self.defaults.get(&ext).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::PackageWriter;
    use crate::ooxml::pptx::writer::MutablePresentation;

    #[test]
    fn test_resolve_partname() {
        assert_eq!(
            resolve_partname("/", "ppt/presentation.xml"),
            "/ppt/presentation.xml"
        );
        assert_eq!(
            resolve_partname("/ppt/presentation.xml", "slides/slide2.xml"),
            "/ppt/slides/slide2.xml"
        );
        assert_eq!(
            resolve_partname("/ppt/slides/slide1.xml", "../slideLayouts/slideLayout1.xml"),
            "/ppt/slideLayouts/slideLayout1.xml"
        );
    }

    #[test]
    fn test_open_generated_package() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        let pkg = Package::from_bytes(pres.to_bytes().unwrap()).unwrap();

        assert_eq!(pkg.main_partname(), "/ppt/presentation.xml");
        assert_eq!(pkg.content_type("/ppt/slides/slide1.xml"), Some(ct::PML_SLIDE));
        assert_eq!(
            pkg.content_type("/ppt/_rels/presentation.xml.rels"),
            Some(ct::OPC_RELATIONSHIPS)
        );
        assert!(pkg.part("/ppt/theme/theme1.xml").is_some());
        assert_eq!(pkg.relationships("/ppt/presentation.xml").unwrap().len(), 6);
    }

    #[test]
    fn test_rejects_wrong_main_content_type() {
        let mut rels = Relationships::new();
        rels.add(rt::OFFICE_DOCUMENT, "word/document.xml");
        let mut writer = PackageWriter::new();
        writer.add_rels(PACKAGE_URI, &rels);
        writer.add_part(
            "/word/document.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
            b"<w:document/>",
        );

        let err = Package::from_bytes(writer.finish().unwrap()).unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidContentType { .. }));
    }

    #[test]
    fn test_rejects_non_zip() {
        assert!(matches!(
            Package::from_bytes(b"not a zip".to_vec()),
            Err(OoxmlError::Zip(_))
        ));
    }
}
