/// Relationship-related objects for OPC packages.
///
/// Each part that points at other parts owns a `Relationships` collection,
/// serialized next to it as `_rels/<part>.rels`.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// A single relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference relative to the source part's directory
    target_ref: String,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
        }
    }

    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type URI.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Ordered collection of relationships belonging to one source part.
///
/// IDs are allocated sequentially (`rId1`, `rId2`, ...) in insertion order,
/// which keeps generated packages deterministic.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its newly allocated rId.
    pub fn add(&mut self, reltype: &str, target_ref: &str) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship::new(
            r_id.clone(),
            reltype.to_string(),
            target_ref.to_string(),
        ));
        r_id
    }

    /// Look up a relationship by rId.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// First relationship of the given type.
    pub fn first_of_type(&self, reltype: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.reltype == reltype)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to the XML of a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        let _ = write!(xml, r#"<Relationships xmlns="{}">"#, namespace::OPC_RELATIONSHIPS);

        for rel in &self.rels {
            let _ = write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(&rel.r_id),
                escape_xml(&rel.reltype),
                escape_xml(&rel.target_ref)
            );
        }

        xml.push_str("</Relationships>");

        xml
    }

    /// Parse the XML of a `.rels` part.
    #[cfg(feature = "reader")]
    pub fn from_xml(xml: &[u8]) -> crate::ooxml::error::Result<Self> {
        use crate::common::xml::unescape_xml;
        use quick_xml::Reader;
        use quick_xml::events::Event;

        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut rels = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                    let mut r_id = String::new();
                    let mut reltype = String::new();
                    let mut target_ref = String::new();

                    for attr in e.attributes().flatten() {
                        let value = unescape_xml(&String::from_utf8_lossy(&attr.value));
                        match attr.key.as_ref() {
                            b"Id" => r_id = value,
                            b"Type" => reltype = value,
                            b"Target" => target_ref = value,
                            _ => {},
                        }
                    }

                    rels.push(Relationship::new(r_id, reltype, target_ref));
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(Self { rels })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_sequential_ids() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml"), "rId1");
        assert_eq!(rels.add(rt::SLIDE, "slides/slide1.xml"), "rId2");
        assert_eq!(rels.len(), 2);
        assert_eq!(rels.get("rId2").map(|r| r.target_ref()), Some("slides/slide1.xml"));
        assert_eq!(
            rels.first_of_type(rt::SLIDE_MASTER).map(|r| r.r_id()),
            Some("rId1")
        );
    }

    #[test]
    fn test_to_xml() {
        let mut rels = Relationships::new();
        rels.add(rt::THEME, "theme/theme1.xml");
        let xml = rels.to_xml();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="theme/theme1.xml"/>"#));
        assert!(xml.ends_with("</Relationships>"));
    }

    #[cfg(feature = "reader")]
    #[test]
    fn test_parse_written_rels() {
        let mut rels = Relationships::new();
        rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        rels.add(rt::THEME, "../theme/theme1.xml");

        let parsed = Relationships::from_xml(rels.to_xml().as_bytes()).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.get("rId2").unwrap().reltype(), rt::THEME);
        assert_eq!(
            parsed.get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout1.xml"
        );
    }
}
