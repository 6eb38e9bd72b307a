//! Extension manifest (META-INF/manifest.xml).
//!
//! The manifest lists the installable parts of the package: the add-on
//! configuration data and the Python UNO component. The installer ignores
//! every file that is not listed here.

use super::constants::{
    ADDONS_FILE, MEDIA_TYPE_CONFIGURATION_DATA, MEDIA_TYPE_PYTHON_COMPONENT, NS_MANIFEST,
};
use super::xml::{finish_document, new_document, write_error};
use crate::common::{Error, Result};
use crate::config::ExtensionIdentity;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Extension manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

/// Entry in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub full_path: String,
    pub media_type: String,
}

impl Manifest {
    /// Manifest registering the add-on configuration and the component entry point.
    pub fn for_extension(identity: &ExtensionIdentity) -> Self {
        let mut manifest = Self::default();
        manifest.add(ADDONS_FILE, MEDIA_TYPE_CONFIGURATION_DATA);
        manifest.add(&identity.component_entry, MEDIA_TYPE_PYTHON_COMPONENT);
        manifest
    }

    pub fn add(&mut self, full_path: &str, media_type: &str) {
        self.entries.push(ManifestEntry {
            full_path: full_path.to_string(),
            media_type: media_type.to_string(),
        });
    }

    /// Generate the manifest.xml content
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = new_document()?;
        writer
            .create_element("manifest:manifest")
            .with_attribute(("xmlns:manifest", NS_MANIFEST))
            .write_inner_content(|w| {
                for entry in &self.entries {
                    w.create_element("manifest:file-entry")
                        .with_attribute(("manifest:media-type", entry.media_type.as_str()))
                        .with_attribute(("manifest:full-path", entry.full_path.as_str()))
                        .write_empty()?;
                }
                Ok(())
            })
            .map_err(|e| write_error("manifest", e))?;
        finish_document(writer)
    }

    /// Parse manifest XML content
    pub fn parse(xml_content: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml_content);
        let mut entries = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                    if e.name().as_ref() == b"manifest:file-entry"
                        && let Some(entry) = Self::parse_file_entry(e)?
                    {
                        entries.push(entry);
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::InvalidFormat(format!("XML parsing error: {}", e))),
                _ => {},
            }
        }

        Ok(Self { entries })
    }

    /// Parse a single file-entry element
    fn parse_file_entry(e: &BytesStart) -> Result<Option<ManifestEntry>> {
        let mut full_path = String::new();
        let mut media_type = String::new();

        for attr_result in e.attributes() {
            let attr = attr_result
                .map_err(|_| Error::InvalidFormat("Invalid attribute in manifest".to_string()))?;
            let value = attr
                .unescape_value()
                .map_err(|_| Error::InvalidFormat("Invalid attribute value in manifest".to_string()))?
                .into_owned();

            match attr.key.as_ref() {
                b"manifest:full-path" => full_path = value,
                b"manifest:media-type" => media_type = value,
                _ => {},
            }
        }

        if full_path.is_empty() {
            Ok(None)
        } else {
            Ok(Some(ManifestEntry {
                full_path,
                media_type,
            }))
        }
    }

    /// Get media type for a path
    pub fn get_media_type(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.full_path == path)
            .map(|entry| entry.media_type.as_str())
    }

    /// Get all paths in manifest
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.full_path.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseVersion;

    #[test]
    fn test_manifest_for_extension() {
        let identity = ExtensionIdentity::new("lomenu", "torrua", BaseVersion::new(0, 0, 1));
        let manifest = Manifest::for_extension(&identity);
        assert_eq!(manifest.paths().collect::<Vec<_>>(), vec!["Addons.xcu", "src/interface.py"]);
        assert_eq!(
            manifest.get_media_type("src/interface.py"),
            Some("application/vnd.sun.star.uno-component;type=Python")
        );
    }

    #[test]
    fn test_manifest_xml_parses_back() {
        let identity = ExtensionIdentity::new("lomenu", "torrua", BaseVersion::new(0, 0, 1));
        let manifest = Manifest::for_extension(&identity);
        let xml = manifest.to_xml().unwrap();

        assert!(xml.contains(r#"xmlns:manifest="http://openoffice.org/2001/manifest""#));
        assert!(xml.contains(
            r#"<manifest:file-entry manifest:media-type="application/vnd.sun.star.configuration-data" manifest:full-path="Addons.xcu"/>"#
        ));
        assert_eq!(Manifest::parse(&xml).unwrap(), manifest);
    }

    #[test]
    fn test_parse_ignores_entries_without_path() {
        let xml = r#"<manifest:manifest xmlns:manifest="http://openoffice.org/2001/manifest">
  <manifest:file-entry manifest:media-type="text/xml"/>
  <manifest:file-entry manifest:media-type="text/xml" manifest:full-path="a.xml"/>
</manifest:manifest>"#;
        let manifest = Manifest::parse(xml).unwrap();
        assert_eq!(manifest.entries.len(), 1);
        assert_eq!(manifest.get_media_type("a.xml"), Some("text/xml"));
    }
}
