//! Reading built `.oxt` packages.
//!
//! Used to verify build output and by the `inspect` command.

use super::constants::MANIFEST_PATH;
use super::manifest::Manifest;
use crate::common::{Error, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// An extension package (ZIP file)
pub struct OxtPackage<R> {
    archive: RefCell<zip::ZipArchive<R>>,
}

impl OxtPackage<BufReader<File>> {
    /// Open a package from disk
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::at_path(path, e))?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read + Seek> OxtPackage<R> {
    /// Open a package from a reader
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = zip::ZipArchive::new(reader)
            .map_err(|e| Error::InvalidFormat(format!("Invalid ZIP archive: {}", e)))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Entry names in archive order
    pub fn file_names(&self) -> Vec<String> {
        self.archive.borrow().file_names().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.archive.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a file exists in the package
    pub fn has_file(&self, path: &str) -> bool {
        self.archive.borrow().index_for_name(path).is_some()
    }

    /// Read a file from the package by path
    pub fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::InvalidFormat(format!("File not found: {}", path)))?;

        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        Ok(content)
    }

    /// Read a UTF-8 text file from the package
    pub fn read_text(&self, path: &str) -> Result<String> {
        String::from_utf8(self.read_file(path)?)
            .map_err(|_| Error::InvalidFormat(format!("File {} is not UTF-8", path)))
    }

    /// Parse `META-INF/manifest.xml`
    pub fn manifest(&self) -> Result<Manifest> {
        Manifest::parse(&self.read_text(MANIFEST_PATH)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oxt::archive::OxtWriter;
    use std::io::Cursor;

    fn sample() -> OxtPackage<Cursor<Vec<u8>>> {
        let mut writer = OxtWriter::in_memory();
        writer
            .add_file(
                "META-INF/manifest.xml",
                br#"<manifest:manifest xmlns:manifest="http://openoffice.org/2001/manifest">
  <manifest:file-entry manifest:media-type="application/vnd.sun.star.configuration-data" manifest:full-path="Addons.xcu"/>
</manifest:manifest>"#,
            )
            .unwrap();
        writer.add_file("Addons.xcu", b"<oor:component-data/>").unwrap();
        OxtPackage::from_reader(Cursor::new(writer.finish_to_bytes().unwrap())).unwrap()
    }

    #[test]
    fn test_list_and_read() {
        let package = sample();
        assert_eq!(package.file_names().len(), 2);
        assert_eq!(package.len(), 2);
        assert!(package.has_file("Addons.xcu"));
        assert!(!package.has_file("missing.xml"));
        assert_eq!(package.read_text("Addons.xcu").unwrap(), "<oor:component-data/>");
        assert!(package.read_file("missing.xml").is_err());
    }

    #[test]
    fn test_manifest() {
        let manifest = sample().manifest().unwrap();
        assert_eq!(
            manifest.get_media_type("Addons.xcu"),
            Some("application/vnd.sun.star.configuration-data")
        );
    }

    #[test]
    fn test_rejects_non_zip() {
        assert!(OxtPackage::from_reader(Cursor::new(b"not a zip".to_vec())).is_err());
    }
}
