//! Writing `.oxt` packages (deflated ZIP archives).
//!
//! [`archive_workspace`] walks a staged workspace in sorted order and packs
//! every file under its `/`-joined relative path. The archive is assembled in
//! a temporary file next to its destination and renamed into place only once
//! it is complete.

use super::constants::CACHE_DIR_NAMES;
use crate::common::{Error, Result};
use std::fs::{self, File};
use std::io::{self, Cursor, Seek, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::{DirEntry, WalkDir};
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Builder for `.oxt` packages
///
/// # Examples
///
/// ```
/// # use lomenu::oxt::OxtWriter;
/// # use lomenu::Result;
/// # fn example() -> Result<()> {
/// let mut writer = OxtWriter::in_memory();
/// writer.add_file("description.xml", b"<description/>")?;
/// writer.add_file("icons/logo.png", &[0x89, b'P', b'N', b'G'])?;
/// let bytes = writer.finish_to_bytes()?;
/// assert!(!bytes.is_empty());
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct OxtWriter<W: Write + Seek> {
    zip_writer: ZipWriter<W>,
    options: SimpleFileOptions,
    entries: usize,
}

impl OxtWriter<Cursor<Vec<u8>>> {
    /// Create a package writer that writes to memory
    pub fn in_memory() -> Self {
        Self::new(Cursor::new(Vec::new()))
    }

    /// Finish writing and return the bytes
    pub fn finish_to_bytes(self) -> Result<Vec<u8>> {
        Ok(self.finish()?.into_inner())
    }
}

impl<W: Write + Seek> OxtWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            zip_writer: ZipWriter::new(writer),
            options: SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
            entries: 0,
        }
    }

    /// Add a file to the package under `name`.
    pub fn add_file(&mut self, name: &str, content: &[u8]) -> Result<()> {
        self.start_entry(name)?;
        self.zip_writer.write_all(content)?;
        Ok(())
    }

    /// Stream a file from disk into the package under `name`.
    pub fn add_file_from_disk(&mut self, name: &str, path: &Path) -> Result<()> {
        let mut file = File::open(path).map_err(|e| Error::at_path(path, e))?;
        self.start_entry(name)?;
        io::copy(&mut file, &mut self.zip_writer).map_err(|e| Error::at_path(path, e))?;
        Ok(())
    }

    fn start_entry(&mut self, name: &str) -> Result<()> {
        if name.is_empty() || name.starts_with('/') || name.contains('\\') {
            return Err(Error::InvalidFormat(format!("Invalid entry name '{}'", name)));
        }
        self.zip_writer.start_file(name, self.options)?;
        self.entries += 1;
        Ok(())
    }

    /// Number of entries written so far.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Write the central directory and return the underlying writer.
    pub fn finish(self) -> Result<W> {
        Ok(self.zip_writer.finish()?)
    }
}

/// A file staged for packing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Entry name inside the archive, `/`-separated
    pub name: String,
    /// Location on disk
    pub path: PathBuf,
}

/// Whether a directory holds compiled caches that are never packed.
pub fn is_cache_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| CACHE_DIR_NAMES.contains(&name))
}

/// List every packable file below `root` in deterministic order.
pub fn collect_entries(root: &Path) -> Result<Vec<ArchiveEntry>> {
    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_cache_dir(e));

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        let relative = entry.path().strip_prefix(root).map_err(|_| {
            Error::Other(format!("Path '{}' escapes workspace", entry.path().display()))
        })?;
        entries.push(ArchiveEntry {
            name: entry_name(relative)?,
            path: entry.path().to_path_buf(),
        });
    }
    Ok(entries)
}

fn entry_name(relative: &Path) -> Result<String> {
    let parts = relative
        .components()
        .map(|c| {
            c.as_os_str().to_str().ok_or_else(|| {
                Error::InvalidFormat(format!("Non UTF-8 path '{}'", relative.display()))
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join("/"))
}

/// Pack the workspace at `root` into `builds_dir/file_name`.
///
/// `builds_dir` is created if absent. Nothing appears at the final path
/// unless the archive was written completely.
pub fn archive_workspace(root: &Path, builds_dir: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(builds_dir).map_err(|e| Error::at_path(builds_dir, e))?;
    let entries = collect_entries(root)?;

    let mut temp = NamedTempFile::new_in(builds_dir).map_err(|e| Error::at_path(builds_dir, e))?;
    let mut writer = OxtWriter::new(temp.as_file_mut());
    for entry in &entries {
        writer.add_file_from_disk(&entry.name, &entry.path)?;
        tracing::debug!(entry = %entry.name, "Pack file");
    }
    writer.finish()?;
    temp.as_file().sync_all()?;

    let target = builds_dir.join(file_name);
    temp.persist(&target)?;
    tracing::info!(path = %target.display(), entries = entries.len(), "Create archive");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn stage(root: &Path, files: &[&str]) {
        for file in files {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, file.as_bytes()).unwrap();
        }
    }

    #[test]
    fn test_collect_entries_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        stage(
            dir.path(),
            &[
                "src/interface.py",
                "src/__pycache__/interface.cpython-311.pyc",
                "Addons.xcu",
                "META-INF/manifest.xml",
                "icons/b.png",
                "icons/a.png",
            ],
        );

        let names: Vec<_> = collect_entries(dir.path()).unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![
                "Addons.xcu",
                "META-INF/manifest.xml",
                "icons/a.png",
                "icons/b.png",
                "src/interface.py",
            ]
        );
    }

    #[test]
    fn test_archive_workspace_round_trip() {
        let work = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        stage(work.path(), &["description.xml", "src/lib/util.py"]);
        let builds = out.path().join("builds");

        let path = archive_workspace(work.path(), &builds, "demo_1.0.0.1.oxt").unwrap();
        assert_eq!(path, builds.join("demo_1.0.0.1.oxt"));
        assert_eq!(fs::read_dir(&builds).unwrap().count(), 1);

        let mut archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
        let mut content = String::new();
        archive.by_name("src/lib/util.py").unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "src/lib/util.py");
        assert_eq!(
            archive.by_name("description.xml").unwrap().compression(),
            CompressionMethod::Deflated
        );
    }

    #[test]
    fn test_failed_archive_leaves_nothing() {
        let out = tempfile::tempdir().unwrap();
        let builds = out.path().join("builds");
        let missing = out.path().join("no-workspace");

        assert!(archive_workspace(&missing, &builds, "demo.oxt").is_err());
        assert!(!builds.join("demo.oxt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_mid_write_leaves_no_temp_file() {
        let work = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        stage(work.path(), &["a.txt"]);
        std::os::unix::fs::symlink(work.path().join("gone"), work.path().join("b.txt")).unwrap();
        let builds = out.path().join("builds");

        let err = archive_workspace(work.path(), &builds, "demo.oxt").unwrap_err();
        assert!(matches!(err, Error::PathIo { ref source, .. } if source.kind() == io::ErrorKind::NotFound));
        let left: Vec<_> = fs::read_dir(&builds).unwrap().map(|e| e.unwrap().file_name()).collect();
        assert!(left.is_empty(), "unexpected files in builds: {left:?}");
    }

    #[test]
    fn test_writer_rejects_absolute_names() {
        let mut writer = OxtWriter::in_memory();
        assert!(writer.add_file("/etc/passwd", b"").is_err());
        assert!(writer.is_empty());
        writer.add_file("ok.txt", b"ok").unwrap();
        assert_eq!(writer.len(), 1);
    }
}
