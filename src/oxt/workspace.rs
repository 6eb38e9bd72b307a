//! Scratch directory mirroring the package layout.
//!
//! A [`BuildWorkspace`] owns a randomly named directory. The directory is
//! removed when the workspace is dropped, so every exit path of a build
//! cleans up after itself. Removal is best effort: failures are logged and
//! never replace the error that ended the build.

use super::constants::FOLDER_META_INF;
use super::content::PackageFile;
use crate::common::{Error, Result, generate_workspace_name};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MAX_NAME_ATTEMPTS: usize = 8;

/// Ephemeral staging directory for one build.
#[derive(Debug)]
pub struct BuildWorkspace {
    root: PathBuf,
    icon_folder: String,
    removed: bool,
}

impl BuildWorkspace {
    /// Create a fresh workspace below `parent` and lay out its folders.
    pub fn create(parent: &Path, icon_folder: &str) -> Result<Self> {
        fs::create_dir_all(parent).map_err(|e| Error::at_path(parent, e))?;

        let mut attempts = 0;
        let root = loop {
            let candidate = parent.join(generate_workspace_name());
            match fs::create_dir(&candidate) {
                Ok(()) => break candidate,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists && attempts < MAX_NAME_ATTEMPTS => {
                    attempts += 1;
                },
                Err(e) => return Err(Error::at_path(&candidate, e)),
            }
        };

        let workspace = Self {
            root,
            icon_folder: icon_folder.to_string(),
            removed: false,
        };
        workspace.prepare_tree()?;
        tracing::info!(path = %workspace.root.display(), "Create temporary tree");
        Ok(workspace)
    }

    /// Create the workspace root, `META-INF` and the icon folder.
    ///
    /// Existing directories are left untouched.
    pub fn prepare_tree(&self) -> Result<()> {
        for dir in [self.root.clone(), self.meta_inf_dir(), self.icon_dir()] {
            fs::create_dir_all(&dir).map_err(|e| Error::at_path(&dir, e))?;
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn meta_inf_dir(&self) -> PathBuf {
        self.root.join(FOLDER_META_INF)
    }

    pub fn icon_dir(&self) -> PathBuf {
        self.root.join(&self.icon_folder)
    }

    /// Write generated files into the workspace, replacing existing ones.
    pub fn write_files(&self, files: &[PackageFile]) -> Result<Vec<PathBuf>> {
        files
            .iter()
            .map(|file| {
                let path = file.write_to(&self.root)?;
                tracing::info!(path = %path.display(), "Create file");
                Ok(path)
            })
            .collect()
    }

    /// Remove the workspace now.
    pub fn cleanup(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if !self.removed {
            self.removed = true;
            remove_workspace(&self.root);
        }
    }
}

impl Drop for BuildWorkspace {
    fn drop(&mut self) {
        self.remove();
    }
}

/// Delete a directory tree, best effort.
///
/// Returns `true` when nothing is left at `path`.
pub fn remove_workspace(path: &Path) -> bool {
    match fs::remove_dir_all(path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "Remove temporary tree");
            true
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => true,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove temporary tree");
            false
        },
    }
}

/// Recursively copy `source` into `dest`, overwriting existing files.
///
/// Returns the number of files copied.
pub fn copy_folder(source: &Path, dest: &Path) -> Result<usize> {
    if !source.is_dir() {
        return Err(Error::SourceTreeMissing(source.to_path_buf()));
    }
    fs::create_dir_all(dest).map_err(|e| Error::at_path(dest, e))?;

    let mut copied = 0;
    for entry in WalkDir::new(source).min_depth(1).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source).map_err(|_| {
            Error::Other(format!("Path '{}' escapes source tree", entry.path().display()))
        })?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::at_path(&target, e))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::at_path(parent, e))?;
            }
            fs::copy(entry.path(), &target).map_err(|e| Error::at_path(entry.path(), e))?;
            tracing::debug!(from = %entry.path().display(), to = %target.display(), "Copy file");
            copied += 1;
        }
    }

    tracing::info!(source = %source.display(), files = copied, "Copy source tree");
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oxt::content::PackageRoot;

    #[test]
    fn test_create_lays_out_tree() {
        let parent = tempfile::tempdir().unwrap();
        let workspace = BuildWorkspace::create(parent.path(), "icons").unwrap();

        let name = workspace.root().file_name().unwrap().to_str().unwrap().to_string();
        assert_eq!(name.len(), 8);
        assert!(name.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(workspace.meta_inf_dir().is_dir());
        assert!(workspace.icon_dir().is_dir());

        workspace.prepare_tree().unwrap();
    }

    #[test]
    fn test_drop_removes_tree() {
        let parent = tempfile::tempdir().unwrap();
        let root = {
            let workspace = BuildWorkspace::create(parent.path(), "icons").unwrap();
            fs::write(workspace.root().join("file.txt"), "x").unwrap();
            workspace.root().to_path_buf()
        };
        assert!(!root.exists());
    }

    #[test]
    fn test_cleanup_tolerates_missing_tree() {
        let parent = tempfile::tempdir().unwrap();
        let workspace = BuildWorkspace::create(parent.path(), "icons").unwrap();
        fs::remove_dir_all(workspace.root()).unwrap();
        workspace.cleanup();
        assert!(remove_workspace(&parent.path().join("nope")));
    }

    #[test]
    fn test_write_files() {
        let parent = tempfile::tempdir().unwrap();
        let workspace = BuildWorkspace::create(parent.path(), "icons").unwrap();
        let files = vec![
            PackageFile::text(PackageRoot::MetaInf, "manifest.xml", "<m/>"),
            PackageFile::text(PackageRoot::Root, "desc_en.txt", "text"),
        ];
        let written = workspace.write_files(&files).unwrap();
        assert_eq!(written[0], workspace.meta_inf_dir().join("manifest.xml"));
        assert_eq!(fs::read_to_string(&written[1]).unwrap(), "text");
    }

    #[test]
    fn test_copy_folder_overwrites() {
        let source = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        fs::create_dir_all(source.path().join("src/pkg")).unwrap();
        fs::write(source.path().join("src/pkg/a.py"), "new").unwrap();
        fs::write(source.path().join("top.txt"), "top").unwrap();
        fs::create_dir_all(dest.path().join("src/pkg")).unwrap();
        fs::write(dest.path().join("src/pkg/a.py"), "old").unwrap();

        let copied = copy_folder(source.path(), dest.path()).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(dest.path().join("src/pkg/a.py")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dest.path().join("top.txt")).unwrap(), "top");
    }

    #[test]
    fn test_copy_folder_missing_source() {
        let dest = tempfile::tempdir().unwrap();
        let missing = dest.path().join("absent");
        let err = copy_folder(&missing, dest.path()).unwrap_err();
        assert!(matches!(err, Error::SourceTreeMissing(path) if path == missing));
    }
}
