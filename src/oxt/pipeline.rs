//! Build orchestration.
//!
//! A build validates the configuration, then runs these steps in order and
//! stops at the first error:
//!
//! 1. create the workspace tree
//! 2. copy the static component sources into it
//! 3. decode the icons
//! 4. write the generated descriptors
//! 5. pack the workspace into `builds/<name>_<version>.oxt`
//! 6. remove the workspace
//!
//! Step 6 also runs when an earlier step fails.

use super::archive::archive_workspace;
use super::constants::{BUILDS_DIR, EXTENSION_SOURCE_DIR};
use super::content::generate_descriptor_files;
use super::icons::materialize_icons;
use super::workspace::{BuildWorkspace, copy_folder};
use crate::common::{Error, Result};
use crate::config::{ExtensionConfig, ExtensionDescriptor};
use std::path::{Path, PathBuf};

/// Filesystem locations used by a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    pub project_dir: PathBuf,
    /// Static component sources copied verbatim into the package
    pub source_tree: PathBuf,
    /// Output folder for finished packages
    pub builds_dir: PathBuf,
    /// Folder in which the scratch workspace is created
    pub workspace_parent: PathBuf,
}

impl BuildPaths {
    /// Standard layout below `project_dir`, with the workspace in the system temp dir.
    pub fn for_project(project_dir: impl Into<PathBuf>) -> Self {
        let project_dir = project_dir.into();
        Self {
            source_tree: project_dir.join(EXTENSION_SOURCE_DIR),
            builds_dir: project_dir.join(BUILDS_DIR),
            workspace_parent: std::env::temp_dir(),
            project_dir,
        }
    }

    /// Standard layout below the current directory.
    pub fn discover() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| Error::Other(format!("Cannot determine current directory: {}", e)))?;
        Ok(Self::for_project(cwd))
    }

    pub fn with_workspace_parent(mut self, parent: impl Into<PathBuf>) -> Self {
        self.workspace_parent = parent.into();
        self
    }
}

/// Assembles `.oxt` packages for one configuration.
#[derive(Debug, Clone)]
pub struct Packager {
    config: ExtensionConfig,
    paths: BuildPaths,
}

impl Packager {
    pub fn new(config: ExtensionConfig, paths: BuildPaths) -> Self {
        Self { config, paths }
    }

    pub fn config(&self) -> &ExtensionConfig {
        &self.config
    }

    pub fn paths(&self) -> &BuildPaths {
        &self.paths
    }

    /// Build a package stamped with the current local time.
    pub fn build(&self) -> Result<PathBuf> {
        self.build_at(&self.config.descriptor_now())
    }

    /// Build a package for an explicit descriptor.
    pub fn build_at(&self, descriptor: &ExtensionDescriptor) -> Result<PathBuf> {
        let config = &self.config;
        config.validate()?;
        tracing::info!(
            extension = %descriptor.name,
            version = %descriptor.version,
            "Build extension"
        );

        let gaps = config.coverage_gaps();
        if !gaps.is_empty() {
            tracing::warn!(count = gaps.len(), "Button table is incomplete, descriptors will hold blank values");
        }

        let workspace = BuildWorkspace::create(&self.paths.workspace_parent, &config.icon_folder)?;
        copy_folder(&self.paths.source_tree, workspace.root())?;
        materialize_icons(config, workspace.root())?;
        workspace.write_files(&generate_descriptor_files(config, descriptor)?)?;
        let archive = archive_workspace(
            workspace.root(),
            &self.paths.builds_dir,
            &descriptor.archive_file_name(),
        )?;
        workspace.cleanup();

        tracing::info!(path = %archive.display(), "Extension ready");
        Ok(archive)
    }
}

/// Build the shipped extension from the project in the current directory.
///
/// Returns the path of the created `.oxt` file.
pub fn generate_extension() -> Result<PathBuf> {
    Packager::new(ExtensionConfig::lomenu(), BuildPaths::discover()?).build()
}

/// Build the shipped extension from the project at `project_dir`.
pub fn generate_extension_in(project_dir: &Path) -> Result<PathBuf> {
    Packager::new(ExtensionConfig::lomenu(), BuildPaths::for_project(project_dir)).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseVersion, ExtensionIdentity, IconSet, Version};
    use crate::oxt::OxtPackage;
    use crate::oxt::icons::encode_icon;
    use std::fs;

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("extension/src")).unwrap();
        fs::write(dir.path().join("extension/src/interface.py"), "print('hi')\n").unwrap();
        dir
    }

    fn packager(project: &Path, scratch: &Path) -> Packager {
        let mut config = ExtensionConfig::lomenu();
        config.icons = IconSet::new().with("icon_extension_logo.png", encode_icon(b"logo"));
        Packager::new(
            config,
            BuildPaths::for_project(project).with_workspace_parent(scratch),
        )
    }

    fn descriptor(packager: &Packager, build: &str) -> ExtensionDescriptor {
        let identity = &packager.config().identity;
        ExtensionDescriptor::new(identity, Version::new(identity.version, build), 2024)
    }

    #[test]
    fn test_build_paths_layout() {
        let paths = BuildPaths::for_project("/work/lomenu");
        assert_eq!(paths.source_tree, PathBuf::from("/work/lomenu/extension"));
        assert_eq!(paths.builds_dir, PathBuf::from("/work/lomenu/builds"));
        assert_eq!(paths.workspace_parent, std::env::temp_dir());
    }

    #[test]
    fn test_build_writes_package_and_cleans_up() {
        let project = project();
        let scratch = tempfile::tempdir().unwrap();
        let packager = packager(project.path(), scratch.path());

        let path = packager.build_at(&descriptor(&packager, "01020304")).unwrap();
        assert_eq!(path, project.path().join("builds/lomenu_0.0.1.01020304.oxt"));
        assert_eq!(fs::read_dir(scratch.path()).unwrap().count(), 0);

        let package = OxtPackage::open(&path).unwrap();
        assert!(package.has_file("src/interface.py"));
        assert!(package.has_file("icons/icon_extension_logo.png"));
        assert_eq!(package.read_file("icons/icon_extension_logo.png").unwrap(), b"logo");
        assert_eq!(package.read_text("desc_en.txt").unwrap(), "© torrua, 2024");
        assert_eq!(
            package.manifest().unwrap().paths().collect::<Vec<_>>(),
            vec!["Addons.xcu", "src/interface.py"]
        );
    }

    #[test]
    fn test_missing_source_tree_fails_and_cleans_up() {
        let project = tempfile::tempdir().unwrap();
        let scratch = tempfile::tempdir().unwrap();
        let packager = packager(project.path(), scratch.path());

        let err = packager.build_at(&descriptor(&packager, "01020304")).unwrap_err();
        assert!(matches!(err, Error::SourceTreeMissing(_)));
        assert_eq!(fs::read_dir(scratch.path()).unwrap().count(), 0);
        assert!(!project.path().join("builds").exists());
    }

    #[test]
    fn test_invalid_label_fails_before_workspace() {
        let project = project();
        let scratch = tempfile::tempdir().unwrap();
        let mut packager = packager(project.path(), scratch.path());
        packager.config.buttons[0] = packager.config.buttons[0].clone().with_label("EN", "a\u{1}b");

        let err = packager.build_at(&descriptor(&packager, "01020304")).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert_eq!(fs::read_dir(scratch.path()).unwrap().count(), 0);
        assert!(!project.path().join("builds").exists());
    }

    #[test]
    fn test_identity_version_flows_into_file_name() {
        let project = project();
        let scratch = tempfile::tempdir().unwrap();
        let mut packager = packager(project.path(), scratch.path());
        packager.config.identity = ExtensionIdentity::new("demo", "acme", BaseVersion::new(2, 1, 0));

        let path = packager.build_at(&descriptor(&packager, "31235959")).unwrap();
        assert_eq!(path.file_name().unwrap(), "demo_2.1.0.31235959.oxt");
    }
}
