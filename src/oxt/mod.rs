//! LibreOffice extension package (`.oxt`) assembly.
//!
//! An `.oxt` file is a ZIP archive holding:
//!
//! - `META-INF/manifest.xml`: installable parts of the package
//! - `description.xml`: identifier, version, host requirements and icons
//! - `Addons.xcu`: menu entries and toolbar images
//! - `desc_en.txt`: description shown by the extension manager
//! - the icon folder and the Python component sources
//!
//! # Example
//!
//! ```no_run
//! use lomenu::config::ExtensionConfig;
//! use lomenu::oxt::{BuildPaths, Packager};
//!
//! # fn main() -> lomenu::Result<()> {
//! let packager = Packager::new(ExtensionConfig::lomenu(), BuildPaths::for_project("."));
//! let oxt = packager.build()?;
//! println!("Created {}", oxt.display());
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod constants;
pub mod content;
pub mod icons;
pub mod manifest;
pub mod package;
pub mod pipeline;
pub mod workspace;
mod xml;

pub use archive::{ArchiveEntry, OxtWriter, archive_workspace, collect_entries};
pub use content::{FileContent, PackageFile, PackageRoot, generate_descriptor_files};
pub use icons::{decode_icons, encode_icon, encode_icon_file, materialize_icons};
pub use manifest::{Manifest, ManifestEntry};
pub use package::OxtPackage;
pub use pipeline::{BuildPaths, Packager, generate_extension, generate_extension_in};
pub use workspace::{BuildWorkspace, copy_folder, remove_workspace};
