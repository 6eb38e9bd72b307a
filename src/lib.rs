//! lomenu - packaging for the lomenu LibreOffice extension
//!
//! This library assembles the installable `.oxt` bundle of the extension from
//! generated XML descriptors, embedded icons and the static Python component
//! sources.
//!
//! # Features
//!
//! - **Descriptor generation**: manifest, `description.xml`, `Addons.xcu`
//!   and the description text, produced from one [`config::ExtensionConfig`]
//! - **Icon materialization**: embedded base64 images decoded into the package
//! - **Packaging**: deflated archive written atomically to `builds/`
//! - **Inspection**: reading back built packages and their manifest
//!
//! # Example - Building the extension
//!
//! ```no_run
//! # fn main() -> lomenu::Result<()> {
//! // Expects `./extension` to hold the component sources
//! let oxt = lomenu::generate_extension()?;
//! println!("Created {}", oxt.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting a package
//!
//! ```no_run
//! use lomenu::oxt::OxtPackage;
//!
//! # fn main() -> lomenu::Result<()> {
//! let package = OxtPackage::open("builds/lomenu_0.0.1.18093012.oxt")?;
//! for entry in package.manifest()?.entries {
//!     println!("{} ({})", entry.full_path, entry.media_type);
//! }
//! # Ok(())
//! # }
//! ```

/// Error types and shared helpers
pub mod common;

/// Extension identity, button table and icon assets
pub mod config;

/// `.oxt` generation, packing and reading
pub mod oxt;

pub use common::{Error, Result};
pub use config::ExtensionConfig;
pub use oxt::{BuildPaths, Packager, generate_extension};
