//! Package layout, media types and XML namespaces of an `.oxt` bundle.
//!
//! # References
//!
//! - LibreOffice extension developer guide: extension manifest and
//!   `description.xml`
//! - Add-on configuration schema `org.openoffice.Office.Addons`

// ============================================================================
// PACKAGE LAYOUT
// ============================================================================

/// File extension of an installable extension package
pub const OXT_EXTENSION: &str = "oxt";

/// Folder holding the manifest
pub const FOLDER_META_INF: &str = "META-INF";

/// Manifest file name inside [`FOLDER_META_INF`]
pub const MANIFEST_FILE: &str = "manifest.xml";

/// Full manifest path inside the package
pub const MANIFEST_PATH: &str = "META-INF/manifest.xml";

/// Add-on menu and image registration
pub const ADDONS_FILE: &str = "Addons.xcu";

/// Installer metadata
pub const DESCRIPTION_FILE: &str = "description.xml";

/// English extension description shown by the extension manager
pub const DESCRIPTION_TEXT_FILE: &str = "desc_en.txt";

/// Output folder under the project root
pub const BUILDS_DIR: &str = "builds";

/// Static component source tree under the project root
pub const EXTENSION_SOURCE_DIR: &str = "extension";

/// Directories holding compiled artifacts, never packed
pub const CACHE_DIR_NAMES: &[&str] = &["__pycache__"];

// ============================================================================
// MEDIA TYPES
// ============================================================================

/// Configuration data (`.xcu`) registered by the manifest
pub const MEDIA_TYPE_CONFIGURATION_DATA: &str = "application/vnd.sun.star.configuration-data";

/// Python UNO component registered by the manifest
pub const MEDIA_TYPE_PYTHON_COMPONENT: &str = "application/vnd.sun.star.uno-component;type=Python";

// ============================================================================
// NAMESPACES
// ============================================================================

pub const NS_MANIFEST: &str = "http://openoffice.org/2001/manifest";
pub const NS_REGISTRY: &str = "http://openoffice.org/2001/registry";
pub const NS_XML_SCHEMA: &str = "http://www.w3.org/2001/XMLSchema";
pub const NS_DESCRIPTION: &str = "http://openoffice.org/extensions/description/2006";
pub const NS_XLINK: &str = "http://www.w3.org/1999/xlink";

// ============================================================================
// ADD-ON REGISTRY VALUES
// ============================================================================

/// Configuration package of the add-on registration
pub const ADDONS_PACKAGE: &str = "org.openoffice.Office";

/// Frame target of every menu entry
pub const MENU_TARGET: &str = "_self";

/// Locale of the top level menu title
pub const MENU_TITLE_LOCALE: &str = "en-US";

/// Placeholder the host replaces with the installed package location
pub const ORIGIN_PLACEHOLDER: &str = "%origin%";
