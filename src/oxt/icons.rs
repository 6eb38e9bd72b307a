//! Icon materialization.
//!
//! Icons travel inside the configuration as base64 text. Every payload is
//! decoded before the first file is written, so a corrupt payload leaves no
//! icon behind and fails the build.

use super::content::{PackageFile, PackageRoot};
use crate::common::{Error, Result};
use crate::config::ExtensionConfig;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::{Path, PathBuf};

/// Decode one base64 payload.
///
/// ASCII whitespace anywhere in the payload is ignored, so wrapped output of
/// `base64` tools and YAML block scalars decode as is.
pub fn decode_icon(name: &str, payload: &str) -> Result<Vec<u8>> {
    let compact: String = payload.split_ascii_whitespace().collect();
    STANDARD.decode(compact).map_err(|e| Error::IconDecode {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Encode raw image bytes as a payload suitable for [`crate::config::IconSet`].
pub fn encode_icon(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Read an image file and encode it as a payload.
pub fn encode_icon_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| Error::at_path(path, e))?;
    Ok(encode_icon(&bytes))
}

/// Decode every configured icon into a package file under the icon folder.
pub fn decode_icons(config: &ExtensionConfig) -> Result<Vec<PackageFile>> {
    config
        .icons
        .iter()
        .map(|entry| {
            let bytes = decode_icon(&entry.name, &entry.data)?;
            Ok(PackageFile::binary(
                PackageRoot::Root,
                format!("{}/{}", config.icon_folder, entry.name),
                bytes,
            ))
        })
        .collect()
}

/// Decode every configured icon and write it below `package_root`.
pub fn materialize_icons(config: &ExtensionConfig, package_root: &Path) -> Result<Vec<PathBuf>> {
    let files = decode_icons(config)?;
    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        let path = file.write_to(package_root)?;
        tracing::info!(path = %path.display(), "Create icon file");
        written.push(path);
    }
    Ok(written)
}
