//! Descriptor file generation.
//!
//! Produces the text of the four generated package files from an
//! [`ExtensionConfig`] and the build's [`ExtensionDescriptor`]. Generation is a
//! pure function: nothing here touches the filesystem, and the only time
//! dependency (version token and copyright year) is carried by the descriptor.
//!
//! Menu entries are numbered `N001`, `N002`, ... in button table order; the
//! host sorts submenu nodes by name, so the table order is the menu order.

use super::constants::{
    ADDONS_FILE, ADDONS_PACKAGE, DESCRIPTION_FILE, DESCRIPTION_TEXT_FILE, MANIFEST_FILE,
    MENU_TARGET, MENU_TITLE_LOCALE, NS_DESCRIPTION, NS_REGISTRY, NS_XLINK, NS_XML_SCHEMA,
    ORIGIN_PLACEHOLDER,
};
use super::manifest::Manifest;
use super::xml::{Value, finish_document, new_document, node, prop, write_error};
use crate::common::{Error, Result};
use crate::config::{ExtensionConfig, ExtensionDescriptor, UIButtonSpec};
use quick_xml::Writer;
use quick_xml::events::BytesText;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const XS_STRING: Option<&str> = Some("xs:string");

/// Destination root of a package file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageRoot {
    /// `META-INF/` (manifest only)
    MetaInf,
    /// Package root
    Root,
}

/// Content of a package file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

/// A file to be written into the package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFile {
    pub root: PackageRoot,
    /// Path below `root`, `/` separated, no leading separator
    pub name: String,
    pub content: FileContent,
}

impl PackageFile {
    pub fn text(root: PackageRoot, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            root,
            name: name.into(),
            content: FileContent::Text(content.into()),
        }
    }

    pub fn binary(root: PackageRoot, name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            root,
            name: name.into(),
            content: FileContent::Binary(content),
        }
    }

    /// Path of the file relative to the package root (`META-INF/manifest.xml`).
    pub fn relative_path(&self) -> String {
        match self.root {
            PackageRoot::MetaInf => format!("{}/{}", super::constants::FOLDER_META_INF, self.name),
            PackageRoot::Root => self.name.clone(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match &self.content {
            FileContent::Text(text) => text.as_bytes(),
            FileContent::Binary(bytes) => bytes,
        }
    }

    /// Write the file below `package_root`, replacing any existing file.
    pub fn write_to(&self, package_root: &Path) -> Result<PathBuf> {
        let relative = self.relative_path();
        if relative.starts_with('/') || relative.split('/').any(|c| c.is_empty() || c == "..") {
            return Err(Error::InvalidFormat(format!("Invalid package path '{}'", relative)));
        }

        let path = relative
            .split('/')
            .fold(package_root.to_path_buf(), |acc, component| acc.join(component));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::at_path(parent, e))?;
        }
        std::fs::write(&path, self.bytes()).map_err(|e| Error::at_path(&path, e))?;
        Ok(path)
    }
}

/// Generate every descriptor file of the package.
pub fn generate_descriptor_files(
    config: &ExtensionConfig,
    descriptor: &ExtensionDescriptor,
) -> Result<Vec<PackageFile>> {
    Ok(vec![
        PackageFile::text(PackageRoot::MetaInf, MANIFEST_FILE, manifest_xml(config)?),
        PackageFile::text(PackageRoot::Root, ADDONS_FILE, addons_xcu(config, descriptor)?),
        PackageFile::text(PackageRoot::Root, DESCRIPTION_FILE, description_xml(config, descriptor)?),
        PackageFile::text(PackageRoot::Root, DESCRIPTION_TEXT_FILE, description_text(descriptor)),
    ])
}

/// `META-INF/manifest.xml`
pub fn manifest_xml(config: &ExtensionConfig) -> Result<String> {
    Manifest::for_extension(&config.identity).to_xml()
}

/// `desc_en.txt`: one copyright line.
pub fn description_text(descriptor: &ExtensionDescriptor) -> String {
    format!("© {}, {}", descriptor.author, descriptor.year)
}

/// `Addons.xcu`: top level menu with one submenu node per button, and the
/// image bindings of every button.
pub fn addons_xcu(config: &ExtensionConfig, descriptor: &ExtensionDescriptor) -> Result<String> {
    let id = descriptor.identifier.as_str();
    let menu_title = format!("~{}", descriptor.name);

    let mut writer = new_document()?;
    writer
        .create_element("oor:component-data")
        .with_attribute(("xmlns:oor", NS_REGISTRY))
        .with_attribute(("xmlns:xs", NS_XML_SCHEMA))
        .with_attribute(("oor:name", "Addons"))
        .with_attribute(("oor:package", ADDONS_PACKAGE))
        .write_inner_content(|w| {
            node(w, "AddonUI", None, |w| {
                node(w, "OfficeMenuBar", None, |w| {
                    node(w, id, Some("replace"), |w| {
                        prop(
                            w,
                            "Title",
                            XS_STRING,
                            &[
                                Value::Empty,
                                Value::Localized {
                                    locale: MENU_TITLE_LOCALE,
                                    text: &menu_title,
                                },
                            ],
                        )?;
                        prop(w, "Target", XS_STRING, &[Value::Text(MENU_TARGET)])?;
                        prop(w, "ImageIdentifier", XS_STRING, &[Value::Empty])?;
                        node(w, "Submenu", None, |w| {
                            for (index, button) in config.buttons.iter().enumerate() {
                                write_menu_node(w, config, id, button, index + 1)?;
                            }
                            Ok(())
                        })
                    })
                })?;
                node(w, "Images", None, |w| {
                    for button in &config.buttons {
                        write_image_node(w, config, id, button)?;
                    }
                    Ok(())
                })
            })
        })
        .map_err(|e| write_error(ADDONS_FILE, e))?;

    finish_document(writer)
}

/// Name of the n-th (1-based) submenu node.
pub fn menu_node_name(number: usize) -> String {
    format!("N{:03}", number)
}

fn write_menu_node<W: Write>(
    w: &mut Writer<W>,
    config: &ExtensionConfig,
    id: &str,
    button: &UIButtonSpec,
    number: usize,
) -> io::Result<()> {
    let command = button.command_url(id);

    let mut titles = vec![Value::Empty];
    for language in &config.languages {
        let text = button.label(&language.code).unwrap_or_else(|| {
            tracing::warn!(button = %button.key, language = %language.code, "Missing label, writing empty title");
            ""
        });
        titles.push(Value::Localized {
            locale: &language.locale,
            text,
        });
    }

    node(w, &menu_node_name(number), Some("replace"), |w| {
        prop(w, "URL", XS_STRING, &[Value::Text(&command)])?;
        prop(w, "Title", XS_STRING, &titles)?;
        prop(w, "Target", XS_STRING, &[Value::Text(MENU_TARGET)])?;
        prop(w, "Context", XS_STRING, &[Value::Text(&config.menu_context)])
    })
}

fn write_image_node<W: Write>(
    w: &mut Writer<W>,
    config: &ExtensionConfig,
    id: &str,
    button: &UIButtonSpec,
) -> io::Result<()> {
    let icon = button.icon_file();
    if !config.icons.contains(&icon) {
        tracing::warn!(button = %button.key, icon = %icon, "Button refers to an icon that is not packaged");
    }
    let command = button.command_url(id);
    let icon_url = format!("{}/{}/{}", ORIGIN_PLACEHOLDER, config.icon_folder, icon);

    node(w, &button.service_name(id), Some("replace"), |w| {
        prop(w, "URL", None, &[Value::Text(&command)])?;
        node(w, "UserDefinedImages", None, |w| {
            prop(w, "ImageSmallURL", XS_STRING, &[Value::Text(&icon_url)])?;
            prop(w, "ImageBigURL", XS_STRING, &[Value::Text(&icon_url)])
        })
    })
}

/// `description.xml`: installer metadata.
pub fn description_xml(config: &ExtensionConfig, descriptor: &ExtensionDescriptor) -> Result<String> {
    let identity = &config.identity;
    let version = descriptor.version.to_string();
    let host_name = format!("OpenOffice.org {}", identity.min_host_version);
    let logo = format!("{}/{}", config.icon_folder, identity.logo_icon);

    let mut writer = new_document()?;
    writer
        .create_element("description")
        .with_attribute(("xmlns", NS_DESCRIPTION))
        .with_attribute(("xmlns:d", NS_DESCRIPTION))
        .with_attribute(("xmlns:xlink", NS_XLINK))
        .write_inner_content(|w| {
            w.create_element("version")
                .with_attribute(("value", version.as_str()))
                .write_empty()?;
            w.create_element("identifier")
                .with_attribute(("value", descriptor.identifier.as_str()))
                .write_empty()?;
            w.create_element("platform")
                .with_attribute(("value", identity.platform.as_str()))
                .write_empty()?;
            w.create_element("dependencies").write_inner_content(|w| {
                w.create_element("OpenOffice.org-minimal-version")
                    .with_attribute(("value", identity.min_host_version.as_str()))
                    .with_attribute(("d:name", host_name.as_str()))
                    .write_empty()?;
                Ok(())
            })?;
            w.create_element("display-name").write_inner_content(|w| {
                w.create_element("name")
                    .with_attribute(("lang", "en"))
                    .write_text_content(BytesText::new(&descriptor.title))?;
                Ok(())
            })?;
            w.create_element("icon").write_inner_content(|w| {
                w.create_element("default")
                    .with_attribute(("xlink:href", logo.as_str()))
                    .write_empty()?;
                w.create_element("high-contrast")
                    .with_attribute(("xlink:href", logo.as_str()))
                    .write_empty()?;
                Ok(())
            })?;
            w.create_element("extension-description").write_inner_content(|w| {
                w.create_element("src")
                    .with_attribute(("xlink:href", DESCRIPTION_TEXT_FILE))
                    .with_attribute(("lang", "en"))
                    .write_empty()?;
                Ok(())
            })?;
            Ok(())
        })
        .map_err(|e| write_error(DESCRIPTION_FILE, e))?;

    finish_document(writer)
}
