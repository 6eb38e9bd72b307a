//! Extension configuration.
//!
//! Everything the packaging pipeline needs to know about the extension lives
//! in one immutable [`ExtensionConfig`] value that is passed explicitly into
//! the generators. The shipped extension is described by
//! [`ExtensionConfig::lomenu`]; other tables (test fixtures, forks) can be
//! loaded from YAML.
//!
//! # Example
//!
//! ```rust
//! use lomenu::config::ExtensionConfig;
//!
//! let yaml = r#"
//! identity:
//!   name: demo
//!   version: "1.2.0"
//!   author: acme
//! buttons:
//!   - key: BTN_HELLO
//!     labels:
//!       EN: Hello
//!       RU: Привет
//! "#;
//! let config = ExtensionConfig::from_yaml_str(yaml).unwrap();
//! assert_eq!(config.identity.identifier(), "org.acme.extensions.demo");
//! assert_eq!(config.buttons[0].label("RU"), Some("Привет"));
//! ```

mod assets;
mod button;
mod icons;
mod identity;
mod production;

pub use button::{Language, UIButtonSpec};
pub use icons::{IconEntry, IconSet};
pub use identity::{BUILD_TOKEN_FORMAT, BaseVersion, ExtensionDescriptor, ExtensionIdentity, Version};
pub use production::{
    BTN_CHECK_PAIRS, BTN_COLOR_DIGITS, BTN_CONFIGURE, BTN_DOTTED_UNDERLINE, BTN_INSERT_ACCENT,
    BTN_SET_FONTS, BTN_SWITCH_TOOLBAR, EXTENSION_AUTHOR, EXTENSION_NAME, EXTENSION_VERSION,
};

use crate::common::{Error, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Folder holding the icon files inside the package.
pub const DEFAULT_ICON_FOLDER: &str = "icons";

/// Document module in which the menu entries are active.
pub const DEFAULT_MENU_CONTEXT: &str = "com.sun.star.text.TextDocument";

fn default_languages() -> Vec<Language> {
    vec![Language::english(), Language::russian()]
}

fn default_icon_folder() -> String {
    DEFAULT_ICON_FOLDER.to_string()
}

fn default_menu_context() -> String {
    DEFAULT_MENU_CONTEXT.to_string()
}

/// Complete, immutable description of an extension build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionConfig {
    pub identity: ExtensionIdentity,
    /// Supported languages; every button should carry a label for each
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,
    /// Buttons in menu order
    #[serde(default)]
    pub buttons: Vec<UIButtonSpec>,
    #[serde(default)]
    pub icons: IconSet,
    #[serde(default = "default_icon_folder")]
    pub icon_folder: String,
    #[serde(default = "default_menu_context")]
    pub menu_context: String,
}

/// A configured value the generated XML will be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverageGap {
    MissingLabel { button: String, language: String },
    MissingIcon { button: String, icon: String },
}

impl fmt::Display for CoverageGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverageGap::MissingLabel { button, language } => {
                write!(f, "button '{}' has no {} label", button, language)
            },
            CoverageGap::MissingIcon { button, icon } => {
                write!(f, "button '{}' refers to missing icon '{}'", button, icon)
            },
        }
    }
}

impl ExtensionConfig {
    /// Parse and validate a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_saphyr::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::at_path(path, e))?;
        Self::from_yaml_str(&text)
    }

    /// Serialize the configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| Error::Other(format!("Failed to serialize configuration to YAML: {}", e)))
    }

    /// Stamp the identity with the build time `at`.
    pub fn descriptor_at(&self, at: &DateTime<Local>) -> ExtensionDescriptor {
        ExtensionDescriptor::stamped(&self.identity, at)
    }

    /// Stamp the identity with the current local time.
    pub fn descriptor_now(&self) -> ExtensionDescriptor {
        self.descriptor_at(&Local::now())
    }

    pub fn button(&self, key: &str) -> Option<&UIButtonSpec> {
        self.buttons.iter().find(|b| b.key == key)
    }

    /// Buttons the runtime places on the toolbar, in menu order.
    pub fn toolbar_buttons(&self) -> impl Iterator<Item = &UIButtonSpec> {
        self.buttons.iter().filter(|b| b.on_toolbar)
    }

    /// Dispatch URLs of the toolbar buttons.
    pub fn toolbar_commands(&self) -> Vec<String> {
        let id = self.identity.identifier();
        self.toolbar_buttons().map(|b| b.command_url(&id)).collect()
    }

    /// Check structural consistency.
    ///
    /// Missing labels and icons are not errors here; see [`Self::coverage_gaps`].
    pub fn validate(&self) -> Result<()> {
        let identity = &self.identity;
        if identity.name.trim().is_empty() {
            return Err(Error::InvalidConfig("Extension name is empty".to_string()));
        }
        if !is_plain_file_name(&identity.name) {
            return Err(Error::InvalidConfig(format!(
                "Extension name '{}' must not contain path separators",
                identity.name
            )));
        }
        if identity.author.trim().is_empty() {
            return Err(Error::InvalidConfig("Extension author is empty".to_string()));
        }
        for (field, text) in [
            ("name", identity.name.as_str()),
            ("author", identity.author.as_str()),
            ("title", identity.title.as_deref().unwrap_or_default()),
        ] {
            if has_control_chars(text) {
                return Err(Error::InvalidConfig(format!(
                    "Extension {} contains control characters",
                    field
                )));
            }
        }

        if self.languages.is_empty() {
            return Err(Error::InvalidConfig("No languages configured".to_string()));
        }
        let mut codes = HashSet::new();
        for language in &self.languages {
            if !codes.insert(language.code.as_str()) {
                return Err(Error::InvalidConfig(format!("Duplicate language '{}'", language.code)));
            }
        }

        let mut keys = HashSet::new();
        for button in &self.buttons {
            if button.key.trim().is_empty() {
                return Err(Error::InvalidConfig("Button with empty key".to_string()));
            }
            if !keys.insert(button.key.as_str()) {
                return Err(Error::InvalidConfig(format!("Duplicate button '{}'", button.key)));
            }
            if has_control_chars(&button.key) {
                return Err(Error::InvalidConfig(format!(
                    "Button key {:?} contains control characters",
                    button.key
                )));
            }
            for (language, label) in &button.labels {
                if has_control_chars(label) {
                    return Err(Error::InvalidConfig(format!(
                        "Button '{}' has a {} label with control characters",
                        button.key, language
                    )));
                }
            }
        }

        for name in self.icons.names() {
            if !is_plain_file_name(name) {
                return Err(Error::InvalidConfig(format!("Invalid icon file name '{}'", name)));
            }
        }

        if !is_plain_file_name(&self.icon_folder)
            || self.icon_folder == crate::oxt::constants::FOLDER_META_INF
        {
            return Err(Error::InvalidConfig(format!("Invalid icon folder '{}'", self.icon_folder)));
        }

        Ok(())
    }

    /// Labels and icons the generated descriptors will lack.
    pub fn coverage_gaps(&self) -> Vec<CoverageGap> {
        let mut gaps = Vec::new();
        for button in &self.buttons {
            for language in &self.languages {
                if button.label(&language.code).is_none() {
                    gaps.push(CoverageGap::MissingLabel {
                        button: button.key.clone(),
                        language: language.code.clone(),
                    });
                }
            }
            let icon = button.icon_file();
            if !self.icons.contains(&icon) {
                gaps.push(CoverageGap::MissingIcon {
                    button: button.key.clone(),
                    icon,
                });
            }
        }
        gaps
    }
}

/// Control characters XML 1.0 cannot carry (everything but tab and line breaks).
fn has_control_chars(text: &str) -> bool {
    text.chars().any(|c| c.is_control() && !matches!(c, '\t' | '\n' | '\r'))
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> ExtensionConfig {
        ExtensionConfig {
            identity: ExtensionIdentity::new("demo", "acme", BaseVersion::new(1, 0, 0)),
            languages: default_languages(),
            buttons: vec![
                UIButtonSpec::new("BTN_ONE").with_label("EN", "One").with_label("RU", "Один"),
                UIButtonSpec::new("BTN_TWO").with_label("EN", "Two"),
            ],
            icons: IconSet::new().with("BTN_ONE.png", "AAAA"),
            icon_folder: default_icon_folder(),
            menu_context: default_menu_context(),
        }
    }

    #[test]
    fn test_coverage_gaps() {
        let gaps = fixture().coverage_gaps();
        assert_eq!(
            gaps,
            vec![
                CoverageGap::MissingLabel {
                    button: "BTN_TWO".to_string(),
                    language: "RU".to_string(),
                },
                CoverageGap::MissingIcon {
                    button: "BTN_TWO".to_string(),
                    icon: "BTN_TWO.png".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_buttons() {
        let mut config = fixture();
        config.buttons.push(UIButtonSpec::new("BTN_ONE"));
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_icon_paths() {
        let mut config = fixture();
        config.icons.insert("../evil.png", "AAAA");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_meta_inf_icon_folder() {
        let mut config = fixture();
        config.icon_folder = "META-INF".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_control_characters() {
        let mut config = fixture();
        config.buttons[0] = UIButtonSpec::new("BTN_ONE").with_label("EN", "a\u{1}b");
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = fixture();
        config.identity.title = Some("bell\u{7}".to_string());
        assert!(config.validate().is_err());

        let mut config = fixture();
        config.buttons[0] = UIButtonSpec::new("BTN_ONE").with_label("EN", "two\nlines\tok");
        config.validate().unwrap();
    }

    #[test]
    fn test_yaml_defaults() {
        let yaml = r#"
identity:
  name: demo
  version: "2.0.1"
  author: acme
"#;
        let config = ExtensionConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.identity.version, BaseVersion::new(2, 0, 1));
        assert_eq!(config.identity.component_entry, "src/interface.py");
        assert_eq!(config.languages, default_languages());
        assert!(config.buttons.is_empty());
        assert_eq!(config.icon_folder, "icons");
    }

    #[test]
    fn test_yaml_icons_and_order() {
        let yaml = r#"
identity:
  name: demo
  version: "1.0.0"
  author: acme
buttons:
  - key: BTN_B
    labels: { EN: B, RU: Б }
  - key: BTN_A
    labels: { EN: A, RU: А }
    on_toolbar: false
icons:
  - name: BTN_B.png
    data: AAAA
"#;
        let config = ExtensionConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.buttons[0].key, "BTN_B");
        assert_eq!(config.buttons[1].key, "BTN_A");
        assert_eq!(config.toolbar_commands(), vec!["service:org.acme.extensions.demo.BTN_B?execute"]);
        assert_eq!(config.icons.get("BTN_B.png"), Some("AAAA"));
    }

    #[test]
    fn test_yaml_rejects_bad_version() {
        let yaml = "identity:\n  name: demo\n  version: \"1.x\"\n  author: acme\n";
        assert!(ExtensionConfig::from_yaml_str(yaml).is_err());
    }
}
