//! User facing actions and their localization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A supported UI language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    /// Key used in the label tables (e.g. `EN`)
    pub code: String,
    /// Locale written to `xml:lang` (e.g. `en-US`)
    pub locale: String,
}

impl Language {
    pub fn new(code: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            locale: locale.into(),
        }
    }

    pub fn english() -> Self {
        Self::new("EN", "en-US")
    }

    pub fn russian() -> Self {
        Self::new("RU", "ru-RU")
    }
}

fn default_on_toolbar() -> bool {
    true
}

/// One user invokable action: a menu entry, an image binding and
/// (optionally) a toolbar button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UIButtonSpec {
    pub key: String,
    /// Label per language code
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    /// Icon file name; `<key>.png` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether the runtime places this action on the toolbar
    #[serde(default = "default_on_toolbar")]
    pub on_toolbar: bool,
}

impl UIButtonSpec {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            labels: BTreeMap::new(),
            icon: None,
            on_toolbar: true,
        }
    }

    pub fn with_label(mut self, language: &str, label: impl Into<String>) -> Self {
        self.labels.insert(language.to_string(), label.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Keep the action in the menu but off the toolbar.
    pub fn menu_only(mut self) -> Self {
        self.on_toolbar = false;
        self
    }

    pub fn label(&self, language_code: &str) -> Option<&str> {
        self.labels.get(language_code).map(String::as_str)
    }

    pub fn icon_file(&self) -> String {
        self.icon.clone().unwrap_or_else(|| format!("{}.png", self.key))
    }

    /// UNO implementation name: `<extension-id>.<key>`.
    pub fn service_name(&self, extension_id: &str) -> String {
        format!("{}.{}", extension_id, self.key)
    }

    /// Dispatch URL: `service:<extension-id>.<key>?execute`.
    pub fn command_url(&self, extension_id: &str) -> String {
        format!("service:{}?execute", self.service_name(extension_id))
    }
}
