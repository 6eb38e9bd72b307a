//! Embedded icon payloads.

use serde::{Deserialize, Serialize};

/// An icon file carried inside the configuration as base64 text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEntry {
    /// File name inside the icon folder (e.g. `BTN_SET_FONTS.png`)
    pub name: String,
    /// Base64 encoded file content
    pub data: String,
}

/// Ordered mapping from icon file name to base64 payload.
///
/// Inserting an existing name replaces its payload in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconSet {
    entries: Vec<IconEntry>,
}

impl IconSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, data: impl Into<String>) {
        let name = name.into();
        let data = data.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.data = data,
            None => self.entries.push(IconEntry { name, data }),
        }
    }

    pub fn with(mut self, name: impl Into<String>, data: impl Into<String>) -> Self {
        self.insert(name, data);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.data.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut icons = IconSet::new().with("a.png", "AAAA").with("b.png", "BBBB");
        icons.insert("a.png", "CCCC");
        assert_eq!(icons.len(), 2);
        assert_eq!(icons.get("a.png"), Some("CCCC"));
        assert_eq!(icons.names().collect::<Vec<_>>(), vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_missing_icon() {
        let icons = IconSet::new();
        assert!(icons.is_empty());
        assert!(!icons.contains("x.png"));
    }
}
