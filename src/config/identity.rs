//! Extension identity and versioning.
//!
//! An [`ExtensionIdentity`] is the static part of the package metadata. At the
//! start of every build it is stamped with the current local time, producing
//! an [`ExtensionDescriptor`] whose [`Version`] carries a build token.

use crate::common::{Error, Result};
use chrono::{DateTime, Datelike, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// `strftime` format of the build token: day, hour, minute, second.
pub const BUILD_TOKEN_FORMAT: &str = "%d%H%M%S";

/// Release part of a version (`major.minor.patch`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BaseVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl BaseVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for BaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for BaseVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        if parts.len() != 3 {
            return Err(Error::InvalidConfig(format!(
                "Version '{}' must have the form major.minor.patch",
                s
            )));
        }

        let parse = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| Error::InvalidConfig(format!("Invalid version component '{}' in '{}'", part, s)))
        };

        Ok(Self {
            major: parse(parts[0])?,
            minor: parse(parts[1])?,
            patch: parse(parts[2])?,
        })
    }
}

impl TryFrom<String> for BaseVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<BaseVersion> for String {
    fn from(value: BaseVersion) -> Self {
        value.to_string()
    }
}

/// Full package version: `major.minor.patch.build`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub base: BaseVersion,
    pub build: String,
}

impl Version {
    /// Create a version with an explicit build token.
    pub fn new(base: BaseVersion, build: impl Into<String>) -> Self {
        Self {
            base,
            build: build.into(),
        }
    }

    /// Create a version whose build token is derived from `at`.
    pub fn stamped<Tz: TimeZone>(base: BaseVersion, at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self::new(base, at.format(BUILD_TOKEN_FORMAT).to_string())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.base, self.build)
    }
}

fn default_min_host_version() -> String {
    "3.3".to_string()
}

fn default_platform() -> String {
    "all".to_string()
}

fn default_component_entry() -> String {
    "src/interface.py".to_string()
}

fn default_logo_icon() -> String {
    "icon_extension_logo.png".to_string()
}

/// Static identity of the extension.
///
/// `identifier` and `title` are derived from `name` and `author` when not
/// given explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionIdentity {
    pub name: String,
    pub version: BaseVersion,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Minimal host application version declared as a dependency
    #[serde(default = "default_min_host_version")]
    pub min_host_version: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    /// Path of the Python UNO component inside the package
    #[serde(default = "default_component_entry")]
    pub component_entry: String,
    /// File name of the extension logo inside the icon folder
    #[serde(default = "default_logo_icon")]
    pub logo_icon: String,
}

impl ExtensionIdentity {
    pub fn new(name: impl Into<String>, author: impl Into<String>, version: BaseVersion) -> Self {
        Self {
            name: name.into(),
            version,
            author: author.into(),
            identifier: None,
            title: None,
            min_host_version: default_min_host_version(),
            platform: default_platform(),
            component_entry: default_component_entry(),
            logo_icon: default_logo_icon(),
        }
    }

    /// Reverse-domain identifier, `org.<author>.extensions.<name>` by default.
    pub fn identifier(&self) -> String {
        self.identifier
            .clone()
            .unwrap_or_else(|| format!("org.{}.extensions.{}", self.author, self.name))
    }

    /// Human readable title, `<author>'s features for LibreOffice` by default.
    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("{}'s features for LibreOffice", self.author))
    }
}

/// Identity stamped for one build. Immutable for the duration of the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionDescriptor {
    pub name: String,
    pub version: Version,
    pub author: String,
    pub identifier: String,
    pub title: String,
    /// Year printed in the copyright line
    pub year: i32,
}

impl ExtensionDescriptor {
    /// Build a descriptor with an explicit version and copyright year.
    pub fn new(identity: &ExtensionIdentity, version: Version, year: i32) -> Self {
        Self {
            name: identity.name.clone(),
            version,
            author: identity.author.clone(),
            identifier: identity.identifier(),
            title: identity.title(),
            year,
        }
    }

    /// Stamp `identity` with the build time `at`.
    pub fn stamped<Tz: TimeZone>(identity: &ExtensionIdentity, at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self::new(identity, Version::stamped(identity.version, at), at.year())
    }

    /// File name of the packaged extension: `<name>_<version>.oxt`.
    pub fn archive_file_name(&self) -> String {
        format!("{}_{}.{}", self.name, self.version, crate::oxt::constants::OXT_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_base_version_parse() {
        let v: BaseVersion = "1.20.3".parse().unwrap();
        assert_eq!(v, BaseVersion::new(1, 20, 3));
        assert_eq!(v.to_string(), "1.20.3");
    }

    #[test]
    fn test_base_version_rejects_malformed() {
        assert!("1.2".parse::<BaseVersion>().is_err());
        assert!("1.2.x".parse::<BaseVersion>().is_err());
        assert!("1.2.3.4".parse::<BaseVersion>().is_err());
    }

    #[test]
    fn test_build_token_is_day_hour_minute_second() {
        let tz = FixedOffset::east_opt(3 * 3600).unwrap();
        let at = tz.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
        let version = Version::stamped(BaseVersion::new(0, 0, 1), &at);
        assert_eq!(version.build, "07090502");
        assert_eq!(version.to_string(), "0.0.1.07090502");
    }

    #[test]
    fn test_identity_defaults() {
        let identity = ExtensionIdentity::new("lomenu", "torrua", BaseVersion::new(0, 0, 1));
        assert_eq!(identity.identifier(), "org.torrua.extensions.lomenu");
        assert_eq!(identity.title(), "torrua's features for LibreOffice");
    }

    #[test]
    fn test_identity_overrides() {
        let mut identity = ExtensionIdentity::new("demo", "me", BaseVersion::new(1, 0, 0));
        identity.identifier = Some("com.example.demo".to_string());
        identity.title = Some("Demo".to_string());
        assert_eq!(identity.identifier(), "com.example.demo");
        assert_eq!(identity.title(), "Demo");
    }

    #[test]
    fn test_descriptor_archive_name() {
        let identity = ExtensionIdentity::new("lomenu", "torrua", BaseVersion::new(0, 0, 1));
        let tz = FixedOffset::east_opt(0).unwrap();
        let at = tz.with_ymd_and_hms(2023, 12, 31, 23, 59, 58).unwrap();
        let descriptor = ExtensionDescriptor::stamped(&identity, &at);
        assert_eq!(descriptor.year, 2023);
        assert_eq!(descriptor.archive_file_name(), "lomenu_0.0.1.31235958.oxt");
    }
}
