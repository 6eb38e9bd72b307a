//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert errors from
//! the XML, ZIP, YAML and filesystem-walking crates to the unified Error type.

use super::types::Error;

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            other => Error::ZipError(other.to_string()),
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf());
        match (path, err.into_io_error()) {
            (Some(path), Some(io)) => Error::at_path(path, io),
            (None, Some(io)) => Error::Io(io),
            (_, None) => Error::Other("Filesystem loop detected while walking directory".to_string()),
        }
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io(err.error)
    }
}

impl From<serde_saphyr::Error> for Error {
    fn from(err: serde_saphyr::Error) -> Self {
        Error::InvalidConfig(format!("YAML error: {}", err))
    }
}
