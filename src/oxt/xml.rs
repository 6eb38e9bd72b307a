//! Structured XML writing shared by the descriptor generators.
//!
//! All text and attribute values go through quick-xml, which escapes the five
//! reserved characters, so labels such as `Fish & Chips` produce well formed
//! output.

use crate::common::{Error, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use std::io::{self, Write};

pub(crate) type XmlWriter = Writer<Vec<u8>>;

/// Create an indenting writer that already holds the XML declaration.
pub(crate) fn new_document() -> Result<XmlWriter> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| Error::XmlError(format!("Failed to write XML declaration: {}", e)))?;
    Ok(writer)
}

/// Finish a document and return it as text with a trailing newline.
pub(crate) fn finish_document(writer: XmlWriter) -> Result<String> {
    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes)
        .map_err(|e| Error::XmlError(format!("Invalid UTF-8 in generated XML: {}", e)))
}

pub(crate) fn write_error(what: &str, err: io::Error) -> Error {
    Error::XmlError(format!("Failed to write {}: {}", what, err))
}

/// A `<value>` child of a registry property.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Value<'a> {
    /// `<value/>`
    Empty,
    /// `<value>text</value>`
    Text(&'a str),
    /// `<value xml:lang="locale">text</value>`
    Localized { locale: &'a str, text: &'a str },
}

/// Write a registry `<node oor:name=".." [oor:op=".."]>` and its children.
pub(crate) fn node<W, F>(writer: &mut Writer<W>, name: &str, op: Option<&str>, body: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&mut Writer<W>) -> io::Result<()>,
{
    let mut element = writer.create_element("node").with_attribute(("oor:name", name));
    if let Some(op) = op {
        element = element.with_attribute(("oor:op", op));
    }
    element.write_inner_content(body)?;
    Ok(())
}

/// Write a registry `<prop oor:name=".." [oor:type=".."]>` holding `values`.
pub(crate) fn prop<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    ty: Option<&str>,
    values: &[Value<'_>],
) -> io::Result<()> {
    let mut element = writer.create_element("prop").with_attribute(("oor:name", name));
    if let Some(ty) = ty {
        element = element.with_attribute(("oor:type", ty));
    }
    element.write_inner_content(|w| {
        for value in values {
            match *value {
                Value::Empty => {
                    w.create_element("value").write_empty()?;
                },
                Value::Text(text) => {
                    w.create_element("value")
                        .write_text_content(BytesText::new(text))?;
                },
                Value::Localized { locale, text } => {
                    w.create_element("value")
                        .with_attribute(("xml:lang", locale))
                        .write_text_content(BytesText::new(text))?;
                },
            }
        }
        Ok(())
    })?;
    Ok(())
}
