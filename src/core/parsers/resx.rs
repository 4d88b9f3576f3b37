use std::{collections::HashMap, fs, path::Path};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::core::ResxError;

/// Key/value pairs read from one `.resx` document.
pub type ResxEntries = HashMap<String, String>;

pub fn parse_resx_file(path: &Path) -> Result<ResxEntries, ResxError> {
    let content = fs::read_to_string(path)?;
    parse_resx_str(&content)
}

/// Parse the string entries of a `.resx` document.
///
/// Every `<data name="...">` element contributes one entry taken from its
/// `<value>` child. Entries without a value, or with an empty one, are
/// dropped. Serialized objects (`mimetype` attribute) are not strings and are
/// skipped as well. Header, metadata and schema elements are ignored.
pub fn parse_resx_str(content: &str) -> Result<ResxEntries, ResxError> {
    let mut reader = Reader::from_str(content);
    let mut entries = ResxEntries::new();

    let mut depth = 0usize;
    let mut saw_root = false;
    let mut pending: Option<PendingEntry> = None;
    let mut in_value = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if depth == 0 {
                    saw_root = true;
                }
                depth += 1;

                match e.name().as_ref() {
                    b"data" => pending = Some(PendingEntry::from_element(&e)?),
                    b"value" => {
                        if let Some(entry) = pending.as_mut() {
                            entry.value = Some(String::new());
                            in_value = true;
                        }
                    }
                    _ => {}
                }
            }
            Event::Empty(e) => {
                if depth == 0 {
                    saw_root = true;
                }
                // <data name="x"/> and <value/> both carry no value.
                if e.name().as_ref() == b"data" {
                    PendingEntry::from_element(&e)?;
                }
            }
            Event::Text(t) if in_value => {
                if let Some(value) = pending.as_mut().and_then(|p| p.value.as_mut()) {
                    value.push_str(&t.unescape()?);
                }
            }
            Event::CData(c) if in_value => {
                if let Some(value) = pending.as_mut().and_then(|p| p.value.as_mut()) {
                    value.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);

                match e.name().as_ref() {
                    b"value" => in_value = false,
                    b"data" => {
                        if let Some((key, value)) = pending.take().and_then(PendingEntry::finish) {
                            if entries.contains_key(&key) {
                                return Err(ResxError::DuplicateKey(key));
                            }
                            entries.insert(key, value);
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(ResxError::Malformed("document has no root element".to_string()));
    }
    if depth != 0 {
        return Err(ResxError::Malformed("unexpected end of document".to_string()));
    }

    Ok(entries)
}

struct PendingEntry {
    name: String,
    value: Option<String>,
    is_string: bool,
}

impl PendingEntry {
    fn from_element(element: &BytesStart<'_>) -> Result<Self, ResxError> {
        let name = element
            .try_get_attribute("name")
            .map_err(quick_xml::Error::from)?
            .ok_or_else(|| {
                ResxError::Malformed("<data> element without a name attribute".to_string())
            })?
            .unescape_value()?
            .into_owned();

        let is_string = element
            .try_get_attribute("mimetype")
            .map_err(quick_xml::Error::from)?
            .is_none();

        Ok(Self {
            name,
            value: None,
            is_string,
        })
    }

    fn finish(self) -> Option<(String, String)> {
        if !self.is_string {
            return None;
        }
        self.value
            .filter(|v| !v.is_empty())
            .map(|value| (self.name, value))
    }
}
