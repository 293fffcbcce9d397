//! Minimal reader for Steam's flat VDF/ACF documents.
//!
//! Only `"key"\t\t"value"` lines directly inside the outermost braces are
//! understood. Nested sections, comments and escapes are dropped.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::path::Path;

pub type KeyValues = BTreeMap<String, String>;

const SEPARATOR: &str = "\t\t";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VdfError {
    MissingBraces {
        start: Option<usize>,
        end: Option<usize>,
    },
}

impl Display for VdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBraces { start, end } => {
                let missing = match (start, end) {
                    (None, None) => "'{' and '}'",
                    (None, Some(_)) => "'{'",
                    (Some(_), None) => "'}'",
                    (Some(_), Some(_)) => "'}' after '{'",
                };
                write!(f, "document body not found: missing {}", missing)
            }
        }
    }
}

impl std::error::Error for VdfError {}

pub fn parse(data: &str) -> Result<KeyValues, VdfError> {
    let start = data.find('{');
    let end = data.rfind('}');
    let body = match (start, end) {
        (Some(s), Some(e)) if s < e => &data[s + 1..e],
        _ => return Err(VdfError::MissingBraces { start, end }),
    };

    let mut values = KeyValues::new();
    for line in body.lines() {
        let line = line.trim().replace('"', "");
        let parts: Vec<&str> = line.split(SEPARATOR).collect();
        if let [key, value] = parts.as_slice() {
            values.insert(key.to_string(), value.to_string());
        }
    }
    Ok(values)
}

/// Like [`parse`], but a document without a body yields an empty map.
/// `source` only names the document in the warning.
pub fn parse_lossy(data: &str, source: &Path) -> KeyValues {
    parse(data).unwrap_or_else(|e| {
        log::warn!("{}: {}", source.display(), e);
        KeyValues::new()
    })
}
