//! The startup property store and its file loader
//!
//! A [`PropertyStore`] is the flat `key -> value` configuration source every
//! other layer reads from. Keys are case-sensitive and unique; the store is
//! immutable once loaded.

use crate::{Error, NormalizedPath, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Flat, immutable string properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertyStore {
    entries: BTreeMap<String, String>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property. Absence is not an error.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Return a new store where every entry of `top` replaces the same key here.
    pub fn overlay(&self, top: &PropertyStore) -> PropertyStore {
        let mut entries = self.entries.clone();
        entries.extend(top.entries.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Loads a [`PropertyStore`] from disk.
///
/// Format is detected from the file extension:
/// - `.properties` -> `key=value` lines
/// - `.toml` -> TOML, nested tables flattened to dotted keys
/// - `.json` -> JSON, nested objects flattened to dotted keys
/// - `.yaml`, `.yml` -> YAML, nested mappings flattened to dotted keys
#[derive(Debug, Default)]
pub struct PropertyLoader;

impl PropertyLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &NormalizedPath) -> Result<PropertyStore> {
        let native = path.to_native();
        let content = std::fs::read_to_string(&native).map_err(|e| Error::io(&native, e))?;
        let extension = path.extension().unwrap_or("").to_lowercase();

        let store = match extension.as_str() {
            "properties" => parse_properties(&content),
            "toml" => {
                let table: toml::Table =
                    toml::from_str(&content).map_err(|e| Error::PropertiesParse {
                        path: native.clone(),
                        format: "TOML".into(),
                        message: e.to_string(),
                    })?;
                let value = toml_to_json(toml::Value::Table(table));
                flatten_document(&value, path, "TOML")?
            }
            "json" => {
                let value: Value =
                    serde_json::from_str(&content).map_err(|e| Error::PropertiesParse {
                        path: native.clone(),
                        format: "JSON".into(),
                        message: e.to_string(),
                    })?;
                flatten_document(&value, path, "JSON")?
            }
            "yaml" | "yml" => {
                let value: Value =
                    serde_yaml::from_str(&content).map_err(|e| Error::PropertiesParse {
                        path: native.clone(),
                        format: "YAML".into(),
                        message: e.to_string(),
                    })?;
                flatten_document(&value, path, "YAML")?
            }
            _ => return Err(Error::UnsupportedFormat { extension }),
        };

        tracing::debug!(%path, count = store.len(), "Loaded properties");
        Ok(store)
    }

    /// Load `path` when it is a file, `Ok(None)` otherwise.
    pub fn load_if_exists(&self, path: &NormalizedPath) -> Result<Option<PropertyStore>> {
        if path.is_file() {
            self.load(path).map(Some)
        } else {
            tracing::debug!(%path, "No properties file found - skipping");
            Ok(None)
        }
    }
}

/// Parse `.properties` content.
///
/// Supports `key=value`, `key: value` and `key value` separators, `#`/`!`
/// comment lines, backslash line continuations and the common escapes.
/// A key without a value maps to the empty string. Later duplicates win.
pub fn parse_properties(content: &str) -> PropertyStore {
    let mut entries = BTreeMap::new();
    let mut logical = String::new();

    for raw in content.lines() {
        let line = raw.trim_start();
        if logical.is_empty() && (line.is_empty() || line.starts_with('#') || line.starts_with('!'))
        {
            continue;
        }

        if ends_with_continuation(line) {
            logical.push_str(&line[..line.len() - 1]);
            continue;
        }
        logical.push_str(line);

        let (key, value) = split_entry(&logical);
        if key.is_empty() {
            tracing::warn!(line = %logical, "Skipping property line without a key");
        } else {
            entries.insert(key, value);
        }
        logical.clear();
    }

    if !logical.is_empty() {
        let (key, value) = split_entry(&logical);
        if !key.is_empty() {
            entries.insert(key, value);
        }
    }

    PropertyStore { entries }
}

fn ends_with_continuation(line: &str) -> bool {
    let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
    trailing % 2 == 1
}

fn split_entry(line: &str) -> (String, String) {
    let mut escaped = false;
    let mut split_at = None;

    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' => {
                split_at = Some(idx);
                break;
            }
            _ => {}
        }
    }

    let Some(idx) = split_at else {
        return (unescape(line.trim_end()), String::new());
    };

    let key = &line[..idx];
    let mut rest = line[idx..].trim_start_matches([' ', '\t']);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches([' ', '\t']);
    }
    // Trailing whitespace is trimmed from values, unlike java.util.Properties
    (unescape(key), unescape(rest.trim_end()))
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => match decode_unicode_escape(&mut chars) {
                Some(decoded) => out.push(decoded),
                None => {
                    tracing::warn!(text, "Malformed \\uXXXX escape in property");
                    out.push_str("\\u");
                }
            },
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Decode the four hex digits after `\u`, joining UTF-16 surrogate pairs.
///
/// Consumes input only on success.
fn decode_unicode_escape(chars: &mut std::str::Chars<'_>) -> Option<char> {
    let mut ahead = chars.clone();
    let high = read_hex4(&mut ahead)?;

    let decoded = if (0xD800..0xDC00).contains(&high) {
        if ahead.next() != Some('\\') || ahead.next() != Some('u') {
            return None;
        }
        let low = read_hex4(&mut ahead)?;
        if !(0xDC00..0xE000).contains(&low) {
            return None;
        }
        char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))?
    } else {
        char::from_u32(high)?
    };

    *chars = ahead;
    Some(decoded)
}

fn read_hex4(chars: &mut std::str::Chars<'_>) -> Option<u32> {
    (0..4).try_fold(0u32, |acc, _| Some(acc * 16 + chars.next()?.to_digit(16)?))
}

/// Convert TOML into the shared document model.
///
/// Datetimes keep their TOML text form.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(f.to_string())),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}

/// Flatten a structured document into dotted keys.
fn flatten_document(value: &Value, path: &NormalizedPath, format: &str) -> Result<PropertyStore> {
    let mut entries = BTreeMap::new();
    match value {
        Value::Object(_) => flatten_into(&mut entries, "", value).map_err(|message| {
            Error::PropertiesParse {
                path: path.to_native(),
                format: format.into(),
                message,
            }
        })?,
        Value::Null => {}
        _ => {
            return Err(Error::PropertiesParse {
                path: path.to_native(),
                format: format.into(),
                message: "top level must be a table of properties".into(),
            });
        }
    }
    Ok(PropertyStore { entries })
}

fn flatten_into(
    entries: &mut BTreeMap<String, String>,
    prefix: &str,
    value: &Value,
) -> std::result::Result<(), String> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let full_key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(entries, &full_key, child)?;
            }
        }
        Value::String(s) => {
            entries.insert(prefix.to_string(), s.clone());
        }
        Value::Number(n) => {
            entries.insert(prefix.to_string(), n.to_string());
        }
        Value::Bool(b) => {
            entries.insert(prefix.to_string(), b.to_string());
        }
        // Null leaves the key unset
        Value::Null => {}
        Value::Array(_) => {
            return Err(format!("arrays are not supported as property values (key `{prefix}`)"));
        }
    }
    Ok(())
}
