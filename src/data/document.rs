//! File handling shared by every JSON document.

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::{fs, io::ErrorKind, path::PathBuf};

use crate::{error::storage::StorageError, model::UserId};

/// A JSON document stored in a single file.
///
/// Reads tolerate a missing file and malformed content: both yield `None` so the caller
/// can substitute its default record. Writes replace the whole file.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    path: PathBuf,
}

impl JsonDocument {
    /// Creates a handle for the document at `path`. The file does not need to exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads and deserializes the document.
    ///
    /// Content that is not valid JSON, or valid JSON of the wrong shape, is treated as
    /// corrupted: a warning is logged and `None` is returned. The file itself is left
    /// untouched until the next save overwrites it.
    ///
    /// # Returns
    /// - `Ok(Some(T))` - Document exists and parsed successfully
    /// - `Ok(None)` - Document is missing or corrupted
    /// - `Err(StorageError::Io)` - File exists but could not be read
    pub fn read<T: DeserializeOwned>(&self) -> Result<Option<T>, StorageError> {
        let Some(bytes) = self.read_bytes()? else {
            return Ok(None);
        };

        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(
                    "Document {} was corrupted ({}); resetting it to defaults",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    /// Reads the document as a JSON object without interpreting its entries.
    ///
    /// Callers validate each field or entry on their own so that one bad value only
    /// affects itself. Only content that is not JSON, or JSON that is not an object,
    /// counts as corrupted.
    ///
    /// # Returns
    /// - `Ok(Some(Map))` - Document exists and is a JSON object
    /// - `Ok(None)` - Document is missing or corrupted
    /// - `Err(StorageError::Io)` - File exists but could not be read
    pub fn read_object(&self) -> Result<Option<Map<String, Value>>, StorageError> {
        match self.read::<Value>()? {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(other) => {
                tracing::warn!(
                    "Document {} is not a JSON object (found {}); resetting it to defaults",
                    self.path.display(),
                    json_kind(&other)
                );
                Ok(None)
            }
        }
    }

    fn read_bytes(&self) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Serializes `value` and overwrites the document with it.
    ///
    /// Creates the parent directory if needed, writes to a sibling `.tmp` file and
    /// renames it over the document so readers never observe a partial write.
    ///
    /// # Returns
    /// - `Ok(())` - Document written
    /// - `Err(StorageError::Serialize)` - Value could not be serialized
    /// - `Err(StorageError::Io)` - Directory creation, write or rename failed
    pub fn write<T: Serialize>(&self, value: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(value).map_err(|source| StorageError::Serialize {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }
}

/// Splits a document object keyed by user ID into typed entries.
///
/// Keys that are not a numeric user ID are dropped with a warning; they disappear from
/// the file on the next save.
///
/// # Arguments
/// - `entries` - Object read from the document
/// - `document` - Name used in the warning
pub fn user_entries(
    entries: Map<String, Value>,
    document: &str,
) -> impl Iterator<Item = (UserId, Value)> + '_ {
    entries
        .into_iter()
        .filter_map(move |(key, value)| match key.trim().parse::<UserId>() {
            Ok(user) => Some((user, value)),
            Err(_) => {
                tracing::warn!("Dropping {} entry with invalid user ID '{}'", document, key);
                None
            }
        })
}

/// Reads a JSON number, or a string holding one, as an integer.
///
/// Fractions are floored and values saturate at the `i64` range.
pub fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|_| i64::MAX))
            .or_else(|| number.as_f64().map(|f| f.floor() as i64)),
        Value::String(raw) => {
            let raw = raw.trim();
            raw.parse::<i64>().ok().or_else(|| {
                raw.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.floor() as i64)
            })
        }
        _ => None,
    }
}

/// Short name of a JSON value's type, for log messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
