//! Loading record arrays from JSON datasets.
//!
//! Dataset files are either a bare array of records or an object that keeps
//! the array under a named key, e.g. `{"species": [...]}`.

use crate::error::{MatchError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Label used in errors when the root array is missing.
const ROOT: &str = "<root>";

/// Parse records from a JSON string.
///
/// With `collection = None` the document must be an array; with
/// `Some(key)` it must be an object whose `key` holds an array.
pub fn load_records_from_str(json: &str, collection: Option<&str>) -> Result<Vec<Value>> {
  let document: Value = serde_json::from_str(json)?;
  extract_collection(document, collection)
}

/// Read and parse records from a JSON file.
pub fn load_records_from_path(path: impl AsRef<Path>, collection: Option<&str>) -> Result<Vec<Value>> {
  let path = path.as_ref();
  let json = fs::read_to_string(path)?;
  let records = load_records_from_str(&json, collection)?;
  tracing::info!(path = %path.display(), records = records.len(), "dataset loaded");
  Ok(records)
}

fn extract_collection(document: Value, collection: Option<&str>) -> Result<Vec<Value>> {
  match (collection, document) {
    (None, Value::Array(records)) => Ok(records),
    (None, _) => Err(MatchError::MissingCollection(ROOT.to_string())),
    (Some(key), Value::Object(mut map)) => match map.remove(key) {
      Some(Value::Array(records)) => Ok(records),
      _ => Err(MatchError::MissingCollection(key.to_string())),
    },
    (Some(key), _) => Err(MatchError::MissingCollection(key.to_string())),
  }
}
