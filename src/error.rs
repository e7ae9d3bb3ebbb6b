//! Error type for the fallible edges of the crate.
//!
//! Matching itself never fails; only config parsing/validation and dataset
//! loading return [`Result`].

use std::io;
use thiserror::Error;

/// Errors surfaced by config validation and dataset loading.
#[derive(Debug, Error)]
pub enum MatchError {
  /// A config value is out of range or inconsistent.
  #[error("invalid matcher config: {0}")]
  InvalidConfig(String),
  /// The JSON document could not be parsed.
  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
  /// Reading a dataset or config file failed.
  #[error("io error: {0}")]
  Io(#[from] io::Error),
  /// The document does not hold an array of records where one was expected.
  #[error("no record array found at `{0}`")]
  MissingCollection(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MatchError>;
