//! Exact-match attribute filtering.
//!
//! Dataset pages narrow search results with toggleable attribute chips
//! ("Tree", "Full Sun", "Toxic", ...). Each chip is a flag key; a record
//! passes when every active flag is truthy on it. This runs on the output of
//! [`FuzzyMatcher::search`](crate::matcher::FuzzyMatcher::search) and never
//! influences scores.

use crate::record::is_truthy;
use crate::types::Record;
use serde::{Deserialize, Serialize};

/// A conjunction of required flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagFilter {
  /// Flag keys that must all be truthy, in the order they were added.
  required: Vec<String>,
}

impl FlagFilter {
  /// An empty filter that lets every record through.
  pub fn new() -> Self {
    Self::default()
  }

  /// Require a flag. Adding the same flag twice has no effect.
  pub fn require(mut self, flag: impl Into<String>) -> Self {
    self.insert(flag);
    self
  }

  /// Require a flag in place.
  pub fn insert(&mut self, flag: impl Into<String>) {
    let flag = flag.into();
    if !self.required.contains(&flag) {
      self.required.push(flag);
    }
  }

  /// Stop requiring a flag.
  pub fn remove(&mut self, flag: &str) {
    self.required.retain(|f| f != flag);
  }

  /// Toggle a flag, returning whether it is now required.
  pub fn toggle(&mut self, flag: &str) -> bool {
    if self.contains(flag) {
      self.remove(flag);
      false
    } else {
      self.insert(flag);
      true
    }
  }

  /// Drop every requirement.
  pub fn clear(&mut self) {
    self.required.clear();
  }

  /// Whether `flag` is required.
  pub fn contains(&self, flag: &str) -> bool {
    self.required.iter().any(|f| f == flag)
  }

  /// True when no flag is required.
  pub fn is_empty(&self) -> bool {
    self.required.is_empty()
  }

  /// Required flags, in insertion order.
  pub fn flags(&self) -> &[String] {
    &self.required
  }

  /// Whether `record` carries every required flag.
  pub fn matches<T>(&self, record: &T) -> bool
  where
    T: Serialize,
  {
    if self.required.is_empty() {
      return true;
    }
    let value = match serde_json::to_value(record) {
      Ok(value) => value,
      Err(_) => return false,
    };
    self
      .required
      .iter()
      .all(|flag| value.get(flag.as_str()).is_some_and(is_truthy))
  }

  /// Keep the records that pass, preserving order.
  pub fn apply<T: Record>(&self, records: &[T]) -> Vec<T> {
    if self.required.is_empty() {
      return records.to_vec();
    }
    records
      .iter()
      .filter(|record| self.matches(*record))
      .cloned()
      .collect()
  }
}
