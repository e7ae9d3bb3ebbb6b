//! Core data types returned by the matcher.

use serde::{Deserialize, Serialize};

/// Anything the matcher can score.
///
/// Records are read through their `serde` representation, so a
/// `serde_json::Value` loaded from a dataset works as well as a typed struct.
#[cfg(feature = "parallel")]
pub trait Record: Serialize + Clone + Send + Sync {}
#[cfg(feature = "parallel")]
impl<T: Serialize + Clone + Send + Sync> Record for T {}

#[cfg(not(feature = "parallel"))]
pub trait Record: Serialize + Clone {}
#[cfg(not(feature = "parallel"))]
impl<T: Serialize + Clone> Record for T {}

/// A record paired with its relevance score for one query.
///
/// Produced per call and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord<T> {
  /// The matched record.
  pub record: T,
  /// Aggregate score in `[0, 1]`.
  pub score: f64,
}

impl<T> ScoredRecord<T> {
  /// Pair a record with its score.
  pub fn new(record: T, score: f64) -> Self {
    Self { record, score }
  }
}

/// One entry of a suggestion dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion<T> {
  /// The suggested record.
  pub record: T,
  /// Badge telling the UI why the record matched.
  pub relevance: RelevanceIndicator,
}

impl<T> Suggestion<T> {
  /// Pair a record with its badge.
  pub fn new(record: T, relevance: RelevanceIndicator) -> Self {
    Self { record, relevance }
  }
}

/// Categorical relevance label attached to a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceIndicator {
  /// A field equals the query after normalization.
  Exact,
  /// A field contains the query.
  High,
  /// Matched on fuzzy signals only.
  Medium,
  /// Weak score; only produced by [`RelevancePolicy::ScoreBands`](crate::config::RelevancePolicy::ScoreBands).
  Low,
}

impl RelevanceIndicator {
  /// Lowercase label used by the UI badges.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Exact => "exact",
      Self::High => "high",
      Self::Medium => "medium",
      Self::Low => "low",
    }
  }
}

impl std::fmt::Display for RelevanceIndicator {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.pad(self.as_str())
  }
}
