//! The fuzzy matcher: ranked search and suggestion lists over a record slice.

use crate::config::MatcherConfig;
use crate::error::Result;
use crate::record::RecordView;
use crate::scoring::{score_record, PreparedQuery};
use crate::suggest::{relevance, Tiers};
use crate::types::{Record, RelevanceIndicator, ScoredRecord, Suggestion};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Field-weighted fuzzy matcher.
///
/// A `FuzzyMatcher` holds only its immutable config; every call re-reads,
/// re-normalizes and re-scores the records it is given. It has no interior
/// state, so one instance can be shared across threads and handed to
/// whichever controller or renderer needs it.
///
/// # Examples
///
/// ```rust
/// use herbarium::prelude::*;
/// use serde_json::json;
///
/// let matcher = FuzzyMatcher::new(
///     MatcherConfig::builder()
///         .min_similarity(0.5)
///         .field(FieldSpec::name("scientific"))
///         .field(FieldSpec::text("family").weight(0.8))
///         .build(),
/// );
///
/// let trees = vec![
///     json!({ "scientific": "Ficus microcarpa", "family": "Moraceae" }),
///     json!({ "scientific": "Rosa chinensis", "family": "Rosaceae" }),
/// ];
///
/// let hits = matcher.search(&trees, "fiscus");
/// assert_eq!(hits[0]["scientific"], "Ficus microcarpa");
///
/// let suggestions = matcher.get_suggestions(&trees, "rosa chinensis");
/// assert_eq!(suggestions.len(), 1);
/// assert_eq!(suggestions[0].relevance, RelevanceIndicator::Exact);
/// ```
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
  config: MatcherConfig,
}

impl Default for FuzzyMatcher {
  fn default() -> Self {
    Self::new(MatcherConfig::default())
  }
}

impl FuzzyMatcher {
  /// Creates a matcher, repairing out-of-range parameters.
  ///
  /// Misuse such as a negative weight or a `min_similarity` above 1 is
  /// corrected and logged at `warn` level instead of rejected, so matching
  /// never fails. Use [`FuzzyMatcher::try_new`] to reject it instead.
  pub fn new(config: MatcherConfig) -> Self {
    Self {
      config: config.sanitized(),
    }
  }

  /// Creates a matcher, rejecting an invalid config.
  pub fn try_new(config: MatcherConfig) -> Result<Self> {
    config.validate()?;
    Ok(Self { config })
  }

  /// The effective (sanitized) config.
  pub fn config(&self) -> &MatcherConfig {
    &self.config
  }

  /// Aggregate relevance of one record for `query`, in `[0, 1]`.
  ///
  /// An empty or whitespace-only query scores 0.0.
  pub fn score_record<T>(&self, record: &T, query: &str) -> f64
  where
    T: serde::Serialize,
  {
    let query = PreparedQuery::new(query);
    let view = RecordView::extract(record, &self.config.fields);
    score_record(&view, &query, &self.config)
  }

  /// Ranked search.
  ///
  /// An empty or whitespace-only query returns every record unchanged, in
  /// order. Otherwise records scoring below `min_similarity` are dropped,
  /// the rest are sorted by score (ties keep input order) and truncated to
  /// `max_results`. A query that normalizes to nothing, such as `"..."`,
  /// is still scored and matches no field.
  pub fn search<T: Record>(&self, records: &[T], query: &str) -> Vec<T> {
    self
      .search_scored(records, query)
      .into_iter()
      .map(|scored| scored.record)
      .collect()
  }

  /// Ranked search that keeps the scores.
  ///
  /// Reported scores always equal [`FuzzyMatcher::score_record`], so the
  /// records passed through for an empty query carry 0.0.
  pub fn search_scored<T: Record>(&self, records: &[T], query: &str) -> Vec<ScoredRecord<T>> {
    if query.trim().is_empty() {
      tracing::debug!(records = records.len(), "empty query, returning all records");
      return records
        .iter()
        .cloned()
        .map(|record| ScoredRecord::new(record, 0.0))
        .collect();
    }

    let prepared = PreparedQuery::new(query);
    let views = self.views(records);
    let scores = self.scores(&views, &prepared);

    let mut ranked: Vec<(usize, f64)> = scores
      .into_iter()
      .enumerate()
      .filter(|&(_, score)| score >= self.config.min_similarity)
      .collect();

    // `sort_by` is stable, so equal scores keep their input order.
    ranked.sort_by(|a, b| {
      b.1
        .partial_cmp(&a.1)
        .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(self.config.max_results);

    tracing::debug!(
      query,
      records = records.len(),
      returned = ranked.len(),
      min_similarity = self.config.min_similarity,
      "search complete"
    );

    ranked
      .into_iter()
      .map(|(index, score)| ScoredRecord::new(records[index].clone(), score))
      .collect()
  }

  /// Suggestion list with relevance badges.
  ///
  /// An empty query returns the first `max_results` records, all tagged
  /// [`RelevanceIndicator::Exact`]. Otherwise records are bucketed into
  /// exact, partial-exact and fuzzy tiers and blended per the configured
  /// [`SuggestionPolicy`](crate::config::SuggestionPolicy).
  pub fn get_suggestions<T: Record>(&self, records: &[T], query: &str) -> Vec<Suggestion<T>> {
    if query.trim().is_empty() {
      return records
        .iter()
        .take(self.config.max_results)
        .cloned()
        .map(|record| Suggestion::new(record, RelevanceIndicator::Exact))
        .collect();
    }

    let prepared = PreparedQuery::new(query);
    let views = self.views(records);
    let tiers = Tiers::collect(&views, &prepared, &self.config);
    let picked = tiers.assemble(&self.config);

    tracing::debug!(
      query,
      exact_full = tiers.exact_full.len(),
      partial_exact = tiers.partial_exact.len(),
      fuzzy = tiers.fuzzy.len(),
      returned = picked.len(),
      "suggestions complete"
    );

    picked
      .into_iter()
      .map(|index| {
        let badge = relevance(&views[index], &prepared, &self.config);
        Suggestion::new(records[index].clone(), badge)
      })
      .collect()
  }

  #[cfg(feature = "parallel")]
  fn views<T: Record>(&self, records: &[T]) -> Vec<RecordView> {
    records
      .par_iter()
      .map(|record| RecordView::extract(record, &self.config.fields))
      .collect()
  }

  #[cfg(not(feature = "parallel"))]
  fn views<T: Record>(&self, records: &[T]) -> Vec<RecordView> {
    records
      .iter()
      .map(|record| RecordView::extract(record, &self.config.fields))
      .collect()
  }

  #[cfg(feature = "parallel")]
  fn scores(&self, views: &[RecordView], query: &PreparedQuery) -> Vec<f64> {
    views
      .par_iter()
      .map(|view| score_record(view, query, &self.config))
      .collect()
  }

  #[cfg(not(feature = "parallel"))]
  fn scores(&self, views: &[RecordView], query: &PreparedQuery) -> Vec<f64> {
    views
      .iter()
      .map(|view| {
        let score = score_record(view, query, &self.config);
        tracing::trace!(score, "record scored");
        score
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::FieldSpec;
  use serde::Serialize;

  #[derive(Debug, Clone, PartialEq, Serialize)]
  struct Tree {
    scientific: String,
    chinese: String,
  }

  fn tree(scientific: &str, chinese: &str) -> Tree {
    Tree {
      scientific: scientific.to_string(),
      chinese: chinese.to_string(),
    }
  }

  fn matcher() -> FuzzyMatcher {
    FuzzyMatcher::new(
      MatcherConfig::builder()
        .min_similarity(0.5)
        .max_results(3)
        .field(FieldSpec::name("scientific"))
        .field(FieldSpec::text("chinese").weight(0.8))
        .build(),
    )
  }

  #[test]
  fn test_typed_records() {
    let trees = vec![tree("Ficus microcarpa", "細葉榕"), tree("Bauhinia blakeana", "洋紫荊")];
    let results = matcher().search(&trees, "洋紫荊");
    assert_eq!(results, vec![trees[1].clone()]);
  }

  #[test]
  fn test_search_truncates() {
    let trees: Vec<Tree> = (0..6).map(|i| tree(&format!("Ficus sp{i}"), "榕")).collect();
    let results = matcher().search(&trees, "ficus");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0], trees[0]);
  }

  #[test]
  fn test_search_scored_reports_scores() {
    let trees = vec![tree("Ficus microcarpa", "細葉榕")];
    let results = matcher().search_scored(&trees, "ficus");
    assert_eq!(results.len(), 1);
    assert!(results[0].score >= 0.5 && results[0].score <= 1.0);
  }

  #[test]
  fn test_blank_query_scores_agree_with_score_record() {
    let trees = vec![tree("Ficus microcarpa", "細葉榕"), tree("Acer", "楓")];
    let m = matcher();

    let results = m.search_scored(&trees, " ");
    assert_eq!(results.len(), 2);
    for result in &results {
      assert_eq!(result.score, m.score_record(&result.record, " "));
      assert_eq!(result.score, 0.0);
    }
  }

  #[test]
  fn test_new_sanitizes_and_try_new_rejects() {
    let config = MatcherConfig {
      min_similarity: 3.0,
      ..MatcherConfig::default()
    };
    assert_eq!(FuzzyMatcher::new(config.clone()).config().min_similarity, 1.0);
    assert!(FuzzyMatcher::try_new(config).is_err());
  }

  #[test]
  fn test_empty_query_suggestions_are_capped() {
    let trees: Vec<Tree> = (0..5).map(|i| tree(&format!("Acer {i}"), "楓")).collect();
    let suggestions = matcher().get_suggestions(&trees, "  ");
    assert_eq!(suggestions.len(), 3);
    assert!(suggestions.iter().all(|s| s.relevance == RelevanceIndicator::Exact));
  }
}
