//! Three-tier suggestion classification and blending.
//!
//! Every record lands in one tier:
//!
//! - [`MatchTier::ExactFull`]: a field equals the normalized query;
//! - [`MatchTier::PartialExact`]: a field contains the normalized query, or
//!   (with `token_containment`) a query token and a field token contain one
//!   another;
//! - [`MatchTier::FuzzyOnly`]: everything else, kept only when its record
//!   score reaches `min_similarity`.
//!
//! A whole-field hit wins outright and is shown alone. Otherwise
//! partial-exact hits come first, padded with fuzzy hits according to the
//! configured [`SuggestionPolicy`].

use crate::config::{MatcherConfig, RelevancePolicy, SuggestionPolicy};
use crate::record::RecordView;
use crate::scoring::{score_record, PreparedQuery};
use crate::types::RelevanceIndicator;

/// Suggestion tier of a record for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchTier {
  /// Some field equals the query.
  ExactFull,
  /// Some field contains the query, or tokens overlap.
  PartialExact,
  /// No literal match; ranked by fuzzy score.
  FuzzyOnly,
}

/// Classify a record against a non-empty query.
pub fn classify(view: &RecordView, query: &PreparedQuery, config: &MatcherConfig) -> MatchTier {
  if view.any_equals(&query.normalized) {
    MatchTier::ExactFull
  } else if view.any_contains(&query.normalized)
    || (config.token_containment && view.any_token_containment(&query.tokens))
  {
    MatchTier::PartialExact
  } else {
    MatchTier::FuzzyOnly
  }
}

/// Badge for a suggested record under the configured policy.
pub fn relevance(view: &RecordView, query: &PreparedQuery, config: &MatcherConfig) -> RelevanceIndicator {
  match config.relevance {
    RelevancePolicy::Categorical => {
      if view.any_equals(&query.normalized) {
        RelevanceIndicator::Exact
      } else if view.any_contains(&query.normalized) {
        RelevanceIndicator::High
      } else {
        RelevanceIndicator::Medium
      }
    }
    RelevancePolicy::ScoreBands => score_band(score_record(view, query, config)),
  }
}

/// Map a record score to a badge: 0.9 exact, 0.7 high, 0.6 medium, else low.
pub fn score_band(score: f64) -> RelevanceIndicator {
  if score >= 0.9 {
    RelevanceIndicator::Exact
  } else if score >= 0.7 {
    RelevanceIndicator::High
  } else if score >= 0.6 {
    RelevanceIndicator::Medium
  } else {
    RelevanceIndicator::Low
  }
}

/// Minimum fuzzy score blended in after `partial_count` partial-exact hits.
pub fn graduated_fuzzy_floor(partial_count: usize) -> f64 {
  match partial_count {
    0..=3 => 0.65,
    4..=6 => 0.75,
    _ => 0.85,
  }
}

/// Records bucketed by tier, holding indices into the caller's slice.
///
/// `fuzzy` is already filtered by `min_similarity` and sorted by score,
/// descending and stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tiers {
  /// Indices of whole-field matches, in input order.
  pub exact_full: Vec<usize>,
  /// Indices of partial-exact matches, in input order.
  pub partial_exact: Vec<usize>,
  /// `(index, score)` of fuzzy matches.
  pub fuzzy: Vec<(usize, f64)>,
}

impl Tiers {
  /// Bucket every record view.
  pub fn collect(views: &[RecordView], query: &PreparedQuery, config: &MatcherConfig) -> Self {
    let mut tiers = Self::default();

    for (index, view) in views.iter().enumerate() {
      match classify(view, query, config) {
        MatchTier::ExactFull => tiers.exact_full.push(index),
        MatchTier::PartialExact => tiers.partial_exact.push(index),
        MatchTier::FuzzyOnly => {
          let score = score_record(view, query, config);
          if score >= config.min_similarity {
            tiers.fuzzy.push((index, score));
          }
        }
      }
    }

    tiers.fuzzy.sort_by(|a, b| {
      b.1
        .partial_cmp(&a.1)
        .unwrap_or(std::cmp::Ordering::Equal)
    });

    tiers
  }

  /// Indices of the records to suggest, in display order.
  pub fn assemble(&self, config: &MatcherConfig) -> Vec<usize> {
    if let Some(&first) = self.exact_full.first() {
      return vec![first];
    }

    match config.suggestions {
      SuggestionPolicy::Graduated => {
        if self.partial_exact.is_empty() {
          return self
            .fuzzy
            .iter()
            .take(config.max_results)
            .map(|&(index, _)| index)
            .collect();
        }

        let floor = graduated_fuzzy_floor(self.partial_exact.len());
        self
          .partial_exact
          .iter()
          .copied()
          .chain(
            self
              .fuzzy
              .iter()
              .filter(|&&(_, score)| score >= floor)
              .map(|&(index, _)| index),
          )
          .collect()
      }
      SuggestionPolicy::Fixed {
        partial_limit,
        total,
      } => {
        let partial: Vec<usize> = self.partial_exact.iter().copied().take(partial_limit).collect();
        let remaining = total.saturating_sub(partial.len());
        partial
          .into_iter()
          .chain(self.fuzzy.iter().take(remaining).map(|&(index, _)| index))
          .collect()
      }
    }
  }
}
