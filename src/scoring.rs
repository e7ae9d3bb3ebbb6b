//! Field and record scoring.
//!
//! A field score is the best of four independent signals: exact substring
//! (plus bonus), prefix (plus bonus), whole-string fuzzy similarity, and
//! token-level fuzzy similarity. A record score is the weight-normalized
//! average of its field scores, clamped to `[0, 1]`.

use crate::config::{MatcherConfig, TokenMatch};
use crate::record::{FieldText, RecordView};
use crate::text::{jaro_winkler, normalize, similarity, split_normalized};

/// A query normalized and tokenized once per call.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedQuery {
  /// Normalized query text.
  pub normalized: String,
  /// Whitespace tokens of the normalized query.
  pub tokens: Vec<String>,
}

impl PreparedQuery {
  /// Normalize and tokenize `query`.
  pub fn new(query: &str) -> Self {
    let normalized = normalize(query);
    let tokens = split_normalized(&normalized);
    Self { normalized, tokens }
  }

  /// True when the query has no tokens after normalization.
  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }
}

/// Per-field scoring knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldScoring {
  /// Added to the exact-substring signal.
  pub exact_bonus: f64,
  /// Added to the prefix signal.
  pub prefix_bonus: f64,
  /// Blend Jaro-Winkler into the fuzzy signals.
  pub name_like: bool,
  /// Token-level strategy.
  pub token_match: TokenMatch,
}

/// Score one field against a query.
///
/// Returns `max(exact + exact_bonus, prefix + prefix_bonus, fuzzy, token_fuzzy)`
/// where `exact` and `prefix` are 1.0 or 0.0. The bonuses are added even when
/// their signal is 0.0, so every present field scores at least
/// `max(exact_bonus, prefix_bonus)`. A missing or empty field scores 0.0.
///
/// The result may exceed 1.0; [`score_record`] clamps the aggregate.
pub fn score_field(field: &FieldText, query: &PreparedQuery, scoring: FieldScoring) -> f64 {
  if field.is_empty() || query.is_empty() {
    return 0.0;
  }

  let exact = if field.normalized.contains(&query.normalized) { 1.0 } else { 0.0 };
  let prefix = if field.normalized.starts_with(&query.normalized) { 1.0 } else { 0.0 };
  let fuzzy = text_similarity(&field.normalized, &query.normalized, scoring.name_like);
  let token_fuzzy = token_similarity(&query.tokens, &field.tokens, scoring);

  (exact + scoring.exact_bonus)
    .max(prefix + scoring.prefix_bonus)
    .max(fuzzy)
    .max(token_fuzzy)
}

/// Aggregate field scores for a record.
///
/// `Σ(score_i × weight_i) / Σ(weight_i)` over every configured field, clamped
/// to `[0, 1]`. An empty query or a zero total weight scores 0.0.
pub fn score_record(view: &RecordView, query: &PreparedQuery, config: &MatcherConfig) -> f64 {
  if query.is_empty() {
    return 0.0;
  }

  let total_weight = config.total_weight();
  if total_weight <= 0.0 {
    return 0.0;
  }

  let weighted: f64 = view
    .fields()
    .iter()
    .zip(&config.fields)
    .map(|(field, spec)| {
      let scoring = FieldScoring {
        exact_bonus: config.exact_match_bonus,
        prefix_bonus: config.prefix_bonus,
        name_like: spec.name_like,
        token_match: config.token_match,
      };
      score_field(field, query, scoring) * spec.weight
    })
    .sum();

  (weighted / total_weight).clamp(0.0, 1.0)
}

/// Levenshtein similarity, maxed with Jaro-Winkler for name-like fields.
fn text_similarity(a: &str, b: &str, name_like: bool) -> f64 {
  let ratio = similarity(a, b);
  if name_like {
    ratio.max(jaro_winkler(a, b))
  } else {
    ratio
  }
}

fn token_similarity(query_tokens: &[String], field_tokens: &[String], scoring: FieldScoring) -> f64 {
  if query_tokens.is_empty() || field_tokens.is_empty() {
    return 0.0;
  }

  let best_for = |q: &String| {
    field_tokens
      .iter()
      .map(|t| text_similarity(q, t, scoring.name_like))
      .fold(0.0_f64, f64::max)
  };

  match scoring.token_match {
    TokenMatch::Average => {
      query_tokens.iter().map(best_for).sum::<f64>() / query_tokens.len() as f64
    }
    TokenMatch::BestWord => query_tokens.iter().map(best_for).fold(0.0_f64, f64::max),
  }
}
