//! Matcher configuration: field rules, thresholds, and policy switches.

use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};

/// Flag keys of the plant attribute dataset that feed the synthetic
/// `attributes` field.
pub const PLANT_ATTRIBUTE_FLAGS: [&str; 34] = [
  "is_tree",
  "is_shrub",
  "is_herb",
  "is_climber",
  "is_creeping",
  "is_water_plant",
  "is_succulent",
  "requires_full_sun",
  "requires_semi_shade",
  "requires_shade",
  "requires_moist_soil",
  "requires_lots_of_water",
  "is_drought_tolerant",
  "is_drought_sensitive",
  "heat_cold",
  "heat_warm",
  "heat_hot",
  "is_toxic",
  "is_lightly_toxic",
  "is_heavily_toxic",
  "has_cold_phobia",
  "has_moist_phobia",
  "is_wind_tolerant",
  "is_wind_sensitive",
  "has_bulbous_root",
  "is_rhizomatous",
  "is_perennial",
  "is_deciduous",
  "is_parasitic",
  "is_insectivorous",
  "is_salt_tolerant",
  "is_barren_tolerant",
  "is_antipollution",
  "is_thermo_sensitive",
];

/// Immutable configuration for a [`FuzzyMatcher`](crate::matcher::FuzzyMatcher).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
  /// Score floor for ranked search and for the fuzzy suggestion tier.
  #[serde(default = "default_min_similarity")]
  pub min_similarity: f64,
  /// Added to a field's exact-substring signal.
  #[serde(default = "default_exact_bonus")]
  pub exact_match_bonus: f64,
  /// Added to a field's prefix signal.
  #[serde(default = "default_prefix_bonus")]
  pub prefix_bonus: f64,
  /// Cap on search results and on the pure-fuzzy suggestion tier.
  #[serde(default = "default_max_results")]
  pub max_results: usize,
  /// Fields that participate in scoring, with their weights.
  #[serde(default = "default_fields")]
  pub fields: Vec<FieldSpec>,
  /// How query tokens are compared against field tokens.
  #[serde(default)]
  pub token_match: TokenMatch,
  /// Whether a query token contained in (or containing) a field token
  /// counts as a partial-exact suggestion.
  #[serde(default)]
  pub token_containment: bool,
  /// How suggestion badges are assigned.
  #[serde(default)]
  pub relevance: RelevancePolicy,
  /// How suggestion tiers are blended into the final list.
  #[serde(default)]
  pub suggestions: SuggestionPolicy,
}

fn default_min_similarity() -> f64 {
  0.6
}

fn default_exact_bonus() -> f64 {
  0.3
}

fn default_prefix_bonus() -> f64 {
  0.2
}

fn default_max_results() -> usize {
  10_000
}

fn default_fields() -> Vec<FieldSpec> {
  vec![FieldSpec::name("name")]
}

fn default_weight() -> f64 {
  1.0
}

impl Default for MatcherConfig {
  fn default() -> Self {
    Self {
      min_similarity: default_min_similarity(),
      exact_match_bonus: default_exact_bonus(),
      prefix_bonus: default_prefix_bonus(),
      max_results: default_max_results(),
      fields: default_fields(),
      token_match: TokenMatch::default(),
      token_containment: false,
      relevance: RelevancePolicy::default(),
      suggestions: SuggestionPolicy::default(),
    }
  }
}

impl MatcherConfig {
  /// Create a new config builder with no fields.
  pub fn builder() -> MatcherConfigBuilder {
    MatcherConfigBuilder::default()
  }

  /// Plant attribute database: plant name, family, and the flag keys as a
  /// searchable `attributes` field.
  pub fn plant_attribute() -> Self {
    Self::builder()
      .min_similarity(0.5)
      .max_results(10_000)
      .field(FieldSpec::text("plant_name").weight(1.0))
      .field(FieldSpec::text("family").weight(0.8))
      .field(FieldSpec::flags("attributes", PLANT_ATTRIBUTE_FLAGS).weight(0.6))
      .token_match(TokenMatch::BestWord)
      .token_containment(true)
      .build()
  }

  /// Plant etymology database: Latin epithet plus Chinese and English
  /// explanations.
  pub fn plant_etymology() -> Self {
    Self::builder()
      .min_similarity(0.5)
      .max_results(1_000)
      .field(FieldSpec::name("latin_epithet").weight(1.0))
      .field(FieldSpec::text("chinese_explanation").weight(0.8))
      .field(FieldSpec::text("english_explanation").weight(0.6))
      .build()
  }

  /// Tree species database: scientific, Chinese and alternative names.
  pub fn tree_species() -> Self {
    Self::builder()
      .min_similarity(0.4)
      .max_results(8)
      .field(FieldSpec::name("scientific").weight(1.2))
      .field(FieldSpec::text("chinese").weight(1.0))
      .field(FieldSpec::text("alternative").weight(0.8))
      .build()
  }

  /// Parse a config from JSON and validate it.
  pub fn from_json_str(json: &str) -> Result<Self> {
    let config: Self = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  /// Check every parameter, reporting the first problem found.
  pub fn validate(&self) -> Result<()> {
    if !(0.0..=1.0).contains(&self.min_similarity) {
      return Err(MatchError::InvalidConfig(format!(
        "min_similarity must be within [0, 1], got {}",
        self.min_similarity
      )));
    }
    for (label, bonus) in [
      ("exact_match_bonus", self.exact_match_bonus),
      ("prefix_bonus", self.prefix_bonus),
    ] {
      if !bonus.is_finite() || bonus < 0.0 {
        return Err(MatchError::InvalidConfig(format!(
          "{label} must be a non-negative number, got {bonus}"
        )));
      }
    }
    if self.max_results == 0 {
      return Err(MatchError::InvalidConfig(
        "max_results must be at least 1".to_string(),
      ));
    }
    if self.fields.is_empty() {
      return Err(MatchError::InvalidConfig(
        "at least one field must be configured".to_string(),
      ));
    }
    for field in &self.fields {
      if !field.weight.is_finite() || field.weight < 0.0 {
        return Err(MatchError::InvalidConfig(format!(
          "weight of field `{}` must be a non-negative number, got {}",
          field.name, field.weight
        )));
      }
    }
    if self.total_weight() <= 0.0 {
      return Err(MatchError::InvalidConfig(
        "field weights must not all be zero".to_string(),
      ));
    }
    Ok(())
  }

  /// Sum of all configured field weights.
  pub fn total_weight(&self) -> f64 {
    self.fields.iter().map(|f| f.weight).sum()
  }

  /// Repair out-of-range parameters instead of rejecting them.
  pub(crate) fn sanitized(mut self) -> Self {
    if self.min_similarity.is_nan() {
      tracing::warn!("min_similarity is NaN, using {}", default_min_similarity());
      self.min_similarity = default_min_similarity();
    } else if !(0.0..=1.0).contains(&self.min_similarity) {
      let clamped = self.min_similarity.clamp(0.0, 1.0);
      tracing::warn!(
        min_similarity = self.min_similarity,
        clamped,
        "min_similarity outside [0, 1], clamping"
      );
      self.min_similarity = clamped;
    }

    if !self.exact_match_bonus.is_finite() || self.exact_match_bonus < 0.0 {
      tracing::warn!(bonus = self.exact_match_bonus, "invalid exact_match_bonus, using 0");
      self.exact_match_bonus = 0.0;
    }
    if !self.prefix_bonus.is_finite() || self.prefix_bonus < 0.0 {
      tracing::warn!(bonus = self.prefix_bonus, "invalid prefix_bonus, using 0");
      self.prefix_bonus = 0.0;
    }

    if self.max_results == 0 {
      tracing::warn!("max_results is 0, using {}", default_max_results());
      self.max_results = default_max_results();
    }

    for field in &mut self.fields {
      if !field.weight.is_finite() || field.weight < 0.0 {
        tracing::warn!(field = %field.name, weight = field.weight, "invalid field weight, using 0");
        field.weight = 0.0;
      }
    }
    if self.fields.is_empty() {
      tracing::warn!("no fields configured, every query will score 0");
    }

    self
  }
}

/// Builder for [`MatcherConfig`].
///
/// Starts from the default thresholds and an empty field list.
#[derive(Debug)]
pub struct MatcherConfigBuilder {
  config: MatcherConfig,
}

impl Default for MatcherConfigBuilder {
  fn default() -> Self {
    Self {
      config: MatcherConfig {
        fields: Vec::new(),
        ..MatcherConfig::default()
      },
    }
  }
}

impl MatcherConfigBuilder {
  /// Set the score floor.
  pub fn min_similarity(mut self, min_similarity: f64) -> Self {
    self.config.min_similarity = min_similarity;
    self
  }

  /// Set the exact-substring bonus.
  pub fn exact_match_bonus(mut self, bonus: f64) -> Self {
    self.config.exact_match_bonus = bonus;
    self
  }

  /// Set the prefix bonus.
  pub fn prefix_bonus(mut self, bonus: f64) -> Self {
    self.config.prefix_bonus = bonus;
    self
  }

  /// Set the result cap.
  pub fn max_results(mut self, max_results: usize) -> Self {
    self.config.max_results = max_results;
    self
  }

  /// Add a scored field.
  pub fn field(mut self, field: FieldSpec) -> Self {
    self.config.fields.push(field);
    self
  }

  /// Set the token comparison strategy.
  pub fn token_match(mut self, token_match: TokenMatch) -> Self {
    self.config.token_match = token_match;
    self
  }

  /// Enable or disable token containment for partial-exact suggestions.
  pub fn token_containment(mut self, enabled: bool) -> Self {
    self.config.token_containment = enabled;
    self
  }

  /// Set the relevance badge policy.
  pub fn relevance(mut self, relevance: RelevancePolicy) -> Self {
    self.config.relevance = relevance;
    self
  }

  /// Set the suggestion blending policy.
  pub fn suggestions(mut self, suggestions: SuggestionPolicy) -> Self {
    self.config.suggestions = suggestions;
    self
  }

  /// Build the config.
  pub fn build(self) -> MatcherConfig {
    self.config
  }
}

/// Rule for a single scored field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
  /// Field key in the record, or the label of a synthetic field.
  pub name: String,
  /// Relative importance; weights need not sum to 1.
  #[serde(default = "default_weight")]
  pub weight: f64,
  /// Blend Jaro-Winkler into this field's fuzzy signals.
  #[serde(default)]
  pub name_like: bool,
  /// Where the field text comes from.
  #[serde(default)]
  pub source: FieldSource,
}

impl FieldSpec {
  /// A free-text field scored with Levenshtein similarity only.
  pub fn text(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      weight: default_weight(),
      name_like: false,
      source: FieldSource::Value,
    }
  }

  /// A short proper-noun field (scientific or Latin names) that also uses
  /// Jaro-Winkler.
  pub fn name(name: impl Into<String>) -> Self {
    Self {
      name_like: true,
      ..Self::text(name)
    }
  }

  /// A synthetic field made of the listed flag keys that are truthy on the
  /// record, space-joined in list order.
  pub fn flags<I, S>(name: impl Into<String>, keys: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      source: FieldSource::Flags {
        keys: keys.into_iter().map(Into::into).collect(),
      },
      ..Self::text(name)
    }
  }

  /// Set the weight.
  pub fn weight(mut self, weight: f64) -> Self {
    self.weight = weight;
    self
  }

  /// Toggle Jaro-Winkler blending.
  pub fn name_like(mut self, name_like: bool) -> Self {
    self.name_like = name_like;
    self
  }
}

/// Source of a field's text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSource {
  /// The record value stored under the field's name.
  #[default]
  Value,
  /// Truthy flag keys joined into one string.
  Flags {
    /// Candidate flag keys, in output order.
    keys: Vec<String>,
  },
}

/// Strategy for the token-level fuzzy signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenMatch {
  /// Best match per query token, averaged over query tokens.
  #[default]
  Average,
  /// Best single query-token/field-token pair.
  BestWord,
}

/// Strategy for suggestion relevance badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelevancePolicy {
  /// `exact` on a whole-field match, `high` on a substring match,
  /// `medium` otherwise.
  #[default]
  Categorical,
  /// Bands over the record score: 0.9 exact, 0.7 high, 0.6 medium, else low.
  ScoreBands,
}

/// Strategy for blending suggestion tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionPolicy {
  /// All partial-exact matches, then fuzzy matches above a floor that rises
  /// with the number of partial-exact matches.
  #[default]
  Graduated,
  /// Up to `partial_limit` partial-exact matches, topped up with fuzzy
  /// matches to `total`.
  Fixed {
    /// Most partial-exact matches to keep.
    partial_limit: usize,
    /// Overall list size.
    total: usize,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let config = MatcherConfig::default();
    assert_eq!(config.min_similarity, 0.6);
    assert_eq!(config.exact_match_bonus, 0.3);
    assert_eq!(config.prefix_bonus, 0.2);
    assert_eq!(config.fields, vec![FieldSpec::name("name")]);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_builder_starts_without_fields() {
    let config = MatcherConfig::builder().build();
    assert!(config.fields.is_empty());
    assert!(matches!(config.validate(), Err(MatchError::InvalidConfig(_))));
  }

  #[test]
  fn test_presets_are_valid() {
    for config in [
      MatcherConfig::plant_attribute(),
      MatcherConfig::plant_etymology(),
      MatcherConfig::tree_species(),
    ] {
      assert!(config.validate().is_ok(), "{config:?}");
    }
    let tree = MatcherConfig::tree_species();
    assert_eq!(tree.max_results, 8);
    assert!((tree.total_weight() - 3.0).abs() < 1e-9);
  }

  #[test]
  fn test_validate_rejects_misuse() {
    let bad_floor = MatcherConfig {
      min_similarity: 1.5,
      ..MatcherConfig::default()
    };
    assert!(bad_floor.validate().is_err());

    let negative_weight = MatcherConfig::builder()
      .field(FieldSpec::text("family").weight(-1.0))
      .build();
    let err = negative_weight.validate().unwrap_err();
    assert!(err.to_string().contains("family"));

    let zero_weights = MatcherConfig::builder()
      .field(FieldSpec::text("family").weight(0.0))
      .build();
    assert!(zero_weights.validate().is_err());
  }

  #[test]
  fn test_sanitized_repairs_misuse() {
    let config = MatcherConfig {
      min_similarity: -0.2,
      exact_match_bonus: f64::NAN,
      max_results: 0,
      fields: vec![FieldSpec::text("family").weight(-3.0), FieldSpec::name("name")],
      ..MatcherConfig::default()
    }
    .sanitized();

    assert_eq!(config.min_similarity, 0.0);
    assert_eq!(config.exact_match_bonus, 0.0);
    assert_eq!(config.max_results, 10_000);
    assert_eq!(config.fields[0].weight, 0.0);
    assert_eq!(config.fields[1].weight, 1.0);
  }

  #[test]
  fn test_from_json_str() {
    let json = r#"{
      "min_similarity": 0.5,
      "max_results": 25,
      "fields": [
        { "name": "scientific", "weight": 1.2, "name_like": true },
        { "name": "attributes", "weight": 0.6,
         "source": { "kind": "flags", "keys": ["is_tree", "is_toxic"] } }
      ],
      "token_match": "best_word",
      "suggestions": { "fixed": { "partial_limit": 6, "total": 8 } }
    }"#;

    let config = MatcherConfig::from_json_str(json).unwrap();
    assert_eq!(config.max_results, 25);
    assert_eq!(config.exact_match_bonus, 0.3);
    assert_eq!(config.token_match, TokenMatch::BestWord);
    assert_eq!(
      config.fields[1].source,
      FieldSource::Flags {
        keys: vec!["is_tree".to_string(), "is_toxic".to_string()]
      }
    );
    assert_eq!(
      config.suggestions,
      SuggestionPolicy::Fixed {
        partial_limit: 6,
        total: 8
      }
    );
  }

  #[test]
  fn test_from_json_str_validates() {
    let err = MatcherConfig::from_json_str(r#"{ "min_similarity": 2.0 }"#).unwrap_err();
    assert!(matches!(err, MatchError::InvalidConfig(_)));

    let err = MatcherConfig::from_json_str("not json").unwrap_err();
    assert!(matches!(err, MatchError::Json(_)));
  }
}
