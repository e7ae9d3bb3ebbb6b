use herbarium::prelude::*;
use serde_json::{json, Value};

fn names(records: &[Value]) -> Vec<&str> {
  records.iter().filter_map(|r| r["name"].as_str()).collect()
}

#[test]
fn test_shared_genus_keeps_insertion_order() {
  let records = vec![json!({ "name": "Ficus microcarpa" }), json!({ "name": "Ficus benjamina" })];
  let matcher = FuzzyMatcher::default();

  let results = matcher.search_scored(&records, "ficus");
  assert_eq!(results.len(), 2);
  assert_eq!(results[0].record["name"], "Ficus microcarpa");
  assert_eq!(results[1].record["name"], "Ficus benjamina");
  for result in &results {
    assert!(result.score >= matcher.config().min_similarity);
  }
}

#[test]
fn test_exact_name_suggests_one_exact() {
  let records = vec![json!({ "name": "Rosa chinensis" })];
  let suggestions = FuzzyMatcher::default().get_suggestions(&records, "rosa chinensis");

  assert_eq!(suggestions.len(), 1);
  assert_eq!(suggestions[0].relevance, RelevanceIndicator::Exact);
  assert_eq!(suggestions[0].record, records[0]);
}

#[test]
fn test_one_letter_typo_is_found() {
  let records = vec![json!({ "name": "Ficus microcarpa" })];
  let matcher = FuzzyMatcher::new(
    MatcherConfig::builder()
      .min_similarity(0.5)
      .field(FieldSpec::name("name"))
      .build(),
  );

  assert_eq!(matcher.search(&records, "fiscus"), records);
  assert!(matcher.score_record(&records[0], "fiscus") >= 0.8);
}

#[test]
fn test_empty_collection() {
  let records: Vec<Value> = Vec::new();
  let matcher = FuzzyMatcher::default();

  assert!(matcher.search(&records, "ficus").is_empty());
  assert!(matcher.get_suggestions(&records, "ficus").is_empty());
  assert!(matcher.search(&records, "").is_empty());
}

#[test]
fn test_empty_query_passthrough() {
  let records: Vec<Value> = (0..12).map(|i| json!({ "name": format!("Acer {i}") })).collect();
  let matcher = FuzzyMatcher::new(MatcherConfig {
    max_results: 5,
    ..MatcherConfig::default()
  });

  assert_eq!(matcher.search(&records, ""), records);
  assert_eq!(matcher.search(&records, "  \t "), records);

  let suggestions = matcher.get_suggestions(&records, "");
  assert_eq!(suggestions.len(), 5);
  assert!(suggestions.iter().all(|s| s.relevance == RelevanceIndicator::Exact));
  assert_eq!(suggestions[4].record, records[4]);
}

#[test]
fn test_partial_matches_are_badged_high() {
  let records = vec![
    json!({ "name": "Rosa chinensis" }),
    json!({ "name": "Ficus microcarpa" }),
    json!({ "name": "Rosa rugosa" }),
  ];
  let suggestions = FuzzyMatcher::default().get_suggestions(&records, "Rosa");

  let picked: Vec<Value> = suggestions.iter().map(|s| s.record.clone()).collect();
  assert_eq!(names(&picked), vec!["Rosa chinensis", "Rosa rugosa"]);
  assert!(suggestions.iter().all(|s| s.relevance == RelevanceIndicator::High));
}

#[test]
fn test_non_matching_query_returns_nothing() {
  let records = vec![json!({ "name": "Ficus microcarpa" })];
  let matcher = FuzzyMatcher::default();

  assert!(matcher.search(&records, "zzzzzzzz").is_empty());
  assert!(matcher.get_suggestions(&records, "zzzzzzzz").is_empty());
}
