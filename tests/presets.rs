use herbarium::prelude::*;
use serde_json::{json, Value};
use std::fs;

fn plants() -> Vec<Value> {
  vec![
    json!({ "plant_name": "Ficus microcarpa", "family": "Moraceae", "is_tree": "🌳", "requires_full_sun": "☀️" }),
    json!({ "plant_name": "Nerium oleander", "family": "Apocynaceae", "is_shrub": "🌿", "is_toxic": "☠️" }),
    json!({ "plant_name": "Rosa chinensis", "family": "Rosaceae", "is_shrub": "🌿" }),
  ]
}

fn trees() -> Vec<Value> {
  vec![
    json!({ "scientific": "<i>Ficus microcarpa</i> L.f.", "chinese": "細葉榕", "alternative": "Chinese banyan" }),
    json!({ "scientific": "<i>Bauhinia</i> × <i>blakeana</i> Dunn", "chinese": "洋紫荊", "alternative": "Hong Kong orchid tree" }),
    json!({ "scientific": "<i>Ficus benjamina</i> L.", "chinese": "垂葉榕", "alternative": "weeping fig" }),
    json!({ "scientific": "<i>Acer</i> spp.", "chinese": "槭屬", "alternative": "maple" }),
  ]
}

#[test]
fn test_attribute_flags_are_searchable() {
  let plants = plants();
  let matcher = FuzzyMatcher::new(MatcherConfig::plant_attribute());

  let results = matcher.search(&plants, "toxic");
  assert_eq!(results, vec![plants[1].clone()]);
}

#[test]
fn test_attribute_search_then_filter() {
  let plants = plants();
  let matcher = FuzzyMatcher::new(MatcherConfig::plant_attribute());

  let shrubs = matcher.search(&plants, "is_shrub");
  assert_eq!(shrubs.len(), 2);

  let filter = FlagFilter::new().require("is_toxic");
  assert_eq!(filter.apply(&shrubs), vec![plants[1].clone()]);
}

#[test]
fn test_tree_lookup_by_chinese_name() {
  let trees = trees();
  let matcher = FuzzyMatcher::new(MatcherConfig::tree_species());

  let results = matcher.search(&trees, "榕");
  assert_eq!(results, vec![trees[0].clone(), trees[2].clone()]);
}

#[test]
fn test_tree_names_ignore_markup_and_spp() {
  let trees = trees();
  let matcher = FuzzyMatcher::new(MatcherConfig::tree_species());

  let suggestions = matcher.get_suggestions(&trees, "Acer");
  assert_eq!(suggestions.len(), 1);
  assert_eq!(suggestions[0].record, trees[3]);
  assert_eq!(suggestions[0].relevance, RelevanceIndicator::Exact);

  let suggestions = matcher.get_suggestions(&trees, "ficus microcarpa l.f.");
  assert_eq!(suggestions.len(), 1);
  assert_eq!(suggestions[0].record, trees[0]);
}

#[test]
fn test_tree_suggestions_with_fixed_policy() {
  let trees = trees();
  let matcher = FuzzyMatcher::new(MatcherConfig {
    suggestions: SuggestionPolicy::Fixed {
      partial_limit: 1,
      total: 1,
    },
    ..MatcherConfig::tree_species()
  });

  let suggestions = matcher.get_suggestions(&trees, "ficus");
  assert_eq!(suggestions.len(), 1);
  assert_eq!(suggestions[0].record, trees[0]);
  assert_eq!(suggestions[0].relevance, RelevanceIndicator::High);
}

#[test]
fn test_etymology_preset() {
  let entries = vec![
    json!({ "latin_epithet": "microcarpa", "chinese_explanation": "小果的", "english_explanation": "small-fruited" }),
    json!({ "latin_epithet": "chinensis", "chinese_explanation": "中國的", "english_explanation": "from China" }),
  ];
  let matcher = FuzzyMatcher::new(MatcherConfig::plant_etymology());

  let results = matcher.search(&entries, "chinensys");
  assert_eq!(results.first(), Some(&entries[1]));
}

#[test]
fn test_load_dataset_and_search() {
  let path = std::env::temp_dir().join(format!("herbarium_species_{}.json", std::process::id()));
  let document = json!({ "species": trees() });
  fs::write(&path, document.to_string()).unwrap();

  let records = load_records_from_path(&path, Some("species")).unwrap();
  fs::remove_file(&path).unwrap();
  assert_eq!(records.len(), 4);

  let matcher = FuzzyMatcher::new(MatcherConfig::tree_species());
  let results = matcher.search(&records, "banyan");
  assert_eq!(results[0], records[0]);
}

#[test]
fn test_config_from_json_drives_matcher() {
  let config = MatcherConfig::from_json_str(
    r#"{
      "min_similarity": 0.4,
      "fields": [
        { "name": "scientific", "weight": 1.2, "name_like": true },
        { "name": "chinese" }
      ]
    }"#,
  )
  .unwrap();
  let matcher = FuzzyMatcher::try_new(config).unwrap();

  let trees = trees();
  assert_eq!(matcher.search(&trees, "洋紫荊"), vec![trees[1].clone()]);
}

#[test]
fn test_attribute_preset_covers_every_flag() {
  let plants = vec![
    json!({ "plant_name": "Salvia officinalis", "family": "Lamiaceae", "is_perennial": "🌱" }),
    json!({ "plant_name": "Drosera rotundifolia", "family": "Droseraceae", "is_insectivorous": "🦟" }),
    json!({ "plant_name": "Ginkgo biloba", "family": "Ginkgoaceae", "is_deciduous": "🍂", "is_antipollution": "🌬️" }),
  ];
  let matcher = FuzzyMatcher::new(MatcherConfig::plant_attribute());

  assert_eq!(matcher.search(&plants, "is_perennial"), vec![plants[0].clone()]);
  let suggestions = matcher.get_suggestions(&plants, "is_perennial");
  assert_eq!(suggestions.len(), 1);
  assert_eq!(suggestions[0].relevance, RelevanceIndicator::Exact);

  assert_eq!(matcher.search(&plants, "insectivorous"), vec![plants[1].clone()]);
  assert_eq!(matcher.search(&plants, "antipollution"), vec![plants[2].clone()]);
}
