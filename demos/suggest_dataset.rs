//! Suggestion dropdown for a JSON dataset.
//!
//! Usage: `cargo run --example suggest_dataset -- <file.json> [collection] <query>`
//!
//! Without arguments the demo suggests against the built-in tree samples.

use herbarium::prelude::*;
use serde_json::Value;
use std::env;
use tracing_subscriber::EnvFilter;

mod common;
use common::sample_trees;

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let args: Vec<String> = env::args().skip(1).collect();
  let (records, query): (Vec<Value>, String) = match args.as_slice() {
    [path, collection, query] => (load_records_from_path(path, Some(collection.as_str()))?, query.clone()),
    [path, query] => (load_records_from_path(path, None)?, query.clone()),
    _ => {
      let trees = sample_trees()
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<Vec<_>, _>>()?;
      (trees, "ficus".to_string())
    }
  };

  let matcher = FuzzyMatcher::new(MatcherConfig::tree_species());
  let suggestions = matcher.get_suggestions(&records, &query);

  println!("{} suggestion(s) for \"{}\":", suggestions.len(), query);
  for suggestion in &suggestions {
    let label = suggestion.record["scientific"]
      .as_str()
      .map(|name| highlight_match(name, &query))
      .unwrap_or_else(|| suggestion.record.to_string());
    println!("  [{:>6}] {}", suggestion.relevance, label);
  }

  let mut fixed = matcher.config().clone();
  fixed.suggestions = SuggestionPolicy::Fixed {
    partial_limit: 6,
    total: 8,
  };
  let fixed = FuzzyMatcher::new(fixed);
  println!(
    "\nFixed 6+8 policy returns {} suggestion(s).",
    fixed.get_suggestions(&records, &query).len()
  );

  Ok(())
}
