//! Ranked search over the tree species and plant attribute samples.
//!
//! Run with `RUST_LOG=herbarium=debug` to see the matcher's tracing output.

use herbarium::prelude::*;
use tracing_subscriber::EnvFilter;

mod common;
use common::{sample_plants, sample_trees};

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let trees = sample_trees();
  let matcher = FuzzyMatcher::new(MatcherConfig::tree_species());

  println!("=== Tree species ===\n");
  for query in ["fiscus", "ficus benjamina", "榕", "flame", "camphor tre", "acer spp."] {
    println!("Query: \"{}\"", query);
    let results = matcher.search_scored(&trees, query);
    if results.is_empty() {
      println!("  (no matches)");
    }
    for (i, result) in results.iter().enumerate() {
      println!(
        "  {}. [{:.3}] {} / {}",
        i + 1,
        result.score,
        highlight_match(&result.record.scientific, query),
        result.record.chinese
      );
    }
    println!();
  }

  let plants = sample_plants();
  let matcher = FuzzyMatcher::new(MatcherConfig::plant_attribute());

  println!("=== Plant attributes ===\n");
  let filter = FlagFilter::new().require("is_drought_tolerant");
  for query in ["toxic", "full sun", "ficus", "nerium"] {
    let results = matcher.search(&plants, query);
    let drought_tolerant = filter.apply(&results);
    println!(
      "Query: \"{}\" -> {} result(s), {} drought tolerant",
      query,
      results.len(),
      drought_tolerant.len()
    );
    for plant in &results {
      println!("  - {} ({})", plant["plant_name"], plant["family"]);
    }
    println!();
  }
}
