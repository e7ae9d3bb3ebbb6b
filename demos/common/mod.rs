#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A tree species entry.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Tree {
  pub scientific: String,
  pub chinese: String,
  pub alternative: String,
  pub family: String,
}

impl Tree {
  /// Create a new tree entry.
  pub fn new(
    scientific: impl Into<String>,
    chinese: impl Into<String>,
    alternative: impl Into<String>,
    family: impl Into<String>,
  ) -> Self {
    Self {
      scientific: scientific.into(),
      chinese: chinese.into(),
      alternative: alternative.into(),
      family: family.into(),
    }
  }
}

/// Sample tree species for the demos.
pub fn sample_trees() -> Vec<Tree> {
  vec![
    Tree::new("<i>Ficus microcarpa</i> L.f.", "細葉榕", "Chinese banyan", "Moraceae"),
    Tree::new("<i>Ficus benjamina</i> L.", "垂葉榕", "weeping fig", "Moraceae"),
    Tree::new("<i>Ficus elastica</i> Roxb.", "印度橡膠榕", "rubber plant", "Moraceae"),
    Tree::new("<i>Bauhinia</i> × <i>blakeana</i> Dunn", "洋紫荊", "Hong Kong orchid tree", "Fabaceae"),
    Tree::new("<i>Delonix regia</i> (Hook.) Raf.", "鳳凰木", "flame tree", "Fabaceae"),
    Tree::new("<i>Melaleuca cajuputi</i> subsp. <i>cumingiana</i>", "白千層", "paperbark", "Myrtaceae"),
    Tree::new("<i>Cinnamomum camphora</i> (L.) J.Presl", "樟", "camphor tree", "Lauraceae"),
    Tree::new("<i>Acer</i> spp.", "槭屬", "maple", "Sapindaceae"),
  ]
}

/// Sample rows of the plant attribute dataset.
pub fn sample_plants() -> Vec<Value> {
  vec![
    json!({ "plant_name": "Ficus microcarpa", "family": "Moraceae", "is_tree": "🌳", "requires_full_sun": "☀️", "is_wind_tolerant": "🌬️" }),
    json!({ "plant_name": "Nerium oleander", "family": "Apocynaceae", "is_shrub": "🌿", "is_toxic": "☠️", "is_drought_tolerant": "🌵" }),
    json!({ "plant_name": "Epipremnum aureum", "family": "Araceae", "is_climber": "🧗", "requires_semi_shade": "⛅", "is_lightly_toxic": "⚠️" }),
    json!({ "plant_name": "Rosa chinensis", "family": "Rosaceae", "is_shrub": "🌿", "requires_full_sun": "☀️" }),
    json!({ "plant_name": "Nymphaea tetragona", "family": "Nymphaeaceae", "is_water_plant": "💧", "requires_lots_of_water": "🌊" }),
    json!({ "plant_name": "Aloe vera", "family": "Asphodelaceae", "is_succulent": "🪴", "is_drought_tolerant": "🌵", "has_cold_phobia": "🥶" }),
  ]
}
