//! Text tokenization utilities.

use super::normalize::normalize;

/// Tokenize text into normalized, whitespace-delimited words.
pub fn tokenize(text: &str) -> Vec<String> {
  split_normalized(&normalize(text))
}

/// Split text that is already normalized.
///
/// Callers that cache the normalized form use this to avoid normalizing twice.
pub fn split_normalized(normalized: &str) -> Vec<String> {
  normalized.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tokenize() {
    let tokens = tokenize("Ficus microcarpa, var. crassifolia");
    assert_eq!(tokens, vec!["ficus", "microcarpa", "crassifolia"]);
  }

  #[test]
  fn test_tokenize_drops_empty_tokens() {
    assert_eq!(tokenize("Acer (maple)"), vec!["acer", "maple"]);
    assert!(tokenize("   ").is_empty());
    assert!(tokenize("").is_empty());
  }

  #[test]
  fn test_cjk_runs_stay_whole() {
    assert_eq!(tokenize("細葉榕 榕樹"), vec!["細葉榕", "榕樹"]);
  }
}
