//! Levenshtein distance and the similarity ratio derived from it.

/// Classic edit distance: insertions, deletions and substitutions each cost 1.
///
/// Counted in `char`s, so a CJK character is one edit.
pub fn levenshtein(a: &str, b: &str) -> usize {
  strsim::levenshtein(a, b)
}

/// Similarity ratio `1 - distance / longer_len`, in `[0, 1]`.
///
/// Returns 0.0 when exactly one side is empty and 1.0 when both are.
pub fn similarity(a: &str, b: &str) -> f64 {
  match (a.is_empty(), b.is_empty()) {
    (true, true) => 1.0,
    (true, false) | (false, true) => 0.0,
    (false, false) => {
      let longer = a.chars().count().max(b.chars().count());
      1.0 - levenshtein(a, b) as f64 / longer as f64
    }
  }
}
