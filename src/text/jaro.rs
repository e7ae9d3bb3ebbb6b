//! Jaro-Winkler similarity.
//!
//! `strsim::jaro_winkler` only applies the prefix boost above a 0.7 Jaro
//! score and halves transpositions with integer division. Scores here must
//! match the dataset pages exactly, so the metric is spelled out in full.

/// Maximum prefix length that earns the Winkler boost.
const MAX_PREFIX: usize = 4;
/// Weight of each shared prefix character.
const PREFIX_SCALE: f64 = 0.1;

/// Jaro-Winkler similarity in `[0, 1]`.
///
/// Identical strings score 1.0. If either side is empty, or the match
/// window `floor(max_len / 2) - 1` would be negative, the score is 0.0.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
  if a == b {
    return 1.0;
  }

  let a: Vec<char> = a.chars().collect();
  let b: Vec<char> = b.chars().collect();
  if a.is_empty() || b.is_empty() {
    return 0.0;
  }

  let window = match (a.len().max(b.len()) / 2).checked_sub(1) {
    Some(window) => window,
    None => return 0.0,
  };

  let mut a_matched = vec![false; a.len()];
  let mut b_matched = vec![false; b.len()];
  let mut matches = 0usize;

  for (i, ca) in a.iter().enumerate() {
    let start = i.saturating_sub(window);
    let end = (i + window + 1).min(b.len());
    for j in start..end {
      if b_matched[j] || *ca != b[j] {
        continue;
      }
      a_matched[i] = true;
      b_matched[j] = true;
      matches += 1;
      break;
    }
  }

  if matches == 0 {
    return 0.0;
  }

  let mut transpositions = 0usize;
  let mut k = 0usize;
  for (i, ca) in a.iter().enumerate() {
    if !a_matched[i] {
      continue;
    }
    while !b_matched[k] {
      k += 1;
    }
    if *ca != b[k] {
      transpositions += 1;
    }
    k += 1;
  }

  let m = matches as f64;
  let jaro = (m / a.len() as f64 + m / b.len() as f64 + (m - transpositions as f64 / 2.0) / m) / 3.0;

  let prefix = a
    .iter()
    .zip(b.iter())
    .take(MAX_PREFIX)
    .take_while(|(x, y)| x == y)
    .count();

  jaro + PREFIX_SCALE * prefix as f64 * (1.0 - jaro)
}
