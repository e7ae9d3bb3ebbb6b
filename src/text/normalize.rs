//! Text normalization for botanical names and descriptions.

use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static PUNCTUATION: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"[.,;:()\[\]]").expect("valid punctuation pattern"));
static SPP_SUFFIX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)\s+spp\.?\s*$").expect("valid spp pattern"));
static VARIETY_MARKER: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)\s+var\.?\s+").expect("valid var pattern"));
static CULTIVAR_MARKER: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)\s+cv\.?\s+").expect("valid cv pattern"));

/// Normalizes text for comparison.
///
/// Steps, in order:
///
/// 1. lowercase and trim;
/// 2. strip HTML tags (`<i>Ficus</i>` becomes `ficus`);
/// 3. collapse whitespace runs to a single space;
/// 4. replace `. , ; : ( ) [ ]` with a space;
/// 5. drop a trailing `spp` marker;
/// 6. remove the first `var` and the first `cv` marker, keeping the
///    surrounding tokens;
/// 7. trim again.
///
/// The abbreviation patterns rely on tags being gone and punctuation being
/// spaces already, so the order matters. Punctuation replacement runs after
/// whitespace collapsing, which means `"a, b"` normalizes to `"a  b"`; the
/// tokenizer does not care, but whole-string equality does.
///
/// Empty input yields an empty string.
pub fn normalize(text: &str) -> String {
  if text.is_empty() {
    return String::new();
  }

  let lowered = text.to_lowercase();
  let s = HTML_TAG.replace_all(lowered.trim(), "");
  let s = WHITESPACE.replace_all(&s, " ");
  let s = PUNCTUATION.replace_all(&s, " ");
  let s = SPP_SUFFIX.replace(&s, "");
  let s = VARIETY_MARKER.replace(&s, " ");
  let s = CULTIVAR_MARKER.replace(&s, " ");

  s.trim().to_string()
}
