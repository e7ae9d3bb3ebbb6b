//! Query-term highlighting for suggestion labels.

use crate::text::{normalize, split_normalized};
use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};

static ITALIC: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)(<i>)(.*?)(</i>)").expect("valid italic pattern"));

/// Wrap each query token (two characters or longer) in `<strong>` tags.
///
/// Matching is case-insensitive. Scientific names are stored as
/// `<i>Genus species</i>`; when the text has italic tags only the italic
/// content is highlighted so the surrounding markup is left alone.
pub fn highlight_match(html: &str, query: &str) -> String {
  let normalized = normalize(query);
  let mut result = html.to_string();

  for token in split_normalized(&normalized) {
    if token.chars().count() < 2 {
      continue;
    }

    let pattern = match RegexBuilder::new(&format!("({})", regex::escape(&token)))
      .case_insensitive(true)
      .build()
    {
      Ok(pattern) => pattern,
      Err(err) => {
        tracing::trace!(error = %err, token = %token, "skipping unhighlightable token");
        continue;
      }
    };

    result = if result.contains("<i>") && result.contains("</i>") {
      ITALIC
        .replace_all(&result, |caps: &Captures| {
          format!(
            "{}{}{}",
            &caps[1],
            pattern.replace_all(&caps[2], "<strong>$1</strong>"),
            &caps[3]
          )
        })
        .into_owned()
    } else {
      pattern.replace_all(&result, "<strong>$1</strong>").into_owned()
    };
  }

  result
}
