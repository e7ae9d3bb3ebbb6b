//! String primitives shared by the scorers.
//!
//! Everything here is a pure function over `&str`. Normalization happens
//! once per record field and once per query; the similarity metrics operate
//! on already-normalized text.
//!
//! - [`normalize`](crate::text::normalize::normalize): lowercasing, tag stripping, punctuation and
//!   botanical-abbreviation cleanup.
//! - [`tokenize`](crate::text::tokenizer::tokenize): whitespace tokens of the normalized text.
//! - [`similarity`](crate::text::edit_distance::similarity): Levenshtein-derived ratio for free text.
//! - [`jaro_winkler`](crate::text::jaro::jaro_winkler): prefix-weighted metric for name-like fields.

/// Levenshtein distance and the derived similarity ratio.
pub mod edit_distance;
/// Jaro-Winkler similarity for short proper nouns.
pub mod jaro;
/// Text normalization applied before every comparison.
pub mod normalize;
/// Whitespace tokenization of normalized text.
pub mod tokenizer;

pub use edit_distance::{levenshtein, similarity};
pub use jaro::jaro_winkler;
pub use normalize::normalize;
pub use tokenizer::{split_normalized, tokenize};
