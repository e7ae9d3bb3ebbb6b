//! Herbarium - fuzzy matching and suggestion ranking for reference datasets.
//!
//! Herbarium scores small in-memory record collections (plant attributes,
//! etymologies, tree species) against free-text queries. Each configured
//! field contributes the best of an exact, prefix, whole-string fuzzy and
//! token fuzzy signal; fields are combined by weight. On top of that sit a
//! ranked search and a three-tier suggestion list with relevance badges.
//!
//! The matcher is a pure function of `(records, query, config)`: nothing is
//! cached between calls and no call can fail.

pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod highlight;
pub mod matcher;
pub mod record;
pub mod scoring;
pub mod suggest;
pub mod text;
pub mod types;

pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::dataset::{load_records_from_path, load_records_from_str};
    pub use crate::error::*;
    pub use crate::filter::*;
    pub use crate::highlight::*;
    pub use crate::matcher::*;
    pub use crate::suggest::MatchTier;
    pub use crate::text::{jaro_winkler, levenshtein, normalize, similarity, tokenize};
    pub use crate::types::*;
}
