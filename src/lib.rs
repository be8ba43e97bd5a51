//! fuzzy-highlight matches a short needle against longer text and highlights
//! what matched.
//!
//! A needle matches when all of its characters occur in the haystack in order,
//! not necessarily next to each other. The matched characters are grouped into
//! contiguous runs, the longest run gives the score, and the runs can be
//! rendered back into the haystack wrapped in a tag. It can be used as a
//! library or through the `fzh` command-line tool.
//!
//! # Examples
//!
//! ```
//! use fuzzy_highlight::prelude::*;
//!
//! let options = MatchOptions::default();
//!
//! let result = fuzzy_match("twl", "cartwheel", &options);
//! assert_eq!(result.score, 2);
//! assert_eq!(
//!     highlight("cartwheel", &result.ranges, &options.tag),
//!     "car<strong>tw</strong>hee<strong>l</strong>"
//! );
//!
//! assert!(is_fuzzy_match("语言", "php语言", &options));
//! ```

#![warn(missing_docs)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[macro_use]
extern crate log;

pub use crate::fuzzy_matcher::{MatchRange, MatchResult, ScanStrategy, fuzzy_match};
pub use crate::highlight::{HighlightError, highlight, try_highlight};
pub use crate::options::{DEFAULT_TAG, MatchOptions, MatchOptionsBuilder};
pub use crate::predicate::{MatchTarget, best_field, fuzzy_highlight, is_fuzzy_match};
pub use crate::rank::{Ranked, rank};

pub mod fuzzy_matcher;
pub mod highlight;
pub mod options;
pub mod predicate;
pub mod prelude;
pub mod rank;

#[cfg(feature = "cli")]
pub mod completions;
