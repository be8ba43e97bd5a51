//! Fuzzy matching of a needle against a haystack.
//!
//! A needle matches when every one of its characters occurs in the haystack,
//! in order. The matched characters are grouped into maximal contiguous runs,
//! reported as [`MatchRange`]s, and the length of the longest run is the score.
//!
//! Offsets are character (Unicode scalar value) indices into the haystack, never
//! byte offsets, so a multi-byte character is never split.
//!
//! # Example:
//! ```
//! use fuzzy_highlight::fuzzy_matcher::{MatchRange, RunMatcher};
//!
//! let matcher = RunMatcher::default();
//! let result = matcher.fuzzy_runs("twl", "cartwheel");
//!
//! assert!(result.is_match);
//! assert_eq!(result.score, 2);
//! assert_eq!(result.ranges, [MatchRange::new(3, 5), MatchRange::new(8, 9)]);
//! ```

use serde::{Deserialize, Serialize};

use crate::options::MatchOptions;

mod runs;
pub(crate) mod util;

pub use runs::RunMatcher;

pub(crate) type IndexType = usize;
pub(crate) type ScoreType = usize;

//------------------------------------------------------------------------------
/// A half-open `[start, end)` interval of character indices denoting one
/// maximal contiguous matched run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchRange {
    /// Index of the first matched character
    pub start: IndexType,
    /// Index one past the last matched character
    pub end: IndexType,
}

impl MatchRange {
    /// Creates a range covering `start..end`
    pub const fn new(start: IndexType, end: IndexType) -> Self {
        Self { start, end }
    }

    /// Number of characters covered by the range
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the range covers no character at all
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<std::ops::Range<IndexType>> for MatchRange {
    fn from(range: std::ops::Range<IndexType>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<MatchRange> for std::ops::Range<IndexType> {
    fn from(range: MatchRange) -> Self {
        range.start..range.end
    }
}

//------------------------------------------------------------------------------
/// Outcome of matching one needle against one haystack.
///
/// `ranges` are sorted and never overlap. A failed match never carries partial
/// ranges: it is always the [`MatchResult::no_match`] sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether every needle character was found, in order
    pub is_match: bool,
    /// Length of the longest matched run, 0 when there is no match
    pub score: ScoreType,
    /// Matched runs, in ascending order
    pub ranges: Vec<MatchRange>,
}

impl MatchResult {
    /// The no-match sentinel
    pub const fn no_match() -> Self {
        Self {
            is_match: false,
            score: 0,
            ranges: Vec::new(),
        }
    }

    /// A match spanning the whole haystack of `len` characters
    pub fn perfect(len: usize) -> Self {
        Self {
            is_match: true,
            score: len,
            ranges: vec![MatchRange::new(0, len)],
        }
    }
}

//------------------------------------------------------------------------------
/// How the matcher chooses between several valid alignments of the needle
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "kebab-case"))]
pub enum ScanStrategy {
    /// Single left-to-right scan committing to the earliest occurrence of each
    /// needle character. Linear in the haystack length.
    #[default]
    Greedy,
    /// Run the greedy scan from every occurrence of the first needle character
    /// and keep the highest score; ties keep the earliest start.
    BestStart,
}

/// Matches `needle` against `haystack` with the given options.
///
/// ```
/// use fuzzy_highlight::{MatchOptions, fuzzy_match};
///
/// let result = fuzzy_match("car", "cartwheel", &MatchOptions::default());
/// assert_eq!(result.score, 3);
///
/// assert!(!fuzzy_match("lw", "cartwheel", &MatchOptions::default()).is_match);
/// ```
pub fn fuzzy_match(needle: &str, haystack: &str, options: &MatchOptions) -> MatchResult {
    RunMatcher::from(options).fuzzy_runs(needle, haystack)
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_range_len() {
        assert_eq!(MatchRange::new(3, 5).len(), 2);
        assert!(MatchRange::new(4, 4).is_empty());
        assert_eq!(MatchRange::from(1..4), MatchRange::new(1, 4));
        assert_eq!(std::ops::Range::from(MatchRange::new(1, 4)), 1..4);
    }

    #[test]
    fn test_no_match_is_default() {
        assert_eq!(MatchResult::no_match(), MatchResult::default());
    }

    #[test]
    fn test_perfect() {
        let result = MatchResult::perfect(9);
        assert!(result.is_match);
        assert_eq!(result.score, 9);
        assert_eq!(result.ranges, [MatchRange::new(0, 9)]);
    }

    #[test]
    fn test_fuzzy_match_uses_options() {
        let sensitive = MatchOptions {
            case_sensitive: true,
            ..Default::default()
        };
        assert!(fuzzy_match("CaR", "cartwheel", &MatchOptions::default()).is_match);
        assert!(!fuzzy_match("CaR", "cartwheel", &sensitive).is_match);
    }
}
