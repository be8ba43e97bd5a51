//! Ranking several candidates against one needle.

use std::cmp::Reverse;

use crate::fuzzy_matcher::{MatchResult, RunMatcher};
use crate::options::MatchOptions;

/// A matched candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<'a> {
    /// Position of the candidate in the input
    pub index: usize,
    /// The candidate text
    pub text: &'a str,
    /// How the needle matched it
    pub result: MatchResult,
}

/// Matches every candidate and returns the matches, best score first.
///
/// The sort is stable: candidates with equal scores keep their input order.
///
/// ```
/// use fuzzy_highlight::{MatchOptions, rank};
///
/// let ranked = rank("car", ["c-a-r", "cartwheel", "scar"], &MatchOptions::default());
/// let texts: Vec<_> = ranked.iter().map(|r| r.text).collect();
/// assert_eq!(texts, ["cartwheel", "scar", "c-a-r"]);
/// ```
pub fn rank<'a, I>(needle: &str, candidates: I, options: &MatchOptions) -> Vec<Ranked<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let matcher = RunMatcher::from(options);
    let needle: Vec<char> = needle.chars().collect();
    let mut haystack = Vec::new();

    let mut ranked: Vec<Ranked<'a>> = candidates
        .into_iter()
        .enumerate()
        .filter_map(|(index, text)| {
            haystack.clear();
            haystack.extend(text.chars());
            let result = matcher.fuzzy_runs_chars(&needle, &haystack);
            result.is_match.then_some(Ranked { index, text, result })
        })
        .collect();

    ranked.sort_by_key(|r| Reverse(r.result.score));
    debug!("ranked {} matches", ranked.len());
    ranked
}
