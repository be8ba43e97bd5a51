//! Run-segmenting subsequence matcher.
//!
//! The scan walks the needle and the haystack with two cursors. Each needle
//! character advances the haystack cursor to its next occurrence; consecutive
//! hits extend the open run, and any skipped haystack character closes it.
//! The haystack cursor never moves backwards, so one scan is linear in the
//! haystack length.

use crate::fuzzy_matcher::util::{chars_eq, chars_eq_all};
use crate::fuzzy_matcher::{IndexType, MatchRange, MatchResult, ScanStrategy, ScoreType};
use crate::options::MatchOptions;

#[derive(Eq, PartialEq, Debug, Copy, Clone, Default)]
enum CaseMatching {
    Respect,
    #[default]
    Ignore,
}

/// Matcher producing contiguous runs and a longest-run score.
#[derive(Debug, Clone, Default)]
pub struct RunMatcher {
    case: CaseMatching,
    strategy: ScanStrategy,
}

impl RunMatcher {
    /// Sets the matcher to ignore case when matching.
    pub fn ignore_case(mut self) -> Self {
        self.case = CaseMatching::Ignore;
        self
    }

    /// Sets the matcher to respect case exactly.
    pub fn respect_case(mut self) -> Self {
        self.case = CaseMatching::Respect;
        self
    }

    /// Sets how competing alignments are resolved.
    pub fn strategy(mut self, strategy: ScanStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    fn is_case_sensitive(&self) -> bool {
        self.case == CaseMatching::Respect
    }

    /// Matches `needle` against `haystack`.
    pub fn fuzzy_runs(&self, needle: &str, haystack: &str) -> MatchResult {
        let needle: Vec<char> = needle.chars().collect();
        let haystack: Vec<char> = haystack.chars().collect();
        self.fuzzy_runs_chars(&needle, &haystack)
    }

    /// Matches already decoded characters. Ranges index into `haystack`.
    pub fn fuzzy_runs_chars(&self, needle: &[char], haystack: &[char]) -> MatchResult {
        let case_sensitive = self.is_case_sensitive();
        let (n, m) = (needle.len(), haystack.len());

        if n == 0 || n > m {
            return MatchResult::no_match();
        }

        if n == m {
            return if chars_eq_all(needle, haystack, case_sensitive) {
                MatchResult::perfect(n)
            } else {
                MatchResult::no_match()
            };
        }

        let result = match self.strategy {
            ScanStrategy::Greedy => scan_runs(needle, haystack, 0, case_sensitive),
            ScanStrategy::BestStart => best_start(needle, haystack, case_sensitive),
        };

        trace!(
            "{:?} scan of {} chars over {} chars: {:?}",
            self.strategy, n, m, result
        );

        result.unwrap_or_default()
    }
}

impl From<&MatchOptions> for RunMatcher {
    fn from(options: &MatchOptions) -> Self {
        let matcher = RunMatcher::default().strategy(options.strategy);
        if options.case_sensitive {
            matcher.respect_case()
        } else {
            matcher.ignore_case()
        }
    }
}

//------------------------------------------------------------------------------
/// Completed runs plus the length of the longest one
#[derive(Default)]
struct Runs {
    ranges: Vec<MatchRange>,
    score: ScoreType,
}

impl Runs {
    fn close(&mut self, start: IndexType, end: IndexType) {
        self.score = self.score.max(end - start);
        self.ranges.push(MatchRange::new(start, end));
    }

    fn into_result(self) -> MatchResult {
        MatchResult {
            is_match: !self.ranges.is_empty(),
            score: self.score,
            ranges: self.ranges,
        }
    }
}

/// Greedy scan from haystack position `from`.
///
/// Returns `None` as soon as a needle character has no occurrence left, so a
/// partial alignment is never reported.
fn scan_runs(needle: &[char], haystack: &[char], from: IndexType, case_sensitive: bool) -> Option<MatchResult> {
    let mut runs = Runs::default();
    let mut open: Option<IndexType> = None;
    let mut cursor = from;

    for &nch in needle {
        loop {
            let hch = *haystack.get(cursor)?;
            if chars_eq(nch, hch, case_sensitive) {
                open.get_or_insert(cursor);
                cursor += 1;
                break;
            }
            if let Some(start) = open.take() {
                runs.close(start, cursor);
            }
            cursor += 1;
        }
    }

    if let Some(start) = open {
        runs.close(start, cursor);
    }

    Some(runs.into_result())
}

/// Greedy scan from every occurrence of the first needle character, keeping
/// the highest score. Ties keep the earliest start.
fn best_start(needle: &[char], haystack: &[char], case_sensitive: bool) -> Option<MatchResult> {
    let first = *needle.first()?;
    let mut best: Option<MatchResult> = None;

    for (start, &hch) in haystack.iter().enumerate() {
        if !chars_eq(first, hch, case_sensitive) {
            continue;
        }
        // a later start only sees a suffix of the haystack, so it cannot succeed either
        let Some(result) = scan_runs(needle, haystack, start, case_sensitive) else {
            break;
        };
        if best.as_ref().is_none_or(|b| result.score > b.score) {
            trace!("new best start {start} with score {}", result.score);
            best = Some(result);
        }
        if best.as_ref().is_some_and(|b| b.score == needle.len()) {
            break;
        }
    }

    best
}
