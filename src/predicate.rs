//! Boolean match helpers over a single string or a set of named fields.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;

use crate::fuzzy_matcher::{MatchResult, fuzzy_match};
use crate::highlight::highlight;
use crate::options::MatchOptions;

/// Something a needle can be fuzzy matched against: one string, or a
/// collection of strings that matches when any of them does.
pub trait MatchTarget {
    /// Whether `needle` matches this target
    fn fuzzy_matches(&self, needle: &str, options: &MatchOptions) -> bool;
}

impl MatchTarget for str {
    fn fuzzy_matches(&self, needle: &str, options: &MatchOptions) -> bool {
        fuzzy_match(needle, self, options).is_match
    }
}

impl MatchTarget for String {
    fn fuzzy_matches(&self, needle: &str, options: &MatchOptions) -> bool {
        self.as_str().fuzzy_matches(needle, options)
    }
}

impl<V: AsRef<str>> MatchTarget for [V] {
    fn fuzzy_matches(&self, needle: &str, options: &MatchOptions) -> bool {
        any_matches(needle, self, options)
    }
}

impl<V: AsRef<str>> MatchTarget for Vec<V> {
    fn fuzzy_matches(&self, needle: &str, options: &MatchOptions) -> bool {
        self.as_slice().fuzzy_matches(needle, options)
    }
}

impl<K, V: AsRef<str>, S> MatchTarget for HashMap<K, V, S> {
    fn fuzzy_matches(&self, needle: &str, options: &MatchOptions) -> bool {
        any_matches(needle, self.values(), options)
    }
}

impl<K, V: AsRef<str>> MatchTarget for BTreeMap<K, V> {
    fn fuzzy_matches(&self, needle: &str, options: &MatchOptions) -> bool {
        any_matches(needle, self.values(), options)
    }
}

impl<K, V: AsRef<str>, S> MatchTarget for IndexMap<K, V, S> {
    fn fuzzy_matches(&self, needle: &str, options: &MatchOptions) -> bool {
        any_matches(needle, self.values(), options)
    }
}

fn any_matches<'a, V, I>(needle: &str, values: I, options: &MatchOptions) -> bool
where
    V: AsRef<str> + 'a,
    I: IntoIterator<Item = &'a V>,
{
    values
        .into_iter()
        .any(|value| fuzzy_match(needle, value.as_ref(), options).is_match)
}

/// Returns true if every character of `needle` occurs in `target`, in order.
///
/// A map matches when any of its values does; an empty map never matches.
///
/// ```
/// use std::collections::HashMap;
/// use fuzzy_highlight::{MatchOptions, is_fuzzy_match};
///
/// let options = MatchOptions::default();
/// assert!(is_fuzzy_match("CaR", "cartwheel", &options));
/// assert!(!is_fuzzy_match("CaR", "cartwheel", &MatchOptions::respect_case()));
///
/// let fields = HashMap::from([("name", "cartwheel"), ("kind", "move")]);
/// assert!(is_fuzzy_match("twl", &fields, &options));
/// ```
pub fn is_fuzzy_match<T: MatchTarget + ?Sized>(needle: &str, target: &T, options: &MatchOptions) -> bool {
    target.fuzzy_matches(needle, options)
}

/// Returns the best matching field and its result.
///
/// The highest score wins; ties keep the field that comes first in iteration
/// order, so pass an ordered map (e.g. `IndexMap` or `BTreeMap`) when the
/// tie-break matters.
///
/// ```
/// use indexmap::IndexMap;
/// use fuzzy_highlight::{MatchOptions, best_field};
///
/// let fields = IndexMap::from([("title", "cartwheel"), ("alt", "car")]);
/// let (key, result) = best_field("car", &fields, &MatchOptions::default()).unwrap();
/// assert_eq!(*key, "title");
/// assert_eq!(result.score, 3);
/// ```
pub fn best_field<'a, K, V, I>(needle: &str, fields: I, options: &MatchOptions) -> Option<(&'a K, MatchResult)>
where
    K: 'a,
    V: AsRef<str> + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    fields
        .into_iter()
        .map(|(key, value)| (key, fuzzy_match(needle, value.as_ref(), options)))
        .filter(|(_, result)| result.is_match)
        .reduce(|best, current| if current.1.score > best.1.score { current } else { best })
}

/// Matches `needle` against `haystack` and wraps the matched runs in
/// `options.tag`. Returns `haystack` unchanged when there is no match.
///
/// ```
/// use fuzzy_highlight::{MatchOptions, MatchOptionsBuilder, fuzzy_highlight};
///
/// assert_eq!(fuzzy_highlight("car", "cartwheel", &MatchOptions::default()), "<strong>car</strong>twheel");
///
/// let options = MatchOptionsBuilder::default().tag("foo").build().unwrap();
/// assert_eq!(fuzzy_highlight("twl", "cartwheel", &options), "car<foo>tw</foo>hee<foo>l</foo>");
/// ```
pub fn fuzzy_highlight(needle: &str, haystack: &str, options: &MatchOptions) -> String {
    let result = fuzzy_match(needle, haystack, options);
    highlight(haystack, &result.ranges, &options.tag)
}
