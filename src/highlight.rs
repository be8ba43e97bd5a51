//! Rendering matched runs back into the matched text.
//!
//! Ranges are character indices, as produced by the matcher. The output is a
//! plain concatenation: neither the label nor the tag is escaped.

use thiserror::Error;

use crate::fuzzy_matcher::MatchRange;

/// Error type for ranges rejected by [`try_highlight`]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HighlightError {
    /// The range covers no character
    #[error("Empty range {0:?}")]
    EmptyRange(MatchRange),
    /// The range ends past the last character of the label
    #[error("Range {0:?} exceeds label length {1}")]
    OutOfBounds(MatchRange, usize),
    /// The range starts before the previous range ended
    #[error("Range {0:?} starts before previous end {1}")]
    Unordered(MatchRange, usize),
}

/// Byte offset of every character of `label`, plus `label.len()` at the end
fn char_boundaries(label: &str) -> Vec<usize> {
    label
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(label.len()))
        .collect()
}

/// Wraps the text covered by each range in `<tag>` and `</tag>`.
///
/// Ranges must be sorted, non-overlapping and within the label. This is not
/// checked; offending ranges are clamped to the label and to the end of the
/// previous range, so the output never repeats text. Use [`try_highlight`] to
/// reject them instead.
///
/// ```
/// use fuzzy_highlight::{MatchRange, highlight};
///
/// let ranges = [MatchRange::new(3, 5), MatchRange::new(8, 9)];
/// assert_eq!(highlight("cartwheel", &ranges, "strong"), "car<strong>tw</strong>hee<strong>l</strong>");
/// assert_eq!(highlight("cartwheel", &[], "strong"), "cartwheel");
/// ```
pub fn highlight(label: &str, ranges: &[MatchRange], tag: &str) -> String {
    if ranges.is_empty() {
        return label.to_string();
    }

    let boundaries = char_boundaries(label);
    let byte_at = |idx: usize| boundaries.get(idx).copied().unwrap_or(label.len());

    let mut ret = String::with_capacity(label.len() + ranges.len() * (2 * tag.len() + 5));
    let mut cursor = 0;
    for range in ranges {
        let start = byte_at(range.start).max(cursor);
        let end = byte_at(range.end).max(start);

        ret.push_str(&label[cursor..start]);
        ret.push('<');
        ret.push_str(tag);
        ret.push('>');
        ret.push_str(&label[start..end]);
        ret.push_str("</");
        ret.push_str(tag);
        ret.push('>');

        cursor = end;
    }
    ret.push_str(&label[cursor..]);
    ret
}

/// Like [`highlight`], but rejects empty, out of bounds, unsorted or
/// overlapping ranges.
///
/// ```
/// use fuzzy_highlight::{HighlightError, MatchRange, try_highlight};
///
/// let ranges = [MatchRange::new(8, 12)];
/// assert_eq!(
///     try_highlight("cartwheel", &ranges, "b"),
///     Err(HighlightError::OutOfBounds(MatchRange::new(8, 12), 9))
/// );
/// ```
pub fn try_highlight(label: &str, ranges: &[MatchRange], tag: &str) -> Result<String, HighlightError> {
    let len = label.chars().count();
    let mut previous_end = 0;
    for &range in ranges {
        if range.is_empty() {
            return Err(HighlightError::EmptyRange(range));
        }
        if range.end > len {
            return Err(HighlightError::OutOfBounds(range, len));
        }
        if range.start < previous_end {
            return Err(HighlightError::Unordered(range, previous_end));
        }
        previous_end = range.end;
    }
    Ok(highlight(label, ranges, tag))
}
