/// Compares two characters, folding both to lower case unless `case_sensitive`.
#[inline]
pub fn chars_eq(a: char, b: char, case_sensitive: bool) -> bool {
    a == b || (!case_sensitive && a.to_lowercase().eq(b.to_lowercase()))
}

/// Whole-slice equality under the same rules as [`chars_eq`].
pub fn chars_eq_all(a: &[char], b: &[char], case_sensitive: bool) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| chars_eq(x, y, case_sensitive))
}

/// Wraps every matched run in square brackets, for readable assertions.
#[cfg(test)]
pub fn wrap_runs(line: &str, ranges: &[crate::fuzzy_matcher::MatchRange]) -> String {
    let mut ret = String::new();
    let mut ranges = ranges.iter().peekable();
    for (idx, ch) in line.chars().enumerate() {
        if ranges.peek().is_some_and(|r| r.start == idx) {
            ret.push('[');
        }
        ret.push(ch);
        if ranges.peek().is_some_and(|r| r.end == idx + 1) {
            ret.push(']');
            ranges.next();
        }
    }
    ret
}
