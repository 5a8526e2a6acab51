//! Small text and array helpers behind `FINDPOS`, `EXTRACTSUBSTR`,
//! `TRUESPLIT` and `ARRAYSUBTRACT`.
//!
//! Everything here is pure. Mapping a `None` to a spreadsheet error such as
//! `#N/A` is left to the builtin wrappers.

use std::collections::HashSet;

/// 1-based character position of the `instance`-th case-insensitive match of
/// `needle` in `text`, or of the last match when `instance == -1`.
///
/// Matches may overlap: the search resumes one character after each match
/// start.
pub fn find_pos(text: &str, needle: &str, instance: i64) -> Option<usize> {
    if text.is_empty() || needle.is_empty() {
        return None;
    }
    let hay: Vec<char> = text.chars().collect();
    let pat: Vec<char> = needle.chars().collect();
    if pat.len() > hay.len() {
        return None;
    }

    let positions: Vec<usize> = (0..=hay.len() - pat.len())
        .filter(|&start| {
            hay[start..start + pat.len()]
                .iter()
                .zip(&pat)
                .all(|(a, b)| eq_ignore_case(*a, *b))
        })
        .map(|start| start + 1)
        .collect();

    match instance {
        -1 => positions.last().copied(),
        n if n > 0 => usize::try_from(n - 1)
            .ok()
            .and_then(|idx| positions.get(idx).copied()),
        _ => None,
    }
}

fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Text between the first `start` marker and the next `end` marker after it.
///
/// With no end marker (or an empty one) everything after the start marker is
/// returned. `None` when `text` or `start` is empty, or a marker is missing.
pub fn extract_substr(text: &str, start: &str, end: Option<&str>) -> Option<String> {
    if text.is_empty() || start.is_empty() {
        return None;
    }
    let from = text.find(start)? + start.len();
    let rest = &text[from..];

    match end.filter(|e| !e.is_empty()) {
        None => Some(rest.to_string()),
        Some(end) => rest.find(end).map(|to| rest[..to].to_string()),
    }
}

/// Split on `delimiter`, keeping empty parts.
pub fn split_keep_empty(s: &str, delimiter: &str) -> Vec<String> {
    s.split(delimiter).map(str::to_string).collect()
}

/// Pad every row with empty strings to the width of the widest row.
pub fn pad_rows(mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0).max(1);
    for row in &mut rows {
        row.resize(width, String::new());
    }
    rows
}

/// Keep the items of `a` whose key does not appear among the keys of `b`.
///
/// Keys are compared case-insensitively. Items with no key (empty cells) are
/// dropped from `a` and ignored in `b`.
pub fn subtract_by_key<T, F>(a: Vec<T>, b: &[T], key: F) -> Vec<T>
where
    F: Fn(&T) -> Option<String>,
{
    let remove: HashSet<String> = b
        .iter()
        .filter_map(&key)
        .map(|k| k.to_lowercase())
        .collect();

    a.into_iter()
        .filter(|item| key(item).is_some_and(|k| !remove.contains(&k.to_lowercase())))
        .collect()
}
