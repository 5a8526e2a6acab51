//! Common and differing substrings built on top of the run list.

use tracing::debug;

use super::{AlignLimits, AlignTable, Run, backtrack, extract_runs};
use crate::error::Result;

/// Whether a [`Segment`] is covered by a run or lies in a gap between runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Common,
    Differing,
}

/// One piece of the run/gap partition of the first input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Start position in the first input (characters).
    pub start: usize,
    pub text: String,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The runs found between two strings, over the first string's positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    chars1: Vec<char>,
    runs: Vec<Run>,
}

impl Alignment {
    /// Runs in ascending `start1` order, unfiltered.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Runs of at least `min_length` characters. A threshold below 1 selects
    /// nothing.
    pub fn common_runs(&self, min_length: i64) -> impl Iterator<Item = &Run> {
        let min = threshold(min_length);
        self.runs
            .iter()
            .filter(move |run| min.is_some_and(|min| run.len >= min))
    }

    /// Text of runs with at least `min_length` characters.
    pub fn common(&self, min_length: i64) -> Vec<String> {
        self.common_runs(min_length)
            .map(|run| run.value.clone())
            .collect()
    }

    /// Gaps of the first input not covered by any run, with at least
    /// `min_length` characters.
    pub fn differing(&self, min_length: i64) -> Vec<String> {
        let Some(min) = threshold(min_length) else {
            return Vec::new();
        };
        self.gaps()
            .filter(|(start, end)| end - start >= min)
            .map(|(start, end)| self.slice(start, end))
            .collect()
    }

    /// The whole first input split into runs and gaps, in position order.
    /// Concatenating the segment texts gives back the first input.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.runs.len() * 2 + 1);
        let mut gaps = self.gaps();
        for run in &self.runs {
            if let Some((start, end)) = gaps.next()
                && start < run.start1
            {
                debug_assert_eq!(end, run.start1);
                segments.push(Segment {
                    kind: SegmentKind::Differing,
                    start,
                    text: self.slice(start, end),
                });
            }
            segments.push(Segment {
                kind: SegmentKind::Common,
                start: run.start1,
                text: run.value.clone(),
            });
        }
        if let Some((start, end)) = gaps.next()
            && start < end
        {
            segments.push(Segment {
                kind: SegmentKind::Differing,
                start,
                text: self.slice(start, end),
            });
        }
        segments
    }

    /// `(start, end)` of the span before each run and after the last one.
    /// Spans may be empty; there are always `runs.len() + 1` of them.
    fn gaps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let ends = self
            .runs
            .iter()
            .map(|run| run.start1)
            .chain(std::iter::once(self.chars1.len()));
        let starts = std::iter::once(0).chain(self.runs.iter().map(Run::end1));
        starts.zip(ends)
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.chars1[start..end].iter().collect()
    }
}

/// Align `s1` against `s2` and return the run list.
pub fn align(s1: &str, s2: &str, limits: &AlignLimits) -> Result<Alignment> {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    limits.check(a.len(), b.len())?;

    let table = AlignTable::build(&a, &b);
    let matches = backtrack(&table, &a, &b);
    let runs = extract_runs(&matches, &a);
    debug!(
        len1 = a.len(),
        len2 = b.len(),
        lcs = table.lcs_len(),
        runs = runs.len(),
        "aligned strings"
    );

    Ok(Alignment { chars1: a, runs })
}

/// Maximal common substrings of `s1` and `s2` with at least `min_length`
/// characters, in order of position in `s1`.
///
/// Empty inputs or a threshold below 1 give an empty result.
pub fn common_substrings(
    s1: &str,
    s2: &str,
    min_length: i64,
    limits: &AlignLimits,
) -> Result<Vec<String>> {
    if s1.is_empty() || s2.is_empty() || min_length < 1 {
        return Ok(Vec::new());
    }
    Ok(align(s1, s2, limits)?.common(min_length))
}

/// Maximal substrings of `s1` not covered by its alignment with `s2`, with
/// at least `min_length` characters.
///
/// Gaps are taken against the unfiltered run list, so the threshold here is
/// independent of any threshold used for [`common_substrings`].
pub fn differing_substrings(
    s1: &str,
    s2: &str,
    min_length: i64,
    limits: &AlignLimits,
) -> Result<Vec<String>> {
    if s1.is_empty() || min_length < 1 {
        return Ok(Vec::new());
    }
    if s2.is_empty() {
        let fits = threshold(min_length).is_some_and(|min| s1.chars().count() >= min);
        return Ok(if fits { vec![s1.to_string()] } else { Vec::new() });
    }
    Ok(align(s1, s2, limits)?.differing(min_length))
}

fn threshold(min_length: i64) -> Option<usize> {
    if min_length < 1 {
        return None;
    }
    Some(usize::try_from(min_length).unwrap_or(usize::MAX))
}
