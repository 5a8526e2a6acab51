//! Coalesce an ascending match path into maximal contiguous runs.

use super::Match;

/// A maximal block of matches advancing in lockstep in both inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    /// Start position in the first input (characters).
    pub start1: usize,
    /// Start position in the second input (characters).
    pub start2: usize,
    pub len: usize,
    /// `a[start1..start1 + len]`.
    pub value: String,
}

impl Run {
    /// One past the last position covered in the first input.
    pub fn end1(&self) -> usize {
        self.start1 + self.len
    }
}

/// Merge consecutive matches into runs, ordered by `start1`.
///
/// # Panics
///
/// If `matches` is not strictly increasing in both coordinates. That can only
/// happen when the table and the walk that produced the path disagree.
pub fn extract_runs(matches: &[Match], a: &[char]) -> Vec<Run> {
    let Some(first) = matches.first() else {
        return Vec::new();
    };

    let mut runs = Vec::new();
    let mut start = *first;
    let mut len = 1;

    for pair in matches.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        assert!(
            cur.i1 > prev.i1 && cur.i2 > prev.i2,
            "match path not strictly increasing: {:?} then {:?}",
            prev,
            cur
        );

        if cur.i1 == prev.i1 + 1 && cur.i2 == prev.i2 + 1 {
            len += 1;
        } else {
            runs.push(make_run(a, start, len));
            start = cur;
            len = 1;
        }
    }
    runs.push(make_run(a, start, len));

    runs
}

fn make_run(a: &[char], start: Match, len: usize) -> Run {
    Run {
        start1: start.i1,
        start2: start.i2,
        len,
        value: a[start.i1..start.i1 + len].iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn m(i1: usize, i2: usize) -> Match {
        Match::new(i1, i2)
    }

    #[test]
    fn test_empty_path_has_no_runs() {
        assert!(extract_runs(&[], &chars("abc")).is_empty());
    }

    #[test]
    fn test_single_match_is_one_run() {
        let runs = extract_runs(&[m(1, 4)], &chars("abc"));
        assert_eq!(
            runs,
            vec![Run {
                start1: 1,
                start2: 4,
                len: 1,
                value: "b".to_string()
            }]
        );
    }

    #[test]
    fn test_lockstep_matches_merge() {
        let runs = extract_runs(&[m(0, 0), m(1, 1), m(2, 2)], &chars("abc"));
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len, 3);
        assert_eq!(runs[0].value, "abc");
        assert_eq!(runs[0].end1(), 3);
    }

    #[test]
    fn test_gap_in_either_input_splits() {
        let a = chars("abcxdef");
        // Gap in the first input only.
        let runs = extract_runs(&[m(0, 0), m(1, 1), m(4, 2), m(5, 3)], &a);
        assert_eq!(
            runs.iter().map(|r| r.value.as_str()).collect::<Vec<_>>(),
            vec!["ab", "de"]
        );

        // Gap in the second input only.
        let runs = extract_runs(&[m(0, 0), m(1, 1), m(2, 5)], &a);
        assert_eq!(
            runs.iter().map(|r| (r.start1, r.start2, r.len)).collect::<Vec<_>>(),
            vec![(0, 0, 2), (2, 5, 1)]
        );
    }

    #[test]
    #[should_panic(expected = "not strictly increasing")]
    fn test_non_monotone_path_panics() {
        extract_runs(&[m(2, 2), m(1, 3)], &chars("abc"));
    }
}
