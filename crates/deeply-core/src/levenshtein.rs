//! Levenshtein edit distance
//!
//! Unit-cost insertions, deletions and substitutions over `char`s, computed
//! with a single rolling column of `len(left) + 1` cells.

/// Number of single-character edits turning `left` into `right`
pub fn distance(left: &str, right: &str) -> usize {
    let left: Vec<char> = left.chars().collect();

    // column[y] holds the distance between left[..y] and the right prefix seen so far
    let mut column: Vec<usize> = (0..=left.len()).collect();

    for (x, rc) in right.chars().enumerate() {
        let mut last_diag = column[0];
        column[0] = x + 1;

        for y in 1..=left.len() {
            let old_diag = column[y];
            let cost = usize::from(left[y - 1] != rc);
            column[y] = (column[y] + 1).min(column[y - 1] + 1).min(last_diag + cost);
            last_diag = old_diag;
        }
    }

    column[left.len()]
}

/// Edit distance normalized to `0.0..=1.0`, where 1.0 means identical.
///
/// `(max_len - distance) / max_len` with lengths in chars. Two empty strings
/// score 1.0.
pub fn similarity(left: &str, right: &str) -> f64 {
    let max_len = left.chars().count().max(right.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    (max_len - distance(left, right)) as f64 / max_len as f64
}
