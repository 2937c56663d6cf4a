//! Levenshtein edit distance.
//!
//! Distances are counted in Unicode scalar values, so `"café"` and `"cafe"`
//! are one substitution apart.

use std::cmp::min;
use std::mem;

/// Calculates the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character insertions, deletions or
/// substitutions needed to turn `s1` into `s2`.
///
/// ```
/// use wordtree::distance::levenshtein;
/// assert_eq!(levenshtein("kitten", "sitten"), 1);
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// ```
pub fn levenshtein(s1: &str, s2: &str) -> usize {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();

    if s1.is_empty() {
        return s2.len();
    }
    if s2.is_empty() {
        return s1.len();
    }

    // Only the previous row of the table is needed
    let mut prev_row: Vec<usize> = (0..=s2.len()).collect();
    let mut curr_row = vec![0; s2.len() + 1];

    for (i, c1) in s1.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, c2) in s2.iter().enumerate() {
            curr_row[j + 1] = if c1 == c2 {
                prev_row[j]
            } else {
                1 + min(min(prev_row[j + 1], curr_row[j]), prev_row[j])
            };
        }
        mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[s2.len()]
}

/// Calculates the Levenshtein distance if it does not exceed `threshold`.
///
/// Returns `None` as soon as the distance is known to be larger, which is much
/// cheaper than computing the full distance when scanning many candidates.
pub fn levenshtein_within(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();

    // Every extra character costs at least one edit
    if s1.len().abs_diff(s2.len()) > threshold {
        return None;
    }

    let mut prev_row: Vec<usize> = (0..=s2.len()).collect();
    let mut curr_row = vec![0; s2.len() + 1];

    for (i, c1) in s1.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];
        for (j, c2) in s2.iter().enumerate() {
            curr_row[j + 1] = if c1 == c2 {
                prev_row[j]
            } else {
                1 + min(min(prev_row[j + 1], curr_row[j]), prev_row[j])
            };
            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        // Row minima never decrease, so the final distance is at least this
        if min_in_row > threshold {
            return None;
        }
        mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[s2.len()];
    (distance <= threshold).then_some(distance)
}
