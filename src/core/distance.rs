//! Levenshtein edit distance
//!
//! Exact, case-insensitive edit distance between two words, plus a bounded
//! check that answers "is the distance at most `max_dist`?" without always
//! filling the whole table.
//!
//! Word ladders only ever ask the bounded question with `max_dist = 1`, so
//! [`is_adjacent`] is the predicate that defines ladder edges.

/// Fold a word to lowercase characters.
///
/// Lengths throughout this module are measured in characters, not bytes.
fn fold(word: &str) -> Vec<char> {
    word.chars().flat_map(char::to_lowercase).collect()
}

/// Exact case-insensitive Levenshtein distance between `a` and `b`
///
/// Substitution, insertion and deletion each cost 1.
///
/// # Examples
/// ```
/// use word_ladder::core::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("Cat", "cAT"), 0);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a = fold(a);
    let b = fold(b);

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &cb) in b.iter().enumerate() {
            curr_row[j + 1] = if ca == cb {
                prev_row[j]
            } else {
                1 + prev_row[j] // substitution
                    .min(prev_row[j + 1]) // deletion
                    .min(curr_row[j]) // insertion
            };
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

/// Check whether the case-insensitive edit distance between `a` and `b` is
/// at most `max_dist`
///
/// # Algorithm
/// 1. Length difference larger than `max_dist` can never be closed: false.
/// 2. Equal lengths with `max_dist <= 1`: count mismatched positions. An
///    insertion paired with a deletion already costs 2, so substitutions are
///    the only way to stay within the bound.
/// 3. Otherwise run the two-row DP, stopping as soon as a whole row exceeds
///    `max_dist` (row minima never decrease).
///
/// # Examples
/// ```
/// use word_ladder::core::edit_distance_within;
///
/// assert!(edit_distance_within("kitten", "sitting", 3));
/// assert!(!edit_distance_within("kitten", "sitting", 2));
/// assert!(edit_distance_within("CAT", "cot", 1));
/// ```
#[must_use]
pub fn edit_distance_within(a: &str, b: &str, max_dist: usize) -> bool {
    let a = fold(a);
    let b = fold(b);
    within_folded(&a, &b, max_dist)
}

/// Whether `a` and `b` are one edit (or zero edits) apart
///
/// This is the edge relation of the ladder graph.
#[inline]
#[must_use]
pub fn is_adjacent(a: &str, b: &str) -> bool {
    edit_distance_within(a, b, 1)
}

fn within_folded(a: &[char], b: &[char], max_dist: usize) -> bool {
    if a.len().abs_diff(b.len()) > max_dist {
        return false;
    }

    if a.len() == b.len() && max_dist <= 1 {
        let mismatches = a.iter().zip(b).filter(|(x, y)| x != y).count();
        return mismatches <= max_dist;
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut row_min = curr_row[0];

        for (j, &cb) in b.iter().enumerate() {
            curr_row[j + 1] = if ca == cb {
                prev_row[j]
            } else {
                1 + prev_row[j].min(prev_row[j + 1]).min(curr_row[j])
            };
            row_min = row_min.min(curr_row[j + 1]);
        }

        if row_min > max_dist {
            return false;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()] <= max_dist
}
