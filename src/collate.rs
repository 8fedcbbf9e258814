//! Locale-style string comparison for sort keys.
//!
//! Approximates a root-locale collation without pulling in ICU:
//! characters are first compared case-insensitively, then lowercase sorts
//! before uppercase at the first case difference, then raw code points
//! break any remaining tie. Digits compare as characters, so `"10" < "9"`.

use std::cmp::Ordering;

/// Compare two display strings the way the table's sort engine orders them.
pub fn compare(a: &str, b: &str) -> Ordering {
    primary(a, b)
        .then_with(|| case_tiebreak(a, b))
        .then_with(|| a.cmp(b))
}

fn primary(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn case_tiebreak(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
