//! Group-by-key counting helpers.

use std::collections::BTreeMap;

/// Count occurrences of each distinct value.
///
/// The result is ordered by descending count; equal counts keep ascending
/// key order.
pub fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut counts: Vec<(K, usize)> = counts.into_iter().collect();
    // sort_by is stable, so ties stay in key order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// The most frequent value and its count, or `None` for no values.
///
/// Ties resolve to the lowest value.
pub fn mode<K, I>(values: I) -> Option<(K, usize)>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    value_counts(values).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_counts_descending() {
        let counts = value_counts(["b", "a", "b", "c", "b", "a"]);
        assert_eq!(counts, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_ties_resolve_to_lowest_key() {
        assert_eq!(mode([5, 3, 5, 3, 9]), Some((3, 2)));
        assert_eq!(value_counts(["z", "y", "x"]), vec![("x", 1), ("y", 1), ("z", 1)]);
    }

    #[test]
    fn test_mode_of_nothing() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_composite_keys() {
        let pairs = [("A", "B"), ("B", "A"), ("A", "B")];
        assert_eq!(mode(pairs), Some((("A", "B"), 2)));
    }
}
