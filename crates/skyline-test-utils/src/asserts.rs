//! Uniqueness and permutation assertions.

use indexmap::IndexSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert no element appears twice.
pub fn assert_all_distinct<T, I>(items: I)
where
    T: Hash + Eq + Debug,
    I: IntoIterator<Item = T>,
{
    let mut seen = IndexSet::new();
    for item in items {
        let shown = format!("{item:?}");
        assert!(seen.insert(item), "duplicate element: {shown}");
    }
}

/// Assert `values` holds every integer in `low..=high` exactly once,
/// in any order.
pub fn assert_permutation_of_range(values: &[u64], low: u64, high: u64) {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let expected: Vec<u64> = (low..=high).collect();
    assert_eq!(sorted, expected, "not a permutation of [{low}, {high}]");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_elements_pass() {
        assert_all_distinct([1u64, 2, 3]);
        assert_all_distinct(Vec::<(u32, u32)>::new());
    }

    #[test]
    #[should_panic(expected = "duplicate element")]
    fn duplicates_panic() {
        assert_all_distinct([1u64, 2, 1]);
    }

    #[test]
    fn permutations_pass_in_any_order() {
        assert_permutation_of_range(&[3, 1, 2], 1, 3);
        assert_permutation_of_range(&[], 1, 0);
    }

    #[test]
    #[should_panic(expected = "not a permutation")]
    fn gaps_panic() {
        assert_permutation_of_range(&[1, 2, 4], 1, 3);
    }
}
