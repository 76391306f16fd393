//! The design-space searches.

use indexmap::IndexSet;
use skyline_num::{coprime_pairs, is_coprime, is_prime, next_prime, TotientCache};

use crate::result::DesignResult;

/// Searches the design space for viable `(columns, rows, prime)`
/// combinations.
///
/// A candidate is viable when `columns · rows + 1 == prime`, the aspect
/// ratio `columns / rows` lies inside the band (bounds inclusive), the
/// dimensions are coprime, the prime is prime, and the prime has
/// primitive roots. The default band accepts panels between 1:2.5 and
/// 2.5:1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Designer {
    /// Narrowest accepted panel: minimum columns per row.
    pub aspect_ratio_min: f64,
    /// Widest accepted panel: maximum columns per row.
    pub aspect_ratio_max: f64,
}

impl Default for Designer {
    fn default() -> Self {
        Self {
            aspect_ratio_min: Self::DEFAULT_ASPECT_RATIO_MIN,
            aspect_ratio_max: Self::DEFAULT_ASPECT_RATIO_MAX,
        }
    }
}

impl Designer {
    /// Default lower aspect bound, the reciprocal of the upper one.
    pub const DEFAULT_ASPECT_RATIO_MIN: f64 = 0.4;
    /// Default upper aspect bound.
    pub const DEFAULT_ASPECT_RATIO_MAX: f64 = 2.5;

    /// Designer with a custom aspect-ratio band, bounds inclusive.
    ///
    /// An inverted band (`aspect_ratio_min > aspect_ratio_max`) admits
    /// no ratio at all, so searches built on it yield nothing.
    pub fn new(aspect_ratio_min: f64, aspect_ratio_max: f64) -> Self {
        Self { aspect_ratio_min, aspect_ratio_max }
    }

    /// The full candidate predicate for `(columns, rows, prime)`.
    pub fn is_valid(&self, columns: u32, rows: u32, prime: u64) -> bool {
        self.is_valid_cached(columns, rows, prime, &mut TotientCache::new())
    }

    /// Predicate with a shared totient cache, so the searches reuse
    /// totient and Carmichael scans across candidates with the same
    /// prime. Cheap checks run first; the primitive-root existence test
    /// is last.
    fn is_valid_cached(
        &self,
        columns: u32,
        rows: u32,
        prime: u64,
        cache: &mut TotientCache,
    ) -> bool {
        if columns as u64 * rows as u64 + 1 != prime {
            return false;
        }
        let ratio = columns as f64 / rows as f64;
        if ratio < self.aspect_ratio_min || ratio > self.aspect_ratio_max {
            return false;
        }
        is_coprime(columns as u64, rows as u64)
            && is_prime(prime as i128)
            && cache.has_primitive_roots(prime)
    }

    /// Scan designs holding `columns` fixed: row counts from 2 to
    /// `columns × 3`, each advanced to the next count whose
    /// `columns · rows + 1` is prime, deduplicated by prime, yielded
    /// when the candidate passes the predicate. Ascending in rows.
    pub fn search_from_columns(&self, columns: u32) -> ColumnSearch {
        ColumnSearch {
            designer: *self,
            columns,
            next_rows: 2,
            max_rows: if columns == 0 { 0 } else { columns as u64 * 3 },
            seen: IndexSet::new(),
            cache: TotientCache::new(),
        }
    }

    /// Designs for a target prime. When the requested value is not
    /// prime or lacks primitive roots, the search advances to the next
    /// prime that qualifies — read [`PrimeSearch::prime`] for the
    /// working prime actually used. Yields every coprime split of
    /// `prime - 1` that passes the predicate, all first orientations
    /// before all transposed ones.
    pub fn search_from_prime(&self, prime: u64) -> PrimeSearch {
        let mut cache = TotientCache::new();
        let mut working = prime;
        while !(is_prime(working as i128) && cache.has_primitive_roots(working)) {
            working = next_prime(working);
        }
        let pairs: Vec<(u64, u64)> = coprime_pairs(working - 1).collect();
        let queue: Vec<(u64, u64)> = pairs
            .iter()
            .copied()
            .chain(pairs.iter().map(|&(columns, rows)| (rows, columns)))
            .collect();
        PrimeSearch {
            designer: *self,
            prime: working,
            queue: queue.into_iter(),
            cache,
        }
    }
}

/// Lazy search over row counts for a fixed column count. Created by
/// [`Designer::search_from_columns`].
#[derive(Debug, Clone)]
pub struct ColumnSearch {
    designer: Designer,
    columns: u32,
    next_rows: u64,
    max_rows: u64,
    seen: IndexSet<u64>,
    cache: TotientCache,
}

impl Iterator for ColumnSearch {
    type Item = DesignResult;

    fn next(&mut self) -> Option<DesignResult> {
        while self.next_rows <= self.max_rows {
            let mut rows = self.next_rows;
            self.next_rows += 1;
            // Advance to the next row count whose candidate is prime.
            // The advance may overshoot the row cap; the candidate is
            // still deduplicated and tested.
            let mut candidate = self.columns as u128 * rows as u128 + 1;
            while !is_prime(candidate as i128) {
                rows += 1;
                candidate = self.columns as u128 * rows as u128 + 1;
            }
            if rows > u32::MAX as u64 {
                continue;
            }
            let prime = candidate as u64;
            if !self.seen.insert(prime) {
                continue;
            }
            if self
                .designer
                .is_valid_cached(self.columns, rows as u32, prime, &mut self.cache)
            {
                return Some(DesignResult {
                    columns: self.columns,
                    rows: rows as u32,
                    prime,
                });
            }
        }
        None
    }
}

/// Lazy search over the coprime splits of a resolved prime. Created by
/// [`Designer::search_from_prime`].
#[derive(Debug, Clone)]
pub struct PrimeSearch {
    designer: Designer,
    prime: u64,
    queue: std::vec::IntoIter<(u64, u64)>,
    cache: TotientCache,
}

impl PrimeSearch {
    /// The working prime the search actually enumerates. Differs from
    /// the requested value when that value was composite or had no
    /// primitive roots.
    pub fn prime(&self) -> u64 {
        self.prime
    }
}

impl Iterator for PrimeSearch {
    type Item = DesignResult;

    fn next(&mut self) -> Option<DesignResult> {
        while let Some((columns, rows)) = self.queue.next() {
            if columns > u32::MAX as u64 || rows > u32::MAX as u64 {
                continue;
            }
            let (columns, rows) = (columns as u32, rows as u32);
            if self
                .designer
                .is_valid_cached(columns, rows, self.prime, &mut self.cache)
            {
                return Some(DesignResult { columns, rows, prime: self.prime });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Predicate ───────────────────────────────────────────────

    #[test]
    fn reference_designs_are_valid_in_both_orientations() {
        let designer = Designer::default();
        assert!(designer.is_valid(13, 12, 157));
        assert!(designer.is_valid(12, 13, 157));
        assert!(designer.is_valid(16, 15, 241));
        assert!(designer.is_valid(29, 12, 349));
    }

    #[test]
    fn each_clause_can_reject() {
        let designer = Designer::default();
        // product + 1 mismatch
        assert!(!designer.is_valid(13, 12, 163));
        // aspect ratio out of band
        assert!(!designer.is_valid(3, 52, 157));
        assert!(!designer.is_valid(52, 3, 157));
        // shared factor
        assert!(!designer.is_valid(24, 10, 241));
        // composite "prime"
        assert!(!designer.is_valid(8, 19, 153));
    }

    #[test]
    fn band_bounds_are_inclusive() {
        let designer = Designer::default();
        // 2 / 5 = 0.4 and 5 / 2 = 2.5, both sitting exactly on a bound.
        assert!(designer.is_valid(2, 5, 11));
        assert!(designer.is_valid(5, 2, 11));
    }

    #[test]
    fn custom_bands_change_the_verdict() {
        let narrow = Designer::new(1.0, 2.5);
        assert!(!narrow.is_valid(12, 13, 157));
        assert!(narrow.is_valid(13, 12, 157));
        let wide = Designer::new(0.0, f64::INFINITY);
        assert!(wide.is_valid(3, 52, 157));
    }

    // ── Degenerate searches ─────────────────────────────────────

    #[test]
    fn zero_columns_yield_nothing() {
        let mut search = Designer::default().search_from_columns(0);
        assert_eq!(search.next(), None);
    }

    #[test]
    fn single_column_panels_exist() {
        let results: Vec<DesignResult> =
            Designer::default().search_from_columns(1).collect();
        assert_eq!(results, vec![DesignResult { columns: 1, rows: 2, prime: 3 }]);
    }

    #[test]
    fn prime_search_from_zero_resolves_to_two() {
        let mut search = Designer::default().search_from_prime(0);
        assert_eq!(search.prime(), 2);
        assert_eq!(search.next(), None);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn predicate_agrees_with_its_parts(columns in 1u32..30, rows in 1u32..30) {
            let designer = Designer::default();
            let prime = columns as u64 * rows as u64 + 1;
            let ratio = columns as f64 / rows as f64;
            let expected = (0.4..=2.5).contains(&ratio)
                && is_coprime(columns as u64, rows as u64)
                && is_prime(prime as i128)
                && skyline_num::has_primitive_roots(prime);
            prop_assert_eq!(designer.is_valid(columns, rows, prime), expected);
        }

        #[test]
        fn prime_search_always_lands_on_a_usable_prime(seed in 0u64..300) {
            let designer = Designer::default();
            let search = designer.search_from_prime(seed);
            let prime = search.prime();
            prop_assert!(prime >= seed.max(2));
            prop_assert!(is_prime(prime as i128));
            for design in search {
                prop_assert_eq!(design.prime, prime);
                prop_assert!(designer.is_valid(design.columns, design.rows, design.prime));
            }
        }
    }
}
