//! Divisor-pair and coprime-pair enumeration over `prime - 1` totals.

use crate::primality::is_coprime;

/// Unordered divisor pairs (i, n / i) with 2 ≤ i ≤ n / i, ascending
/// in i. Created by [`divisor_pairs`].
#[derive(Debug, Clone)]
pub struct DivisorPairs {
    n: u64,
    next_i: u64,
}

impl Iterator for DivisorPairs {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<(u64, u64)> {
        while self.next_i <= self.n / self.next_i {
            let i = self.next_i;
            self.next_i += 1;
            if self.n % i == 0 {
                return Some((i, self.n / i));
            }
        }
        None
    }
}

/// Every way to write n as i · j with 2 ≤ i ≤ j, each unordered pair
/// once, ascending in i.
///
/// Perfect squares pair a divisor with itself: 4 yields exactly
/// (2, 2). Primes, 0, and 1 yield nothing.
pub fn divisor_pairs(n: u64) -> DivisorPairs {
    DivisorPairs { n, next_i: 2 }
}

/// [`divisor_pairs`] restricted to mutually coprime pairs. Created by
/// [`coprime_pairs`].
#[derive(Debug, Clone)]
pub struct CoprimePairs {
    inner: DivisorPairs,
}

impl Iterator for CoprimePairs {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<(u64, u64)> {
        self.inner.find(|&(i, j)| is_coprime(i, j))
    }
}

/// The divisor pairs of n whose halves share no common factor. These
/// are the viable (columns, rows) splits of a table size.
pub fn coprime_pairs(n: u64) -> CoprimePairs {
    CoprimePairs { inner: divisor_pairs(n) }
}
