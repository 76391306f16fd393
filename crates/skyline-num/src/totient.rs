//! Euler's totient and the Carmichael function.

use crate::primality::is_coprime;
use crate::roots::pow_mod;

/// Euler's totient φ(n): how many k in `1..=n` are coprime to n.
///
/// Brute-force count over every residue. `totient(0)` is 0 and
/// `totient(1)` is 1. See [`crate::TotientCache`] when probing many
/// candidates in a row.
pub fn totient(n: u64) -> u64 {
    (1..=n).filter(|&k| is_coprime(n, k)).count() as u64
}

/// The Carmichael function λ(n): the least k ≥ 1 with x^k ≡ 1 (mod n)
/// for every x in `1..n` coprime to n.
///
/// Found by scanning k upward and re-testing every unit, so the cost is
/// O(n·λ) modular exponentiations. `carmichael(1)` is 1: there are no
/// units to constrain, and the scan accepts the first exponent.
pub fn carmichael(n: u64) -> u64 {
    let units: Vec<u64> = (1..n).filter(|&x| is_coprime(x, n)).collect();
    let mut k = 1u64;
    while !units.iter().all(|&x| pow_mod(x, k, n) == 1) {
        k += 1;
    }
    k
}

/// True when n has primitive roots at all: φ(n) == λ(n).
///
/// Holds exactly for 1, 2, 4, p^k, and 2·p^k with p an odd prime.
pub fn has_primitive_roots(n: u64) -> bool {
    totient(n) == carmichael(n)
}

/// Number of primitive roots of n: φ(φ(n)).
///
/// Only meaningful when [`has_primitive_roots`] holds; for other n the
/// formula still evaluates but counts nothing real.
pub fn num_primitive_roots(n: u64) -> u64 {
    totient(totient(n))
}
