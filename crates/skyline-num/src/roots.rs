//! Modular powers, primitive-root testing, and the power sequence that
//! drives diffuser tables.

use indexmap::IndexSet;

use crate::primality::{is_coprime, trial_division};
use crate::totient::totient;

/// base^exp mod modulus, square-and-multiply over u128 intermediates.
///
/// `pow_mod(b, 0, m)` is `1 % m`, so a modulus of 1 always gives 0.
///
/// # Panics
///
/// Panics when `modulus` is 0.
pub fn pow_mod(base: u64, exp: u64, modulus: u64) -> u64 {
    let m = modulus as u128;
    let mut acc = 1 % m;
    let mut base = base as u128 % m;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    acc as u64
}

/// a·b mod modulus without overflow. Panics when `modulus` is 0.
pub(crate) fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    (a as u128 * b as u128 % modulus as u128) as u64
}

/// How many distinct values the powers g^1, g^2, … take mod n.
///
/// For a unit g this is the multiplicative order: the cycle closes back
/// on g^1 within `totient(n)` steps. Callers check coprimality first.
fn distinct_power_count(g: u64, n: u64) -> u64 {
    let first = g % n;
    let mut count = 1;
    let mut x = mul_mod(first, first, n);
    while x != first && count < n {
        count += 1;
        x = mul_mod(x, first, n);
    }
    count
}

/// True iff `n` is prime, `g` is coprime to `n`, and the powers of `g`
/// reach all `totient(n)` distinct residues, i.e. `g` generates the
/// whole multiplicative group mod `n`.
///
/// Composite `n` is rejected outright, even for moduli like 9 or 18
/// that do have generators in the number-theoretic sense.
pub fn is_primitive_root(g: u64, n: u64) -> bool {
    if !trial_division(n as u128) {
        return false;
    }
    if !is_coprime(g, n) {
        return false;
    }
    distinct_power_count(g, n) == totient(n)
}

/// Lazy ascending scan over the primitive roots of a prime.
///
/// Created by [`primitive_roots`].
#[derive(Debug, Clone)]
pub struct PrimitiveRoots {
    n: u64,
    next_g: u64,
    // None when n is not prime, so the scan yields nothing.
    phi: Option<u64>,
}

impl Iterator for PrimitiveRoots {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let phi = self.phi?;
        while self.next_g < self.n {
            let g = self.next_g;
            self.next_g += 1;
            if is_coprime(g, self.n) && distinct_power_count(g, self.n) == phi {
                return Some(g);
            }
        }
        None
    }
}

/// Every g in `[0, n)` with [`is_primitive_root`]`(g, n)`, ascending.
///
/// Empty when `n` is not prime. The group order is computed once up
/// front; each candidate then costs one order scan.
pub fn primitive_roots(n: u64) -> PrimitiveRoots {
    let phi = trial_division(n as u128).then(|| totient(n));
    PrimitiveRoots { n, next_g: 0, phi }
}

/// The sequence root^1, root^2, … mod prime, ending just before the
/// first repeated value.
///
/// Created by [`root_sequence`].
#[derive(Debug, Clone)]
pub struct RootSequence {
    prime: u64,
    root: u64,
    value: u64,
    seen: IndexSet<u64>,
    done: bool,
}

impl Iterator for RootSequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        self.value = mul_mod(self.value, self.root, self.prime);
        if self.seen.insert(self.value) {
            Some(self.value)
        } else {
            self.done = true;
            None
        }
    }
}

/// Lazy power sequence S_h = root^h mod prime for h = 1, 2, …,
/// terminating at the first repeat (the repeat itself is not yielded).
///
/// When `root` is a genuine primitive root of a prime the sequence has
/// exactly `prime - 1` elements and is a permutation of
/// `[1, prime - 1]`; for any other root it is shorter, so callers must
/// not assume the full length without validating the root first. A
/// root ≡ 0 yields the single element 0; `prime == 0` yields nothing.
pub fn root_sequence(prime: u64, root: u64) -> RootSequence {
    RootSequence {
        prime,
        root,
        value: 1,
        seen: IndexSet::new(),
        done: prime == 0,
    }
}
