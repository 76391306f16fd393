//! Primality and coprimality by trial division.

/// Trial division over the full unsigned range. `i <= n / i` bounds the
/// scan at the square root without risking overflow in `i * i`.
pub(crate) fn trial_division(n: u128) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2u128;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Test whether `|n|` is prime.
///
/// 0 and 1 are not prime; negative inputs test their absolute value, so
/// `is_prime(-157)` holds. The signed argument is wide enough that every
/// `u64` modulus in the workspace converts losslessly with `as i128`.
pub fn is_prime(n: i128) -> bool {
    trial_division(n.unsigned_abs())
}

/// Smallest prime strictly greater than `n`.
pub fn next_prime(n: u64) -> u64 {
    let mut x = n + 1;
    while !trial_division(x as u128) {
        x += 1;
    }
    x
}

/// Greatest common divisor by Euclid's algorithm. `gcd(0, 0)` is 0.
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// True when `a` and `b` share no factor above 1. Symmetric; `is_coprime(1, n)`
/// holds for every n.
pub fn is_coprime(a: u64, b: u64) -> bool {
    gcd(a, b) == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PRIMES_BELOW_100: &[i128] = &[
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83,
        89, 97,
    ];

    // ── Primality ───────────────────────────────────────────────

    #[test]
    fn primes_below_100_are_prime_in_both_signs() {
        for &p in PRIMES_BELOW_100 {
            assert!(is_prime(p), "{p} should be prime");
            assert!(is_prime(-p), "{} should be prime", -p);
        }
    }

    #[test]
    fn non_primes_below_100_fail_in_both_signs() {
        for n in 0..100i128 {
            if !PRIMES_BELOW_100.contains(&n) {
                assert!(!is_prime(n), "{n} should not be prime");
                assert!(!is_prime(-n), "{} should not be prime", -n);
            }
        }
    }

    #[test]
    fn zero_and_one_are_not_prime() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(!is_prime(-1));
    }

    #[test]
    fn known_diffuser_primes() {
        for p in [157, 241, 349, 1009] {
            assert!(is_prime(p));
        }
        assert!(!is_prime(153)); // 9 * 17
    }

    // ── next_prime ──────────────────────────────────────────────

    #[test]
    fn next_prime_known_values() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(1), 2);
        assert_eq!(next_prime(2), 3);
        assert_eq!(next_prime(7), 11);
        assert_eq!(next_prime(157), 163);
        assert_eq!(next_prime(158), 163);
    }

    // ── gcd / coprimality ───────────────────────────────────────

    #[test]
    fn gcd_known_values() {
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(13, 12), 1);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn coprime_exhaustive_small_range_is_symmetric() {
        for i in 0..200u64 {
            for j in 0..200u64 {
                let expected = gcd(i, j) == 1;
                assert_eq!(is_coprime(i, j), expected);
                assert_eq!(is_coprime(j, i), expected);
            }
        }
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn next_prime_is_prime_and_gap_is_composite(n in 0u64..5000) {
            let p = next_prime(n);
            prop_assert!(p > n);
            prop_assert!(is_prime(p as i128));
            for x in (n + 1)..p {
                prop_assert!(!is_prime(x as i128));
            }
        }

        #[test]
        fn gcd_divides_both_arguments(a in 1u64..10_000, b in 1u64..10_000) {
            let g = gcd(a, b);
            prop_assert!(g >= 1);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
        }
    }
}
