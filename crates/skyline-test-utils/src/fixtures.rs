//! Canonical parameter sets and the known-prime list.
//!
//! The three valid sets are real diffuser designs: the 157 reference
//! panel, the 241 square-ish panel, and the wide 349 panel tuned for
//! 1500 Hz. `params_pocket` is the smallest grid worth printing and the
//! one whose cells tests spell out by hand.

use skyline_table::{TableParameters, ValidationError};

/// Every prime below 1000, ascending.
pub const PRIMES_TO_1000: &[u64] = &[
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37,
    41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151,
    157, 163, 167, 173, 179, 181, 191, 193, 197, 199, 211, 223,
    227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281,
    283, 293, 307, 311, 313, 317, 331, 337, 347, 349, 353, 359,
    367, 373, 379, 383, 389, 397, 401, 409, 419, 421, 431, 433,
    439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503,
    509, 521, 523, 541, 547, 557, 563, 569, 571, 577, 587, 593,
    599, 601, 607, 613, 617, 619, 631, 641, 643, 647, 653, 659,
    661, 673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743,
    751, 757, 761, 769, 773, 787, 797, 809, 811, 821, 823, 827,
    829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911,
    919, 929, 937, 941, 947, 953, 967, 971, 977, 983, 991, 997,
];

/// The reference design: 13 × 12 wells over prime 157, root 5, 500 Hz.
pub fn params_157() -> TableParameters {
    TableParameters::new(13, 12, 157, 5, 500)
}

/// 16 × 15 wells over prime 241, root 7, 500 Hz.
pub fn params_241() -> TableParameters {
    TableParameters::new(16, 15, 241, 7, 500)
}

/// 29 × 12 wells over prime 349, root 13, 1500 Hz.
pub fn params_349() -> TableParameters {
    TableParameters::new(29, 12, 349, 13, 1500)
}

/// The smallest grid worth printing: 4 × 3 wells over prime 13, root 2.
pub fn params_pocket() -> TableParameters {
    TableParameters::new(4, 3, 13, 2, 500)
}

/// Known-bad parameter sets paired with the error each must report.
pub fn invalid_parameter_sets() -> Vec<(TableParameters, ValidationError)> {
    vec![
        (
            TableParameters::new(17, 9, 153, 3, 500),
            ValidationError::NotPrime { prime: 153 },
        ),
        (
            TableParameters::new(24, 10, 241, 7, 500),
            ValidationError::NotCoprime { columns: 24, rows: 10 },
        ),
        (
            TableParameters::new(29, 11, 349, 13, 1500),
            ValidationError::SizeMismatch { columns: 29, rows: 11, expected: 348 },
        ),
        (
            TableParameters::new(13, 12, 157, 2, 500),
            ValidationError::NotPrimitiveRoot { primitive_root: 2, prime: 157 },
        ),
    ]
}
