//! Number-theory kernel for primitive-root diffuser design.
//!
//! This is the leaf crate with zero internal dependencies. It provides the
//! integer machinery the rest of the Skyline workspace is built on:
//! primality and coprimality tests, Euler's totient and the Carmichael
//! function, primitive-root discovery and sequencing, and divisor/coprime
//! pair enumeration.
//!
//! Inputs in this domain are small (diffuser primes sit in the low
//! thousands), so the implementations deliberately use the obvious
//! brute-force definitions rather than factorisation shortcuts. [`totient`]
//! and [`carmichael`] are the expensive ones; callers probing many
//! candidates should reuse a [`TotientCache`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod divisors;
pub mod primality;
pub mod roots;
pub mod totient;

pub use cache::TotientCache;
pub use divisors::{coprime_pairs, divisor_pairs, CoprimePairs, DivisorPairs};
pub use primality::{gcd, is_coprime, is_prime, next_prime};
pub use roots::{
    is_primitive_root, pow_mod, primitive_roots, root_sequence, PrimitiveRoots, RootSequence,
};
pub use totient::{carmichael, has_primitive_roots, num_primitive_roots, totient};
