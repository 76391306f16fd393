//! Memoised totient lookups for search loops.

use indexmap::IndexMap;

use crate::totient::{carmichael, totient};

/// Caches φ(n) and λ(n) so repeated candidate probes stay cheap.
///
/// Both functions cost O(n) or worse per call and search loops revisit
/// the same moduli constantly, so the cache keeps every answer in
/// insertion order and never evicts.
#[derive(Debug, Default, Clone)]
pub struct TotientCache {
    totients: IndexMap<u64, u64>,
    carmichaels: IndexMap<u64, u64>,
}

impl TotientCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// φ(n), computed on first request and remembered after.
    pub fn totient(&mut self, n: u64) -> u64 {
        *self.totients.entry(n).or_insert_with(|| totient(n))
    }

    /// λ(n), computed on first request and remembered after.
    pub fn carmichael(&mut self, n: u64) -> u64 {
        *self.carmichaels.entry(n).or_insert_with(|| carmichael(n))
    }

    /// True when n has primitive roots: φ(n) == λ(n).
    pub fn has_primitive_roots(&mut self, n: u64) -> bool {
        self.totient(n) == self.carmichael(n)
    }

    /// How many values have been memoised across both tables.
    pub fn len(&self) -> usize {
        self.totients.len() + self.carmichaels.len()
    }

    /// True when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.totients.is_empty() && self.carmichaels.is_empty()
    }
}
