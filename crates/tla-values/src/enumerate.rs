//! Enumeration and sampling protocols
//!
//! [`ValueEnumeration`] is the forward-only element protocol every
//! set-shaped value speaks: `next` yields elements until an explicit `None`
//! end marker (exhaustion is never an error), and `reset` rewinds to the
//! start without redoing any one-time work such as normalization.
//!
//! [`SubsetEnumerator`] is the index-sampling side of bounded enumeration:
//! given a cardinality `n` and a sample size `k` (or a fraction of `n`), it
//! yields `min(k, n)` distinct indices in `[0, n)`. Sets plug their sorted
//! backing sequence in via direct index access; the sampling scheme itself
//! lives here.

use crate::error::EvalResult;
use crate::value::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

/// Forward-only enumeration of a set-shaped value's elements.
pub trait ValueEnumeration {
    /// Next element, or `None` when the enumeration is exhausted.
    fn next(&mut self) -> EvalResult<Option<Value>>;

    /// Rewind to the first element.
    fn reset(&mut self);
}

/// An enumeration that is always empty.
pub struct EmptyEnumeration;

impl ValueEnumeration for EmptyEnumeration {
    fn next(&mut self) -> EvalResult<Option<Value>> {
        Ok(None)
    }

    fn reset(&mut self) {}
}

thread_local! {
    static SAMPLE_RNG: RefCell<StdRng> = RefCell::new(StdRng::from_entropy());
}

/// Strides tried when picking a step coprime with `n`. All prime, so the
/// first one that does not divide `n` is coprime with it.
const STRIDES: [usize; 8] = [
    1_000_003, 1_000_033, 1_000_037, 1_000_039, 1_000_081, 1_000_099, 1_000_117, 1_000_121,
];

/// Yields `k` distinct indices in `[0, n)` by walking a full cycle of the
/// group Z_n with a random offset and a stride coprime with `n`.
///
/// Because the stride is coprime with `n`, the first `n` steps visit every
/// index exactly once; stopping after `k` steps therefore gives `k` distinct
/// indices without any bookkeeping.
#[derive(Debug, Clone)]
pub struct SubsetEnumerator {
    n: usize,
    k: usize,
    offset: usize,
    stride: usize,
    i: usize,
}

impl SubsetEnumerator {
    /// Sample `k` out of `n` indices; `k` is clamped to `n`.
    pub fn new(k: usize, n: usize) -> Self {
        let seed = SAMPLE_RNG.with(|rng| rng.borrow_mut().gen::<u64>());
        Self::seeded(k, n, seed)
    }

    /// Sample `ceil(fraction * n)` out of `n` indices.
    pub fn with_fraction(fraction: f64, n: usize) -> Self {
        let k = (fraction * n as f64).ceil().max(0.0) as usize;
        Self::new(k, n)
    }

    /// Deterministic variant for tests.
    pub fn seeded(k: usize, n: usize, seed: u64) -> Self {
        let k = k.min(n);
        if n == 0 {
            return SubsetEnumerator {
                n,
                k,
                offset: 0,
                stride: 1,
                i: 0,
            };
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let offset = rng.gen_range(0..n);
        let stride = STRIDES
            .iter()
            .copied()
            .find(|s| gcd(*s, n) == 1)
            .unwrap_or(1);
        SubsetEnumerator {
            n,
            k,
            offset,
            stride,
            i: 0,
        }
    }

    /// Total number of indices this enumerator will yield.
    pub fn sample_size(&self) -> usize {
        self.k
    }

    pub fn has_next(&self) -> bool {
        self.i < self.k
    }

    /// Next sampled index, or `None` after `k` indices.
    pub fn next_index(&mut self) -> Option<usize> {
        if self.i >= self.k {
            return None;
        }
        let idx = (self.offset + self.i * self.stride) % self.n;
        self.i += 1;
        Some(idx)
    }

    pub fn reset(&mut self) {
        self.i = 0;
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
