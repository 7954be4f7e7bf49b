//! Symmetry permutations over model values
//!
//! A symmetry group declared in the model induces permutations of the atomic
//! model values. Applying a permutation to every value of a state and taking
//! the smallest resulting fingerprint yields the canonical representative
//! used for symmetry reduction. Permutations are applied to every visited
//! state under every group generator, so the identity fast path (returning
//! the original value when nothing moved) matters.

use crate::value::Value;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// A permutation of model values, keyed by model value name.
///
/// Names absent from the table are fixed points.
#[derive(Debug, Clone, Default)]
pub struct MvPerm {
    map: FxHashMap<Arc<str>, Value>,
}

impl MvPerm {
    pub fn new() -> Self {
        MvPerm {
            map: FxHashMap::default(),
        }
    }

    /// Map the model value named `from` to `to`. `to` should itself be a
    /// model value for the permutation to be structure-preserving.
    ///
    /// Identity pairs are dropped, so a lookup hit always means the value
    /// actually moves; the permutation fast path relies on this.
    pub fn insert(&mut self, from: impl Into<Arc<str>>, to: Value) {
        let from = from.into();
        if let Value::Model(m) = &to {
            if m.name == from {
                return;
            }
        }
        self.map.insert(from, to);
    }

    /// Image of the named model value, or `None` if it is a fixed point.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    /// Number of non-trivial mappings
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
