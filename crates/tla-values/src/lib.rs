//! Finite-set values for TLA+ evaluation
//!
//! This crate is the set-value core of the evaluator: the canonical
//! enumerated set [`SetEnumValue`], the deferred set representations that
//! convert into it (intervals, unions, powersets, products, filters), and
//! the capability surface they share with element values through [`Value`]
//! (total order, structural equality, incremental fingerprinting, symmetry
//! permutation, membership, enumeration).
//!
//! # Canonical form
//!
//! Every set-shaped value funnels through [`SetEnumValue::convert`] when
//! element-level work is needed. The enumerated form normalizes itself on
//! demand (sort + dedup, destructive but idempotent), and two sets with the
//! same elements always produce the same sorted sequence, the same rendered
//! text, and the same FP64 fingerprint regardless of how they were built.
//! Deferred representations memoize their enumerated form in a
//! realized-cache slot so conversion cost is paid once.
//!
//! # Threading
//!
//! Values use `Rc` and interior mutability; a value is owned by one worker
//! at a time. Normalize (or fingerprint) a set before publishing it to
//! another thread.

pub mod enumerate;
pub mod error;
pub mod fingerprint;
pub mod lazy;
pub mod perm;
pub mod set_enum;
pub mod value;

pub use enumerate::{EmptyEnumeration, SubsetEnumerator, ValueEnumeration};
pub use error::{EvalError, EvalResult, SourceInfo, SourceLoc};
pub use fingerprint::FP64_INIT;
pub use lazy::{
    IntervalValue, PredFn, SetCapValue, SetCupValue, SetDiffValue, SetOfFcnsValue,
    SetOfRcdsValue, SetOfTuplesValue, SetPredValue, SubsetValue, UnionValue,
};
pub use perm::MvPerm;
pub use set_enum::{SampledElements, SetElements, SetEnumValue};
pub use value::{
    FcnRcdValue, ModelValue, RecordValue, TupleValue, Value, ValueExcept, ValueKind,
};
