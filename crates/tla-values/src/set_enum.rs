//! The enumerated finite-set value
//!
//! [`SetEnumValue`] is the canonical, element-level representation of a
//! finite set: an ordered backing sequence plus a `normalized` flag. Every
//! deferred set representation (intervals, unions, powersets, ...) funnels
//! through [`SetEnumValue::convert`] when element-level work is needed, and
//! all algebra, hashing and iteration then operate on this form.
//!
//! Normalization (sort + dedup under the value total order) is destructive
//! but idempotent, and is triggered by seemingly read-only operations such
//! as comparison, sizing, fingerprinting and printing. The `normalized`
//! flag is monotone: it moves false→true exactly once per instance. The
//! mutation is safe under the crate's single-threaded-per-value contract;
//! callers that want to share a set across threads must normalize before
//! publishing.
//!
//! Every public operation runs under a provenance guard: if this value was
//! produced by a known specification expression, failures are annotated
//! with that expression before propagating.

use crate::enumerate::{SubsetEnumerator, ValueEnumeration};
use crate::error::{EvalError, EvalResult, SourceInfo};
use crate::fingerprint;
use crate::lazy::{value_elements, SetCupValue};
use crate::perm::MvPerm;
use crate::value::{permute_slice, Value, ValueExcept, ValueKind};
use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// An enumerated finite set of values.
#[derive(Debug)]
pub struct SetEnumValue {
    /// Backing sequence; strictly increasing and duplicate-free once
    /// `normalized` is set.
    elems: RefCell<Vec<Value>>,
    /// Monotone flag, false→true exactly once.
    normalized: Cell<bool>,
    /// Provenance of the expression that produced this set, if known.
    source: Option<SourceInfo>,
}

impl SetEnumValue {
    /// Wrap a caller-supplied element sequence. The caller declares whether
    /// the sequence is already sorted and duplicate-free.
    pub fn new(elems: Vec<Value>, normalized: bool) -> Rc<Self> {
        Rc::new(SetEnumValue {
            elems: RefCell::new(elems),
            normalized: Cell::new(normalized),
            source: None,
        })
    }

    /// The empty set, trivially normalized.
    pub fn empty() -> Rc<Self> {
        Self::new(Vec::new(), true)
    }

    /// Like [`new`](Self::new), carrying the provenance of the expression
    /// that produced the set.
    pub fn with_source(elems: Vec<Value>, normalized: bool, source: SourceInfo) -> Rc<Self> {
        Rc::new(SetEnumValue {
            elems: RefCell::new(elems),
            normalized: Cell::new(normalized),
            source: Some(source),
        })
    }

    pub fn source(&self) -> Option<&SourceInfo> {
        self.source.as_ref()
    }

    pub fn kind(&self) -> ValueKind {
        ValueKind::SetEnum
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized.get()
    }

    /// Always true: this representation only ever holds finite sets.
    pub fn is_finite(&self) -> bool {
        true
    }

    /// Element count of the backing sequence without normalizing first.
    /// Unlike [`size`](Self::size) this may count duplicates.
    pub fn raw_len(&self) -> usize {
        self.elems.borrow().len()
    }

    /// Snapshot of the backing sequence in its current order.
    pub fn to_vec(&self) -> Vec<Value> {
        self.elems.borrow().clone()
    }

    /// Run `f`, annotating any failure with this value's provenance.
    fn guard<T>(&self, f: impl FnOnce() -> EvalResult<T>) -> EvalResult<T> {
        match f() {
            Err(e) => match &self.source {
                Some(src) => Err(e.with_source(src)),
                None => Err(e),
            },
            ok => ok,
        }
    }

    /// Sort the backing sequence and drop duplicates, in place. Idempotent;
    /// the first call mutates, every later call is a no-op. Sorting works on
    /// a scratch copy committed only on success, so a failed comparison
    /// leaves the backing sequence untouched.
    pub fn normalize(&self) -> EvalResult<()> {
        self.guard(|| {
            if self.normalized.get() {
                return Ok(());
            }
            let mut elems = self.elems.borrow().clone();
            let mut first_err: Option<EvalError> = None;
            elems.sort_by(|a, b| {
                if first_err.is_some() {
                    return Ordering::Equal;
                }
                match a.compare_values(b) {
                    Ok(ord) => ord,
                    Err(e) => {
                        first_err = Some(e);
                        Ordering::Equal
                    }
                }
            });
            if let Some(e) = first_err.take() {
                return Err(e);
            }
            elems.dedup_by(|a, b| {
                if first_err.is_some() {
                    return false;
                }
                match a.equal_values(b) {
                    Ok(eq) => eq,
                    Err(e) => {
                        first_err = Some(e);
                        false
                    }
                }
            });
            if let Some(e) = first_err {
                return Err(e);
            }
            *self.elems.borrow_mut() = elems;
            self.normalized.set(true);
            Ok(())
        })
    }

    /// Cardinality. Normalizes first so duplicates are not counted.
    pub fn size(&self) -> EvalResult<usize> {
        self.guard(|| {
            self.normalize()?;
            Ok(self.elems.borrow().len())
        })
    }

    /// Membership under value equality. Ordered search when normalized,
    /// linear scan otherwise; the result is identical either way.
    pub fn member(&self, elem: &Value) -> EvalResult<bool> {
        self.guard(|| {
            if self.normalized.get() {
                let elems = self.elems.borrow();
                let (mut lo, mut hi) = (0usize, elems.len());
                while lo < hi {
                    let mid = lo + (hi - lo) / 2;
                    match elems[mid].compare_values(elem)? {
                        Ordering::Less => lo = mid + 1,
                        Ordering::Greater => hi = mid,
                        Ordering::Equal => return Ok(true),
                    }
                }
                Ok(false)
            } else {
                // Snapshot first: `elem` may structurally alias this set
                // and normalize it during the equality checks.
                let elems = self.to_vec();
                for e in &elems {
                    if e.equal_values(elem)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        })
    }

    /// Elements of `self` not in `other`. `other` answers through its own
    /// membership predicate and need not be converted. Filtering preserves
    /// order and never introduces duplicates, so the result inherits this
    /// set's normalization flag. The flag and a snapshot of the elements
    /// are taken up front: `other` may structurally alias this set and
    /// normalize it during the membership checks.
    pub fn diff(&self, other: &Value) -> EvalResult<Value> {
        self.guard(|| {
            let was_normalized = self.normalized.get();
            let elems = self.to_vec();
            let mut kept = Vec::new();
            for e in &elems {
                if !other.member(e)? {
                    kept.push(e.clone());
                }
            }
            Ok(Value::SetEnum(SetEnumValue::new(kept, was_normalized)))
        })
    }

    /// Elements of `self` also in `other`. Same flag inheritance and
    /// aliasing rules as [`diff`](Self::diff).
    pub fn cap(&self, other: &Value) -> EvalResult<Value> {
        self.guard(|| {
            let was_normalized = self.normalized.get();
            let elems = self.to_vec();
            let mut kept = Vec::new();
            for e in &elems {
                if other.member(e)? {
                    kept.push(e.clone());
                }
            }
            Ok(Value::SetEnum(SetEnumValue::new(kept, was_normalized)))
        })
    }

    /// Union with `other`.
    ///
    /// An empty receiver returns `other` unchanged. An eagerly enumerable
    /// operand is materialized on the spot, with the result conservatively
    /// unnormalized (cross-boundary duplicates are pruned by the next
    /// normalize). Anything else gets a lazy union wrapper instead of an
    /// enumeration that might not terminate.
    pub fn cup(self: &Rc<Self>, other: &Value) -> EvalResult<Value> {
        self.guard(|| {
            if self.elems.borrow().is_empty() {
                return Ok(other.clone());
            }
            if !other.is_enumerable() {
                return Ok(Value::SetCup(SetCupValue::new(
                    Value::SetEnum(Rc::clone(self)),
                    other.clone(),
                )));
            }
            let mut elems = self.elems.borrow().clone();
            let mut en = value_elements(other)?;
            while let Some(e) = en.next()? {
                if !self.member(&e)? {
                    elems.push(e);
                }
            }
            Ok(Value::SetEnum(SetEnumValue::new(elems, false)))
        })
    }

    /// EXCEPT application with a single update. A set has no addressable
    /// components, so any unconsumed path is a fatal usage error; with the
    /// path exhausted the update degenerates to its replacement value.
    pub fn take_except(&self, ex: &ValueExcept) -> EvalResult<Value> {
        self.guard(|| {
            if ex.idx < ex.path.len() {
                return Err(EvalError::fatal(format!(
                    "attempted to apply EXCEPT to the set {}",
                    self
                )));
            }
            Ok(ex.value.clone())
        })
    }

    /// EXCEPT application with a list of updates; only the empty list is
    /// valid and yields the set itself.
    pub fn take_excepts(self: &Rc<Self>, exs: &[ValueExcept]) -> EvalResult<Value> {
        self.guard(|| {
            if !exs.is_empty() {
                return Err(EvalError::fatal(format!(
                    "attempted to apply EXCEPT to the set {}",
                    self
                )));
            }
            Ok(Value::SetEnum(Rc::clone(self)))
        })
    }

    /// Total order against any other value: shorter set first, then
    /// elementwise over the normalized sequences. A model value ranks below
    /// any set; every other non-convertible operand is a usage error.
    pub fn compare_to(&self, other: &Value) -> EvalResult<Ordering> {
        self.guard(|| {
            let set = match SetEnumValue::convert(other)? {
                Some(set) => set,
                None => {
                    if matches!(other, Value::Model(_)) {
                        return Ok(Ordering::Greater);
                    }
                    return Err(EvalError::fatal(format!(
                        "attempted to compare the set {} with the value: {}",
                        self, other
                    )));
                }
            };
            self.normalize()?;
            set.normalize()?;
            let a = self.elems.borrow();
            let b = set.elems.borrow();
            match a.len().cmp(&b.len()) {
                Ordering::Equal => {}
                ord => return Ok(ord),
            }
            for (x, y) in a.iter().zip(b.iter()) {
                match x.compare_values(y)? {
                    Ordering::Equal => {}
                    ord => return Ok(ord),
                }
            }
            Ok(Ordering::Equal)
        })
    }

    /// Equality against any other value: same cardinality and pairwise equal
    /// elements in sorted order. Equality with a model value defers to the
    /// model value's own predicate; the asymmetry is intentional.
    pub fn equals(self: &Rc<Self>, other: &Value) -> EvalResult<bool> {
        self.guard(|| {
            let set = match SetEnumValue::convert(other)? {
                Some(set) => set,
                None => {
                    if let Value::Model(m) = other {
                        return Ok(m.model_value_equals(&Value::SetEnum(Rc::clone(self))));
                    }
                    return Err(EvalError::fatal(format!(
                        "attempted to check equality of the set {} with the value: {}",
                        self, other
                    )));
                }
            };
            self.normalize()?;
            set.normalize()?;
            let a = self.elems.borrow();
            let b = set.elems.borrow();
            if a.len() != b.len() {
                return Ok(false);
            }
            for (x, y) in a.iter().zip(b.iter()) {
                if !x.equal_values(y)? {
                    return Ok(false);
                }
            }
            Ok(true)
        })
    }

    /// Whether `val` may be bound to a variable expected to hold exactly
    /// this set; defined as structural equality.
    pub fn assignable(self: &Rc<Self>, val: &Value) -> EvalResult<bool> {
        self.equals(val)
    }

    /// True iff no element contains an undefined placeholder.
    pub fn is_defined(&self) -> EvalResult<bool> {
        self.guard(|| {
            let elems = self.elems.borrow();
            for e in elems.iter() {
                if !e.is_defined()? {
                    return Ok(false);
                }
            }
            Ok(true)
        })
    }

    /// Sets are value-immutable once published, so a deep copy is the same
    /// instance.
    pub fn deep_copy(self: &Rc<Self>) -> Value {
        Value::SetEnum(Rc::clone(self))
    }

    /// Extend `fp` with this set's kind tag, cardinality, and element
    /// fingerprints in sorted order. Normalization is forced first, which is
    /// exactly what makes the fingerprint independent of construction order.
    pub fn fingerprint(&self, fp: u64) -> EvalResult<u64> {
        self.guard(|| {
            self.normalize()?;
            let elems = self.elems.borrow();
            let mut fp = fingerprint::extend_i64(fp, ValueKind::SetEnum as i64);
            fp = fingerprint::extend_i32(fp, elems.len() as i32);
            for e in elems.iter() {
                fp = e.fingerprint_extend(fp)?;
            }
            Ok(fp)
        })
    }

    /// Apply a symmetry permutation to every element. If nothing moves the
    /// same instance is returned; otherwise the permuted elements form a new
    /// unnormalized set (the permutation may destroy sortedness).
    pub fn permute(self: &Rc<Self>, perm: &MvPerm) -> EvalResult<Value> {
        Ok(self
            .permute_opt(perm)?
            .unwrap_or_else(|| Value::SetEnum(Rc::clone(self))))
    }

    pub(crate) fn permute_opt(self: &Rc<Self>, perm: &MvPerm) -> EvalResult<Option<Value>> {
        self.guard(|| {
            let elems = self.elems.borrow();
            Ok(permute_slice(&elems, perm)?
                .map(|vals| Value::SetEnum(SetEnumValue::new(vals, false))))
        })
    }

    /// Full forward enumeration in increasing element order. Normalizes on
    /// construction; `reset` rewinds without renormalizing.
    pub fn elements(self: &Rc<Self>) -> EvalResult<SetElements> {
        self.guard(|| {
            self.normalize()?;
            Ok(SetElements {
                set: Rc::clone(self),
                index: 0,
            })
        })
    }

    /// Enumeration of `k` randomly sampled elements (all of them if `k`
    /// exceeds the cardinality). Index selection is delegated to
    /// [`SubsetEnumerator`]; this set only supplies indexed access into its
    /// sorted backing sequence.
    pub fn elements_k(self: &Rc<Self>, k: usize) -> EvalResult<SampledElements> {
        self.guard(|| {
            self.normalize()?;
            let n = self.elems.borrow().len();
            Ok(SampledElements {
                set: Rc::clone(self),
                indices: SubsetEnumerator::new(k, n),
            })
        })
    }

    /// Like [`elements_k`](Self::elements_k) with `k = ceil(fraction * n)`.
    pub fn elements_fraction(self: &Rc<Self>, fraction: f64) -> EvalResult<SampledElements> {
        self.guard(|| {
            self.normalize()?;
            let n = self.elems.borrow().len();
            Ok(SampledElements {
                set: Rc::clone(self),
                indices: SubsetEnumerator::with_fraction(fraction, n),
            })
        })
    }

    /// Drain a `k`-element sample into a fresh, unnormalized set.
    pub fn get_random_subset(self: &Rc<Self>, k: usize) -> EvalResult<Value> {
        self.guard(|| {
            let mut en = self.elements_k(k)?;
            let mut elems = Vec::with_capacity(en.indices.sample_size());
            while let Some(v) = en.next()? {
                elems.push(v);
            }
            Ok(Value::SetEnum(SetEnumValue::new(elems, false)))
        })
    }

    /// Convert any set-shaped value into enumerated form.
    ///
    /// Returns `Ok(None)` for values that are not set-shaped; that is an
    /// answer, not an error. An already-enumerated set is returned as-is. A
    /// deferred representation with a realized cache returns the cache
    /// verbatim; otherwise its enumeration is drained, the result is wrapped
    /// with the normalization flag appropriate to the source, and the cache
    /// slot is filled for reuse.
    pub fn convert(val: &Value) -> EvalResult<Option<Rc<SetEnumValue>>> {
        match val {
            Value::SetEnum(s) => Ok(Some(Rc::clone(s))),
            Value::Interval(iv) => {
                let mut elems = Vec::with_capacity(iv.size()?);
                let mut n = iv.low.clone();
                while n <= iv.high {
                    elems.push(Value::Int(n.clone()));
                    n = &n + 1;
                }
                // Generated ascending, so already normalized.
                Ok(Some(SetEnumValue::new(elems, true)))
            }
            Value::SetCap(cap) => {
                if let Some(s) = cap.realized() {
                    return Ok(Some(s));
                }
                let elems = drain(cap.elements()?)?;
                let set = SetEnumValue::new(elems, cap.is_normalized());
                cap.cache(&set);
                Ok(Some(set))
            }
            Value::SetCup(cup) => {
                if let Some(s) = cup.realized() {
                    return Ok(Some(s));
                }
                let elems = drain(cup.elements()?)?;
                // The two operands may overlap, so duplicates are possible.
                let set = SetEnumValue::new(elems, false);
                cup.cache(&set);
                Ok(Some(set))
            }
            Value::SetDiff(diff) => {
                if let Some(s) = diff.realized() {
                    return Ok(Some(s));
                }
                let elems = drain(diff.elements()?)?;
                let set = SetEnumValue::new(elems, diff.is_normalized());
                diff.cache(&set);
                Ok(Some(set))
            }
            Value::Union(u) => {
                if let Some(s) = u.realized() {
                    return Ok(Some(s));
                }
                let elems = drain(u.elements()?)?;
                let set = SetEnumValue::new(elems, false);
                u.cache(&set);
                Ok(Some(set))
            }
            Value::Subset(ps) => {
                if let Some(s) = ps.realized() {
                    return Ok(Some(s));
                }
                let elems = drain(ps.elements()?)?;
                let set = SetEnumValue::new(elems, false);
                ps.cache(&set);
                Ok(Some(set))
            }
            Value::SetOfRcds(s) => {
                if let Some(r) = s.realized() {
                    return Ok(Some(r));
                }
                let elems = drain(s.elements()?)?;
                let set = SetEnumValue::new(elems, s.is_normalized());
                s.cache(&set);
                Ok(Some(set))
            }
            Value::SetOfFcns(s) => {
                if let Some(r) = s.realized() {
                    return Ok(Some(r));
                }
                let elems = drain(s.elements()?)?;
                let set = SetEnumValue::new(elems, s.is_normalized());
                s.cache(&set);
                Ok(Some(set))
            }
            Value::SetOfTuples(s) => {
                if let Some(r) = s.realized() {
                    return Ok(Some(r));
                }
                let elems = drain(s.elements()?)?;
                let set = SetEnumValue::new(elems, s.is_normalized());
                s.cache(&set);
                Ok(Some(set))
            }
            Value::SetPred(p) => {
                if let Some(r) = p.realized() {
                    return Ok(Some(r));
                }
                let elems = drain(p.elements()?)?;
                let set = SetEnumValue::new(elems, p.is_normalized());
                p.cache(&set);
                Ok(Some(set))
            }
            _ => Ok(None),
        }
    }
}

fn drain(mut en: Box<dyn ValueEnumeration>) -> EvalResult<Vec<Value>> {
    let mut out = Vec::new();
    while let Some(v) = en.next()? {
        out.push(v);
    }
    Ok(out)
}

impl fmt::Display for SetEnumValue {
    /// Renders `{a, b, c}` in sorted element order.
    ///
    /// Printing normalizes first: a deliberate mutation, safe because it is
    /// idempotent and repeated rendering yields the same text. `fmt` has no
    /// error channel, so if the elements cannot be ordered the failed
    /// normalize leaves the sequence untouched and it prints in insertion
    /// order, deterministically.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.normalized.get() {
            let _ = self.normalize();
        }
        let elems = self.elems.borrow();
        f.write_str("{")?;
        for (i, e) in elems.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", e)?;
        }
        f.write_str("}")
    }
}

/// Forward enumerator over a normalized set.
pub struct SetElements {
    set: Rc<SetEnumValue>,
    index: usize,
}

impl ValueEnumeration for SetElements {
    fn next(&mut self) -> EvalResult<Option<Value>> {
        let elems = self.set.elems.borrow();
        if self.index < elems.len() {
            let v = elems[self.index].clone();
            self.index += 1;
            Ok(Some(v))
        } else {
            Ok(None)
        }
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}

/// Enumerator over a random sample of a normalized set's elements.
pub struct SampledElements {
    set: Rc<SetEnumValue>,
    indices: SubsetEnumerator,
}

impl ValueEnumeration for SampledElements {
    fn next(&mut self) -> EvalResult<Option<Value>> {
        match self.indices.next_index() {
            Some(i) => Ok(Some(self.set.elems.borrow()[i].clone())),
            None => Ok(None),
        }
    }

    fn reset(&mut self) {
        self.indices.reset();
    }
}
