//! Deferred set representations
//!
//! The evaluator builds set-shaped values lazily: an interval is two
//! bounds, a union is its two operands, a powerset is its base set. Each of
//! these representations answers membership directly from its structure and
//! exposes a forward enumeration of its elements; element-level algebra
//! goes through [`SetEnumValue::convert`](crate::set_enum::SetEnumValue::convert),
//! which drains that enumeration once and parks the result in the
//! representation's realized-cache slot. A filled cache is authoritative
//! and reused verbatim on every later conversion.

use crate::enumerate::ValueEnumeration;
use crate::error::{EvalError, EvalResult};
use crate::set_enum::SetEnumValue;
use crate::value::{FcnRcdValue, RecordValue, TupleValue, Value};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Realized-cache slot plus accessors, shared by every deferred kind.
/// `None` is the "not yet computed" sentinel.
macro_rules! realized_cache {
    () => {
        /// The previously realized enumerated form, if any.
        pub fn realized(&self) -> Option<Rc<SetEnumValue>> {
            self.realized.borrow().clone()
        }

        pub(crate) fn cache(&self, set: &Rc<SetEnumValue>) {
            *self.realized.borrow_mut() = Some(Rc::clone(set));
        }
    };
}

/// Is the value's enumerated form already sorted and duplicate-free?
///
/// Used by the conversion protocol to pick the normalization flag of a
/// freshly drained set. Mirrors each representation's enumeration order:
/// intervals ascend, filters preserve operand order, unions interleave.
pub(crate) fn value_is_normalized(v: &Value) -> bool {
    match v {
        Value::SetEnum(s) => s.is_normalized(),
        Value::Interval(_) => true,
        Value::SetCap(c) => c.is_normalized(),
        Value::SetCup(c) => c.is_normalized(),
        Value::SetDiff(d) => d.is_normalized(),
        Value::Union(u) => u.is_normalized(),
        Value::Subset(s) => s.is_normalized(),
        Value::SetOfRcds(s) => s.is_normalized(),
        Value::SetOfFcns(s) => s.is_normalized(),
        Value::SetOfTuples(s) => s.is_normalized(),
        Value::SetPred(p) => p.is_normalized(),
        // Non-set values have nothing to normalize.
        _ => true,
    }
}

/// Forward enumeration for any set-shaped value. Fatal for non-sets.
pub fn value_elements(v: &Value) -> EvalResult<Box<dyn ValueEnumeration>> {
    match v {
        Value::SetEnum(s) => Ok(Box::new(s.elements()?)),
        Value::Interval(iv) => iv.elements(),
        Value::SetCap(c) => c.elements(),
        Value::SetCup(c) => c.elements(),
        Value::SetDiff(d) => d.elements(),
        Value::Union(u) => u.elements(),
        Value::Subset(ps) => ps.elements(),
        Value::SetOfRcds(s) => s.elements(),
        Value::SetOfFcns(s) => s.elements(),
        Value::SetOfTuples(s) => s.elements(),
        Value::SetPred(p) => p.elements(),
        _ => Err(EvalError::fatal(format!(
            "attempted to enumerate the non-set value: {}",
            v
        ))),
    }
}

/// Convert a set-shaped operand and return its normalized element sequence.
fn converted_elems(v: &Value) -> EvalResult<Vec<Value>> {
    let set = SetEnumValue::convert(v)?.ok_or_else(|| {
        EvalError::fatal(format!(
            "attempted to enumerate the non-set value: {}",
            v
        ))
    })?;
    set.normalize()?;
    Ok(set.to_vec())
}

fn converted_components(sets: &[Value]) -> EvalResult<Vec<Vec<Value>>> {
    sets.iter().map(converted_elems).collect()
}

// ---------------------------------------------------------------------------
// Interval
// ---------------------------------------------------------------------------

/// The integer interval `low..high`, empty when `low > high`.
#[derive(Debug, Clone)]
pub struct IntervalValue {
    pub low: BigInt,
    pub high: BigInt,
}

impl IntervalValue {
    pub fn new(low: impl Into<BigInt>, high: impl Into<BigInt>) -> Rc<Self> {
        Rc::new(IntervalValue {
            low: low.into(),
            high: high.into(),
        })
    }

    pub fn size(&self) -> EvalResult<usize> {
        if self.low > self.high {
            return Ok(0);
        }
        let span = &self.high - &self.low + BigInt::from(1);
        span.to_usize().ok_or_else(|| {
            EvalError::too_large(format!(
                "the interval {}..{} cannot be enumerated",
                self.low, self.high
            ))
        })
    }

    /// Range check for integers; a model value is simply not a member;
    /// other kinds cannot be meaningfully tested against a nonempty
    /// interval and fail.
    pub fn member(&self, elem: &Value) -> EvalResult<bool> {
        match elem {
            Value::Int(n) => Ok(*n >= self.low && *n <= self.high),
            Value::Model(_) => Ok(false),
            _ => {
                if self.low > self.high {
                    return Ok(false);
                }
                Err(EvalError::fatal(format!(
                    "attempted to check if:\n{}\nis an element of the interval {}..{}",
                    elem, self.low, self.high
                )))
            }
        }
    }

    /// Ascending enumeration of the interval.
    pub fn elements(&self) -> EvalResult<Box<dyn ValueEnumeration>> {
        Ok(Box::new(IntervalEnum {
            low: self.low.clone(),
            high: self.high.clone(),
            next: self.low.clone(),
        }))
    }
}

struct IntervalEnum {
    low: BigInt,
    high: BigInt,
    next: BigInt,
}

impl ValueEnumeration for IntervalEnum {
    fn next(&mut self) -> EvalResult<Option<Value>> {
        if self.next > self.high {
            return Ok(None);
        }
        let v = Value::Int(self.next.clone());
        self.next = &self.next + 1;
        Ok(Some(v))
    }

    fn reset(&mut self) {
        self.next = self.low.clone();
    }
}

// ---------------------------------------------------------------------------
// Binary operators: cap, cup, diff
// ---------------------------------------------------------------------------

/// The intersection `set1 \cap set2`, enumerated by filtering `set1`
/// through `set2`'s membership predicate.
#[derive(Debug)]
pub struct SetCapValue {
    pub set1: Value,
    pub set2: Value,
    realized: RefCell<Option<Rc<SetEnumValue>>>,
}

impl SetCapValue {
    pub fn new(set1: Value, set2: Value) -> Rc<Self> {
        Rc::new(SetCapValue {
            set1,
            set2,
            realized: RefCell::new(None),
        })
    }

    realized_cache!();

    pub fn is_normalized(&self) -> bool {
        match self.realized() {
            Some(s) => s.is_normalized(),
            None => value_is_normalized(&self.set1) && value_is_normalized(&self.set2),
        }
    }

    pub fn elements(&self) -> EvalResult<Box<dyn ValueEnumeration>> {
        match self.realized() {
            Some(s) => Ok(Box::new(s.elements()?)),
            None => Ok(Box::new(FilterEnum {
                base: value_elements(&self.set1)?,
                other: self.set2.clone(),
                keep_members: true,
            })),
        }
    }
}

/// The union `set1 \cup set2`. Also produced by
/// [`SetEnumValue::cup`](crate::set_enum::SetEnumValue::cup) when the
/// operand is not eagerly enumerable.
#[derive(Debug)]
pub struct SetCupValue {
    pub set1: Value,
    pub set2: Value,
    realized: RefCell<Option<Rc<SetEnumValue>>>,
}

impl SetCupValue {
    pub fn new(set1: Value, set2: Value) -> Rc<Self> {
        Rc::new(SetCupValue {
            set1,
            set2,
            realized: RefCell::new(None),
        })
    }

    realized_cache!();

    pub fn is_normalized(&self) -> bool {
        match self.realized() {
            Some(s) => s.is_normalized(),
            // Interleaving two sorted sequences is not sorted.
            None => false,
        }
    }

    pub fn elements(&self) -> EvalResult<Box<dyn ValueEnumeration>> {
        match self.realized() {
            Some(s) => Ok(Box::new(s.elements()?)),
            None => Ok(Box::new(CupEnum {
                first: value_elements(&self.set1)?,
                second: value_elements(&self.set2)?,
                in_second: false,
            })),
        }
    }
}

/// The difference `set1 \ set2`.
#[derive(Debug)]
pub struct SetDiffValue {
    pub set1: Value,
    pub set2: Value,
    realized: RefCell<Option<Rc<SetEnumValue>>>,
}

impl SetDiffValue {
    pub fn new(set1: Value, set2: Value) -> Rc<Self> {
        Rc::new(SetDiffValue {
            set1,
            set2,
            realized: RefCell::new(None),
        })
    }

    realized_cache!();

    pub fn is_normalized(&self) -> bool {
        match self.realized() {
            Some(s) => s.is_normalized(),
            // Filtering set1 preserves its order.
            None => value_is_normalized(&self.set1),
        }
    }

    pub fn elements(&self) -> EvalResult<Box<dyn ValueEnumeration>> {
        match self.realized() {
            Some(s) => Ok(Box::new(s.elements()?)),
            None => Ok(Box::new(FilterEnum {
                base: value_elements(&self.set1)?,
                other: self.set2.clone(),
                keep_members: false,
            })),
        }
    }
}

/// Filters a base enumeration through another value's membership predicate.
/// Keeps members for intersection, non-members for difference.
struct FilterEnum {
    base: Box<dyn ValueEnumeration>,
    other: Value,
    keep_members: bool,
}

impl ValueEnumeration for FilterEnum {
    fn next(&mut self) -> EvalResult<Option<Value>> {
        while let Some(v) = self.base.next()? {
            if self.other.member(&v)? == self.keep_members {
                return Ok(Some(v));
            }
        }
        Ok(None)
    }

    fn reset(&mut self) {
        self.base.reset();
    }
}

/// Enumerates the first operand, then the second; duplicates across the
/// boundary are left for the next normalize.
struct CupEnum {
    first: Box<dyn ValueEnumeration>,
    second: Box<dyn ValueEnumeration>,
    in_second: bool,
}

impl ValueEnumeration for CupEnum {
    fn next(&mut self) -> EvalResult<Option<Value>> {
        if !self.in_second {
            if let Some(v) = self.first.next()? {
                return Ok(Some(v));
            }
            self.in_second = true;
        }
        self.second.next()
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
        self.in_second = false;
    }
}

// ---------------------------------------------------------------------------
// UNION (flatten a set of sets)
// ---------------------------------------------------------------------------

/// `UNION set`: the union of all members of a set of sets.
#[derive(Debug)]
pub struct UnionValue {
    pub set: Value,
    realized: RefCell<Option<Rc<SetEnumValue>>>,
}

impl UnionValue {
    pub fn new(set: Value) -> Rc<Self> {
        Rc::new(UnionValue {
            set,
            realized: RefCell::new(None),
        })
    }

    realized_cache!();

    pub fn is_normalized(&self) -> bool {
        // Member sets are concatenated, so the output is never sorted.
        self.realized().map(|s| s.is_normalized()).unwrap_or(false)
    }

    pub fn member(&self, elem: &Value) -> EvalResult<bool> {
        if let Some(s) = self.realized() {
            return s.member(elem);
        }
        let mut en = value_elements(&self.set)?;
        while let Some(member_set) = en.next()? {
            if member_set.member(elem)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn elements(&self) -> EvalResult<Box<dyn ValueEnumeration>> {
        match self.realized() {
            Some(s) => Ok(Box::new(s.elements()?)),
            None => {
                let outer = SetEnumValue::convert(&self.set)?.ok_or_else(|| {
                    EvalError::fatal(format!(
                        "attempted to apply UNION to the non-set value: {}",
                        self.set
                    ))
                })?;
                outer.normalize()?;
                Ok(Box::new(UnionEnum {
                    members: outer.to_vec(),
                    next_member: 0,
                    inner: None,
                }))
            }
        }
    }
}

struct UnionEnum {
    members: Vec<Value>,
    next_member: usize,
    inner: Option<Box<dyn ValueEnumeration>>,
}

impl ValueEnumeration for UnionEnum {
    fn next(&mut self) -> EvalResult<Option<Value>> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if let Some(v) = inner.next()? {
                    return Ok(Some(v));
                }
                self.inner = None;
            }
            if self.next_member >= self.members.len() {
                return Ok(None);
            }
            self.inner = Some(value_elements(&self.members[self.next_member])?);
            self.next_member += 1;
        }
    }

    fn reset(&mut self) {
        self.next_member = 0;
        self.inner = None;
    }
}

// ---------------------------------------------------------------------------
// SUBSET (powerset)
// ---------------------------------------------------------------------------

/// `SUBSET set`: the set of all subsets of the base set.
#[derive(Debug)]
pub struct SubsetValue {
    pub set: Value,
    realized: RefCell<Option<Rc<SetEnumValue>>>,
}

impl SubsetValue {
    pub fn new(set: Value) -> Rc<Self> {
        Rc::new(SubsetValue {
            set,
            realized: RefCell::new(None),
        })
    }

    realized_cache!();

    pub fn is_normalized(&self) -> bool {
        // Bitmask order is by mask value, not by the subset total order.
        self.realized().map(|s| s.is_normalized()).unwrap_or(false)
    }

    pub fn size(&self) -> EvalResult<usize> {
        let base = converted_elems(&self.set)?;
        if base.len() >= usize::BITS as usize {
            return Err(EvalError::too_large(format!(
                "SUBSET of a set with {} elements",
                base.len()
            )));
        }
        Ok(1usize << base.len())
    }

    /// `elem` is a member iff it is itself a set and every element belongs
    /// to the base set. Non-set candidates are a usage error.
    pub fn member(&self, elem: &Value) -> EvalResult<bool> {
        let candidate = SetEnumValue::convert(elem)?.ok_or_else(|| {
            EvalError::fatal(format!(
                "attempted to check if the non-set value:\n{}\nis an element of SUBSET {}",
                elem, self.set
            ))
        })?;
        for e in candidate.to_vec() {
            if !self.set.member(&e)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn elements(&self) -> EvalResult<Box<dyn ValueEnumeration>> {
        match self.realized() {
            Some(s) => Ok(Box::new(s.elements()?)),
            None => Ok(Box::new(SubsetEnum::new(&self.set)?)),
        }
    }
}

/// Counts a bitmask from 0 to 2^n; bit i selects base element i. The base
/// is normalized first so each emitted subset is itself sorted.
struct SubsetEnum {
    base: Vec<Value>,
    mask: u64,
    total: u64,
}

impl SubsetEnum {
    fn new(set: &Value) -> EvalResult<Self> {
        let base = converted_elems(set)?;
        if base.len() > 63 {
            return Err(EvalError::too_large(format!(
                "SUBSET of a set with {} elements",
                base.len()
            )));
        }
        let total = 1u64 << base.len();
        Ok(SubsetEnum {
            base,
            mask: 0,
            total,
        })
    }
}

impl ValueEnumeration for SubsetEnum {
    fn next(&mut self) -> EvalResult<Option<Value>> {
        if self.mask >= self.total {
            return Ok(None);
        }
        let mut elems = Vec::with_capacity(self.mask.count_ones() as usize);
        for (i, e) in self.base.iter().enumerate() {
            if self.mask & (1 << i) != 0 {
                elems.push(e.clone());
            }
        }
        self.mask += 1;
        Ok(Some(Value::SetEnum(SetEnumValue::new(elems, true))))
    }

    fn reset(&mut self) {
        self.mask = 0;
    }
}

// ---------------------------------------------------------------------------
// Record / function / tuple product sets
// ---------------------------------------------------------------------------

/// `[n1: S1, n2: S2, ...]`: the set of records with the given fields, each
/// field ranging over its component set. Names are kept sorted.
#[derive(Debug)]
pub struct SetOfRcdsValue {
    pub names: Vec<Arc<str>>,
    pub sets: Vec<Value>,
    realized: RefCell<Option<Rc<SetEnumValue>>>,
}

impl SetOfRcdsValue {
    pub fn new(mut fields: Vec<(Arc<str>, Value)>) -> Rc<Self> {
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        let (names, sets) = fields.into_iter().unzip();
        Rc::new(SetOfRcdsValue {
            names,
            sets,
            realized: RefCell::new(None),
        })
    }

    realized_cache!();

    pub fn is_normalized(&self) -> bool {
        match self.realized() {
            Some(s) => s.is_normalized(),
            None => self.sets.iter().all(value_is_normalized),
        }
    }

    pub fn member(&self, elem: &Value) -> EvalResult<bool> {
        let rcd = match elem {
            Value::Record(r) => r,
            _ => return Ok(false),
        };
        if rcd.names != self.names {
            return Ok(false);
        }
        for (v, set) in rcd.values.iter().zip(&self.sets) {
            if !set.member(v)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn elements(&self) -> EvalResult<Box<dyn ValueEnumeration>> {
        match self.realized() {
            Some(s) => Ok(Box::new(s.elements()?)),
            None => {
                let components = converted_components(&self.sets)?;
                Ok(Box::new(RcdsEnum {
                    names: self.names.clone(),
                    odometer: Odometer::new(&components),
                    components,
                }))
            }
        }
    }
}

/// `[domain -> range]`: the set of functions from the domain set into the
/// range set.
#[derive(Debug)]
pub struct SetOfFcnsValue {
    pub domain: Value,
    pub range: Value,
    realized: RefCell<Option<Rc<SetEnumValue>>>,
}

impl SetOfFcnsValue {
    pub fn new(domain: Value, range: Value) -> Rc<Self> {
        Rc::new(SetOfFcnsValue {
            domain,
            range,
            realized: RefCell::new(None),
        })
    }

    realized_cache!();

    pub fn is_normalized(&self) -> bool {
        match self.realized() {
            Some(s) => s.is_normalized(),
            None => value_is_normalized(&self.domain) && value_is_normalized(&self.range),
        }
    }

    pub fn member(&self, elem: &Value) -> EvalResult<bool> {
        let fcn = match elem {
            Value::Func(f) => f,
            _ => return Ok(false),
        };
        let dom = converted_elems(&self.domain)?;
        if fcn.domain.len() != dom.len() {
            return Ok(false);
        }
        for (k, d) in fcn.domain.iter().zip(&dom) {
            if !k.equal_values(d)? {
                return Ok(false);
            }
        }
        for v in &fcn.values {
            if !self.range.member(v)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn elements(&self) -> EvalResult<Box<dyn ValueEnumeration>> {
        match self.realized() {
            Some(s) => Ok(Box::new(s.elements()?)),
            None => {
                let domain = converted_elems(&self.domain)?;
                let range = converted_elems(&self.range)?;
                let widths = vec![range.len(); domain.len()];
                Ok(Box::new(FcnsEnum {
                    odometer: Odometer::from_widths(widths),
                    domain,
                    range,
                }))
            }
        }
    }
}

/// `S1 \X S2 \X ...`: the set of tuples drawn componentwise from the given
/// sets.
#[derive(Debug)]
pub struct SetOfTuplesValue {
    pub sets: Vec<Value>,
    realized: RefCell<Option<Rc<SetEnumValue>>>,
}

impl SetOfTuplesValue {
    pub fn new(sets: Vec<Value>) -> Rc<Self> {
        Rc::new(SetOfTuplesValue {
            sets,
            realized: RefCell::new(None),
        })
    }

    realized_cache!();

    pub fn is_normalized(&self) -> bool {
        match self.realized() {
            Some(s) => s.is_normalized(),
            None => self.sets.iter().all(value_is_normalized),
        }
    }

    pub fn member(&self, elem: &Value) -> EvalResult<bool> {
        let tup = match elem {
            Value::Tuple(t) => t,
            _ => return Ok(false),
        };
        if tup.elems.len() != self.sets.len() {
            return Ok(false);
        }
        for (e, set) in tup.elems.iter().zip(&self.sets) {
            if !set.member(e)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn elements(&self) -> EvalResult<Box<dyn ValueEnumeration>> {
        match self.realized() {
            Some(s) => Ok(Box::new(s.elements()?)),
            None => {
                let components = converted_components(&self.sets)?;
                Ok(Box::new(TuplesEnum {
                    odometer: Odometer::new(&components),
                    components,
                }))
            }
        }
    }
}

/// Mixed-radix counter over component widths, last position fastest.
/// Drives the cross-product enumerations.
struct Odometer {
    widths: Vec<usize>,
    digits: Vec<usize>,
    exhausted: bool,
}

impl Odometer {
    fn new(components: &[Vec<Value>]) -> Self {
        Self::from_widths(components.iter().map(Vec::len).collect())
    }

    fn from_widths(widths: Vec<usize>) -> Self {
        let exhausted = widths.iter().any(|&w| w == 0);
        let digits = vec![0; widths.len()];
        Odometer {
            widths,
            digits,
            exhausted,
        }
    }

    fn current(&self) -> Option<&[usize]> {
        if self.exhausted {
            None
        } else {
            Some(&self.digits)
        }
    }

    fn step(&mut self) {
        for i in (0..self.widths.len()).rev() {
            self.digits[i] += 1;
            if self.digits[i] < self.widths[i] {
                return;
            }
            self.digits[i] = 0;
        }
        // Every digit wrapped (or there were none): the product is done.
        self.exhausted = true;
    }

    fn reset(&mut self) {
        self.digits.iter_mut().for_each(|d| *d = 0);
        self.exhausted = self.widths.iter().any(|&w| w == 0);
    }
}

struct RcdsEnum {
    names: Vec<Arc<str>>,
    components: Vec<Vec<Value>>,
    odometer: Odometer,
}

impl ValueEnumeration for RcdsEnum {
    fn next(&mut self) -> EvalResult<Option<Value>> {
        let digits = match self.odometer.current() {
            Some(d) => d,
            None => return Ok(None),
        };
        let values = digits
            .iter()
            .zip(&self.components)
            .map(|(&i, c)| c[i].clone())
            .collect();
        self.odometer.step();
        Ok(Some(Value::Record(Rc::new(RecordValue {
            names: self.names.clone(),
            values,
        }))))
    }

    fn reset(&mut self) {
        self.odometer.reset();
    }
}

struct FcnsEnum {
    domain: Vec<Value>,
    range: Vec<Value>,
    odometer: Odometer,
}

impl ValueEnumeration for FcnsEnum {
    fn next(&mut self) -> EvalResult<Option<Value>> {
        let digits = match self.odometer.current() {
            Some(d) => d,
            None => return Ok(None),
        };
        let values = digits.iter().map(|&i| self.range[i].clone()).collect();
        self.odometer.step();
        Ok(Some(Value::Func(Rc::new(FcnRcdValue {
            domain: self.domain.clone(),
            values,
        }))))
    }

    fn reset(&mut self) {
        self.odometer.reset();
    }
}

struct TuplesEnum {
    components: Vec<Vec<Value>>,
    odometer: Odometer,
}

impl ValueEnumeration for TuplesEnum {
    fn next(&mut self) -> EvalResult<Option<Value>> {
        let digits = match self.odometer.current() {
            Some(d) => d,
            None => return Ok(None),
        };
        let elems = digits
            .iter()
            .zip(&self.components)
            .map(|(&i, c)| c[i].clone())
            .collect();
        self.odometer.step();
        Ok(Some(Value::Tuple(Rc::new(TupleValue { elems }))))
    }

    fn reset(&mut self) {
        self.odometer.reset();
    }
}

// ---------------------------------------------------------------------------
// Predicate-filtered set
// ---------------------------------------------------------------------------

/// Predicate hook supplied by the evaluator for `{x \in S : P(x)}`.
pub type PredFn = dyn Fn(&Value) -> EvalResult<bool>;

/// The filtered set `{x \in set : pred(x)}`.
pub struct SetPredValue {
    pub set: Value,
    pub pred: Rc<PredFn>,
    realized: RefCell<Option<Rc<SetEnumValue>>>,
}

impl SetPredValue {
    pub fn new(set: Value, pred: Rc<PredFn>) -> Rc<Self> {
        Rc::new(SetPredValue {
            set,
            pred,
            realized: RefCell::new(None),
        })
    }

    realized_cache!();

    pub fn is_normalized(&self) -> bool {
        match self.realized() {
            Some(s) => s.is_normalized(),
            // Filtering the base preserves its order.
            None => value_is_normalized(&self.set),
        }
    }

    pub fn member(&self, elem: &Value) -> EvalResult<bool> {
        Ok(self.set.member(elem)? && (self.pred)(elem)?)
    }

    pub fn elements(&self) -> EvalResult<Box<dyn ValueEnumeration>> {
        match self.realized() {
            Some(s) => Ok(Box::new(s.elements()?)),
            None => Ok(Box::new(PredEnum {
                base: value_elements(&self.set)?,
                pred: Rc::clone(&self.pred),
            })),
        }
    }
}

impl fmt::Debug for SetPredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetPredValue")
            .field("set", &self.set)
            .finish_non_exhaustive()
    }
}

struct PredEnum {
    base: Box<dyn ValueEnumeration>,
    pred: Rc<PredFn>,
}

impl ValueEnumeration for PredEnum {
    fn next(&mut self) -> EvalResult<Option<Value>> {
        while let Some(v) = self.base.next()? {
            if (self.pred)(&v)? {
                return Ok(Some(v));
            }
        }
        Ok(None)
    }

    fn reset(&mut self) {
        self.base.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_set(ns: &[i64]) -> Value {
        Value::set(ns.iter().map(|&n| Value::int(n)).collect())
    }

    fn drain(mut en: Box<dyn ValueEnumeration>) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(v) = en.next().unwrap() {
            out.push(v.to_string());
        }
        out
    }

    #[test]
    fn interval_enumerates_ascending() {
        let iv = Value::Interval(IntervalValue::new(2, 5));
        assert_eq!(drain(value_elements(&iv).unwrap()), vec!["2", "3", "4", "5"]);
        assert!(iv.member(&Value::int(3)).unwrap());
        assert!(!iv.member(&Value::int(9)).unwrap());
    }

    #[test]
    fn empty_interval_has_no_members() {
        let iv = IntervalValue::new(5, 2);
        assert_eq!(iv.size().unwrap(), 0);
        assert!(!iv.member(&Value::int(3)).unwrap());
        assert!(!iv.member(&Value::string("x")).unwrap());
    }

    #[test]
    fn interval_membership_of_non_integer_is_fatal() {
        let iv = IntervalValue::new(1, 3);
        assert!(iv.member(&Value::string("x")).unwrap_err().is_usage_error());
        assert!(!iv.member(&Value::model("p")).unwrap());
    }

    #[test]
    fn cap_filters_through_membership() {
        let cap = SetCapValue::new(int_set(&[1, 2, 3]), int_set(&[2, 3, 4]));
        let got = drain(cap.elements().unwrap());
        assert_eq!(got, vec!["2", "3"]);
    }

    #[test]
    fn diff_keeps_non_members() {
        let diff = SetDiffValue::new(int_set(&[1, 2, 3]), int_set(&[2]));
        assert_eq!(drain(diff.elements().unwrap()), vec!["1", "3"]);
    }

    #[test]
    fn cup_enumerates_both_operands() {
        let cup = SetCupValue::new(int_set(&[1, 2]), int_set(&[2, 3]));
        // Duplicates across the boundary are allowed; normalize prunes them.
        assert_eq!(drain(cup.elements().unwrap()), vec!["1", "2", "2", "3"]);
    }

    #[test]
    fn union_flattens_a_set_of_sets() {
        let u = UnionValue::new(Value::set(vec![int_set(&[1, 2]), int_set(&[2, 3])]));
        let mut got = drain(u.elements().unwrap());
        got.sort();
        assert_eq!(got, vec!["1", "2", "2", "3"]);
        assert!(u.member(&Value::int(3)).unwrap());
        assert!(!u.member(&Value::int(7)).unwrap());
    }

    #[test]
    fn subset_enumerates_all_subsets() {
        let ps = SubsetValue::new(int_set(&[1, 2]));
        assert_eq!(ps.size().unwrap(), 4);
        let got = drain(ps.elements().unwrap());
        assert_eq!(got, vec!["{}", "{1}", "{2}", "{1, 2}"]);
    }

    #[test]
    fn subset_membership_checks_inclusion() {
        let ps = SubsetValue::new(int_set(&[1, 2, 3]));
        assert!(ps.member(&int_set(&[1, 3])).unwrap());
        assert!(!ps.member(&int_set(&[1, 4])).unwrap());
        assert!(ps.member(&Value::SetEnum(SetEnumValue::empty())).unwrap());
        assert!(ps.member(&Value::int(1)).unwrap_err().is_usage_error());
    }

    #[test]
    fn set_of_tuples_is_the_cross_product() {
        let tv = SetOfTuplesValue::new(vec![int_set(&[1, 2]), int_set(&[8, 9])]);
        let got = drain(tv.elements().unwrap());
        assert_eq!(
            got,
            vec!["<<1, 8>>", "<<1, 9>>", "<<2, 8>>", "<<2, 9>>"]
        );
        let member = Value::Tuple(Rc::new(TupleValue {
            elems: vec![Value::int(2), Value::int(8)],
        }));
        assert!(tv.member(&member).unwrap());
        assert!(!tv.member(&Value::int(1)).unwrap());
    }

    #[test]
    fn empty_component_empties_the_product() {
        let tv = SetOfTuplesValue::new(vec![int_set(&[1]), int_set(&[])]);
        assert!(drain(tv.elements().unwrap()).is_empty());
    }

    #[test]
    fn set_of_records_ranges_each_field() {
        let rv = SetOfRcdsValue::new(vec![
            (Arc::from("b"), int_set(&[1, 2])),
            (Arc::from("a"), int_set(&[7])),
        ]);
        let got = drain(rv.elements().unwrap());
        assert_eq!(got, vec!["[a |-> 7, b |-> 1]", "[a |-> 7, b |-> 2]"]);
    }

    #[test]
    fn set_of_fcns_has_range_to_the_domain_power() {
        let fv = SetOfFcnsValue::new(int_set(&[1, 2]), int_set(&[5, 6]));
        let got = drain(fv.elements().unwrap());
        assert_eq!(got.len(), 4);
        assert_eq!(got[0], "(1 :> 5 @@ 2 :> 5)");
        let member = Value::Func(Rc::new(FcnRcdValue {
            domain: vec![Value::int(1), Value::int(2)],
            values: vec![Value::int(6), Value::int(5)],
        }));
        assert!(fv.member(&member).unwrap());
    }

    #[test]
    fn pred_set_filters_by_the_predicate() {
        let even: Rc<PredFn> = Rc::new(|v| match v {
            Value::Int(n) => Ok(n % 2 == BigInt::from(0)),
            _ => Ok(false),
        });
        let sp = SetPredValue::new(int_set(&[1, 2, 3, 4]), even);
        assert_eq!(drain(sp.elements().unwrap()), vec!["2", "4"]);
        assert!(sp.member(&Value::int(2)).unwrap());
        assert!(!sp.member(&Value::int(3)).unwrap());
        assert!(!sp.member(&Value::int(8)).unwrap());
    }

    #[test]
    fn enumeration_reset_restarts() {
        let cap = SetCapValue::new(int_set(&[1, 2, 3]), int_set(&[2, 3]));
        let mut en = cap.elements().unwrap();
        assert_eq!(en.next().unwrap().unwrap().to_string(), "2");
        en.reset();
        assert_eq!(en.next().unwrap().unwrap().to_string(), "2");
    }
}
