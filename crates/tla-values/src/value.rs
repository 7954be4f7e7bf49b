//! Runtime values and their capability set
//!
//! The evaluator manipulates values through a small capability surface: a
//! kind discriminant, a fallible total order, fallible structural equality,
//! incremental fingerprinting, a defined-check, symmetry permutation, and
//! set membership. Set-shaped kinds additionally participate in the
//! conversion protocol of [`SetEnumValue`](crate::set_enum::SetEnumValue),
//! which turns any of them into the canonical enumerated form.
//!
//! Values are shared, immutable once published; large payloads sit behind
//! `Rc` so that structural sharing across many sets is free. The kind tag
//! numbering matches TLC's `ValueConstants`, keeping fingerprints stable
//! across the system.

use crate::error::{EvalError, EvalResult};
use crate::fingerprint;
use crate::lazy::{
    IntervalValue, SetCapValue, SetCupValue, SetDiffValue, SetOfFcnsValue, SetOfRcdsValue,
    SetOfTuplesValue, SetPredValue, SubsetValue, UnionValue,
};
use crate::perm::MvPerm;
use crate::set_enum::SetEnumValue;
use num_bigint::BigInt;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Value kind discriminants, numbered as in TLC's `ValueConstants` so that
/// fingerprints extended with a kind tag agree with the reference tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i64)]
pub enum ValueKind {
    Bool = 0,
    Int = 1,
    String = 3,
    Record = 4,
    SetEnum = 5,
    SetPred = 6,
    Tuple = 7,
    FcnRcd = 9,
    SetOfFcns = 13,
    SetOfRcds = 14,
    SetOfTuples = 15,
    Subset = 16,
    SetDiff = 17,
    SetCap = 18,
    SetCup = 19,
    Union = 20,
    Model = 21,
    Interval = 23,
    Undef = 24,
}

/// An atomic model value: an opaque, indivisible constant declared in the
/// model, with its own equality rule against other values.
#[derive(Debug, Clone)]
pub struct ModelValue {
    pub name: Arc<str>,
}

impl ModelValue {
    /// Equality as claimed by the model value itself.
    ///
    /// A set never considers itself equal to a model value, but equality
    /// checks between the two defer to this predicate, so the asymmetry is
    /// decided here: an untyped model value equals only itself.
    pub fn model_value_equals(&self, other: &Value) -> bool {
        matches!(other, Value::Model(m) if m.name == self.name)
    }
}

/// A tuple value `<<a, b, c>>`.
#[derive(Debug, Clone)]
pub struct TupleValue {
    pub elems: Vec<Value>,
}

/// A record value `[a |-> 1, b |-> 2]`. Field names are kept sorted.
#[derive(Debug, Clone)]
pub struct RecordValue {
    pub names: Vec<Arc<str>>,
    pub values: Vec<Value>,
}

impl RecordValue {
    /// Build a record from field/value pairs, sorting by field name.
    pub fn new(mut pairs: Vec<(Arc<str>, Value)>) -> Self {
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        let (names, values) = pairs.into_iter().unzip();
        RecordValue { names, values }
    }
}

/// A function given by explicit domain and range vectors, domain sorted.
#[derive(Debug, Clone)]
pub struct FcnRcdValue {
    pub domain: Vec<Value>,
    pub values: Vec<Value>,
}

/// One step of an EXCEPT application: a path into a value, a cursor into
/// that path, and the replacement value.
#[derive(Debug, Clone)]
pub struct ValueExcept {
    pub path: Vec<Value>,
    pub idx: usize,
    pub value: Value,
}

/// A runtime value.
///
/// The set-shaped kinds (`SetEnum` and everything after it) all answer
/// membership queries and can be converted to the enumerated form; the rest
/// are element values.
#[derive(Debug, Clone)]
pub enum Value {
    Bool(bool),
    Int(BigInt),
    String(Arc<str>),
    Model(Rc<ModelValue>),
    Tuple(Rc<TupleValue>),
    Record(Rc<RecordValue>),
    Func(Rc<FcnRcdValue>),
    /// Placeholder for a value that was never assigned
    Undef,
    SetEnum(Rc<SetEnumValue>),
    Interval(Rc<IntervalValue>),
    SetCap(Rc<SetCapValue>),
    SetCup(Rc<SetCupValue>),
    SetDiff(Rc<SetDiffValue>),
    Union(Rc<UnionValue>),
    Subset(Rc<SubsetValue>),
    SetOfRcds(Rc<SetOfRcdsValue>),
    SetOfFcns(Rc<SetOfFcnsValue>),
    SetOfTuples(Rc<SetOfTuplesValue>),
    SetPred(Rc<SetPredValue>),
}

impl Value {
    pub fn int(n: i64) -> Value {
        Value::Int(BigInt::from(n))
    }

    pub fn string(s: impl Into<Arc<str>>) -> Value {
        Value::String(s.into())
    }

    pub fn model(name: impl Into<Arc<str>>) -> Value {
        Value::Model(Rc::new(ModelValue { name: name.into() }))
    }

    /// Build an enumerated set from the given elements, marked unnormalized.
    pub fn set(elems: Vec<Value>) -> Value {
        Value::SetEnum(SetEnumValue::new(elems, false))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::String(_) => ValueKind::String,
            Value::Model(_) => ValueKind::Model,
            Value::Tuple(_) => ValueKind::Tuple,
            Value::Record(_) => ValueKind::Record,
            Value::Func(_) => ValueKind::FcnRcd,
            Value::Undef => ValueKind::Undef,
            Value::SetEnum(_) => ValueKind::SetEnum,
            Value::Interval(_) => ValueKind::Interval,
            Value::SetCap(_) => ValueKind::SetCap,
            Value::SetCup(_) => ValueKind::SetCup,
            Value::SetDiff(_) => ValueKind::SetDiff,
            Value::Union(_) => ValueKind::Union,
            Value::Subset(_) => ValueKind::Subset,
            Value::SetOfRcds(_) => ValueKind::SetOfRcds,
            Value::SetOfFcns(_) => ValueKind::SetOfFcns,
            Value::SetOfTuples(_) => ValueKind::SetOfTuples,
            Value::SetPred(_) => ValueKind::SetPred,
        }
    }

    #[inline]
    pub fn kind_tag(&self) -> i64 {
        self.kind() as i64
    }

    /// True for the kinds the conversion protocol recognizes.
    pub fn is_set_shaped(&self) -> bool {
        matches!(
            self,
            Value::SetEnum(_)
                | Value::Interval(_)
                | Value::SetCap(_)
                | Value::SetCup(_)
                | Value::SetDiff(_)
                | Value::Union(_)
                | Value::Subset(_)
                | Value::SetOfRcds(_)
                | Value::SetOfFcns(_)
                | Value::SetOfTuples(_)
                | Value::SetPred(_)
        )
    }

    /// True if the value's finite element sequence can be materialized
    /// without risk of non-termination. Every set-shaped kind here is
    /// finite; anything else cannot be enumerated at all.
    pub fn is_enumerable(&self) -> bool {
        self.is_set_shaped()
    }

    /// Total order over values.
    ///
    /// Same-kind values compare naturally. Across kinds only two rules
    /// exist: a model value sorts strictly below every other value (and a
    /// set therefore strictly above it), and set-shaped kinds compare
    /// through their enumerated forms. Any other cross-kind comparison is a
    /// fatal usage error.
    pub fn compare_values(&self, other: &Value) -> EvalResult<Ordering> {
        if self.is_set_shaped() {
            let set = SetEnumValue::convert(self)?
                .ok_or_else(|| EvalError::internal("set-shaped value failed to convert"))?;
            return set.compare_to(other);
        }
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Ok(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
            (Value::String(a), Value::String(b)) => Ok(a.as_ref().cmp(b.as_ref())),
            (Value::Model(a), Value::Model(b)) => Ok(a.name.as_ref().cmp(b.name.as_ref())),
            // A model value sorts below every other value kind.
            (Value::Model(_), _) => Ok(Ordering::Less),
            (_, Value::Model(_)) => Ok(Ordering::Greater),
            (Value::Undef, Value::Undef) => Ok(Ordering::Equal),
            (Value::Tuple(a), Value::Tuple(b)) => {
                compare_elementwise(&a.elems, &b.elems)
            }
            (Value::Record(a), Value::Record(b)) => {
                match a.names.len().cmp(&b.names.len()) {
                    Ordering::Equal => {}
                    ord => return Ok(ord),
                }
                for (an, bn) in a.names.iter().zip(&b.names) {
                    match an.as_ref().cmp(bn.as_ref()) {
                        Ordering::Equal => {}
                        ord => return Ok(ord),
                    }
                }
                for (av, bv) in a.values.iter().zip(&b.values) {
                    match av.compare_values(bv)? {
                        Ordering::Equal => {}
                        ord => return Ok(ord),
                    }
                }
                Ok(Ordering::Equal)
            }
            (Value::Func(a), Value::Func(b)) => {
                match compare_elementwise(&a.domain, &b.domain)? {
                    Ordering::Equal => compare_elementwise(&a.values, &b.values),
                    ord => Ok(ord),
                }
            }
            _ if other.is_set_shaped() => {
                other.compare_values(self).map(Ordering::reverse)
            }
            _ => Err(EvalError::fatal(format!(
                "attempted to compare {} with the value: {}",
                self, other
            ))),
        }
    }

    /// Structural equality, under the same cross-kind rules as
    /// [`compare_values`](Self::compare_values); set-vs-model equality
    /// defers to the model value's own predicate.
    pub fn equal_values(&self, other: &Value) -> EvalResult<bool> {
        if self.is_set_shaped() {
            let set = SetEnumValue::convert(self)?
                .ok_or_else(|| EvalError::internal("set-shaped value failed to convert"))?;
            return set.equals(other);
        }
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
            (Value::Int(a), Value::Int(b)) => Ok(a == b),
            (Value::String(a), Value::String(b)) => Ok(a == b),
            (Value::Model(a), _) => Ok(a.model_value_equals(other)),
            (_, Value::Model(b)) => Ok(b.model_value_equals(self)),
            (Value::Undef, Value::Undef) => Ok(true),
            (Value::Tuple(a), Value::Tuple(b)) => equal_elementwise(&a.elems, &b.elems),
            (Value::Record(a), Value::Record(b)) => {
                if a.names.len() != b.names.len() || a.names != b.names {
                    return Ok(false);
                }
                equal_elementwise(&a.values, &b.values)
            }
            (Value::Func(a), Value::Func(b)) => {
                if !equal_elementwise(&a.domain, &b.domain)? {
                    return Ok(false);
                }
                equal_elementwise(&a.values, &b.values)
            }
            _ if other.is_set_shaped() => other.equal_values(self),
            _ => Err(EvalError::fatal(format!(
                "attempted to check equality of {} with the value: {}",
                self, other
            ))),
        }
    }

    /// Membership test. Only set-shaped values answer; asking a non-set is a
    /// fatal usage error.
    pub fn member(&self, elem: &Value) -> EvalResult<bool> {
        match self {
            Value::SetEnum(s) => s.member(elem),
            Value::Interval(iv) => iv.member(elem),
            Value::SetCap(c) => Ok(c.set1.member(elem)? && c.set2.member(elem)?),
            Value::SetCup(c) => Ok(c.set1.member(elem)? || c.set2.member(elem)?),
            Value::SetDiff(d) => Ok(d.set1.member(elem)? && !d.set2.member(elem)?),
            Value::Union(u) => u.member(elem),
            Value::Subset(s) => s.member(elem),
            Value::SetOfRcds(s) => s.member(elem),
            Value::SetOfFcns(s) => s.member(elem),
            Value::SetOfTuples(s) => s.member(elem),
            Value::SetPred(p) => p.member(elem),
            _ => Err(EvalError::fatal(format!(
                "attempted to check if:\n{}\nis an element of the non-set value:\n{}",
                elem, self
            ))),
        }
    }

    /// Extend an incoming fingerprint state with this value's kind tag and
    /// contents. Set-shaped values fingerprint through their normalized
    /// enumerated form, which is what makes set fingerprints independent of
    /// construction order.
    pub fn fingerprint_extend(&self, fp: u64) -> EvalResult<u64> {
        match self {
            Value::Bool(b) => {
                let fp = fingerprint::extend_i64(fp, self.kind_tag());
                Ok(fingerprint::extend_u8(fp, *b as u8))
            }
            Value::Int(n) => {
                let fp = fingerprint::extend_i64(fp, self.kind_tag());
                Ok(fingerprint::extend_bigint(fp, n))
            }
            Value::String(s) => {
                let fp = fingerprint::extend_i64(fp, self.kind_tag());
                Ok(fingerprint::extend_str(fp, s))
            }
            Value::Model(m) => {
                let fp = fingerprint::extend_i64(fp, self.kind_tag());
                Ok(fingerprint::extend_str(fp, &m.name))
            }
            Value::Undef => Ok(fingerprint::extend_i64(fp, self.kind_tag())),
            Value::Tuple(t) => {
                let mut fp = fingerprint::extend_i64(fp, self.kind_tag());
                fp = fingerprint::extend_i32(fp, t.elems.len() as i32);
                for e in &t.elems {
                    fp = e.fingerprint_extend(fp)?;
                }
                Ok(fp)
            }
            Value::Record(r) => {
                let mut fp = fingerprint::extend_i64(fp, self.kind_tag());
                fp = fingerprint::extend_i32(fp, r.names.len() as i32);
                for (name, val) in r.names.iter().zip(&r.values) {
                    fp = fingerprint::extend_str(fp, name);
                    fp = val.fingerprint_extend(fp)?;
                }
                Ok(fp)
            }
            Value::Func(f) => {
                let mut fp = fingerprint::extend_i64(fp, self.kind_tag());
                fp = fingerprint::extend_i32(fp, f.domain.len() as i32);
                for (k, v) in f.domain.iter().zip(&f.values) {
                    fp = k.fingerprint_extend(fp)?;
                    fp = v.fingerprint_extend(fp)?;
                }
                Ok(fp)
            }
            Value::SetEnum(s) => s.fingerprint(fp),
            other => {
                let set = SetEnumValue::convert(other)?
                    .ok_or_else(|| EvalError::internal("set-shaped value failed to convert"))?;
                set.fingerprint(fp)
            }
        }
    }

    /// Recursively check for undefined placeholders.
    pub fn is_defined(&self) -> EvalResult<bool> {
        match self {
            Value::Undef => Ok(false),
            Value::Bool(_) | Value::Int(_) | Value::String(_) | Value::Model(_) => Ok(true),
            Value::Tuple(t) => all_defined(&t.elems),
            Value::Record(r) => all_defined(&r.values),
            Value::Func(f) => Ok(all_defined(&f.domain)? && all_defined(&f.values)?),
            Value::SetEnum(s) => s.is_defined(),
            // Deferred sets are defined as wholes.
            _ => Ok(true),
        }
    }

    /// Apply a symmetry permutation to this value.
    ///
    /// If no constituent model value moves, the original value is returned
    /// unchanged (same allocation).
    pub fn permute(&self, perm: &MvPerm) -> EvalResult<Value> {
        Ok(self.permute_opt(perm)?.unwrap_or_else(|| self.clone()))
    }

    /// Permutation with an explicit identity signal: `None` means nothing
    /// moved. Containers use this to avoid rebuilding untouched structures.
    pub(crate) fn permute_opt(&self, perm: &MvPerm) -> EvalResult<Option<Value>> {
        match self {
            Value::Model(m) => Ok(perm.get(&m.name).cloned()),
            Value::Tuple(t) => Ok(permute_slice(&t.elems, perm)?
                .map(|elems| Value::Tuple(Rc::new(TupleValue { elems })))),
            Value::Record(r) => Ok(permute_slice(&r.values, perm)?.map(|values| {
                Value::Record(Rc::new(RecordValue {
                    names: r.names.clone(),
                    values,
                }))
            })),
            Value::Func(f) => {
                let domain = permute_slice(&f.domain, perm)?;
                let values = permute_slice(&f.values, perm)?;
                if domain.is_none() && values.is_none() {
                    return Ok(None);
                }
                Ok(Some(Value::Func(Rc::new(FcnRcdValue {
                    domain: domain.unwrap_or_else(|| f.domain.clone()),
                    values: values.unwrap_or_else(|| f.values.clone()),
                }))))
            }
            Value::SetEnum(s) => s.permute_opt(perm),
            // Deferred sets are permuted after conversion by the caller.
            _ => Ok(None),
        }
    }
}

fn compare_elementwise(a: &[Value], b: &[Value]) -> EvalResult<Ordering> {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        ord => return Ok(ord),
    }
    for (x, y) in a.iter().zip(b) {
        match x.compare_values(y)? {
            Ordering::Equal => {}
            ord => return Ok(ord),
        }
    }
    Ok(Ordering::Equal)
}

fn equal_elementwise(a: &[Value], b: &[Value]) -> EvalResult<bool> {
    if a.len() != b.len() {
        return Ok(false);
    }
    for (x, y) in a.iter().zip(b) {
        if !x.equal_values(y)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn all_defined(vals: &[Value]) -> EvalResult<bool> {
    for v in vals {
        if !v.is_defined()? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Permute every element of a slice; `None` if all are fixed points.
pub(crate) fn permute_slice(elems: &[Value], perm: &MvPerm) -> EvalResult<Option<Vec<Value>>> {
    let mut out: Option<Vec<Value>> = None;
    for (i, e) in elems.iter().enumerate() {
        if let Some(moved) = e.permute_opt(perm)? {
            let vec = out.get_or_insert_with(|| elems[..i].to_vec());
            vec.push(moved);
        } else if let Some(vec) = out.as_mut() {
            vec.push(e.clone());
        }
    }
    Ok(out)
}

fn write_joined(
    f: &mut fmt::Formatter<'_>,
    vals: &[Value],
    sep: &str,
) -> fmt::Result {
    for (i, v) in vals.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", v)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            Value::Int(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Model(m) => f.write_str(&m.name),
            Value::Undef => f.write_str("UNDEF"),
            Value::Tuple(t) => {
                f.write_str("<<")?;
                write_joined(f, &t.elems, ", ")?;
                f.write_str(">>")
            }
            Value::Record(r) => {
                f.write_str("[")?;
                for (i, (name, val)) in r.names.iter().zip(&r.values).enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} |-> {}", name, val)?;
                }
                f.write_str("]")
            }
            Value::Func(fv) => {
                if fv.domain.is_empty() {
                    return f.write_str("<<>>");
                }
                f.write_str("(")?;
                for (i, (k, v)) in fv.domain.iter().zip(&fv.values).enumerate() {
                    if i > 0 {
                        f.write_str(" @@ ")?;
                    }
                    write!(f, "{} :> {}", k, v)?;
                }
                f.write_str(")")
            }
            Value::SetEnum(s) => write!(f, "{}", s),
            Value::Interval(iv) => write!(f, "{}..{}", iv.low, iv.high),
            Value::SetCap(c) => match c.realized() {
                Some(s) => write!(f, "{}", s),
                None => write!(f, "{} \\cap {}", c.set1, c.set2),
            },
            Value::SetCup(c) => match c.realized() {
                Some(s) => write!(f, "{}", s),
                None => write!(f, "{} \\cup {}", c.set1, c.set2),
            },
            Value::SetDiff(d) => match d.realized() {
                Some(s) => write!(f, "{}", s),
                None => write!(f, "{} \\ {}", d.set1, d.set2),
            },
            Value::Union(u) => match u.realized() {
                Some(s) => write!(f, "{}", s),
                None => write!(f, "UNION {}", u.set),
            },
            Value::Subset(s) => match s.realized() {
                Some(r) => write!(f, "{}", r),
                None => write!(f, "SUBSET {}", s.set),
            },
            Value::SetOfRcds(s) => match s.realized() {
                Some(r) => write!(f, "{}", r),
                None => {
                    f.write_str("[")?;
                    for (i, (name, set)) in s.names.iter().zip(&s.sets).enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}: {}", name, set)?;
                    }
                    f.write_str("]")
                }
            },
            Value::SetOfFcns(s) => match s.realized() {
                Some(r) => write!(f, "{}", r),
                None => write!(f, "[{} -> {}]", s.domain, s.range),
            },
            Value::SetOfTuples(s) => match s.realized() {
                Some(r) => write!(f, "{}", r),
                None => {
                    for (i, set) in s.sets.iter().enumerate() {
                        if i > 0 {
                            f.write_str(" \\X ")?;
                        }
                        write!(f, "{}", set)?;
                    }
                    Ok(())
                }
            },
            Value::SetPred(p) => match p.realized() {
                Some(r) => write!(f, "{}", r),
                None => write!(f, "{{x \\in {} : <predicate>}}", p.set),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_values_sort_below_everything() {
        let mv = Value::model("p1");
        let n = Value::int(0);
        assert_eq!(mv.compare_values(&n).unwrap(), Ordering::Less);
        assert_eq!(n.compare_values(&mv).unwrap(), Ordering::Greater);
    }

    #[test]
    fn model_value_equality_is_by_name() {
        let a = Value::model("p1");
        let b = Value::model("p1");
        let c = Value::model("p2");
        assert!(a.equal_values(&b).unwrap());
        assert!(!a.equal_values(&c).unwrap());
        assert!(!a.equal_values(&Value::int(1)).unwrap());
    }

    #[test]
    fn cross_kind_comparison_is_fatal() {
        let err = Value::int(1)
            .compare_values(&Value::string("a"))
            .unwrap_err();
        assert!(err.is_usage_error());
    }

    #[test]
    fn tuples_compare_by_length_then_elements() {
        let short = Value::Tuple(Rc::new(TupleValue {
            elems: vec![Value::int(9)],
        }));
        let long = Value::Tuple(Rc::new(TupleValue {
            elems: vec![Value::int(1), Value::int(2)],
        }));
        assert_eq!(short.compare_values(&long).unwrap(), Ordering::Less);
    }

    #[test]
    fn permute_identity_returns_none() {
        let perm = MvPerm::new();
        let tuple = Value::Tuple(Rc::new(TupleValue {
            elems: vec![Value::model("a"), Value::int(1)],
        }));
        assert!(tuple.permute_opt(&perm).unwrap().is_none());
    }

    #[test]
    fn permute_moves_model_values_inside_containers() {
        let mut perm = MvPerm::new();
        perm.insert("a", Value::model("b"));
        let tuple = Value::Tuple(Rc::new(TupleValue {
            elems: vec![Value::model("a"), Value::int(1)],
        }));
        let moved = tuple.permute(&perm).unwrap();
        let expected = Value::Tuple(Rc::new(TupleValue {
            elems: vec![Value::model("b"), Value::int(1)],
        }));
        assert!(moved.equal_values(&expected).unwrap());
    }

    #[test]
    fn rendering_is_tla_syntax() {
        assert_eq!(Value::Bool(true).to_string(), "TRUE");
        assert_eq!(Value::string("hi").to_string(), "\"hi\"");
        let t = Value::Tuple(Rc::new(TupleValue {
            elems: vec![Value::int(1), Value::int(2)],
        }));
        assert_eq!(t.to_string(), "<<1, 2>>");
    }

    #[test]
    fn undef_is_not_defined() {
        assert!(!Value::Undef.is_defined().unwrap());
        let t = Value::Tuple(Rc::new(TupleValue {
            elems: vec![Value::int(1), Value::Undef],
        }));
        assert!(!t.is_defined().unwrap());
    }
}
