//! Property-based tests for the set value core
//!
//! These tests verify the canonicalization and algebra laws of enumerated
//! sets across randomized inputs: construction order must never be
//! observable, conversion paths must agree, and the set algebra must satisfy
//! its partition laws.

use num_bigint::BigInt;
use proptest::prelude::*;
use std::rc::Rc;
use tla_values::{
    IntervalValue, MvPerm, SetCupValue, SetDiffValue, SetEnumValue, SubsetValue, Value, FP64_INIT,
};

// ============================================================================
// Helper functions
// ============================================================================

/// Build an enumerated set from raw integers, unnormalized.
fn int_set(values: &[i64]) -> Rc<SetEnumValue> {
    SetEnumValue::new(values.iter().map(|&v| Value::int(v)).collect(), false)
}

fn as_set(v: Value) -> Rc<SetEnumValue> {
    match v {
        Value::SetEnum(s) => s,
        other => panic!("expected an enumerated set, got {}", other),
    }
}

/// A shuffled copy of `values` driven by a proptest-provided permutation seed.
fn shuffled(values: &[i64], mut seed: u64) -> Vec<i64> {
    let mut out = values.to_vec();
    for i in (1..out.len()).rev() {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        out.swap(i, (seed % (i as u64 + 1)) as usize);
    }
    out
}

// ============================================================================
// Canonicalization properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // --- Order independence ---

    #[test]
    fn prop_fingerprint_is_order_independent(
        values in prop::collection::vec(-100i64..100, 0..20),
        seed: u64,
    ) {
        let a = int_set(&values);
        let b = int_set(&shuffled(&values, seed));
        prop_assert_eq!(a.fingerprint(FP64_INIT).unwrap(), b.fingerprint(FP64_INIT).unwrap());
    }

    #[test]
    fn prop_size_is_order_independent(
        values in prop::collection::vec(-100i64..100, 0..20),
        seed: u64,
    ) {
        let a = int_set(&values);
        let b = int_set(&shuffled(&values, seed));
        prop_assert_eq!(a.size().unwrap(), b.size().unwrap());
    }

    #[test]
    fn prop_rendering_is_order_independent(
        values in prop::collection::vec(-100i64..100, 0..20),
        seed: u64,
    ) {
        let a = int_set(&values);
        let b = int_set(&shuffled(&values, seed));
        prop_assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn prop_duplicates_do_not_change_identity(
        values in prop::collection::vec(-50i64..50, 1..15),
    ) {
        let mut doubled = values.clone();
        doubled.extend_from_slice(&values);
        let a = int_set(&values);
        let b = int_set(&doubled);
        prop_assert!(a.equals(&Value::SetEnum(Rc::clone(&b))).unwrap());
        prop_assert_eq!(a.fingerprint(FP64_INIT).unwrap(), b.fingerprint(FP64_INIT).unwrap());
    }

    // --- Normalization ---

    #[test]
    fn prop_normalized_sequence_is_strictly_increasing(
        values in prop::collection::vec(-100i64..100, 0..25),
    ) {
        let set = int_set(&values);
        set.normalize().unwrap();
        let elems = set.to_vec();
        for pair in elems.windows(2) {
            prop_assert_eq!(
                pair[0].compare_values(&pair[1]).unwrap(),
                std::cmp::Ordering::Less
            );
        }
    }

    #[test]
    fn prop_membership_is_stable_across_normalization(
        values in prop::collection::vec(-30i64..30, 0..20),
        probe in -30i64..30,
    ) {
        let set = int_set(&values);
        let before = set.member(&Value::int(probe)).unwrap();
        set.normalize().unwrap();
        let after = set.member(&Value::int(probe)).unwrap();
        prop_assert_eq!(before, after);
        prop_assert_eq!(after, values.contains(&probe));
    }

    // --- Conversion path agreement ---

    #[test]
    fn prop_interval_converts_to_its_elements(low in -50i64..50, len in 0i64..30) {
        let high = low + len - 1;
        let direct: Vec<i64> = (low..=high).collect();
        let via_interval =
            SetEnumValue::convert(&Value::Interval(IntervalValue::new(low, high)))
                .unwrap()
                .unwrap();
        let expected = int_set(&direct);
        prop_assert!(via_interval.equals(&Value::SetEnum(expected)).unwrap());
        prop_assert!(via_interval.is_normalized());
    }

    #[test]
    fn prop_lazy_and_eager_fingerprints_agree(
        a in prop::collection::vec(-20i64..20, 0..12),
        b in prop::collection::vec(-20i64..20, 0..12),
    ) {
        let eager = {
            let mut all = a.clone();
            all.extend_from_slice(&b);
            int_set(&all)
        };
        let lazy = Value::SetCup(SetCupValue::new(
            Value::SetEnum(int_set(&a)),
            Value::SetEnum(int_set(&b)),
        ));
        let lazy_fp = SetEnumValue::convert(&lazy)
            .unwrap()
            .unwrap()
            .fingerprint(FP64_INIT)
            .unwrap();
        prop_assert_eq!(eager.fingerprint(FP64_INIT).unwrap(), lazy_fp);
    }

    #[test]
    fn prop_conversion_is_memoized(
        a in prop::collection::vec(-20i64..20, 0..10),
        b in prop::collection::vec(-20i64..20, 0..10),
    ) {
        let diff = SetDiffValue::new(
            Value::SetEnum(int_set(&a)),
            Value::SetEnum(int_set(&b)),
        );
        let v = Value::SetDiff(Rc::clone(&diff));
        let first = SetEnumValue::convert(&v).unwrap().unwrap();
        let second = SetEnumValue::convert(&v).unwrap().unwrap();
        prop_assert!(Rc::ptr_eq(&first, &second));
        prop_assert!(diff.realized().is_some());
    }
}

// ============================================================================
// Algebra properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_cap_and_diff_partition(
        a in prop::collection::vec(-20i64..20, 0..15),
        b in prop::collection::vec(-20i64..20, 0..15),
    ) {
        let sa = int_set(&a);
        let other = Value::SetEnum(int_set(&b));
        let cap = as_set(sa.cap(&other).unwrap());
        let diff = as_set(sa.diff(&other).unwrap());
        prop_assert_eq!(
            cap.size().unwrap() + diff.size().unwrap(),
            sa.size().unwrap()
        );
    }

    #[test]
    fn prop_diff_with_self_is_empty(values in prop::collection::vec(-20i64..20, 0..15)) {
        let set = int_set(&values);
        let diff = as_set(set.diff(&Value::SetEnum(Rc::clone(&set))).unwrap());
        prop_assert_eq!(diff.size().unwrap(), 0);
    }

    #[test]
    fn prop_cup_contains_both_operands(
        a in prop::collection::vec(-20i64..20, 0..12),
        b in prop::collection::vec(-20i64..20, 0..12),
    ) {
        let sa = int_set(&a);
        let cup = as_set(sa.cup(&Value::SetEnum(int_set(&b))).unwrap());
        for v in a.iter().chain(&b) {
            prop_assert!(cup.member(&Value::int(*v)).unwrap());
        }
    }

    #[test]
    fn prop_cup_is_commutative_up_to_equality(
        a in prop::collection::vec(-20i64..20, 0..12),
        b in prop::collection::vec(-20i64..20, 0..12),
    ) {
        let ab = as_set(int_set(&a).cup(&Value::SetEnum(int_set(&b))).unwrap());
        let ba = as_set(int_set(&b).cup(&Value::SetEnum(int_set(&a))).unwrap());
        prop_assert!(ab.equals(&Value::SetEnum(ba)).unwrap());
    }

    #[test]
    fn prop_comparison_is_a_total_order(
        a in prop::collection::vec(-10i64..10, 0..8),
        b in prop::collection::vec(-10i64..10, 0..8),
    ) {
        let sa = int_set(&a);
        let sb = Value::SetEnum(int_set(&b));
        let ord = sa.compare_to(&sb).unwrap();
        let rev = as_set(sb.clone()).compare_to(&Value::SetEnum(Rc::clone(&sa))).unwrap();
        prop_assert_eq!(ord, rev.reverse());
        prop_assert_eq!(ord == std::cmp::Ordering::Equal, sa.equals(&sb).unwrap());
    }

    #[test]
    fn prop_random_subset_is_contained(
        values in prop::collection::vec(-50i64..50, 0..20),
        k in 0usize..25,
    ) {
        let set = int_set(&values);
        let sub = as_set(set.get_random_subset(k).unwrap());
        prop_assert_eq!(sub.size().unwrap(), k.min(set.size().unwrap()));
        for e in sub.to_vec() {
            prop_assert!(set.member(&e).unwrap());
        }
    }
}

// ============================================================================
// Symmetry properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_identity_permutation_preserves_the_instance(
        values in prop::collection::vec(-20i64..20, 0..10),
    ) {
        let set = int_set(&values);
        let permuted = as_set(set.permute(&MvPerm::new()).unwrap());
        prop_assert!(Rc::ptr_eq(&set, &permuted));
    }

    #[test]
    fn prop_swap_permutation_preserves_fingerprint_of_symmetric_sets(
        n in 1usize..6,
    ) {
        // The set of all model values {p0..pn} maps onto itself under any
        // transposition, so its fingerprint is invariant.
        let elems: Vec<Value> = (0..n).map(|i| Value::model(format!("p{}", i))).collect();
        let set = SetEnumValue::new(elems, false);
        let mut perm = MvPerm::new();
        perm.insert("p0", Value::model(format!("p{}", n - 1)));
        perm.insert(format!("p{}", n - 1).as_str(), Value::model("p0"));
        let permuted = as_set(set.permute(&perm).unwrap());
        prop_assert_eq!(
            set.fingerprint(FP64_INIT).unwrap(),
            permuted.fingerprint(FP64_INIT).unwrap()
        );
    }
}

// ============================================================================
// Powerset
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_subset_has_power_of_two_size(values in prop::collection::vec(0i64..40, 0..7)) {
        let base = int_set(&values);
        let distinct = base.size().unwrap();
        let ps = SubsetValue::new(Value::SetEnum(base));
        let realized = SetEnumValue::convert(&Value::Subset(ps)).unwrap().unwrap();
        prop_assert_eq!(realized.size().unwrap(), 1usize << distinct);
    }

    #[test]
    fn prop_every_enumerated_subset_is_a_member(values in prop::collection::vec(0i64..20, 0..5)) {
        let ps = SubsetValue::new(Value::SetEnum(int_set(&values)));
        let realized = SetEnumValue::convert(&Value::Subset(Rc::clone(&ps))).unwrap().unwrap();
        for sub in realized.to_vec() {
            prop_assert!(ps.member(&sub).unwrap());
        }
    }
}

// ============================================================================
// Big integers
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_bigint_elements_round_trip_through_ordering(xs in prop::collection::vec(any::<i128>(), 0..10)) {
        let elems: Vec<Value> = xs.iter().map(|&x| Value::Int(BigInt::from(x))).collect();
        let set = SetEnumValue::new(elems, false);
        set.normalize().unwrap();
        let mut sorted = xs.clone();
        sorted.sort_unstable();
        sorted.dedup();
        let expected: Vec<Value> = sorted.into_iter().map(|x| Value::Int(BigInt::from(x))).collect();
        let got = set.to_vec();
        prop_assert_eq!(got.len(), expected.len());
        for (g, e) in got.iter().zip(&expected) {
            prop_assert!(g.equal_values(e).unwrap());
        }
    }
}
