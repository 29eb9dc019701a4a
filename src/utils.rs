use std::{collections::HashSet, ops::RangeInclusive};

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::interval::Interval;

/// Converts an interval to an `i64` range, if both bounds fit.
pub fn interval_to_range(i: &Interval) -> Option<RangeInclusive<i64>> {
    Some(i.lo().to_i64()?..=i.hi().to_i64()?)
}

/// Panics on an empty range.
pub fn range_to_interval(r: RangeInclusive<i64>) -> Interval {
    let (lo, hi) = r.into_inner();
    Interval::new(BigInt::from(lo), BigInt::from(hi)).expect("non-empty range")
}

/// Evaluates `f` on every pair of values and returns the smallest range
/// containing all results. Returns `None` if there are more than
/// `max_combination` pairs, `1..=0` if `f` never produced a value.
pub fn eval_combi<F: Fn(i64, i64) -> Option<i64>>(
    a: RangeInclusive<i64>,
    b: RangeInclusive<i64>,
    max_combination: u64,
    f: F,
) -> Option<RangeInclusive<i64>> {
    if a.is_empty() || b.is_empty() {
        return Some(1..=0);
    }

    let size_a = a.end().abs_diff(*a.start()).saturating_add(1);
    let size_b = b.end().abs_diff(*b.start()).saturating_add(1);
    if size_a.saturating_mul(size_b) > max_combination {
        return None;
    }

    let mut values = HashSet::new();
    for x in a.clone() {
        for y in b.clone() {
            if let Some(value) = f(x, y) {
                values.insert(value);
            }
        }
    }
    match (values.iter().min(), values.iter().max()) {
        (Some(&min), Some(&max)) => Some(min..=max),
        _ => Some(1..=0),
    }
}

#[test]
fn test_eval_combi() {
    assert_eq!(eval_combi(0..=3, 1..=2, 100, |a, b| a.checked_add(b)), Some(1..=5));
    assert_eq!(eval_combi(0..=3, 0..=0, 100, |a, b| a.checked_div(b)), Some(1..=0));
    assert_eq!(eval_combi(0..=100, 0..=100, 100, |a, b| a.checked_add(b)), None);
}

#[test]
fn test_interval_range_conversion() {
    assert_eq!(interval_to_range(&range_to_interval(-4..=9)), Some(-4..=9));
    let huge = Interval::new(0, BigInt::from(i64::MAX) + 1u32).unwrap();
    assert_eq!(interval_to_range(&huge), None);
}
