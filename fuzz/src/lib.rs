use std::ops::RangeInclusive;

use arbitrary::Arbitrary;
use bounded_int_calc::{
    interval::Interval,
    ops::Op,
    range_ops::{self, Bounds},
    utils::{eval_combi, interval_to_range, range_to_interval},
};

/// Keeps brute-force enumeration cheap.
pub const MAX_WIDTH: i64 = 32;

pub struct ArbitraryOp(pub Op);

impl<'a> Arbitrary<'a> for ArbitraryOp {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let idx = u.choose_index(Op::ALL.len())?;
        Ok(ArbitraryOp(Op::ALL[idx]))
    }
}

/// A small range somewhere in the `i32` space, so products still fit into an `i64`.
#[derive(Debug, Clone)]
pub struct SmallRange(pub RangeInclusive<i64>);

impl<'a> Arbitrary<'a> for SmallRange {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let start = u.arbitrary::<i32>()? as i64;
        let width = u.int_in_range(0..=MAX_WIDTH)?;
        Ok(SmallRange(start..=start + width))
    }
}

fn brute_force(op: Op, a: RangeInclusive<i64>, b: RangeInclusive<i64>) -> RangeInclusive<i64> {
    let max = ((MAX_WIDTH + 1) * (MAX_WIDTH + 1)) as u64;
    let r = match op {
        Op::Add => eval_combi(a, b, max, |x, y| x.checked_add(y)),
        Op::Sub => eval_combi(a, b, max, |x, y| x.checked_sub(y)),
        Op::Mul => eval_combi(a, b, max, |x, y| x.checked_mul(y)),
        Op::DivRem => eval_combi(a, b, max, |x, y| x.checked_div_euclid(y)),
    };
    r.expect("ranges are at most MAX_WIDTH wide")
}

/// Checks the engine against enumerating every operand pair.
/// Quotients must match exactly, remainders must cover `0..b_hi`.
pub fn verify(op: Op, a: RangeInclusive<i64>, b: RangeInclusive<i64>) {
    let (ia, ib) = (range_to_interval(a.clone()), range_to_interval(b.clone()));
    let result = range_ops::eval(op, &ia, &ib);

    if op == Op::DivRem && (*b.start() <= 0 || *a.start() < 0) {
        assert!(result.is_err(), "{a:?} / {b:?} should be rejected");
        return;
    }

    let expected = brute_force(op, a.clone(), b.clone());
    match result.unwrap() {
        Bounds::Single(r) => {
            assert_eq!(interval_to_range(&r), Some(expected), "{a:?} {} {b:?}", op.symbol());
        }
        Bounds::DivRem { quotient, remainder } => {
            assert_eq!(interval_to_range(&quotient), Some(expected), "{a:?} / {b:?}");
            assert_eq!(remainder, Interval::new(0, *b.end() - 1).unwrap(), "{a:?} % {b:?}");
        }
    }
}
