use std::{cmp, fmt};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use thiserror::Error;

use crate::{interval::Interval, ops::Op};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Divisor lower bound must be positive! (got {lo})")]
    NonPositiveDivisor { lo: BigInt },
    #[error("Dividend lower bound must be non-negative! Cairo's bounded_int_div_rem does not support negative dividends. (got {lo})")]
    NegativeDividend { lo: BigInt },
    #[error("Lower bound {lo} is greater than upper bound {hi}")]
    EmptyInterval { lo: BigInt, hi: BigInt },
}

/// Result bounds of a single operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Bounds {
    Single(Interval),
    DivRem { quotient: Interval, remainder: Interval },
}

impl Bounds {
    /// All result bounds in output order, with the labels used in warnings.
    pub fn labelled(&self) -> Vec<(&'static str, &BigInt)> {
        match self {
            Bounds::Single(r) => vec![("Result min", r.lo()), ("Result max", r.hi())],
            Bounds::DivRem { quotient, remainder } => vec![
                ("Quotient min", quotient.lo()),
                ("Quotient max", quotient.hi()),
                ("Remainder min", remainder.lo()),
                ("Remainder max", remainder.hi()),
            ],
        }
    }

}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bounds::Single(r) => write!(f, "{r}"),
            Bounds::DivRem { quotient, remainder } => write!(f, "quotient {quotient}, remainder {remainder}"),
        }
    }
}

pub fn eval(op: Op, a: &Interval, b: &Interval) -> Result<Bounds, RangeError> {
    match op {
        Op::Add => Ok(Bounds::Single(add_range(a, b))),
        Op::Sub => Ok(Bounds::Single(sub_range(a, b))),
        Op::Mul => Ok(Bounds::Single(mul_range(a, b))),
        Op::DivRem => {
            let (quotient, remainder) = div_rem_range(a, b)?;
            Ok(Bounds::DivRem { quotient, remainder })
        }
    }
}

/// `[a_lo + b_lo, a_hi + b_hi]`
pub fn add_range(a: &Interval, b: &Interval) -> Interval {
    Interval::new_unchecked(a.lo() + b.lo(), a.hi() + b.hi())
}

/// `[a_lo - b_hi, a_hi - b_lo]`
pub fn sub_range(a: &Interval, b: &Interval) -> Interval {
    Interval::new_unchecked(a.lo() - b.hi(), a.hi() - b.lo())
}

/// Multiplication is not monotonic over signed ranges, so the extremes can sit
/// at any of the four corners.
pub fn mul_range(a: &Interval, b: &Interval) -> Interval {
    let [c0, c1, c2, c3] = [
        a.lo() * b.lo(),
        a.lo() * b.hi(),
        a.hi() * b.lo(),
        a.hi() * b.hi(),
    ];
    let min = cmp::min(cmp::min(&c0, &c1), cmp::min(&c2, &c3)).clone();
    let max = cmp::max(cmp::max(&c0, &c1), cmp::max(&c2, &c3)).clone();
    Interval::new_unchecked(min, max)
}

/// Quotient and remainder ranges of `bounded_int_div_rem`.
///
/// Requires a non-negative dividend and a strictly positive divisor. The
/// remainder range only depends on the divisor: `[0, b_hi - 1]`.
pub fn div_rem_range(a: &Interval, b: &Interval) -> Result<(Interval, Interval), RangeError> {
    if !b.lo().is_positive() {
        return Err(RangeError::NonPositiveDivisor { lo: b.lo().clone() });
    }
    if a.lo().is_negative() {
        return Err(RangeError::NegativeDividend { lo: a.lo().clone() });
    }

    let quotient = Interval::new_unchecked(a.lo().div_floor(b.hi()), a.hi().div_floor(b.lo()));
    let remainder = Interval::new_unchecked(BigInt::zero(), b.hi() - BigInt::one());
    Ok((quotient, remainder))
}

#[cfg(test)]
use crate::utils::{eval_combi, interval_to_range, range_to_interval};

#[cfg(test)]
fn iv(lo: i64, hi: i64) -> Interval {
    Interval::new(lo, hi).unwrap()
}

#[test]
fn test_known_scenarios() {
    assert_eq!(add_range(&iv(0, 12288), &iv(0, 12288)), iv(0, 24576));
    assert_eq!(sub_range(&iv(0, 12288), &iv(0, 12288)), iv(-12288, 12288));
    assert_eq!(mul_range(&iv(0, 12288), &iv(0, 12288)), iv(0, 150994944));
    assert_eq!(div_rem_range(&iv(128, 255), &iv(3, 8)), Ok((iv(16, 85), iv(0, 7))));
}

#[test]
fn test_eval_dispatch() {
    let a = iv(-3, 5);
    let b = iv(2, 4);
    assert_eq!(eval(Op::Add, &a, &b), Ok(Bounds::Single(iv(-1, 9))));
    assert_eq!(eval(Op::Sub, &a, &b), Ok(Bounds::Single(iv(-7, 3))));
    assert_eq!(eval(Op::Mul, &a, &b), Ok(Bounds::Single(iv(-12, 20))));
    assert!(eval(Op::DivRem, &a, &b).is_err());
    assert_eq!(
        eval(Op::DivRem, &iv(10, 20), &b),
        Ok(Bounds::DivRem { quotient: iv(2, 10), remainder: iv(0, 3) })
    );
}

#[test]
fn test_bounds_display() {
    assert_eq!(Bounds::Single(iv(-1, 9)).to_string(), "[-1, 9]");
    let b = Bounds::DivRem { quotient: iv(16, 85), remainder: iv(0, 7) };
    assert_eq!(b.to_string(), "quotient [16, 85], remainder [0, 7]");
    assert_eq!(b.labelled().len(), 4);
}

#[test]
fn test_mul_mixed_signs() {
    assert_eq!(mul_range(&iv(-5, 3), &iv(-2, 4)), iv(-20, 12));
    assert_eq!(mul_range(&iv(-5, -3), &iv(-2, -1)), iv(3, 10));
    assert_eq!(mul_range(&iv(-5, -3), &iv(2, 7)), iv(-35, -6));
    assert_eq!(mul_range(&iv(0, 0), &iv(-100, 100)), iv(0, 0));
}

#[test]
fn test_add_sub_formulas() {
    let samples = [(-10, -2), (-4, 6), (0, 0), (3, 9), (-1000, 1000)];
    for &(a_lo, a_hi) in &samples {
        for &(b_lo, b_hi) in &samples {
            let (a, b) = (iv(a_lo, a_hi), iv(b_lo, b_hi));
            assert_eq!(add_range(&a, &b), iv(a_lo + b_lo, a_hi + b_hi));
            assert_eq!(sub_range(&a, &b), iv(a_lo - b_hi, a_hi - b_lo));
            // a + b == a - (-b)
            assert_eq!(add_range(&a, &b), sub_range(&a, &b.neg()));
        }
    }
}

#[test]
fn test_exact_against_brute_force() {
    for a_lo in -6..=6 {
        for a_len in [0, 1, 3, 7] {
            for b_lo in -6..=6 {
                for b_len in [0, 2, 5] {
                    let a = a_lo..=a_lo + a_len;
                    let b = b_lo..=b_lo + b_len;
                    let (ia, ib) = (range_to_interval(a.clone()), range_to_interval(b.clone()));

                    let expected = eval_combi(a.clone(), b.clone(), 256, |x, y| x.checked_add(y)).unwrap();
                    assert_eq!(interval_to_range(&add_range(&ia, &ib)), Some(expected), "{a:?} + {b:?}");

                    let expected = eval_combi(a.clone(), b.clone(), 256, |x, y| x.checked_sub(y)).unwrap();
                    assert_eq!(interval_to_range(&sub_range(&ia, &ib)), Some(expected), "{a:?} - {b:?}");

                    let expected = eval_combi(a.clone(), b.clone(), 256, |x, y| x.checked_mul(y)).unwrap();
                    assert_eq!(interval_to_range(&mul_range(&ia, &ib)), Some(expected), "{a:?} * {b:?}");
                }
            }
        }
    }
}

#[test]
fn test_div_rem_contains_every_result() {
    for a_lo in 0..40 {
        for a_len in [0, 1, 4, 13] {
            for b_lo in 1..10 {
                for b_len in [0, 1, 3] {
                    let a = a_lo..=a_lo + a_len;
                    let b = b_lo..=b_lo + b_len;
                    let (q, r) = div_rem_range(&range_to_interval(a.clone()), &range_to_interval(b.clone())).unwrap();

                    // quotient is exact, remainder only over-approximates
                    let expected_q = eval_combi(a.clone(), b.clone(), 256, |x, y| x.checked_div_euclid(y)).unwrap();
                    assert_eq!(interval_to_range(&q), Some(expected_q), "{a:?} / {b:?}");

                    let expected_r = eval_combi(a.clone(), b.clone(), 256, |x, y| x.checked_rem_euclid(y)).unwrap();
                    let r = interval_to_range(&r).unwrap();
                    assert!(r.start() <= expected_r.start() && r.end() >= expected_r.end(),
                        "{a:?} % {b:?} => {r:?} (should contain {expected_r:?})");
                    assert_eq!(r, 0..=b_lo + b_len - 1);
                }
            }
        }
    }
}

#[test]
fn test_div_rem_rejects_bad_divisor() {
    assert_eq!(
        div_rem_range(&iv(0, 10), &iv(0, 5)),
        Err(RangeError::NonPositiveDivisor { lo: BigInt::from(0) })
    );
    assert_eq!(
        div_rem_range(&iv(0, 10), &iv(-3, 5)),
        Err(RangeError::NonPositiveDivisor { lo: BigInt::from(-3) })
    );
}

#[test]
fn test_div_rem_rejects_negative_dividend() {
    assert_eq!(
        div_rem_range(&iv(-1, 10), &iv(1, 5)),
        Err(RangeError::NegativeDividend { lo: BigInt::from(-1) })
    );
    // divisor is checked first
    assert!(matches!(div_rem_range(&iv(-1, 10), &iv(0, 5)), Err(RangeError::NonPositiveDivisor { .. })));
}

#[test]
fn test_huge_bounds() {
    let big = BigInt::one() << 200u32;
    let a = Interval::new(-big.clone(), big.clone()).unwrap();
    let product = mul_range(&a, &a);
    assert_eq!(product.lo(), &-(&big * &big));
    assert_eq!(product.hi(), &(&big * &big));

    let (q, r) = div_rem_range(&Interval::new(0, big.clone()).unwrap(), &Interval::new(1, 2).unwrap()).unwrap();
    assert_eq!(q.hi(), &big);
    assert_eq!(r, iv(0, 1));
}
