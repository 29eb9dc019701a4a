use std::fmt;

use num_bigint::BigInt;

use crate::range_ops::RangeError;

/// Inclusive integer range `[lo, hi]`, always non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    lo: BigInt,
    hi: BigInt,
}

impl Interval {
    /// Creates the interval `[lo, hi]`, rejecting `lo > hi`.
    pub fn new(lo: impl Into<BigInt>, hi: impl Into<BigInt>) -> Result<Interval, RangeError> {
        let (lo, hi) = (lo.into(), hi.into());
        if lo > hi {
            return Err(RangeError::EmptyInterval { lo, hi });
        }
        Ok(Interval { lo, hi })
    }

    /// Only for bounds that are ordered by construction.
    pub(crate) fn new_unchecked(lo: BigInt, hi: BigInt) -> Interval {
        debug_assert!(lo <= hi, "interval [{lo}, {hi}] is empty");
        Interval { lo, hi }
    }

    pub fn lo(&self) -> &BigInt {
        &self.lo
    }

    pub fn hi(&self) -> &BigInt {
        &self.hi
    }

    /// `[-hi, -lo]`
    pub fn neg(&self) -> Interval {
        Interval { lo: -&self.hi, hi: -&self.lo }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

#[test]
fn test_new_rejects_empty() {
    assert!(Interval::new(0, 10).is_ok());
    assert!(Interval::new(-3, -3).is_ok());
    assert_eq!(
        Interval::new(5, 4),
        Err(RangeError::EmptyInterval { lo: BigInt::from(5), hi: BigInt::from(4) })
    );
}

#[test]
fn test_neg() {
    let a = Interval::new(-2, 7).unwrap();
    assert_eq!(a.neg(), Interval::new(-7, 2).unwrap());
    assert_eq!(a.neg().neg(), a);
    assert_eq!(Interval::new(0, 0).unwrap().neg(), Interval::new(0, 0).unwrap());
}

#[test]
fn test_display() {
    assert_eq!(Interval::new(-12288, 12288).unwrap().to_string(), "[-12288, 12288]");
}
