//! Range checks against the field modulus the generated Cairo code lives in.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{One, Signed};

/// `0x800000000000011000000000000000000000000000000000000000000000001`
pub fn felt252_prime() -> BigInt {
    (BigInt::one() << 251u32) + (BigInt::from(17u32) << 192u32) + 1u32
}

/// A modulus bounding the representable values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modulus {
    name: String,
    value: BigInt,
}

impl Modulus {
    pub fn felt252() -> Modulus {
        Modulus { name: "felt252".to_string(), value: felt252_prime() }
    }

    /// Returns `None` unless `value` is positive.
    pub fn custom(name: impl Into<String>, value: BigInt) -> Option<Modulus> {
        if !value.is_positive() {
            return None;
        }
        Some(Modulus { name: name.into(), value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Negative values are stored as `P - |value|`, so both signs are limited by `|value| < P`.
    pub fn contains(&self, value: &BigInt) -> bool {
        value.abs() < self.value
    }

    /// Checks a computed bound, returning a warning if it does not fit.
    pub fn validate(&self, value: &BigInt, label: &str) -> Option<BoundWarning> {
        if self.contains(value) {
            return None;
        }
        Some(BoundWarning {
            label: label.to_string(),
            value: value.clone(),
            modulus_name: self.name.clone(),
        })
    }
}

impl Default for Modulus {
    fn default() -> Self {
        Modulus::felt252()
    }
}

/// Advisory warning: a bound lies outside the modulus range. Never fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundWarning {
    pub label: String,
    pub value: BigInt,
    pub modulus_name: String,
}

impl fmt::Display for BoundWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WARNING: {} = {} exceeds {} range!", self.label, self.value, self.modulus_name)
    }
}

#[test]
fn test_felt252_prime_value() {
    let expected = BigInt::parse_bytes(b"800000000000011000000000000000000000000000000000000000000000001", 16).unwrap();
    assert_eq!(felt252_prime(), expected);
    assert_eq!(Modulus::default().value(), &expected);
}

#[test]
fn test_validate_edges() {
    let m = Modulus::felt252();
    let p = felt252_prime();
    assert!(m.validate(&BigInt::from(0), "x").is_none());
    assert!(m.validate(&(&p - 1u32), "x").is_none());
    assert!(m.validate(&-(&p - 1u32), "x").is_none());
    assert!(m.validate(&p, "x").is_some());
    assert!(m.validate(&-p.clone(), "x").is_some());
    assert!(m.validate(&(BigInt::one() << 252u32), "x").is_some());
}

#[test]
fn test_warning_message() {
    let m = Modulus::felt252();
    let value = BigInt::one() << 252u32;
    let warning = m.validate(&value, "Result max").unwrap();
    assert_eq!(warning.to_string(), format!("WARNING: Result max = {value} exceeds felt252 range!"));
}

#[test]
fn test_custom_modulus() {
    assert!(Modulus::custom("m", BigInt::from(0)).is_none());
    let m = Modulus::custom("u8", BigInt::from(256)).unwrap();
    assert!(m.validate(&BigInt::from(255), "x").is_none());
    assert!(m.validate(&BigInt::from(-256), "x").is_some());
    assert_eq!(m.validate(&BigInt::from(300), "Result max").unwrap().to_string(),
        "WARNING: Result max = 300 exceeds u8 range!");
}
