use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::Num;
use thiserror::Error;

use crate::ops::Op;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("Unknown operation: `{0}`. Expected one of add, sub, mul, div.")]
    UnknownOperation(String),
    #[error("Invalid integer: `{0}`.")]
    InvalidInteger(String),
}

impl FromStr for Op {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Op, ParserError> {
        match s {
            "add" => Ok(Op::Add),
            "sub" => Ok(Op::Sub),
            "mul" => Ok(Op::Mul),
            "div" | "divrem" => Ok(Op::DivRem),
            _ => Err(ParserError::UnknownOperation(s.to_string())),
        }
    }
}

/// Parses a signed integer literal of any size: decimal, or hexadecimal with a `0x` prefix.
pub fn parse_int(str: &str) -> Result<BigInt, ParserError> {
    let err = || ParserError::InvalidInteger(str.to_string());
    let s = str.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (radix, digits) = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, digits),
    };
    // from_str_radix would accept a second sign here
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(err());
    }
    let value = BigInt::from_str_radix(digits, radix).map_err(|_| err())?;
    Ok(if negative { -value } else { value })
}

#[test]
fn test_parse_op() {
    for op in Op::ALL {
        assert_eq!(op.name().parse::<Op>(), Ok(op));
    }
    assert_eq!("divrem".parse::<Op>(), Ok(Op::DivRem));
    assert_eq!("pow".parse::<Op>(), Err(ParserError::UnknownOperation("pow".to_string())));
}

#[test]
fn test_parse_int() {
    assert_eq!(parse_int("12288"), Ok(BigInt::from(12288)));
    assert_eq!(parse_int("-12288"), Ok(BigInt::from(-12288)));
    assert_eq!(parse_int("+7"), Ok(BigInt::from(7)));
    assert_eq!(parse_int("0x3001"), Ok(BigInt::from(12289)));
    assert_eq!(parse_int("-0xff"), Ok(BigInt::from(-255)));
    assert_eq!(parse_int("0x800000000000011000000000000000000000000000000000000000000000001"), Ok(crate::felt::felt252_prime()));
    assert_eq!(
        parse_int("3618502788666131213697322783095070105623107215331596699973092056135872020481"),
        Ok(crate::felt::felt252_prime())
    );
}

#[test]
fn test_parse_int_rejects_garbage() {
    for s in ["", "-", "0x", "12a", "--1", "-+1", "0x-1", "1.5", "1e3"] {
        assert_eq!(parse_int(s), Err(ParserError::InvalidInteger(s.to_string())), "{s:?}");
    }
}
