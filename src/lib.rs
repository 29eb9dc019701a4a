//! # bounded-int-calc
//! Exact bounds for Cairo `BoundedInt` arithmetic.
//!
//! Cairo's `BoundedInt<MIN, MAX>` type needs a helper trait impl for every
//! arithmetic operation, and each impl has to spell out the exact bounds of
//! the result. This crate computes those bounds with interval arithmetic over
//! arbitrary-precision integers and renders the impl as ready-to-paste Cairo:
//!
//! ```
//! use bounded_int_calc::{felt::Modulus, interval::Interval, ops::Op, render::generate};
//!
//! let a = Interval::new(0, 12288).unwrap();
//! let generated = generate(Op::Mul, &a, &a, None, &Modulus::felt252()).unwrap();
//! assert_eq!(generated.text, "\
//! impl MulImpl of MulHelper<BoundedInt<0, 12288>, BoundedInt<0, 12288>> {
//!     type Result = BoundedInt<0, 150994944>;
//! }");
//! ```
//!
//! Bounds that do not fit into a felt252 produce warnings, but are still rendered.
//! Division requires a non-negative dividend and a positive divisor.
pub mod ops;
pub mod parser;
pub mod interval;
pub mod range_ops;
pub mod felt;
pub mod render;
pub mod config;
pub mod utils;
