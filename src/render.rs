use std::fmt;

use num_bigint::BigInt;

use crate::{
    felt::{BoundWarning, Modulus},
    interval::Interval,
    ops::Op,
    range_ops::{self, Bounds, RangeError},
};

/// A `BoundedInt` helper trait impl, ready to be printed as Cairo source.
///
/// The impl name is embedded verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub op: Op,
    pub name: &'a str,
    pub lhs: &'a Interval,
    pub rhs: &'a Interval,
    pub bounds: &'a Bounds,
}

struct BoundedInt<'a>(&'a BigInt, &'a BigInt);

impl fmt::Display for BoundedInt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundedInt<{}, {}>", self.0, self.1)
    }
}

fn bounded(i: &Interval) -> BoundedInt<'_> {
    BoundedInt(i.lo(), i.hi())
}

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "impl {} of {}<{}, {}> {{",
            self.name,
            self.op.helper_trait(),
            bounded(self.lhs),
            bounded(self.rhs)
        )?;
        match self.bounds {
            Bounds::Single(r) => writeln!(f, "    type Result = {};", bounded(r))?,
            Bounds::DivRem { quotient, remainder } => {
                writeln!(f, "    type DivT = {};", bounded(quotient))?;
                writeln!(f, "    type RemT = {};", bounded(remainder))?;
            }
        }
        write!(f, "}}")
    }
}

pub fn render(op: Op, lhs: &Interval, rhs: &Interval, bounds: &Bounds, name: &str) -> String {
    Declaration { op, name, lhs, rhs, bounds }.to_string()
}

/// Output of [`generate`]: the impl text and any out-of-range warnings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    pub bounds: Bounds,
    pub text: String,
    pub warnings: Vec<BoundWarning>,
}

/// Computes the result bounds, checks them against `modulus` and renders the impl.
///
/// Warnings do not stop rendering. Invalid division inputs do.
pub fn generate(op: Op, lhs: &Interval, rhs: &Interval, name: Option<&str>, modulus: &Modulus) -> Result<Generated, RangeError> {
    let bounds = range_ops::eval(op, lhs, rhs)?;
    let warnings = bounds
        .labelled()
        .into_iter()
        .filter_map(|(label, value)| modulus.validate(value, label))
        .collect();
    let text = render(op, lhs, rhs, &bounds, name.unwrap_or(op.default_impl_name()));
    Ok(Generated { bounds, text, warnings })
}

#[cfg(test)]
fn iv(lo: i64, hi: i64) -> Interval {
    Interval::new(lo, hi).unwrap()
}

#[cfg(test)]
fn generate_for(op: Op, a: (i64, i64), b: (i64, i64), name: Option<&str>) -> Result<Generated, RangeError> {
    generate(op, &iv(a.0, a.1), &iv(b.0, b.1), name, &Modulus::felt252())
}

#[test]
fn test_render_add() {
    let g = generate_for(Op::Add, (0, 12288), (0, 12288), None).unwrap();
    assert_eq!(g.text, "\
impl AddImpl of AddHelper<BoundedInt<0, 12288>, BoundedInt<0, 12288>> {
    type Result = BoundedInt<0, 24576>;
}");
    assert!(g.warnings.is_empty());
}

#[test]
fn test_render_sub_negative_bounds() {
    let g = generate_for(Op::Sub, (0, 12288), (0, 12288), None).unwrap();
    assert_eq!(g.text, "\
impl SubImpl of SubHelper<BoundedInt<0, 12288>, BoundedInt<0, 12288>> {
    type Result = BoundedInt<-12288, 12288>;
}");
}

#[test]
fn test_render_mul_custom_name() {
    let g = generate_for(Op::Mul, (0, 12288), (0, 12288), Some("Zq12289MulHelper")).unwrap();
    assert_eq!(g.text, "\
impl Zq12289MulHelper of MulHelper<BoundedInt<0, 12288>, BoundedInt<0, 12288>> {
    type Result = BoundedInt<0, 150994944>;
}");
}

#[test]
fn test_render_div_rem() {
    let g = generate_for(Op::DivRem, (128, 255), (3, 8), None).unwrap();
    assert_eq!(g.text, "\
impl DivRemImpl of DivRemHelper<BoundedInt<128, 255>, BoundedInt<3, 8>> {
    type DivT = BoundedInt<16, 85>;
    type RemT = BoundedInt<0, 7>;
}");
    assert_eq!(g.bounds, Bounds::DivRem { quotient: iv(16, 85), remainder: iv(0, 7) });
}

#[test]
fn test_generate_div_errors() {
    assert!(matches!(generate_for(Op::DivRem, (0, 10), (0, 8), None), Err(RangeError::NonPositiveDivisor { .. })));
    assert!(matches!(generate_for(Op::DivRem, (-1, 10), (1, 8), None), Err(RangeError::NegativeDividend { .. })));
}

#[test]
fn test_generate_warns_but_renders() {
    let big = BigInt::from(1u32) << 251u32;
    let a = Interval::new(0, big.clone()).unwrap();
    let b = Interval::new(0, big.clone()).unwrap();
    let g = generate(Op::Add, &a, &b, None, &Modulus::felt252()).unwrap();

    let hi = BigInt::from(1u32) << 252u32;
    assert_eq!(g.warnings.len(), 1);
    assert_eq!(g.warnings[0].label, "Result max");
    assert_eq!(g.warnings[0].value, hi);
    assert!(g.text.contains(&format!("type Result = BoundedInt<0, {hi}>;")));
}

#[test]
fn test_generate_warns_on_every_bound() {
    let big = BigInt::from(1u32) << 260u32;
    let a = Interval::new(-big.clone(), big.clone()).unwrap();
    let g = generate(Op::Mul, &a, &Interval::new(1, 1).unwrap(), None, &Modulus::felt252()).unwrap();
    let labels: Vec<_> = g.warnings.iter().map(|w| w.label.as_str()).collect();
    assert_eq!(labels, ["Result min", "Result max"]);
}

#[test]
fn test_render_is_deterministic() {
    let (a, b) = (iv(-7, 3), iv(2, 9));
    let bounds = range_ops::eval(Op::Mul, &a, &b).unwrap();
    assert_eq!(render(Op::Mul, &a, &b, &bounds, "M"), render(Op::Mul, &a, &b, &bounds, "M"));
}
