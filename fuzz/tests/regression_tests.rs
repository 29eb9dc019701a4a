use bounded_int_calc::ops::Op::*;
use bounded_int_calc_fuzz::verify;

#[test]
fn regression_mul_all_negative() {
    verify(Mul, -7..=-3, -2..=-1);
    verify(Mul, -7..=-3, 2..=5);
}

#[test]
fn regression_mul_straddling_zero() {
    verify(Mul, -7..=3, -2..=5);
    verify(Mul, 0..=0, -100..=-70);
}

#[test]
fn regression_mul_i32_extremes() {
    verify(Mul, i32::MIN as i64..=i32::MIN as i64 + 3, i32::MIN as i64..=i32::MIN as i64 + 1);
    verify(Mul, i32::MAX as i64..=i32::MAX as i64 + 32, i32::MIN as i64..=i32::MIN as i64 + 32);
}

#[test]
fn regression_sub_is_add_of_negation() {
    verify(Sub, -3..=9, -10..=-4);
    verify(Add, -3..=9, 4..=10);
}

#[test]
fn regression_div_rem() {
    verify(DivRem, 128..=155, 3..=8);
    verify(DivRem, 0..=0, 1..=1);
    verify(DivRem, 5..=7, 8..=20);
}

#[test]
fn regression_div_rem_rejected() {
    verify(DivRem, 0..=10, 0..=3);
    verify(DivRem, -1..=10, 1..=3);
    verify(DivRem, -5..=-1, -3..=-1);
}
