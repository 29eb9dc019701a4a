use assert_cmd::Command;
use predicates::prelude::*;

fn calc(args: &[&str]) -> assert_cmd::assert::Assert {
    Command::cargo_bin("bounded-int-calc")
        .unwrap()
        .env_remove("BOUNDCALC_VERBOSITY")
        .env_remove("BOUNDCALC_MODULUS")
        .args(args)
        .assert()
}

#[test]
fn test_add() {
    calc(&["add", "0", "12288", "0", "12288"])
        .success()
        .stdout("impl AddImpl of AddHelper<BoundedInt<0, 12288>, BoundedInt<0, 12288>> {\n    type Result = BoundedInt<0, 24576>;\n}\n")
        .stderr("");
}

#[test]
fn test_sub_negative_arguments() {
    calc(&["sub", "-5", "5", "-10", "-1"])
        .success()
        .stdout(predicate::str::contains("impl SubImpl of SubHelper<BoundedInt<-5, 5>, BoundedInt<-10, -1>>"))
        .stdout(predicate::str::contains("type Result = BoundedInt<-4, 15>;"));
}

#[test]
fn test_mul_custom_name() {
    calc(&["mul", "0", "12288", "0", "12288", "--name", "Zq12289MulHelper"])
        .success()
        .stdout(predicate::str::starts_with("impl Zq12289MulHelper of MulHelper<"))
        .stdout(predicate::str::contains("type Result = BoundedInt<0, 150994944>;"));
}

#[test]
fn test_div() {
    calc(&["div", "128", "255", "3", "8"])
        .success()
        .stdout("impl DivRemImpl of DivRemHelper<BoundedInt<128, 255>, BoundedInt<3, 8>> {\n    type DivT = BoundedInt<16, 85>;\n    type RemT = BoundedInt<0, 7>;\n}\n");
}

#[test]
fn test_hex_arguments() {
    calc(&["add", "0", "0x3000", "0", "0x3000"])
        .success()
        .stdout(predicate::str::contains("type Result = BoundedInt<0, 24576>;"));
}

#[test]
fn test_negative_hex_arguments() {
    calc(&["sub", "-0x10", "0", "0", "1", "-q"])
        .success()
        .stdout(predicate::str::contains("impl SubImpl of SubHelper<BoundedInt<-16, 0>, BoundedInt<0, 1>>"))
        .stdout(predicate::str::contains("type Result = BoundedInt<-17, 0>;"));
}

#[test]
fn test_div_zero_divisor_is_fatal() {
    calc(&["div", "0", "10", "0", "8"])
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("ERROR: Divisor lower bound must be positive!"));
}

#[test]
fn test_div_negative_dividend_is_fatal() {
    calc(&["div", "-1", "10", "1", "8"])
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("ERROR: Dividend lower bound must be non-negative!"));
}

#[test]
fn test_empty_interval_is_fatal() {
    calc(&["add", "10", "0", "0", "1"])
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("ERROR: Lower bound 10 is greater than upper bound 0"));
}

#[test]
fn test_out_of_range_warns_but_prints() {
    // 2^251 + 2^251 = 2^252
    let half = "0x800000000000000000000000000000000000000000000000000000000000000";
    calc(&["add", "0", half, "0", half])
        .success()
        .stdout(predicate::str::contains("impl AddImpl of AddHelper<"))
        .stderr(predicate::str::contains("WARNING: Result max = "))
        .stderr(predicate::str::contains("exceeds felt252 range!"));
}

#[test]
fn test_quiet_suppresses_warnings() {
    let half = "0x800000000000000000000000000000000000000000000000000000000000000";
    calc(&["add", "0", half, "0", half, "-q"])
        .success()
        .stderr("");
}

#[test]
fn test_custom_modulus() {
    calc(&["mul", "0", "255", "0", "255", "--modulus", "65536"])
        .success()
        .stderr("");
    calc(&["mul", "0", "256", "0", "256", "--modulus", "65536"])
        .success()
        .stderr(predicate::str::contains("WARNING: Result max = 65536 exceeds modulus range!"));
}

#[test]
fn test_verbose_traces_bounds() {
    calc(&["div", "128", "255", "3", "8", "-v"])
        .success()
        .stderr(predicate::str::contains("[128, 255] / [3, 8] => quotient [16, 85], remainder [0, 7]"));
}

#[test]
fn test_rejects_non_integer() {
    calc(&["add", "0", "1.5", "0", "1"])
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Invalid integer"));
}
