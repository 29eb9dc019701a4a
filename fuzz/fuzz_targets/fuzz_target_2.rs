#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;
use bounded_int_calc::{felt::Modulus, interval::Interval, ops::Op, render::generate};

fn ordered(x: BigInt, y: BigInt) -> Interval {
    let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
    Interval::new(lo, hi).unwrap()
}

// arbitrary sized bounds: generate either fails cleanly or renders every result bound
fuzz_target!(|data: (u8, Vec<u8>, Vec<u8>, Vec<u8>, Vec<u8>)| {
    let (op, a0, a1, b0, b1) = data;
    let op = Op::ALL[op as usize % Op::ALL.len()];
    let [a0, a1, b0, b1] = [a0, a1, b0, b1].map(|bytes| BigInt::from_signed_bytes_le(&bytes));
    let (a, b) = (ordered(a0, a1), ordered(b0, b1));

    if let Ok(generated) = generate(op, &a, &b, Some("FuzzImpl"), &Modulus::felt252()) {
        for (_, bound) in generated.bounds.labelled() {
            assert!(generated.text.contains(&bound.to_string()));
        }
    }
});
