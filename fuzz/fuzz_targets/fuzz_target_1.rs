#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use bounded_int_calc_fuzz::{verify, ArbitraryOp, SmallRange};

#[derive(Arbitrary)]
struct FuzzInput {
    op: ArbitraryOp,
    a: SmallRange,
    b: SmallRange,
}

impl std::fmt::Debug for FuzzInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} {} {:?}", self.a.0, self.op.0.symbol(), self.b.0)
    }
}

fuzz_target!(|data: FuzzInput| {
    verify(data.op.0, data.a.0, data.b.0);
});
