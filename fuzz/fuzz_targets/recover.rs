#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use modp_sss::{recover, Share, Shares};

#[derive(Debug, Arbitrary)]
struct Parameters {
    pub shares: Vec<(u8, Share)>,
}

fuzz_target!(|params: Parameters| {
    let shares: Shares = params
        .shares
        .into_iter()
        .map(|(x, s)| (u32::from(x), s))
        .collect();
    let _secret = recover(&shares);
});
