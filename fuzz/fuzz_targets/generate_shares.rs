#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use modp_sss::share;

#[derive(Debug, Arbitrary)]
struct Parameters {
    pub needed: u8,
    pub total: u8,
    pub secret: Vec<u8>,
}

fuzz_target!(|params: Parameters| {
    let _shares = share(&params.secret, params.needed.into(), params.total.into());
});
