#![no_main]
use libfuzzer_sys::fuzz_target;

use modp_sss::Share;

fuzz_target!(|share: Share| {
    let _data: Vec<u8> = (&share).into();
});
