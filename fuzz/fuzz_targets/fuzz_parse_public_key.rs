#![no_main]

use libfuzzer_sys::fuzz_target;
use sealbox::PublicKey;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must only ever produce an error, never a panic
    let _ = PublicKey::from_pem_bytes(data);
});
