#![no_main]

use libfuzzer_sys::fuzz_target;
use sealbox::Digest;

fuzz_target!(|data: &str| {
    if let Ok(digest) = data.parse::<Digest>() {
        assert_eq!(digest.to_hex(), data.trim().to_lowercase());
    }
});
