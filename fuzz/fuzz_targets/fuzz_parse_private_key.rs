#![no_main]

use libfuzzer_sys::fuzz_target;
use sealbox::PrivateKey;

fuzz_target!(|data: &[u8]| {
    let _ = PrivateKey::from_pem_bytes(data);
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = PrivateKey::from_encrypted_pem(text, b"fuzz");
    }
});
