#![no_main]

use libfuzzer_sys::fuzz_target;
use sealbox::{EncryptedPayload, Envelope};

fuzz_target!(|data: &[u8]| {
    let _ = EncryptedPayload::try_from(data);

    if let Ok(envelope) = Envelope::try_from(data) {
        // Parsing must be lossless
        assert_eq!(envelope.to_bytes(), data);
    }
});
