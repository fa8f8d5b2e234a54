#![no_main]

use libfuzzer_sys::fuzz_target;
use paseto_v4::PaserkK4Seal;

fuzz_target!(|data: &str| {
    // Parsing arbitrary input should never panic
    let _ = PaserkK4Seal::decompose(data);
    if let Ok(recipient) = PaserkK4Seal::generate() {
        let _ = recipient.unwrap(data);
    }
});
