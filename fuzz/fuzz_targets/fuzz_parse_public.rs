#![no_main]

use libfuzzer_sys::fuzz_target;
use paseto_v4::PasetoV4Public;

const PUBLIC_KEY: [u8; 32] = [
    0x1e, 0xb9, 0xdb, 0xbb, 0xbc, 0x04, 0x7c, 0x03, 0xfd, 0x70, 0x60, 0x4e, 0x00, 0x71, 0xf0, 0x98,
    0x7e, 0x16, 0xb2, 0x8b, 0x75, 0x72, 0x25, 0xc1, 0x1f, 0x00, 0x41, 0x5d, 0x0e, 0x20, 0xb1, 0xa2,
];

fuzz_target!(|data: &str| {
    // Parsing and verifying arbitrary input should never panic
    let _ = PasetoV4Public::decompose(data);
    if let Ok(verifier) = PasetoV4Public::new(&PUBLIC_KEY, None) {
        let _ = verifier.verify(data, b"");
    }
});
