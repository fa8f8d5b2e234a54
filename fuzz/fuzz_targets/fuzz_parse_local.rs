#![no_main]

use libfuzzer_sys::fuzz_target;
use paseto_v4::PasetoV4Local;

const KEY: [u8; 32] = [0x70; 32];

fuzz_target!(|data: &str| {
    // Parsing and decrypting arbitrary input should never panic
    let _ = PasetoV4Local::decompose(data);
    let _ = PasetoV4Local::get_footer(data);
    let _ = PasetoV4Local::from(KEY).decrypt(data, b"");
});
