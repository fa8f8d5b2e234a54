#![no_main]

use libfuzzer_sys::fuzz_target;
use paseto_v4::core::operations::xchacha;

fuzz_target!(|data: &[u8]| {
    // Any buffer must round-trip and any counter must either work or report overflow
    if data.len() < 8 {
        return;
    }
    let (counter, msg) = data.split_at(8);
    let counter = u64::from_le_bytes([
        counter[0], counter[1], counter[2], counter[3], counter[4], counter[5], counter[6],
        counter[7],
    ]);
    let key = [0x42u8; 32];
    let nonce = [0x24u8; 24];
    if let Ok(ct) = xchacha::stream_xor_ic(msg, &nonce, &key, counter) {
        let pt = xchacha::stream_xor_ic(&ct, &nonce, &key, counter);
        assert_eq!(pt.ok().as_deref(), Some(msg));
    }
});
