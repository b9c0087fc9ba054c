#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Strategy parsing - this should never panic
        let _ = name.parse::<euclid::Strategy>();
    }
});
