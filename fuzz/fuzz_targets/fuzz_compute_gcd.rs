#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (i64, i64)| {
    let (m, n) = data;
    // Every strategy must agree and never panic, whatever the sign of the input
    let expected = euclid::compute_gcd(m, n).ok();
    for strategy in euclid::Strategy::ALL {
        assert_eq!(euclid::compute_gcd_with(m, n, strategy).ok(), expected);
    }
    if let Some(g) = expected {
        assert!(m % g == 0 && n % g == 0);
    }
});
