//! Property tests for the interchangeable reduction strategies.

use proptest::prelude::*;

use euclid::Strategy as GcdStrategy;
use euclid::{compute_gcd, compute_gcd_with, verify_equivalence};

fn any_strategy() -> impl Strategy<Value = GcdStrategy> {
    proptest::sample::select(GcdStrategy::ALL.to_vec())
}

#[test]
fn strategies_agree_exhaustively_on_small_inputs() {
    let report = verify_equivalence(300).unwrap();
    assert_eq!(report.pairs_checked, 300 * 300);
    assert!(report.is_clean(), "mismatches: {:?}", report.mismatches);
}

#[test]
fn all_strategies_find_knuth_example() {
    for strategy in GcdStrategy::ALL {
        assert_eq!(compute_gcd_with(2166, 6099, strategy).unwrap(), 57);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every strategy matches the default on arbitrary positive input.
    #[test]
    fn property_strategy_matches_default(
        strategy in any_strategy(),
        m in 1i64..=i64::MAX,
        n in 1i64..=i64::MAX,
    ) {
        prop_assert_eq!(compute_gcd_with(m, n, strategy).unwrap(), compute_gcd(m, n).unwrap());
    }

    /// PROPERTY: Consecutive Fibonacci numbers (worst case for Euclid) are coprime.
    #[test]
    fn property_fibonacci_pairs_coprime(strategy in any_strategy(), k in 2usize..=90) {
        let (mut a, mut b) = (1i64, 1i64);
        for _ in 0..k {
            let next = a + b;
            a = b;
            b = next;
        }
        prop_assert_eq!(compute_gcd_with(b, a, strategy).unwrap(), 1);
    }
}
