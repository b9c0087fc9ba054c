//! Property tests for `compute_gcd`.

use proptest::prelude::*;

use euclid::{compute_gcd, EuclidError};

fn brute_force_gcd(m: i64, n: i64) -> i64 {
    (1..=m.min(n))
        .rev()
        .find(|d| m % d == 0 && n % d == 0)
        .unwrap_or(1)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The result divides both inputs.
    #[test]
    fn property_result_divides_both(m in 1i64..=i64::MAX, n in 1i64..=i64::MAX) {
        let g = compute_gcd(m, n).unwrap();
        prop_assert!(g > 0);
        prop_assert_eq!(m % g, 0);
        prop_assert_eq!(n % g, 0);
    }

    /// PROPERTY: No larger common divisor exists (brute force on small values).
    #[test]
    fn property_result_is_greatest(m in 1i64..=2000, n in 1i64..=2000) {
        prop_assert_eq!(compute_gcd(m, n).unwrap(), brute_force_gcd(m, n));
    }

    /// PROPERTY: Argument order does not matter.
    #[test]
    fn property_commutative(m in 1i64..=i64::MAX, n in 1i64..=i64::MAX) {
        prop_assert_eq!(compute_gcd(m, n).unwrap(), compute_gcd(n, m).unwrap());
    }

    /// PROPERTY: gcd(m, m) == m and gcd(1, n) == 1.
    #[test]
    fn property_identities(m in 1i64..=i64::MAX) {
        prop_assert_eq!(compute_gcd(m, m).unwrap(), m);
        prop_assert_eq!(compute_gcd(1, m).unwrap(), 1);
    }

    /// PROPERTY: Scaling both inputs scales the divisor.
    #[test]
    fn property_scales_with_common_factor(
        m in 1i64..=1_000_000,
        n in 1i64..=1_000_000,
        k in 1i64..=1_000,
    ) {
        prop_assert_eq!(compute_gcd(m * k, n * k).unwrap(), k * compute_gcd(m, n).unwrap());
    }

    /// PROPERTY: Any non-positive member is rejected, never panics.
    #[test]
    fn property_non_positive_rejected(m in i64::MIN..=0, n in any::<i64>()) {
        let is_invalid_input = |r: Result<i64, EuclidError>| {
            matches!(r, Err(EuclidError::InvalidInput { .. }))
        };
        prop_assert!(is_invalid_input(compute_gcd(m, n)));
        prop_assert!(is_invalid_input(compute_gcd(n, m)));
    }

    /// PROPERTY: `compute_gcd` never panics on arbitrary input.
    #[test]
    fn property_never_panics(m in any::<i64>(), n in any::<i64>()) {
        let _ = compute_gcd(m, n);
    }
}
