//! Greatest common divisor of two positive integers.
//!
//! All entry points validate and normalize the pair the same way before
//! handing it to a [`Reducer`]:
//!
//! - E0. [Ensure m >= n.] If m < n, exchange m <-> n.
//!
//! Inputs that are zero or negative are rejected with
//! [`EuclidError::InvalidInput`].

use crate::error::{EuclidError, EuclidResult};
use crate::strategy::{Reducer, Strategy};

/// Compute the GCD of `m` and `n` with the default strategy.
///
/// ```
/// assert_eq!(euclid::compute_gcd(2166, 6099).unwrap(), 57);
/// assert!(euclid::compute_gcd(0, 2).is_err());
/// ```
pub fn compute_gcd(m: i64, n: i64) -> EuclidResult<i64> {
    compute_gcd_with(m, n, Strategy::default())
}

/// Compute the GCD of `m` and `n` with the given strategy.
pub fn compute_gcd_with(m: i64, n: i64, strategy: Strategy) -> EuclidResult<i64> {
    gcd_with(m, n, strategy.reducer())
}

/// Validate, normalize, and reduce with an arbitrary reducer.
pub fn gcd_with(m: i64, n: i64, reducer: Reducer) -> EuclidResult<i64> {
    if m <= 0 || n <= 0 {
        return Err(EuclidError::InvalidInput { m, n });
    }

    let (m, n) = if m < n { (n, m) } else { (m, n) };
    Ok(reducer(m, n))
}
