//! Exhaustive equivalence check across reduction strategies.
//!
//! The alternating strategies exit from different points of the loop than
//! Algorithm E does (for example when the first remainder is already zero).
//! `verify_equivalence` runs every strategy over the full square
//! `1..=limit x 1..=limit` and reports any pair where a strategy disagrees
//! with `classic`.

use serde::Serialize;

use crate::error::{EuclidError, EuclidResult};
use crate::gcd::compute_gcd_with;
use crate::strategy::Strategy;

/// A pair on which a strategy disagreed with the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub m: i64,
    pub n: i64,
    pub strategy: Strategy,
    pub expected: i64,
    pub actual: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub limit: i64,
    pub pairs_checked: u64,
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare every strategy against `classic` for all pairs up to `limit`.
///
/// A reference result that fails to divide both inputs is reported as a
/// mismatch of `classic` itself.
pub fn verify_equivalence(limit: i64) -> EuclidResult<VerifyReport> {
    if limit < 1 {
        return Err(EuclidError::InvalidLimit { limit });
    }

    let mut pairs_checked = 0u64;
    let mut mismatches = Vec::new();

    for m in 1..=limit {
        for n in 1..=limit {
            let expected = compute_gcd_with(m, n, Strategy::Classic)?;
            if m % expected != 0 || n % expected != 0 {
                mismatches.push(Mismatch {
                    m,
                    n,
                    strategy: Strategy::Classic,
                    expected,
                    actual: expected,
                });
            }

            for strategy in Strategy::ALL {
                if strategy == Strategy::Classic {
                    continue;
                }
                let actual = compute_gcd_with(m, n, strategy)?;
                if actual != expected {
                    mismatches.push(Mismatch {
                        m,
                        n,
                        strategy,
                        expected,
                        actual,
                    });
                }
            }
            pairs_checked += 1;
        }
    }

    Ok(VerifyReport {
        limit,
        pairs_checked,
        mismatches,
    })
}
