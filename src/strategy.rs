//! Reduction strategies for Euclid's algorithm.
//!
//! Every strategy is a plain [`Reducer`] function operating on a pair that
//! has already been validated and normalized (`m >= n > 0`). Callers pick one
//! by value through [`Strategy`] instead of calling separate entry points.
//!
//! | Strategy      | Source                                         |
//! |---------------|------------------------------------------------|
//! | `classic`     | Knuth, Algorithm E                             |
//! | `recursive`   | Algorithm E, written as tail recursion         |
//! | `alternating` | Knuth, Algorithm F (TAOCP 1, Exercise 1.1.3)   |
//! | `single-exit` | Algorithm F with a single loop exit (default)  |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EuclidError;

/// A reduction loop over a normalized pair.
///
/// Precondition: `m >= n > 0`. The result is the greatest common divisor.
pub type Reducer = fn(i64, i64) -> i64;

/// Selects which reduction loop computes the divisor.
///
/// Config files, `EUCLID_STRATEGY` and `--strategy` all parse through
/// [`FromStr`], so every surface accepts the same names and aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Strategy {
    /// Divide, take the remainder, shift the pair down
    Classic,
    /// Algorithm E as a recursive call
    Recursive,
    /// Reduce `m` and `n` in turn, skipping the pair shift
    Alternating,
    /// Alternating reduction with one loop condition
    #[default]
    SingleExit,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Classic,
        Strategy::Recursive,
        Strategy::Alternating,
        Strategy::SingleExit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Classic => "classic",
            Strategy::Recursive => "recursive",
            Strategy::Alternating => "alternating",
            Strategy::SingleExit => "single-exit",
        }
    }

    pub fn reducer(self) -> Reducer {
        match self {
            Strategy::Classic => reduce_classic,
            Strategy::Recursive => reduce_recursive,
            Strategy::Alternating => reduce_alternating,
            Strategy::SingleExit => reduce_single_exit,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Strategy {
    type Error = EuclidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Strategy {
    type Err = EuclidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "e" => Ok(Strategy::Classic),
            "recursive" | "recursion" => Ok(Strategy::Recursive),
            "alternating" | "f" => Ok(Strategy::Alternating),
            "single-exit" | "single_exit" | "singleexit" | "fs" => Ok(Strategy::SingleExit),
            _ => Err(EuclidError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

/// E1-E3: `r = m mod n`, stop on zero, otherwise shift `(m, n) <- (n, r)`.
///
/// The labelled-jump form of Algorithm E is the same loop.
pub fn reduce_classic(mut m: i64, mut n: i64) -> i64 {
    let mut r = m % n;
    while r != 0 {
        m = n;
        n = r;
        r = m % n;
    }
    n
}

/// Algorithm E with the shift expressed as a tail call on `(n, r)`.
pub fn reduce_recursive(m: i64, n: i64) -> i64 {
    match m % n {
        0 => n,
        r => reduce_recursive(n, r),
    }
}

/// F1-F4: reduce each member by the other in turn, no shifting.
pub fn reduce_alternating(mut m: i64, mut n: i64) -> i64 {
    loop {
        m %= n;
        if m == 0 {
            return n;
        }
        n %= m;
        if n == 0 {
            return m;
        }
    }
}

/// Algorithm F with one exit condition: run until either member reaches zero,
/// then the other member is the answer.
pub fn reduce_single_exit(mut m: i64, mut n: i64) -> i64 {
    while m != 0 && n != 0 {
        m %= n;
        if m != 0 {
            n %= m;
        }
    }
    if m != 0 {
        m
    } else {
        n
    }
}
