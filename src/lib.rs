//! Euclid - greatest common divisor of two positive integers
//!
//! The library validates an input pair, orders it so the larger member comes
//! first, and hands it to a reduction [`Strategy`]. `single-exit` (Knuth's
//! Algorithm F with one loop condition) is the canonical reducer; the others
//! exist for comparison and are checked against it by [`verify_equivalence`].

pub mod config;
pub mod error;
pub mod gcd;
pub mod strategy;
pub mod verify;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, Verbosity};
pub use error::{EuclidError, EuclidResult};
pub use gcd::{compute_gcd, compute_gcd_with, gcd_with};
pub use strategy::{Reducer, Strategy};
pub use verify::{verify_equivalence, Mismatch, VerifyReport};
