//! Property tests for Euclid.
//!
//! Properties use randomized input generation to check the divisor laws and
//! that every reduction strategy returns the same answer.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/gcd.rs"]
mod gcd;

#[path = "properties/strategies.rs"]
mod strategies;
