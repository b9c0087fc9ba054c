//! Terminal and JSON output for the `euclid` binary.

pub mod context;
pub mod error;
pub mod json;
