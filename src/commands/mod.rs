//! Subcommand handlers for the `euclid` binary.

pub mod bench;
pub mod compare;
pub mod compute;
pub mod verify;
