//! Common test utilities for Euclid CLI tests.
//!
//! This module provides `TestEnv`: an isolated project and config directory
//! plus helpers to run the `euclid` binary inside it.

#![allow(dead_code)]

pub mod env;

pub use env::*;
