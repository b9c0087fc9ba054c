//! CLI argument parsing
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use euclid::Strategy;

/// Euclid - greatest common divisor via Euclid's algorithm
#[derive(Parser, Debug)]
#[command(name = "euclid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ./euclid.toml and the user config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the greatest common divisor of M and N
    #[command(allow_negative_numbers = true)]
    Compute {
        m: i64,
        n: i64,

        /// Reduction strategy: classic, recursive, alternating, single-exit
        /// (defaults to the configured one)
        #[arg(short, long, value_parser = Strategy::from_str)]
        strategy: Option<Strategy>,
    },

    /// Run every strategy on M and N and check they agree
    #[command(allow_negative_numbers = true)]
    Compare { m: i64, n: i64 },

    /// Check all strategies agree on every pair up to LIMIT
    Verify {
        /// Upper bound for both members of the pair
        #[arg(short, long)]
        limit: Option<i64>,
    },

    /// Time each strategy on a single pair
    Bench {
        #[arg(default_value_t = 2166)]
        m: i64,

        #[arg(default_value_t = 6099)]
        n: i64,

        /// Calls per strategy (defaults to the configured count)
        #[arg(short, long)]
        iterations: Option<u64>,
    },
}
