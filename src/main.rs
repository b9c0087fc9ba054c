//! Euclid CLI - greatest common divisor via Euclid's algorithm
//!
//! Usage: euclid <COMMAND>
//!
//! Commands:
//!   compute  Compute the GCD of two positive integers
//!   compare  Run every strategy on one pair
//!   verify   Exhaustively check strategies agree
//!   bench    Time each strategy

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let (config, warnings) =
        euclid::config::load_layered(cli.config.as_deref(), Some(project_root.as_path()))?;
    let ui = UiContext::new(cli.json, cli.verbose, &config);

    ui.config_warnings(&warnings)?;
    ui.debug(format!("config: {:?}", config));

    match cli.command {
        Commands::Compute { m, n, strategy } => {
            commands::compute::cmd_compute(&ui, &config, m, n, strategy)
        }
        Commands::Compare { m, n } => commands::compare::cmd_compare(&ui, m, n),
        Commands::Verify { limit } => commands::verify::cmd_verify(&ui, &config, limit),
        Commands::Bench { m, n, iterations } => {
            commands::bench::cmd_bench(&ui, &config, m, n, iterations)
        }
    }
}
