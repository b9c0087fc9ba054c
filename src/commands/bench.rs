//! Bench command handler
//!
//! Times each strategy through the validating entry point, so the numbers
//! include the input checks every caller pays for.

use std::hint::black_box;
use std::time::Instant;

use anyhow::Result;
use euclid::{compute_gcd_with, Config, Strategy};

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::BenchEvent};

pub fn cmd_bench(
    ui: &UiContext,
    config: &Config,
    m: i64,
    n: i64,
    iterations: Option<u64>,
) -> Result<()> {
    let iterations = iterations.unwrap_or(config.bench.iterations).max(1);

    // Invalid pairs fail here, before any timing.
    compute_gcd_with(m, n, config.strategy)?;
    ui.verbose(format!("{} iterations per strategy", iterations));

    for strategy in Strategy::ALL {
        let event = time_strategy(strategy, m, n, iterations)?;
        if ui.json {
            emit_event(&event)?;
        } else {
            println!(
                "{:<12} {:>10.1} ns/iter ({} iterations)",
                strategy.name(),
                event.ns_per_iter,
                iterations
            );
        }
    }
    Ok(())
}

fn time_strategy(strategy: Strategy, m: i64, n: i64, iterations: u64) -> Result<BenchEvent> {
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(compute_gcd_with(black_box(m), black_box(n), strategy)?);
    }
    let total_ns = start.elapsed().as_nanos();

    Ok(BenchEvent {
        event: "bench",
        strategy,
        m,
        n,
        iterations,
        total_ns,
        ns_per_iter: total_ns as f64 / iterations as f64,
    })
}
