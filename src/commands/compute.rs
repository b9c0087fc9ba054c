//! Compute command handler

use anyhow::Result;
use euclid::{compute_gcd_with, Config, Strategy};

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::ResultEvent};

pub fn cmd_compute(
    ui: &UiContext,
    config: &Config,
    m: i64,
    n: i64,
    strategy: Option<Strategy>,
) -> Result<()> {
    let strategy = strategy.unwrap_or(config.strategy);
    ui.verbose(format!("strategy: {}", strategy));

    let gcd = compute_gcd_with(m, n, strategy)?;

    if ui.json {
        emit_event(&ResultEvent::new(m, n, strategy, gcd))?;
    } else {
        println!("{}", gcd);
    }
    Ok(())
}
