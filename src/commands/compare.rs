//! Compare command handler

use anyhow::Result;
use euclid::{compute_gcd_with, Strategy};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompareEvent, StrategyOutcome};

pub fn cmd_compare(ui: &UiContext, m: i64, n: i64) -> Result<()> {
    let results = Strategy::ALL
        .into_iter()
        .map(|strategy| -> Result<StrategyOutcome> {
            let gcd = compute_gcd_with(m, n, strategy)?;
            ui.debug(format!("{} -> {}", strategy, gcd));
            Ok(StrategyOutcome { strategy, gcd })
        })
        .collect::<Result<Vec<_>>>()?;

    let event = CompareEvent::new(m, n, results);

    if ui.json {
        emit_event(&event)?;
    } else {
        for outcome in &event.results {
            println!("{:<12} {}", outcome.strategy.name(), outcome.gcd);
        }
        if !ui.is_quiet() {
            if event.agree {
                println!("all strategies agree");
            } else {
                println!("strategies disagree");
            }
        }
    }

    if !event.agree {
        std::process::exit(1);
    }
    Ok(())
}
