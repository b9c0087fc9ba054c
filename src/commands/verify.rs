//! Verify command handler

use anyhow::Result;
use euclid::{verify_equivalence, Config};

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::VerifyEvent};

pub fn cmd_verify(ui: &UiContext, config: &Config, limit: Option<i64>) -> Result<()> {
    let limit = limit.unwrap_or(config.verify.default_limit);
    if limit > config.verify.max_limit {
        anyhow::bail!(
            "verify limit {} exceeds configured maximum {} (raise verify.max_limit)",
            limit,
            config.verify.max_limit
        );
    }

    ui.verbose(format!("checking {} pairs", limit.saturating_mul(limit)));
    let report = verify_equivalence(limit)?;

    if ui.json {
        emit_event(&VerifyEvent::new(&report))?;
    } else {
        for mismatch in &report.mismatches {
            println!(
                "mismatch: gcd({}, {}) classic={} {}={}",
                mismatch.m, mismatch.n, mismatch.expected, mismatch.strategy, mismatch.actual
            );
        }
        if !ui.is_quiet() || !report.is_clean() {
            println!(
                "checked {} pairs up to {}: {} mismatches",
                report.pairs_checked,
                report.limit,
                report.mismatches.len()
            );
        }
    }

    if !report.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}
