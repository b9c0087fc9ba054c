//! Shared JSON event types for consistent CLI output.
//!
//! Field order is part of the output format: `event` always comes first.

use serde::Serialize;

use euclid::{ConfigWarning, Mismatch, Strategy};

/// A single computed divisor.
#[derive(Debug, Clone, Serialize)]
pub struct ResultEvent {
    pub event: &'static str,
    pub m: i64,
    pub n: i64,
    pub strategy: Strategy,
    pub gcd: i64,
}

impl ResultEvent {
    pub fn new(m: i64, n: i64, strategy: Strategy, gcd: i64) -> Self {
        Self {
            event: "result",
            m,
            n,
            strategy,
            gcd,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StrategyOutcome {
    pub strategy: Strategy,
    pub gcd: i64,
}

/// Results of every strategy on one pair.
#[derive(Debug, Clone, Serialize)]
pub struct CompareEvent {
    pub event: &'static str,
    pub m: i64,
    pub n: i64,
    pub agree: bool,
    pub results: Vec<StrategyOutcome>,
}

impl CompareEvent {
    pub fn new(m: i64, n: i64, results: Vec<StrategyOutcome>) -> Self {
        let agree = results.windows(2).all(|w| w[0].gcd == w[1].gcd);
        Self {
            event: "compare",
            m,
            n,
            agree,
            results,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyEvent<'a> {
    pub event: &'static str,
    pub limit: i64,
    pub pairs_checked: u64,
    pub clean: bool,
    pub mismatches: &'a [Mismatch],
}

impl<'a> VerifyEvent<'a> {
    pub fn new(report: &'a euclid::VerifyReport) -> Self {
        Self {
            event: "verify",
            limit: report.limit,
            pairs_checked: report.pairs_checked,
            clean: report.is_clean(),
            mismatches: &report.mismatches,
        }
    }
}

/// Timing for one strategy.
#[derive(Debug, Clone, Serialize)]
pub struct BenchEvent {
    pub event: &'static str,
    pub strategy: Strategy,
    pub m: i64,
    pub n: i64,
    pub iterations: u64,
    pub total_ns: u128,
    pub ns_per_iter: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub key: &'a str,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'a str>,
}

impl<'a> WarningEvent<'a> {
    pub fn new(warning: &'a ConfigWarning) -> Self {
        Self {
            event: "warning",
            key: &warning.key,
            file: warning.file.display().to_string(),
            line: warning.line,
            suggestion: warning.suggestion.as_deref(),
        }
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            code,
            message: message.into(),
        }
    }
}
