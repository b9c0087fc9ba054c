use std::io::Write;

use euclid::{Config, ConfigWarning, Verbosity};

use crate::ui::json::{emit_event, events::WarningEvent};

/// Output settings resolved from CLI flags and config.
///
/// Results go to stdout; diagnostics go to stderr and are gated by
/// verbosity. In JSON mode diagnostics are dropped except config warnings,
/// which become `warning` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbosity: Verbosity,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, config: &Config) -> Self {
        Self {
            json,
            verbosity: config.output.verbosity.raised_by(verbose),
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    /// Print a note shown at `-v` and above.
    pub fn verbose(&self, message: impl AsRef<str>) {
        self.diagnostic(Verbosity::Verbose, message.as_ref());
    }

    /// Print a note shown at `-vv` and above.
    pub fn debug(&self, message: impl AsRef<str>) {
        self.diagnostic(Verbosity::Debug, message.as_ref());
    }

    pub fn config_warnings(&self, warnings: &[ConfigWarning]) -> std::io::Result<()> {
        for warning in warnings {
            if self.json {
                emit_event(&WarningEvent::new(warning))?;
            } else if !self.is_quiet() {
                eprintln!("{}", format_warning(warning));
            }
        }
        Ok(())
    }

    fn diagnostic(&self, level: Verbosity, message: &str) {
        if self.json || self.verbosity < level {
            return;
        }
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "[{}] {}", label(level), message);
    }
}

fn label(level: Verbosity) -> &'static str {
    match level {
        Verbosity::Debug => "DEBUG",
        _ => "INFO",
    }
}

pub fn format_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => format!(
            "[WARN] unknown config key '{}' in {} (did you mean '{}'?)",
            warning.key, location, suggestion
        ),
        None => format!("[WARN] unknown config key '{}' in {}", warning.key, location),
    }
}
