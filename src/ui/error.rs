use euclid::EuclidError;

use crate::ui::json::{emit_event, events::ErrorEvent};

/// Stable error code for JSON output.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<EuclidError>() {
        Some(euclid) => euclid.code(),
        None => "internal",
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<EuclidError>() {
        Some(EuclidError::InvalidInput { .. }) => {
            format!("[ERROR] {}\n  both integers must be greater than zero\n", err)
        }
        Some(EuclidError::InvalidConfig { .. }) => {
            format!("[ERROR] {}\n  fix the config file or pass --config\n", err)
        }
        _ => format!("[ERROR] {:#}\n", err),
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = emit_event(&ErrorEvent::new(error_code(err), err.to_string()));
        return;
    }

    eprint!("{}", format_error(err));
}
