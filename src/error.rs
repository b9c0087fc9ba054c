//! Error types for Euclid
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Euclid operations
pub type EuclidResult<T> = Result<T, EuclidError>;

/// Main error type for Euclid operations
#[derive(Error, Debug)]
pub enum EuclidError {
    /// One or both inputs are zero or negative
    #[error("gcd: integers are not positive (m = {m}, n = {n})")]
    InvalidInput { m: i64, n: i64 },

    /// Exhaustive verification needs at least the pair `(1, 1)`
    #[error("verify limit must be at least 1 (got {limit})")]
    InvalidLimit { limit: i64 },

    /// Strategy name did not match any known reducer
    #[error("unknown strategy '{name}' (expected one of: classic, recursive, alternating, single-exit)")]
    UnknownStrategy { name: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EuclidError {
    /// Stable machine-readable code used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            EuclidError::InvalidInput { .. } => "invalid_input",
            EuclidError::InvalidLimit { .. } => "invalid_limit",
            EuclidError::UnknownStrategy { .. } => "unknown_strategy",
            EuclidError::InvalidConfig { .. } => "invalid_config",
            EuclidError::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_input() {
        let err = EuclidError::InvalidInput { m: -1, n: 2 };
        assert_eq!(
            err.to_string(),
            "gcd: integers are not positive (m = -1, n = 2)"
        );
    }

    #[test]
    fn test_error_display_invalid_limit() {
        let err = EuclidError::InvalidLimit { limit: 0 };
        assert_eq!(err.to_string(), "verify limit must be at least 1 (got 0)");
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = EuclidError::InvalidConfig {
            file: PathBuf::from("euclid.toml"),
            message: "expected `=`".to_string(),
        };
        assert_eq!(err.to_string(), "invalid config in euclid.toml: expected `=`");
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(EuclidError::InvalidInput { m: 0, n: 0 }.code(), "invalid_input");
        assert_eq!(EuclidError::InvalidLimit { limit: -3 }.code(), "invalid_limit");
        assert_eq!(
            EuclidError::UnknownStrategy {
                name: "binary".to_string()
            }
            .code(),
            "unknown_strategy"
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(EuclidError::from(io).code(), "io");
    }
}
