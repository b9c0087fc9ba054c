//! Configuration module for Euclid
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (EUCLID_*)
//! 3. Project config (./euclid.toml)
//! 4. User config (~/.config/euclid/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_layered, load_layered_from, user_config_path, with_env_overrides_from,
    PROJECT_CONFIG_FILE,
};
pub use types::{BenchConfig, Config, ConfigWarning, OutputConfig, Verbosity, VerifyConfig};
