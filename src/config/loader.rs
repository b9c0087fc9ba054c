//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EuclidError, EuclidResult};

use super::types::{Config, ConfigWarning, Verbosity};

/// File name of the project-level config, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "euclid.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> EuclidResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EuclidError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config layers for a CLI invocation from the real user config
/// directory and process environment.
pub fn load_layered(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> EuclidResult<(Config, Vec<ConfigWarning>)> {
    let user_config = user_config_path();
    load_layered_from(explicit, project_root, user_config.as_deref(), |key| {
        std::env::var(key).ok()
    })
}

/// Resolve the config layers with an explicit user config path and
/// variable lookup.
///
/// An explicit path must load; implicit project and user files that fail to
/// parse fall through to the next layer. Environment overrides are applied
/// last.
pub fn load_layered_from(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
    user_config: Option<&Path>,
    get_env: impl Fn(&str) -> Option<String>,
) -> EuclidResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides_from(config, &get_env), warnings));
    }

    let project_config = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    let candidates = project_config
        .as_deref()
        .into_iter()
        .chain(user_config)
        .filter(|path| path.exists());

    for candidate in candidates {
        if let Ok((config, warnings)) = load_with_warnings(candidate) {
            return Ok((with_env_overrides_from(config, &get_env), warnings));
        }
    }

    Ok((with_env_overrides_from(Config::default(), &get_env), Vec::new()))
}

/// `<config dir>/euclid/config.toml`, e.g. `~/.config/euclid/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("euclid/config.toml"))
}

/// Apply overrides from an arbitrary variable lookup.
///
/// Unrecognized values leave the corresponding setting untouched.
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // EUCLID_STRATEGY
    if let Some(strategy) = get_env("EUCLID_STRATEGY") {
        if let Ok(strategy) = strategy.parse() {
            config.strategy = strategy;
        }
    }

    // EUCLID_VERBOSITY
    if let Some(verbosity) = get_env("EUCLID_VERBOSITY") {
        match verbosity.to_lowercase().as_str() {
            "quiet" => config.output.verbosity = Verbosity::Quiet,
            "normal" => config.output.verbosity = Verbosity::Normal,
            "verbose" => config.output.verbosity = Verbosity::Verbose,
            "debug" => config.output.verbosity = Verbosity::Debug,
            _ => {}
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "strategy",
        "output",
        "verbosity",
        "verify",
        "default_limit",
        "max_limit",
        "bench",
        "iterations",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
