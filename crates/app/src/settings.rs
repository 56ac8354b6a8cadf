use config::{Config, ConfigError, Environment, File, Map};
use std::path::{Path, PathBuf};
use tracker_core::config::AppConfig;

/// Config file read when `TRACKER_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "tracker.toml";
/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_VAR: &str = "TRACKER_CONFIG";

const ENV_PREFIX: &str = "TRACKER";
const ENV_SEPARATOR: &str = "__";

/// # Summary
/// Load the application configuration from the process environment.
///
/// # Logic
/// 1. Built-in defaults.
/// 2. The file named by `TRACKER_CONFIG`, else `tracker.toml` if it exists.
/// 3. `TRACKER__SECTION__KEY` environment variables.
pub fn load() -> Result<AppConfig, ConfigError> {
    let path = std::env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    load_from(Some(&path), None)
}

/// # Summary
/// Layer defaults, an optional file and environment overrides.
///
/// # Arguments
/// * `file` - config file; a missing file is skipped.
/// * `env` - variables to read instead of the process environment.
pub fn load_from(
    file: Option<&Path>,
    env: Option<Map<String, String>>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

    if let Some(path) = file {
        builder = builder.add_source(File::from(path).required(false));
    }

    builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(env),
        )
        .build()?
        .try_deserialize()
}
