use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Base name of the configuration file looked up when none is given.
pub const DEFAULT_CONFIG: &str = "inspect";

/// Custom error type for config loading.
#[ida_derive::ida_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from an optional file layered with environment overrides.
///
/// 1. **File**: `path` if given (must exist), otherwise `inspect.{toml,json}` in the
///    working directory when present.
/// 2. **Environment**: variables prefixed with `IDA__`, nested with double underscores
///    (e.g., `IDA__LOG__LEVEL` maps to `log.level`).
///
/// Anything left unset falls back to the `Default` of `T`'s fields.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source cannot be
/// parsed, or the merged values do not fit `T`.
pub fn load_config<T>(path: Option<&Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = path.map_or_else(
        || File::with_name(DEFAULT_CONFIG).required(false),
        |p| File::from(p).required(true),
    );

    debug!(path = ?path, "Loading inspector configuration");

    let config = Config::builder()
        .add_source(file)
        .add_source(Environment::with_prefix("IDA").separator("__"))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
