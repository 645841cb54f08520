use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Prefix of environment overrides, e.g. `FMDASH__GATEWAY__BASE_URL`.
pub const ENV_PREFIX: &str = "FMDASH";
/// Separator between prefix and nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";
/// Base name probed in the working directory when no path is given (`fmdash.toml`, `fmdash.json`, ...).
pub const DEFAULT_CONFIG_NAME: &str = "fmdash";

/// Custom error type for config loading.
#[fmdash_derive::fmdash_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration from a file layered with environment overrides.
///
/// 1. **File**: an explicit `path` must exist; without one, `fmdash.{toml,json,yaml,...}` in the
///    working directory is used when present and silently skipped otherwise.
/// 2. **Environment**: variables prefixed with `FMDASH__` override file values. Nested keys are
///    separated by double underscores (`FMDASH__LOGGING__LEVEL=debug` maps to `logging.level`).
///
/// Targets should use `#[serde(default)]` so that missing keys fall back to defaults.
///
/// # Errors
/// * An explicit file is missing or unparsable.
/// * The merged values do not match `T`.
///
/// # Example
/// ```rust
/// use fmdash_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None::<Vec<(String, String)>>)
}

/// Same as [`load_config`], but reads overrides from `env` instead of the process environment
/// when it is provided. Keys still need the `FMDASH__` prefix.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T, E>(
    path: Option<impl AsRef<Path>>,
    env: Option<E>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    E: IntoIterator<Item = (String, String)>,
{
    let file = match path.as_ref() {
        Some(path) => {
            info!(path = %path.as_ref().display(), "Loading config");
            File::from(path.as_ref()).required(true)
        },
        None => {
            debug!(name = DEFAULT_CONFIG_NAME, "Probing for optional config file");
            File::with_name(DEFAULT_CONFIG_NAME).required(false)
        },
    };

    let environment = Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
        .source(env.map(|vars| vars.into_iter().collect()));

    Config::builder()
        .add_source(file)
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
