use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level client configuration shared by the CLI and any embedding application.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfigInner {
    pub gateway: GatewayConfig,
    pub logging: LoggingConfig,
    pub dashboard: DashboardSettings,
}

/// Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(flatten, default)]
    inner: Arc<ClientConfigInner>,
}

impl Deref for ClientConfig {
    type Target = ClientConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ClientConfig {
    fn deref_mut(&mut self) -> &mut ClientConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Remote configuration service endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// API root; `/dashboard/configuration` is appended to it.
    pub base_url: String,
    /// Whole-request timeout enforced by the HTTP transport.
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Subscriber settings for binaries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level: `trace`, `debug`, `info`, `warn` or `error`.
    pub level: String,
    /// Extra filter directives, e.g. `fmdash_dashboard=debug`.
    pub directives: Option<String>,
    pub console: bool,
    /// Directory for rolling log files; file output is off when unset.
    pub dir: Option<PathBuf>,
    pub rotation: String,
    pub max_files: usize,
    pub json: bool,
}

/// Behavior switches of the dashboard configuration service.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Append sections/items known only to the built-in defaults after every load.
    pub fill_missing_from_defaults: bool,
}

// --- Default ---

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/api".to_owned(),
            timeout_seconds: 30,
            user_agent: concat!("fmdash/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            directives: None,
            console: true,
            dir: None,
            rotation: "daily".to_owned(),
            max_files: 7,
            json: false,
        }
    }
}
