//! Remote synchronisation of the dashboard configuration.
//!
//! [`ConfigGateway`] never fails towards its callers: document operations degrade to the
//! built-in defaults and write operations report a plain `bool`. The reason for a failure is
//! only visible in the logs.

mod error;
#[cfg(feature = "http")]
mod http;
mod transport;

pub use error::{GatewayError, GatewayErrorExt};
#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use transport::{ApiResponse, ConfigTransport};

use crate::{defaults, validator};
use fmdash_domain::{ConfigurationDocument, Item};
use tracing::{debug, instrument, warn};

/// Fail-safe front of a [`ConfigTransport`].
#[derive(Debug, Clone)]
pub struct ConfigGateway<T> {
    transport: T,
}

impl<T: ConfigTransport> ConfigGateway<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Remote document, or the defaults when the service is unreachable, reports failure, or
    /// answers with something that is not a valid document.
    #[instrument(skip_all, name = "gateway.get")]
    pub async fn get_dashboard_config(&self) -> ConfigurationDocument {
        let response = self.transport.fetch().await;
        document_or_default("get_dashboard_config", response)
    }

    /// Remote document without the fallback, for callers that must not act on defaults.
    ///
    /// # Errors
    /// Fails when the service is unreachable, reports failure, or answers with something that
    /// is not a valid document.
    #[instrument(skip_all, name = "gateway.fetch")]
    pub async fn fetch_dashboard_config(&self) -> Result<ConfigurationDocument, GatewayError> {
        remote_document(self.transport.fetch().await)
    }

    /// Persists the whole document; `true` only when the service confirms.
    #[instrument(skip_all, name = "gateway.save", fields(sections = document.sections.len()))]
    pub async fn save_dashboard_config(&self, document: &ConfigurationDocument) -> bool {
        let response = self.transport.save(document).await;
        confirmed("save_dashboard_config", response)
    }

    /// Persists the items of one section; `true` only when the service confirms.
    #[instrument(skip_all, name = "gateway.update_section", fields(section = %section))]
    pub async fn update_section_config(&self, section: &str, items: &[Item]) -> bool {
        let response = self.transport.patch_section(section, items).await;
        confirmed("update_section_config", response)
    }

    /// Asks the service to reset and returns its new document, or the local defaults.
    #[instrument(skip_all, name = "gateway.reset")]
    pub async fn reset_to_default_config(&self) -> ConfigurationDocument {
        let response = self.transport.reset().await;
        document_or_default("reset_to_default_config", response)
    }

    /// The built-in defaults; no I/O.
    #[must_use]
    pub fn get_default_configuration(&self) -> ConfigurationDocument {
        defaults::default_configuration()
    }
}

fn document_or_default(
    operation: &'static str,
    response: Result<ApiResponse, GatewayError>,
) -> ConfigurationDocument {
    match remote_document(response) {
        Ok(document) => {
            for duplicate in validator::find_duplicates(&document) {
                warn!(operation, %duplicate, "Remote configuration repeats a name");
            }
            debug!(operation, sections = document.sections.len(), "Remote configuration accepted");
            document
        },
        Err(e) => {
            warn!(operation, error = %e, "Falling back to default dashboard configuration");
            defaults::default_configuration()
        },
    }
}

fn remote_document(
    response: Result<ApiResponse, GatewayError>,
) -> Result<ConfigurationDocument, GatewayError> {
    let ApiResponse { success, message, data } = response?;
    if !success {
        return Err(rejected(message));
    }
    let data = data.ok_or("response carries no configuration")?;
    validator::check(&data).map_err(|violation| format!("invalid configuration: {violation}"))?;
    serde_json::from_value(data).context("Reading remote configuration")
}

fn confirmed(operation: &'static str, response: Result<ApiResponse, GatewayError>) -> bool {
    match response {
        Ok(ApiResponse { success: true, .. }) => {
            debug!(operation, "Remote configuration updated");
            true
        },
        Ok(ApiResponse { message, .. }) => {
            warn!(operation, error = %rejected(message), "Remote configuration update refused");
            false
        },
        Err(e) => {
            warn!(operation, error = %e, "Remote configuration update failed");
            false
        },
    }
}

fn rejected(message: Option<String>) -> GatewayError {
    let message = message.unwrap_or_else(|| "no message".to_owned());
    GatewayError::Internal {
        message: format!("service reported failure: {message}").into(),
        context: None,
    }
}
