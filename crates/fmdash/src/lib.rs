//! Facade crate for the dashboard configuration client.
//! Re-exports domain/kernel primitives and the dashboard slice.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Load a [`domain::config::ClientConfig`] with [`kernel::config::load_config`].
//! - Call [`connect`] (feature `http`) for a ready [`DashboardConfigService`].

pub use fmdash_dashboard as dashboard;
pub use fmdash_dashboard::{
    ConfigGateway, ConfigStore, ConfigTransport, DashboardConfigService, GatewayError,
};
pub use fmdash_domain as domain;
pub use fmdash_domain::{ConfigurationDocument, Item, Section};
pub use fmdash_kernel as kernel;

#[cfg(feature = "http")]
use fmdash_dashboard::HttpTransport;
#[cfg(feature = "http")]
use fmdash_domain::config::ClientConfig;

/// Builds a service talking to `config.gateway` over HTTP.
///
/// No request is made yet; call [`DashboardConfigService::load`] to fetch the document.
///
/// # Errors
/// Returns an error if the HTTP client cannot be built for the configured base URL.
#[cfg(feature = "http")]
pub fn connect(
    config: &ClientConfig,
) -> Result<DashboardConfigService<HttpTransport>, GatewayError> {
    let transport = HttpTransport::new(&config.gateway)?;
    tracing::debug!(base_url = %config.gateway.base_url, "Dashboard configuration client ready");
    Ok(DashboardConfigService::with_settings(transport, config.dashboard.clone()))
}

#[cfg(all(test, feature = "http"))]
mod tests {
    use super::*;

    #[test]
    fn connect_starts_with_defaults() {
        let service = connect(&ClientConfig::default()).unwrap();
        assert!(!service.store().is_loaded());
        assert!(service.is_item_visible("tickets", "categoryWiseTickets"));
    }

    #[test]
    fn connect_rejects_bad_base_url() {
        let mut config = ClientConfig::default();
        config.gateway.base_url = "::not a url::".to_owned();
        assert!(matches!(connect(&config), Err(GatewayError::InvalidUrl { .. })));
    }
}
