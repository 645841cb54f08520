use super::{ApiResponse, ConfigTransport, GatewayError, GatewayErrorExt};
use fmdash_domain::config::GatewayConfig;
use fmdash_domain::constants::{CONFIGURATION_PATH, RESET_SEGMENT, SECTION_SEGMENT};
use fmdash_domain::{ConfigurationDocument, Item};
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// [`ConfigTransport`] speaking JSON over HTTP(S) with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base: Url,
}

#[derive(Serialize)]
struct SectionPatch<'a> {
    items: &'a [Item],
}

impl HttpTransport {
    /// Builds a client for `config.base_url`. A zero `timeout_seconds` disables the timeout.
    ///
    /// # Errors
    /// * [`GatewayError::InvalidUrl`] when the base URL cannot carry path segments.
    /// * [`GatewayError::Transport`] when the HTTP client cannot be constructed.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let base = Url::parse(&config.base_url).map_err(|e| GatewayError::InvalidUrl {
            message: format!("{}: {e}", config.base_url).into(),
            context: None,
        })?;
        if base.cannot_be_a_base() {
            return Err(GatewayError::InvalidUrl {
                message: format!("{} cannot be used as a base URL", config.base_url).into(),
                context: None,
            });
        }

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }
        let client = builder.build().context("Building HTTP client")?;

        debug!(base = %base, timeout = config.timeout_seconds, "HTTP transport ready");
        Ok(Self { client, base })
    }

    /// Base URL extended with the configuration path and `extra` segments (percent-encoded).
    ///
    /// # Errors
    /// Returns [`GatewayError::InvalidUrl`] for a base URL that cannot carry path segments.
    pub fn endpoint(&self, extra: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| GatewayError::InvalidUrl {
                message: format!("{} cannot be used as a base URL", self.base).into(),
                context: None,
            })?
            .pop_if_empty()
            .extend(CONFIGURATION_PATH)
            .extend(extra);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiResponse, GatewayError> {
        let response = request.send().await.context("Sending request")?;
        let status = response.status();
        let body = response.bytes().await.context("Reading response body")?;

        if !status.is_success() {
            return Err(GatewayError::Status { message: status.to_string().into(), context: None });
        }

        serde_json::from_slice(&body).context("Decoding response envelope")
    }
}

impl ConfigTransport for HttpTransport {
    #[instrument(skip_all, name = "http.fetch")]
    async fn fetch(&self) -> Result<ApiResponse, GatewayError> {
        self.send(self.client.get(self.endpoint(&[])?)).await
    }

    #[instrument(skip_all, name = "http.save")]
    async fn save(&self, document: &ConfigurationDocument) -> Result<ApiResponse, GatewayError> {
        self.send(self.client.post(self.endpoint(&[])?).json(document)).await
    }

    #[instrument(skip_all, name = "http.patch_section", fields(section = %section))]
    async fn patch_section(
        &self,
        section: &str,
        items: &[Item],
    ) -> Result<ApiResponse, GatewayError> {
        let url = self.endpoint(&[SECTION_SEGMENT, section])?;
        self.send(self.client.patch(url).json(&SectionPatch { items })).await
    }

    #[instrument(skip_all, name = "http.reset")]
    async fn reset(&self) -> Result<ApiResponse, GatewayError> {
        self.send(self.client.post(self.endpoint(&[RESET_SEGMENT])?)).await
    }
}
