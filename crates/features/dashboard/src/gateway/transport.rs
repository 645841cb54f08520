use super::GatewayError;
use fmdash_domain::{ConfigurationDocument, Item};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope every configuration endpoint answers with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiResponse {
    pub success: bool,
    pub message: Option<String>,
    /// Document payload of `GET` and `reset`; unchecked JSON until validated.
    pub data: Option<Value>,
}

impl ApiResponse {
    #[must_use]
    pub fn ok(data: Option<Value>) -> Self {
        Self { success: true, message: None, data }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()), data: None }
    }
}

/// Request/response plumbing towards the remote configuration service.
///
/// Implementations report every failure as a [`GatewayError`]; deciding what a failure means
/// for the dashboard is left to [`ConfigGateway`](super::ConfigGateway).
pub trait ConfigTransport: Send + Sync {
    /// `GET /dashboard/configuration`
    fn fetch(&self) -> impl Future<Output = Result<ApiResponse, GatewayError>> + Send;

    /// `POST /dashboard/configuration` with the whole document.
    fn save(
        &self,
        document: &ConfigurationDocument,
    ) -> impl Future<Output = Result<ApiResponse, GatewayError>> + Send;

    /// `PATCH /dashboard/configuration/section/{section}` with `{ "items": [...] }`.
    fn patch_section(
        &self,
        section: &str,
        items: &[Item],
    ) -> impl Future<Output = Result<ApiResponse, GatewayError>> + Send;

    /// `POST /dashboard/configuration/reset`
    fn reset(&self) -> impl Future<Output = Result<ApiResponse, GatewayError>> + Send;
}
