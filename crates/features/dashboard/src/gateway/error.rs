use std::borrow::Cow;

/// Failures between the gateway and the remote configuration service.
///
/// These never cross the [`ConfigGateway`](crate::gateway::ConfigGateway) boundary; they are
/// produced by transports and end up in logs.
#[fmdash_derive::fmdash_error]
pub enum GatewayError {
    /// Connection, TLS or timeout failure reported by the HTTP client.
    #[cfg(feature = "http")]
    #[error("Transport error{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The service answered with a non-2xx status.
    #[error("Unexpected response status{}: {message}", format_context(.context))]
    Status { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The response body is not the expected JSON envelope.
    #[error("Response decoding error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid service URL{}: {message}", format_context(.context))]
    InvalidUrl { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal gateway error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
