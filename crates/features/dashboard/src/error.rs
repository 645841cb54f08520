use std::borrow::Cow;

/// Why a configuration text or file could not be imported or exported.
#[fmdash_derive::fmdash_error]
pub enum ExchangeError {
    /// Not JSON at all.
    #[error("Malformed configuration JSON{}: {source}", format_context(.context))]
    Syntax { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Valid JSON that does not have the configuration document shape.
    #[error("Invalid configuration document{}: {message}", format_context(.context))]
    Shape { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Configuration file error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}
