#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros used across the fmdash workspace.
//! Today this is a single attribute, [`macro@fmdash_error`], which turns a plain enum into an
//! error type with context support.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! fmdash-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring crate error enums.
///
/// # What it adds
///
/// * `#[derive(Debug, thiserror::Error)]` unless the enum already derives them.
/// * A companion `<Name>Ext` trait with `.context(...)`, implemented for `Result<T, Name>`
///   and for `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for variants with a `source` field (or a field marked `#[source]`/`#[from]`),
///   so `?` works on upstream errors.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A private `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. A variant with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use fmdash_derive::fmdash_error;
/// use std::borrow::Cow;
///
/// #[fmdash_error]
/// pub enum GatewayError {
///     #[error("Transport error{}: {source}", format_context(.context))]
///     Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal gateway error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn fetch(client: &reqwest::Client) -> Result<(), GatewayError> {
///     let _req = client.get("http://localhost/").build().context("Building request")?;
///     Err("no backend configured".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn fmdash_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
