//! JSON text interchange for backups and manual editing.

use crate::error::{ExchangeError, ExchangeErrorExt};
use crate::validator;
use fmdash_domain::ConfigurationDocument;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, error, warn};

/// Pretty-printed JSON for `document`.
#[must_use]
pub fn export_configuration(document: &ConfigurationDocument) -> String {
    serde_json::to_string_pretty(document).unwrap_or_else(|e| {
        // Plain strings and booleans always serialize.
        error!(error = %e, "Failed to serialize dashboard configuration");
        String::new()
    })
}

/// Parses and validates `text`; `None` when it is not JSON or not a configuration document.
#[must_use]
pub fn import_configuration(text: &str) -> Option<ConfigurationDocument> {
    parse_configuration(text).inspect_err(|e| debug!(error = %e, "Import rejected")).ok()
}

/// Diagnostic form of [`import_configuration`].
///
/// Duplicate names are accepted and logged; lookups use the first occurrence.
///
/// # Errors
/// * [`ExchangeError::Syntax`] when `text` is not JSON.
/// * [`ExchangeError::Shape`] when the JSON does not have the document shape.
pub fn parse_configuration(text: &str) -> Result<ConfigurationDocument, ExchangeError> {
    let value: Value = serde_json::from_str(text).context("Parsing configuration text")?;
    validator::check(&value)
        .map_err(|message| ExchangeError::Shape { message: message.into(), context: None })?;
    let document: ConfigurationDocument =
        serde_json::from_value(value).context("Reading configuration document")?;

    for duplicate in validator::find_duplicates(&document) {
        warn!(%duplicate, "Imported configuration repeats a name, first occurrence wins");
    }

    Ok(document)
}

/// Writes [`export_configuration`] output to `path`.
///
/// # Errors
/// Returns [`ExchangeError::Io`] when the file cannot be written.
pub fn export_to_file(
    document: &ConfigurationDocument,
    path: impl AsRef<Path>,
) -> Result<(), ExchangeError> {
    let path = path.as_ref();
    std::fs::write(path, export_configuration(document))
        .context(format!("Writing {}", path.display()))?;
    debug!(path = %path.display(), "Dashboard configuration exported");
    Ok(())
}

/// Reads and parses a backup written by [`export_to_file`] (or by hand).
///
/// # Errors
/// Returns [`ExchangeError::Io`] when the file cannot be read, otherwise see
/// [`parse_configuration`].
pub fn import_from_file(path: impl AsRef<Path>) -> Result<ConfigurationDocument, ExchangeError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).context(format!("Reading {}", path.display()))?;
    parse_configuration(&text).context(format!("Importing {}", path.display()))
}
