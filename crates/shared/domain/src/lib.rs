//! # Domain Models
//!
//! Plain data for the dashboard configuration subsystem: the nested
//! sections → items → visibility document, the well-known section keys, and the
//! client configuration. The only dependency is `serde`; no I/O lives here.

pub mod config;
pub mod constants;
pub mod model;

pub use model::{ConfigurationDocument, Item, Section};
