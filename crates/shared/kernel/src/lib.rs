//! Kernel utilities shared across fmdash crates.
//! Keep this crate lightweight; today it hosts the layered configuration loader.
//!
//! ## Config loading
//! ```rust,no_run
//! use fmdash_kernel::config::load_config;
//! use fmdash_kernel::domain::config::ClientConfig;
//!
//! let cfg: ClientConfig = load_config(None::<&str>).unwrap();
//! println!("{}", cfg.gateway.base_url);
//! ```
pub mod config;

pub use fmdash_domain as domain;
