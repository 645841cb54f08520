//! # Dashboard configuration
//!
//! Decides which dashboard cards render. The pieces, leaf first:
//!
//! * [`store::ConfigStore`] holds the one live [`ConfigurationDocument`].
//! * [`validator`] checks untrusted JSON before it may become a document.
//! * [`gateway::ConfigGateway`] talks to the remote configuration service and degrades to
//!   [`defaults`] instead of failing.
//! * [`resolver`] answers "is this card visible" queries.
//! * [`exchange`] converts documents to and from JSON text for backups.
//!
//! [`service::DashboardConfigService`] wires them together for applications.
//!
//! ```rust
//! use fmdash_dashboard::{defaults, resolver};
//!
//! let doc = defaults::default_document();
//! assert!(resolver::is_item_visible(doc, "tickets", "categoryWiseTickets"));
//! assert!(!resolver::is_item_visible(doc, "tickets", "unknownCard"));
//! ```

mod error;

pub mod defaults;
pub mod exchange;
pub mod gateway;
pub mod resolver;
pub mod service;
pub mod store;
pub mod validator;

pub use error::{ExchangeError, ExchangeErrorExt};
pub use fmdash_domain::{ConfigurationDocument, Item, Section};
#[cfg(feature = "http")]
pub use gateway::HttpTransport;
pub use gateway::{ApiResponse, ConfigGateway, ConfigTransport, GatewayError};
pub use service::DashboardConfigService;
pub use store::ConfigStore;
