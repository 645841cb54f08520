use crate::gateway::{ConfigGateway, ConfigTransport, GatewayError};
use crate::store::ConfigStore;
use crate::{defaults, exchange, resolver};
use fmdash_domain::config::DashboardSettings;
use fmdash_domain::{ConfigurationDocument, Item, Section};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, instrument, warn};

/// Application-facing session over one dashboard configuration.
///
/// Owns the [`ConfigStore`] and keeps it in line with the remote service. Every outcome that
/// replaces the document takes a sequence token: loads and resets when they are sent, writes
/// once the service confirms them. A document is only adopted when its token is newer than
/// the last one applied, so a late response never overwrites fresher state and a failed
/// request never invalidates one still in flight.
pub struct DashboardConfigService<T> {
    gateway: ConfigGateway<T>,
    store: ConfigStore,
    settings: DashboardSettings,
    issued: AtomicU64,
    applied: Mutex<u64>,
}

impl<T: ConfigTransport> DashboardConfigService<T> {
    pub fn new(transport: T) -> Self {
        Self::with_settings(transport, DashboardSettings::default())
    }

    pub fn with_settings(transport: T, settings: DashboardSettings) -> Self {
        Self::with_store(transport, settings, ConfigStore::new())
    }

    /// Uses an existing store, e.g. one already shared with UI subscribers.
    pub const fn with_store(transport: T, settings: DashboardSettings, store: ConfigStore) -> Self {
        Self { gateway: ConfigGateway::new(transport), store, settings, issued: AtomicU64::new(0), applied: Mutex::new(0) }
    }

    pub const fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub const fn gateway(&self) -> &ConfigGateway<T> {
        &self.gateway
    }

    /// Snapshot of the live document.
    #[must_use]
    pub fn current(&self) -> Arc<ConfigurationDocument> {
        self.store.get()
    }

    /// Fetches the remote document (defaults on failure) into the store.
    #[instrument(skip_all, name = "dashboard.load")]
    pub async fn load(&self) -> Arc<ConfigurationDocument> {
        let token = self.next_token();
        let document = self.gateway.get_dashboard_config().await;
        self.apply(token, self.prepare(document));
        self.store.get()
    }

    /// Like [`load`](Self::load) without the fallback: the store only ever receives a document
    /// the service actually returned.
    ///
    /// # Errors
    /// Returns the gateway failure; the store is left untouched.
    #[instrument(skip_all, name = "dashboard.load_remote")]
    pub async fn load_remote(&self) -> Result<Arc<ConfigurationDocument>, GatewayError> {
        let token = self.next_token();
        let document = self.gateway.fetch_dashboard_config().await?;
        self.apply(token, self.prepare(document));
        Ok(self.store.get())
    }

    /// Pushes `document` and adopts it locally once the service confirms.
    #[instrument(skip_all, name = "dashboard.save")]
    pub async fn save(&self, document: ConfigurationDocument) -> bool {
        if has_blank_name(&document) {
            warn!("Refusing to save a configuration with blank names");
            return false;
        }

        if !self.gateway.save_dashboard_config(&document).await {
            return false;
        }
        let token = self.next_token();
        self.apply(token, document);
        true
    }

    /// Pushes new items for `section` and mirrors them locally once the service confirms.
    /// An unknown section is appended.
    #[instrument(skip_all, name = "dashboard.update_section", fields(section = %section))]
    pub async fn update_section(&self, section: &str, items: Vec<Item>) -> bool {
        if !self.gateway.update_section_config(section, &items).await {
            return false;
        }

        let token = self.next_token();
        let mut document = ConfigurationDocument::clone(&self.store.get());
        match document.section_mut(section) {
            Some(existing) => existing.items = items,
            None => document.sections.push(Section::new(section, items)),
        }
        self.apply(token, document);
        true
    }

    /// Single-card toggle; `false` when the card is unknown or the update fails.
    #[instrument(
        skip_all,
        name = "dashboard.set_item_visibility",
        fields(section = %section, item = %item, visible = visible)
    )]
    pub async fn set_item_visibility(&self, section: &str, item: &str, visible: bool) -> bool {
        let Some(items) = resolver::with_item_visibility(&self.store.get(), section, item, visible)
        else {
            warn!(section, item, "Cannot toggle an unknown dashboard card");
            return false;
        };
        self.update_section(section, items).await
    }

    /// Resets the remote document (defaults on failure) and adopts the result.
    #[instrument(skip_all, name = "dashboard.reset")]
    pub async fn reset(&self) -> Arc<ConfigurationDocument> {
        let token = self.next_token();
        let document = self.gateway.reset_to_default_config().await;
        self.apply(token, self.prepare(document));
        self.store.get()
    }

    /// Adopts a backup locally without pushing it. Invalid text leaves the store untouched.
    pub fn import_text(&self, text: &str) -> bool {
        let Some(document) = exchange::import_configuration(text) else {
            warn!("Ignoring invalid configuration import");
            return false;
        };
        let token = self.next_token();
        self.apply(token, document);
        info!("Dashboard configuration imported");
        true
    }

    #[must_use]
    pub fn export_text(&self) -> String {
        exchange::export_configuration(&self.store.get())
    }

    #[must_use]
    pub fn is_item_visible(&self, section: &str, item: &str) -> bool {
        resolver::is_item_visible(&self.store.get(), section, item)
    }

    /// Owned copies of the visible items of `section`.
    #[must_use]
    pub fn visible_items(&self, section: &str) -> Vec<Item> {
        resolver::get_visible_items_for_section(&self.store.get(), section)
            .into_iter()
            .cloned()
            .collect()
    }

    fn next_token(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::AcqRel) + 1
    }

    fn apply(&self, token: u64, document: ConfigurationDocument) {
        let mut applied = self.applied.lock();
        if token > *applied {
            *applied = token;
            self.store.replace(document);
        } else {
            debug!(token, applied = *applied, "Discarding stale configuration response");
        }
    }

    fn prepare(&self, document: ConfigurationDocument) -> ConfigurationDocument {
        if self.settings.fill_missing_from_defaults {
            resolver::merge_with_defaults(&document, defaults::default_document())
        } else {
            document
        }
    }
}

/// Names made only of whitespace pass shape validation but never render as a card.
fn has_blank_name(document: &ConfigurationDocument) -> bool {
    let blank = |name: &str| name.trim().is_empty();
    document
        .sections
        .iter()
        .any(|section| blank(&section.name) || section.items.iter().any(|item| blank(&item.name)))
}

impl<T> std::fmt::Debug for DashboardConfigService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardConfigService")
            .field("store", &self.store)
            .field("settings", &self.settings)
            .field("issued", &self.issued.load(Ordering::Relaxed))
            .field("applied", &*self.applied.lock())
            .finish_non_exhaustive()
    }
}
