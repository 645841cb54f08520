use crate::defaults;
use fmdash_domain::ConfigurationDocument;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;
use tracing::trace;

/// Holder of the live dashboard configuration.
///
/// Handles are cheap to clone and share one document. Readers get immutable snapshots, so a
/// [`replace`](Self::replace) never changes a document someone is already looking at.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    document: RwLock<Arc<ConfigurationDocument>>,
    loaded: AtomicBool,
    revision: watch::Sender<u64>,
}

impl ConfigStore {
    /// Starts out holding the built-in defaults, not yet marked as loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(defaults::default_configuration(), false)
    }

    /// Starts out holding `document`, marked as loaded.
    #[must_use]
    pub fn with_document(document: ConfigurationDocument) -> Self {
        Self::from_parts(document, true)
    }

    fn from_parts(document: ConfigurationDocument, loaded: bool) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(StoreInner {
                document: RwLock::new(Arc::new(document)),
                loaded: AtomicBool::new(loaded),
                revision,
            }),
        }
    }

    /// Snapshot of the current document.
    #[must_use]
    pub fn get(&self) -> Arc<ConfigurationDocument> {
        Arc::clone(&self.inner.document.read())
    }

    /// Swaps in `document` and notifies subscribers.
    pub fn replace(&self, document: ConfigurationDocument) {
        let document = Arc::new(document);
        {
            let mut slot = self.inner.document.write();
            *slot = document;
            // Bumped under the write lock so revisions follow swap order.
            self.inner.revision.send_modify(|revision| *revision += 1);
        }
        self.inner.loaded.store(true, Ordering::Release);
        trace!(revision = self.revision(), "Dashboard configuration replaced");
    }

    /// Number of replacements so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.inner.revision.borrow()
    }

    /// Latest-value notifications carrying the revision after each replacement.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }

    /// `false` until the first [`replace`](Self::replace) unless created
    /// [`with_document`](Self::with_document).
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.inner.loaded.load(Ordering::Acquire)
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("revision", &self.revision())
            .field("loaded", &self.is_loaded())
            .field("sections", &self.get().sections.len())
            .finish()
    }
}
