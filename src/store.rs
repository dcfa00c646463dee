//! The session's theme store.
//!
//! [`ThemeStore`] owns the active [`Variant`], restores it from durable
//! storage once at startup, writes it back on every change and notifies
//! subscribers synchronously. It is created once per session and handed to
//! renderers by reference; nothing else holds theme state.

use crate::error::ThemeError;
use crate::theme::Variant;

/// Storage key of the persisted variant.
pub const PREFERENCE_KEY: &str = "selectedTheme";

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(Variant)>;

/// Holds the active variant for the lifetime of the UI.
pub struct ThemeStore {
    current: Variant,
    storage: Option<Box<dyn eframe::Storage>>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    initialized: bool,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current)
            .field("has_storage", &self.storage.is_some())
            .field("subscribers", &self.subscribers.len())
            .field("initialized", &self.initialized)
            .finish()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ThemeStore {
    /// Creates a store holding the default variant.
    ///
    /// `storage` may be `None` when durable storage is unavailable; the store
    /// then works purely in memory.
    pub fn new(storage: Option<Box<dyn eframe::Storage>>) -> Self {
        Self {
            current: Variant::default(),
            storage,
            subscribers: Vec::new(),
            next_subscription: 0,
            initialized: false,
        }
    }

    /// Restores the persisted variant.
    ///
    /// Only the first call has an effect. Absent or unrecognized values keep
    /// the default; nothing is reported.
    pub fn initialize(&mut self) {
        if self.initialized {
            tracing::debug!("theme store already initialized");
            return;
        }
        self.initialized = true;

        let stored = self
            .storage
            .as_ref()
            .and_then(|storage| storage.get_string(PREFERENCE_KEY));

        if let Some(id) = stored.as_deref() {
            let variant = Variant::from_id_or_default(id);
            if variant.id() == id {
                tracing::info!(variant = variant.id(), "restored theme preference");
            } else {
                tracing::debug!(stored = id, "ignoring unrecognized theme preference");
            }
            self.current = variant;
        }
    }

    /// Returns the active variant.
    pub fn get(&self) -> Variant {
        self.current
    }

    /// Activates `variant`.
    ///
    /// The preference is written before subscribers run, and every subscriber
    /// has seen the new value by the time this returns. Re-selecting the
    /// active variant persists it again but notifies nobody.
    pub fn set(&mut self, variant: Variant) {
        let previous = std::mem::replace(&mut self.current, variant);
        self.persist(variant);

        if previous != variant {
            tracing::info!(from = previous.id(), to = variant.id(), "theme changed");
            self.notify(variant);
        }
    }

    /// Activates the variant named by a persisted identifier.
    ///
    /// An unrecognized identifier leaves the store untouched (nothing written,
    /// nobody notified) and is reported back to the caller.
    pub fn set_id(&mut self, id: &str) -> Result<Variant, ThemeError> {
        let variant = id.parse::<Variant>()?;
        self.set(variant);
        Ok(variant)
    }

    /// Registers a callback run on every variant change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(Variant) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn persist(&mut self, variant: Variant) {
        if let Some(storage) = self.storage.as_mut() {
            storage.set_string(PREFERENCE_KEY, variant.id().to_string());
            storage.flush();
        }
    }

    fn notify(&mut self, variant: Variant) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(variant);
        }
    }
}
