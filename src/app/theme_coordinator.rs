//! Theme store setup and visuals application.

use crate::app::AppState;
use themeapp::{visuals_for, ThemeStore};

/// Coordinates the theme store with the egui context.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Creates the theme store, restores the stored variant and wires a
    /// subscriber that repaints the window on every change.
    ///
    /// Must run before the first frame so the restored variant is what the
    /// first frame paints.
    pub fn create_store(storage: Option<Box<dyn eframe::Storage>>, ctx: &egui::Context) -> ThemeStore {
        let mut store = ThemeStore::new(storage);
        store.initialize();

        let ctx_handle = ctx.clone();
        store.subscribe(move |variant| {
            tracing::debug!(variant = variant.id(), "repainting for theme change");
            ctx_handle.request_repaint();
        });

        store
    }

    /// Applies the active variant's visuals to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        ctx.set_visuals(visuals_for(state.theme.get()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use themeapp::{MemoryStorage, Variant, PREFERENCE_KEY};

    #[test]
    fn test_create_store_restores_variant() {
        let storage = MemoryStorage::with_entry(PREFERENCE_KEY, "theme3");
        let ctx = egui::Context::default();
        let store = ThemeCoordinator::create_store(Some(Box::new(storage)), &ctx);
        assert_eq!(store.get(), Variant::Playful);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_create_store_without_storage() {
        let ctx = egui::Context::default();
        let mut store = ThemeCoordinator::create_store(None, &ctx);
        assert_eq!(store.get(), Variant::Minimalist);
        store.set(Variant::Professional);
        assert_eq!(store.get(), Variant::Professional);
    }
}
