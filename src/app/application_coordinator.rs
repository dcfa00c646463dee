//! Application-level coordination and workflow management.
//!
//! Handles navigation, variant selection, catalog loading and the form and
//! cart workflows triggered from the panels.

use crate::app::AppState;
use crate::io::{CatalogLoader, CatalogSource, LoadResult};
use crate::ui::panel_manager::PanelInteraction;
use themeapp::{Route, Variant};

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Dispatches a panel interaction to the matching workflow.
    pub fn handle_interaction(state: &mut AppState, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::Navigate(route) => Self::navigate(state, route),
            PanelInteraction::SelectVariant(variant) => Self::select_variant(state, variant),
            PanelInteraction::AddToCart(product_id) => Self::add_to_cart(state, product_id),
            PanelInteraction::SubmitContact => Self::submit_contact(state),
        }
    }

    /// Switches page; the mobile menu closes with it.
    pub fn navigate(state: &mut AppState, route: Route) {
        tracing::debug!(path = route.path(), "navigate");
        state.navigation.navigate(route);
    }

    /// Activates a variant and closes the picker.
    ///
    /// The store persists the choice and notifies subscribers; re-selecting
    /// the active variant only closes the picker.
    pub fn select_variant(state: &mut AppState, variant: Variant) {
        state.theme.set(variant);
        state.navigation.close_picker();
    }

    /// Initiates asynchronous catalog loading.
    ///
    /// Immediately switches the listing to its loading status.
    pub fn start_catalog_load(
        state: &mut AppState,
        loader: &mut CatalogLoader,
        source: CatalogSource,
        ctx: &egui::Context,
    ) {
        if loader.is_loading() {
            tracing::debug!("superseding pending catalog load");
        }
        state.catalog.begin_loading();
        loader.start(source, ctx);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop with the UI clock.
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut CatalogLoader, now: f64) -> bool {
        match loader.check_completion() {
            LoadResult::Success(products) => {
                state.catalog.finish(products, now);
                true
            }
            LoadResult::Error(message) => {
                state.catalog.fail(message);
                true
            }
            LoadResult::None => false,
        }
    }

    /// Submits the contact form. A valid message is logged and the form cleared.
    pub fn submit_contact(state: &mut AppState) {
        match state.contact.submit() {
            Ok(submission) => tracing::info!(
                name = %submission.name,
                email = %submission.email,
                subject = %submission.subject,
                "contact message submitted"
            ),
            Err(err) => tracing::debug!(%err, "contact form rejected"),
        }
    }

    pub fn add_to_cart(state: &mut AppState, product_id: u64) {
        state.cart.add(product_id);
        tracing::info!(product_id, items = state.cart.count(), "added to cart");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ContactNotice;
    use std::time::{Duration, Instant};
    use themeapp::{CatalogStatus, MemoryStorage, ThemeStore, PREFERENCE_KEY};

    fn state_with(storage: &MemoryStorage) -> AppState {
        let mut theme = ThemeStore::new(Some(Box::new(storage.clone())));
        theme.initialize();
        AppState::new(theme, Route::Home)
    }

    #[test]
    fn test_select_variant_persists_and_closes_picker() {
        let storage = MemoryStorage::new();
        let mut state = state_with(&storage);
        state.navigation.toggle_picker();

        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::SelectVariant(Variant::Playful));

        assert_eq!(state.theme.get(), Variant::Playful);
        assert!(!state.navigation.is_picker_open());
        assert_eq!(storage.get(PREFERENCE_KEY).as_deref(), Some("theme3"));
    }

    #[test]
    fn test_navigate() {
        let mut state = state_with(&MemoryStorage::new());
        state.navigation.toggle_mobile_menu();
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::Navigate(Route::Contact));
        assert_eq!(state.navigation.route(), Route::Contact);
        assert!(!state.navigation.is_mobile_menu_open());
    }

    #[test]
    fn test_add_to_cart() {
        let mut state = state_with(&MemoryStorage::new());
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::AddToCart(4));
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::AddToCart(2));
        assert_eq!(state.cart.count(), 2);
    }

    #[test]
    fn test_submit_contact_rejects_empty_form() {
        let mut state = state_with(&MemoryStorage::new());
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::SubmitContact);
        assert!(matches!(state.contact.notice(), Some(ContactNotice::Invalid(_))));
    }

    #[test]
    fn test_catalog_load_reaches_ready() {
        let mut state = state_with(&MemoryStorage::new());
        let mut loader = CatalogLoader::new();
        let ctx = egui::Context::default();

        ApplicationCoordinator::start_catalog_load(&mut state, &mut loader, CatalogSource::Sample, &ctx);
        assert!(state.catalog.status().is_loading());

        let deadline = Instant::now() + Duration::from_secs(5);
        while !ApplicationCoordinator::check_loading_completion(&mut state, &mut loader, 1.0) {
            assert!(Instant::now() < deadline, "catalog load timed out");
            std::thread::sleep(Duration::from_millis(5));
        }

        assert!(matches!(state.catalog.status(), CatalogStatus::Ready(products) if products.len() == 6));
        assert_eq!(state.catalog.elapsed_since_ready(1.5), Some(0.5));
    }
}
