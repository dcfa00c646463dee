//! Centralized application state for the ThemeApp storefront.
//!
//! The state is composed of focused components that each manage one aspect of
//! the application. This keeps invariants local within each component and
//! lets the panels borrow different aspects independently.

use crate::state::{CartState, CatalogState, ContactState, NavigationState};
use themeapp::{Route, ShellState, ThemeStore};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Active variant, persistence and subscribers
    pub theme: ThemeStore,

    /// Sidebar lifetime and page fade
    pub shell: ShellState,

    /// Current page and header menus
    pub navigation: NavigationState,

    /// Product listing
    pub catalog: CatalogState,

    /// Contact form
    pub contact: ContactState,

    pub cart: CartState,
}

impl AppState {
    /// Creates the application state around an initialized theme store.
    pub fn new(theme: ThemeStore, route: Route) -> Self {
        Self {
            theme,
            shell: ShellState::new(),
            navigation: NavigationState::new(route),
            catalog: CatalogState::new(),
            contact: ContactState::default(),
            cart: CartState::default(),
        }
    }
}
