//! Navigation state management.
//!
//! Tracks the current page plus the two transient menus in the header: the
//! variant picker dropdown and the narrow-window navigation menu.

use themeapp::Route;

/// State related to page navigation and header menus.
///
/// Responsibilities:
/// - Tracking the current route
/// - Closing menus once a choice has been made
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    route: Route,
    picker_open: bool,
    mobile_menu_open: bool,
}

impl NavigationState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            ..Self::default()
        }
    }

    // ===== Queries =====

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    // ===== Mutations =====

    /// Switches page and closes the mobile menu.
    pub fn navigate(&mut self, route: Route) {
        self.route = route;
        self.mobile_menu_open = false;
    }

    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    pub fn close_picker(&mut self) {
        self.picker_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_closes_mobile_menu() {
        let mut nav = NavigationState::new(Route::Home);
        nav.toggle_mobile_menu();
        assert!(nav.is_mobile_menu_open());

        nav.navigate(Route::About);
        assert_eq!(nav.route(), Route::About);
        assert!(!nav.is_mobile_menu_open());
    }

    #[test]
    fn test_picker_toggle() {
        let mut nav = NavigationState::default();
        assert!(!nav.is_picker_open());
        nav.toggle_picker();
        assert!(nav.is_picker_open());
        nav.close_picker();
        assert!(!nav.is_picker_open());
    }
}
