//! Catalog listing state.

use themeapp::{CatalogStatus, Product};

/// Listing status plus the UI time at which it became ready.
///
/// `ready_at` drives the staggered card entrance; it is reset whenever a new
/// listing arrives.
#[derive(Debug, Clone)]
pub struct CatalogState {
    status: CatalogStatus,
    ready_at: Option<f64>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            status: CatalogStatus::Loading,
            ready_at: None,
        }
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    /// Seconds since the listing became ready, if it is.
    pub fn elapsed_since_ready(&self, now: f64) -> Option<f32> {
        self.ready_at.map(|at| (now - at).max(0.0) as f32)
    }

    pub fn begin_loading(&mut self) {
        self.status = CatalogStatus::Loading;
        self.ready_at = None;
    }

    pub fn finish(&mut self, products: Vec<Product>, now: f64) {
        self.status = CatalogStatus::Ready(products);
        self.ready_at = Some(now);
    }

    pub fn fail(&mut self, message: String) {
        self.status = CatalogStatus::Error(message);
        self.ready_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut catalog = CatalogState::new();
        assert!(catalog.status().is_loading());
        assert_eq!(catalog.elapsed_since_ready(5.0), None);

        catalog.finish(Vec::new(), 2.0);
        assert_eq!(catalog.elapsed_since_ready(2.5), Some(0.5));

        catalog.begin_loading();
        assert!(catalog.status().is_loading());
        assert_eq!(catalog.elapsed_since_ready(3.0), None);
    }

    #[test]
    fn test_fail_keeps_message() {
        let mut catalog = CatalogState::new();
        catalog.fail("connection refused".into());
        assert_eq!(catalog.status(), &CatalogStatus::Error("connection refused".into()));
    }
}
