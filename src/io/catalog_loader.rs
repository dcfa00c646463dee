//! Asynchronous catalog loading.
//!
//! Reads the product listing in a background thread so the first frames
//! render immediately with a loading indicator in the featured section.

use eframe::egui;
use std::fmt;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use themeapp::catalog::{load_catalog_file, sample_catalog};
use themeapp::Product;

/// Where the product listing comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// JSON file in the fakestore listing shape
    File(PathBuf),
    /// Listing bundled with the application
    Sample,
}

impl CatalogSource {
    fn load(&self) -> Result<Vec<Product>, String> {
        let result = match self {
            CatalogSource::File(path) => load_catalog_file(path),
            CatalogSource::Sample => sample_catalog(),
        };
        result.map_err(|e| e.to_string())
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Sample => f.write_str("bundled sample"),
        }
    }
}

/// Result of a completed catalog load.
#[derive(Debug)]
pub enum LoadResult {
    /// Loading completed successfully
    Success(Vec<Product>),
    /// Loading failed with an error
    Error(String),
    /// No result available (still loading or no operation active)
    None,
}

/// Manages asynchronous loading of the product listing.
///
/// Starting a new load replaces the pending receiver, so a result from a
/// superseded load is never applied.
pub struct CatalogLoader {
    receiver: Option<Receiver<Result<Vec<Product>, String>>>,
}

impl CatalogLoader {
    /// Creates a new loader with no active loading operation.
    pub fn new() -> Self {
        Self { receiver: None }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.receiver.is_some()
    }

    /// Starts loading the listing from `source` in a background thread.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    pub fn start(&mut self, source: CatalogSource, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);

        let ctx_handle = ctx.clone();
        thread::spawn(move || {
            let result = source.load();
            match &result {
                Ok(products) => tracing::info!(source = %source, count = products.len(), "catalog loaded"),
                Err(err) => tracing::warn!(source = %source, %err, "catalog load failed"),
            }

            // Receiver is gone if the load was superseded
            let _ = sender.send(result);

            // Notify GUI thread to repaint
            ctx_handle.request_repaint();
        });
    }

    /// Returns the load result once the background thread has delivered it.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.receiver else {
            return LoadResult::None;
        };

        let load_result = match receiver.try_recv() {
            Ok(Ok(products)) => LoadResult::Success(products),
            Ok(Err(message)) => LoadResult::Error(message),
            Err(TryRecvError::Empty) => return LoadResult::None,
            Err(TryRecvError::Disconnected) => LoadResult::Error("catalog loader stopped unexpectedly".to_string()),
        };

        self.receiver = None;
        load_result
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_for(loader: &mut CatalogLoader) -> LoadResult {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            match loader.check_completion() {
                LoadResult::None => thread::sleep(Duration::from_millis(5)),
                result => return result,
            }
        }
        LoadResult::None
    }

    #[test]
    fn test_loader_creation() {
        let loader = CatalogLoader::new();
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = CatalogLoader::new();
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }

    #[test]
    fn test_sample_load() {
        let mut loader = CatalogLoader::new();
        loader.start(CatalogSource::Sample, &egui::Context::default());
        assert!(loader.is_loading());

        match wait_for(&mut loader) {
            LoadResult::Success(products) => assert_eq!(products.len(), 6),
            other => panic!("expected products, got {other:?}"),
        }
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_missing_file_reports_error() {
        let mut loader = CatalogLoader::new();
        let source = CatalogSource::File(PathBuf::from("/nonexistent/products.json"));
        loader.start(source, &egui::Context::default());

        match wait_for(&mut loader) {
            LoadResult::Error(message) => assert!(message.contains("/nonexistent/products.json")),
            other => panic!("expected an error, got {other:?}"),
        }
    }

    #[test]
    fn test_source_display() {
        assert_eq!(CatalogSource::Sample.to_string(), "bundled sample");
        assert_eq!(CatalogSource::File(PathBuf::from("a.json")).to_string(), "a.json");
    }
}
