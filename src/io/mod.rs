//! Background catalog loading.

pub mod catalog_loader;

pub use catalog_loader::{CatalogLoader, CatalogSource, LoadResult};
