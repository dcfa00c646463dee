//! Product catalog model.
//!
//! Products arrive from an external listing (a JSON file in the fakestore
//! shape, or the bundled sample). This module only reads them; it never
//! validates or mutates product data beyond what deserialization requires.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CatalogError;

/// Number of stars shown per product.
pub const MAX_STARS: usize = 5;

/// Sample listing embedded in the binary.
pub const SAMPLE_CATALOG: &str = include_str!("../assets/sample_catalog.json");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0 to 5
    pub rate: f64,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

/// Status reported by the catalog source.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogStatus {
    Loading,
    Error(String),
    Ready(Vec<Product>),
}

impl CatalogStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogStatus::Loading)
    }
}

pub fn parse_catalog(json: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_catalog_file(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&text)
}

pub fn sample_catalog() -> Result<Vec<Product>, CatalogError> {
    parse_catalog(SAMPLE_CATALOG)
}

/// Formats a price in dollars with two decimals.
///
/// # Examples
/// ```
/// assert_eq!(themeapp::catalog::format_price(19.5), "$19.50");
/// ```
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Number of highlighted stars for an average rating: `floor(rate)`, within 0..=5.
pub fn filled_stars(rate: f64) -> usize {
    if !rate.is_finite() || rate <= 0.0 {
        return 0;
    }
    (rate.floor() as usize).min(MAX_STARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(19.5), "$19.50");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(599.0), "$599.00");
        assert_eq!(format_price(109.95), "$109.95");
    }

    #[test]
    fn test_filled_stars() {
        assert_eq!(filled_stars(3.9), 3);
        assert_eq!(filled_stars(4.0), 4);
        assert_eq!(filled_stars(0.4), 0);
        assert_eq!(filled_stars(5.0), 5);
        assert_eq!(filled_stars(7.2), 5);
        assert_eq!(filled_stars(-1.0), 0);
        assert_eq!(filled_stars(f64::NAN), 0);
    }

    #[test]
    fn test_sample_catalog_parses() {
        let products = sample_catalog().unwrap();
        assert_eq!(products.len(), 6);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[3].price, 19.5);
    }

    #[test]
    fn test_missing_rating_defaults() {
        let json = r#"[{"id": 9, "title": "T", "price": 1.0, "description": "d", "image": "i"}]"#;
        let products = parse_catalog(json).unwrap();
        assert_eq!(products[0].rating, Rating::default());
        assert_eq!(products[0].category, "");
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        let err = parse_catalog("{\"id\": 1}").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("malformed catalog"));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = load_catalog_file(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_status_accessors() {
        assert!(CatalogStatus::Loading.is_loading());
        assert!(!CatalogStatus::Error("x".into()).is_loading());
        assert!(!CatalogStatus::Ready(vec![]).is_loading());
    }
}
