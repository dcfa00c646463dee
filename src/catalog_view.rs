//! What the featured-products section shows for a catalog status.
//!
//! [`CatalogViewPlan::build`] is pure: the renderer draws exactly the plan,
//! so the loading/error/ready rules can be tested without a window.

use crate::catalog::{filled_stars, format_price, CatalogStatus, Product, MAX_STARS};
use crate::theme::{Variant, VariantTable};

/// Delay between consecutive card entrances, in seconds.
pub const STAGGER_STEP: f32 = 0.1;
/// Duration of a single card entrance, in seconds.
pub const ENTRANCE_DURATION: f32 = 0.3;

/// How cards are arranged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogLayout {
    /// Uniform grid: one column below `two_columns_from`, two below
    /// `max_columns_from`, `max_columns` beyond.
    Grid {
        gap: f32,
        two_columns_from: f32,
        max_columns_from: f32,
        max_columns: usize,
    },
    /// One card per row.
    Stack { spacing: f32 },
}

impl CatalogLayout {
    /// Column count for the available width.
    pub fn columns(&self, width: f32) -> usize {
        match *self {
            CatalogLayout::Grid {
                two_columns_from,
                max_columns_from,
                max_columns,
                ..
            } => {
                if width >= max_columns_from {
                    max_columns
                } else if width >= two_columns_from {
                    2.min(max_columns)
                } else {
                    1
                }
            }
            CatalogLayout::Stack { .. } => 1,
        }
    }

    /// Space between cards.
    pub fn gap(&self) -> f32 {
        match *self {
            CatalogLayout::Grid { gap, .. } => gap,
            CatalogLayout::Stack { spacing } => spacing,
        }
    }

    pub fn is_grid(&self) -> bool {
        matches!(self, CatalogLayout::Grid { .. })
    }
}

static LAYOUTS: VariantTable<CatalogLayout> = VariantTable {
    minimalist: CatalogLayout::Grid {
        gap: 24.0,
        two_columns_from: 768.0,
        max_columns_from: 1024.0,
        max_columns: 3,
    },
    professional: CatalogLayout::Stack { spacing: 24.0 },
    playful: CatalogLayout::Grid {
        gap: 32.0,
        two_columns_from: 640.0,
        max_columns_from: 1024.0,
        max_columns: 3,
    },
};

pub fn layout_for(variant: Variant) -> CatalogLayout {
    *LAYOUTS.get(variant)
}

/// One product card, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPlan<'a> {
    /// Position in the source listing
    pub index: usize,
    pub product: &'a Product,
    pub price_text: String,
    pub stars_filled: usize,
    pub stars_total: usize,
    pub rating_count_text: String,
    /// Seconds after the listing became ready before this card appears
    pub entrance_delay: f32,
}

impl<'a> CardPlan<'a> {
    pub fn new(index: usize, product: &'a Product) -> Self {
        Self {
            index,
            product,
            price_text: format_price(product.price),
            stars_filled: filled_stars(product.rating.rate),
            stars_total: MAX_STARS,
            rating_count_text: format!("({})", product.rating.count),
            entrance_delay: index as f32 * STAGGER_STEP,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogViewPlan<'a> {
    /// Spinner only.
    Progress,
    /// Inline message, no cards.
    Error { message: String },
    Cards {
        layout: CatalogLayout,
        cards: Vec<CardPlan<'a>>,
    },
}

impl<'a> CatalogViewPlan<'a> {
    pub fn build(status: &'a CatalogStatus, variant: Variant) -> Self {
        match status {
            CatalogStatus::Loading => CatalogViewPlan::Progress,
            CatalogStatus::Error(message) => CatalogViewPlan::Error {
                message: format!("Error loading products: {message}"),
            },
            CatalogStatus::Ready(products) => CatalogViewPlan::Cards {
                layout: layout_for(variant),
                cards: products
                    .iter()
                    .enumerate()
                    .map(|(index, product)| CardPlan::new(index, product))
                    .collect(),
            },
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            CatalogViewPlan::Cards { cards, .. } => cards.len(),
            _ => 0,
        }
    }
}

/// Entrance progress (0 hidden, 1 settled) of the card at `index`,
/// `elapsed` seconds after the listing became ready.
pub fn entrance_progress(elapsed: f32, index: usize) -> f32 {
    let delay = index as f32 * STAGGER_STEP;
    ((elapsed - delay) / ENTRANCE_DURATION).clamp(0.0, 1.0)
}
