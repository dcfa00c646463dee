//! UI panel rendering subsystem
//!
//! This module contains all rendering logic for the storefront:
//! - Header panel (logo, page links, variant picker, cart badge)
//! - Sidebar (quick links, professional variant only)
//! - Pages (home, about, contact)
//! - Catalog view and product cards
//! - Painting helpers that interpret resolved style tokens
//! - Panel manager (shell layout and interaction routing)

pub mod header;
pub mod sidebar;
pub mod pages;
pub mod catalog_view;
pub mod product_card;
pub mod paint;
pub mod panel_manager;

/// Window width below which page links collapse into the mobile menu
/// and card rows collapse to a single column.
pub const NARROW_WIDTH: f32 = 768.0;
