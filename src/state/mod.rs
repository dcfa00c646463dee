//! State management modules for the ThemeApp storefront.
//!
//! This module contains state-only logic (no UI concerns):
//! - Navigation state (current page, open menus)
//! - Catalog state (listing status and when it became ready)
//! - Contact state (form fields and the last submission notice)
//! - Cart state (items added from product cards)

mod navigation;
mod catalog_state;
mod contact_state;
mod cart_state;

pub use navigation::NavigationState;
pub use catalog_state::CatalogState;
pub use contact_state::{ContactNotice, ContactState};
pub use cart_state::CartState;
