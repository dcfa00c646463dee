pub mod error;
pub mod theme;
pub mod storage;
pub mod store;
pub mod style;
pub mod shell;
pub mod route;
pub mod catalog;
pub mod catalog_view;
pub mod contact;

// Export theme state
pub use theme::{Variant, VariantTable, Palette, palette, visuals_for};
pub use store::{ThemeStore, SubscriptionId, PREFERENCE_KEY};
pub use storage::{FileStorage, MemoryStorage};

// Export style resolution
pub use style::{StyleBundle, StyleToken, Fill, Typeface, Elevation, Border, ButtonStyle, Surface};
pub use shell::{ShellPlan, ShellState, SidebarPlan, SidebarState};

// Export catalog model
pub use catalog::{Product, Rating, CatalogStatus, format_price, filled_stars};
pub use catalog_view::{CatalogViewPlan, CatalogLayout, CardPlan};

pub use route::Route;
pub use contact::{ContactForm, Submission};
pub use error::{ThemeError, CatalogError, ContactError};
