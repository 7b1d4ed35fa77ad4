//! `prodcat-filter`: narrowing the enriched catalog by user, name and category.
//!
//! - [`criteria`]: the filter criteria value and its reset operations
//! - [`visible`]: the three-pass filter over enriched products
//! - [`view`]: the interactive state holder driven by UI events
//! - [`panel`]: the read-only view model a renderer draws

pub mod criteria;
pub mod panel;
pub mod view;
pub mod visible;

pub use criteria::{FilterCriteria, Selection, ALL};
pub use panel::{
    CategoryButton, FilterPanel, ProductRow, ProductTable, Tone, UserCell, UserTab,
    NO_RESULTS_MESSAGE, TABLE_HEADERS,
};
pub use view::CatalogView;
pub use visible::filter_visible;
