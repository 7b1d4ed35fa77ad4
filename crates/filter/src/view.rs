//! Interactive catalog view: owns the catalog and the current criteria.

use prodcat_catalog::{Catalog, EnrichedProduct};

use crate::criteria::{is_trimmable, FilterCriteria, Selection};
use crate::panel::{FilterPanel, ProductTable};
use crate::visible::filter_visible;

/// State holder driven by UI events.
///
/// Every handler replaces the criteria value as a whole; reads always
/// re-derive the visible list from the immutable enriched catalog.
#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Catalog,
    criteria: FilterCriteria,
}

impl CatalogView {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::default(),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn on_select_user(&mut self, user: Selection) {
        tracing::debug!(user = %user, "user filter selected");
        self.replace(|c| c.with_user(user));
    }

    /// Store the raw search input with leading whitespace removed.
    pub fn on_name_query_change(&mut self, raw: &str) {
        let query = raw.trim_start_matches(is_trimmable);
        tracing::debug!(query, "name query changed");
        self.replace(|c| c.with_name_query(query));
    }

    pub fn on_select_category(&mut self, category: Selection) {
        tracing::debug!(category = %category, "category filter selected");
        self.replace(|c| c.with_category(category));
    }

    pub fn on_clear_name_filter(&mut self) {
        tracing::debug!("name filter cleared");
        self.replace(FilterCriteria::clear_name_filter);
    }

    /// Reset the name query and the user filter; the category stays selected.
    pub fn on_reset_all_filters(&mut self) {
        tracing::debug!("filters reset");
        self.replace(FilterCriteria::reset_all);
    }

    pub fn visible_products(&self) -> Vec<EnrichedProduct> {
        filter_visible(self.catalog.enriched(), &self.criteria)
    }

    pub fn panel(&self) -> FilterPanel {
        FilterPanel::build(self.catalog.users(), self.catalog.categories(), &self.criteria)
    }

    pub fn table(&self) -> ProductTable {
        ProductTable::build(&self.visible_products())
    }

    fn replace(&mut self, update: impl FnOnce(FilterCriteria) -> FilterCriteria) {
        let current = std::mem::take(&mut self.criteria);
        self.criteria = update(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodcat_catalog::{Category, Product, Sex, User};

    fn view() -> CatalogView {
        let catalog = Catalog::new(
            vec![User::new(1, "Max", Sex::Male), User::new(2, "Eve", Sex::Female)],
            vec![
                Category::new(10, "Fruits", "🍎", 1),
                Category::new(20, "Drinks", "🍺", 2),
            ],
            vec![
                Product::new(100, "Banana", 10),
                Product::new(101, "Beer", 20),
                Product::new(102, "Bean juice", 20),
            ],
        )
        .unwrap();
        CatalogView::new(catalog)
    }

    #[test]
    fn name_query_is_stored_with_leading_whitespace_removed() {
        let mut view = view();
        view.on_name_query_change("   be ");
        assert_eq!(view.criteria().name_query, "be ");
        assert!(view.panel().show_clear_button);

        let names: Vec<String> = view.visible_products().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Beer", "Bean juice"]);
    }

    #[test]
    fn leading_byte_order_mark_is_dropped_from_stored_query() {
        let mut view = view();
        view.on_name_query_change("\u{FEFF}BAN");
        assert_eq!(view.criteria().name_query, "BAN");
        assert_eq!(view.visible_products().len(), 1);
    }

    #[test]
    fn whitespace_only_input_stores_empty_query() {
        let mut view = view();
        view.on_name_query_change("    ");
        assert_eq!(view.criteria().name_query, "");
        assert!(!view.panel().show_clear_button);
    }

    #[test]
    fn events_narrow_and_clear_restores() {
        let mut view = view();
        view.on_select_user(Selection::only("Eve"));
        assert_eq!(view.visible_products().len(), 2);

        view.on_name_query_change("juice");
        assert_eq!(view.visible_products().len(), 1);

        view.on_clear_name_filter();
        assert_eq!(view.visible_products().len(), 2);
        assert_eq!(view.criteria().selected_user_name, Selection::only("Eve"));
    }

    #[test]
    fn reset_all_keeps_category_selection() {
        let mut view = view();
        view.on_select_category(Selection::only("Fruits"));
        view.on_select_user(Selection::only("Eve"));
        view.on_name_query_change("x");
        assert!(view.table().is_empty());

        view.on_reset_all_filters();
        assert_eq!(view.criteria().selected_user_name, Selection::All);
        assert_eq!(view.criteria().name_query, "");
        assert_eq!(
            view.criteria().selected_category_title,
            Selection::only("Fruits")
        );
        assert_eq!(view.visible_products().len(), 1);
    }

    #[test]
    fn selecting_all_lifts_the_constraint() {
        let mut view = view();
        view.on_select_category(Selection::only("Drinks"));
        assert_eq!(view.visible_products().len(), 2);
        view.on_select_category(Selection::parse("all"));
        assert_eq!(view.visible_products().len(), 3);
    }
}
