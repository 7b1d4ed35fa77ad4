//! The visible-product filter: three sequential narrowing passes.

use prodcat_catalog::EnrichedProduct;

use crate::criteria::{is_trimmable, FilterCriteria, Selection};

/// Return the products matching `criteria`, in input order.
///
/// Passes run in a fixed order (user, name, category), each over the output
/// of the previous one. A pass whose criterion is the default is skipped.
pub fn filter_visible(
    products: &[EnrichedProduct],
    criteria: &FilterCriteria,
) -> Vec<EnrichedProduct> {
    let mut visible: Vec<&EnrichedProduct> = products.iter().collect();

    if let Selection::Only(user_name) = &criteria.selected_user_name {
        visible.retain(|p| p.user_name() == Some(user_name.as_str()));
        tracing::trace!(pass = "user", %user_name, remaining = visible.len());
    }

    let query = criteria.normalized_name_query();
    if !query.is_empty() {
        visible.retain(|p| {
            p.name
                .to_lowercase()
                .trim_matches(is_trimmable)
                .contains(&query)
        });
        tracing::trace!(pass = "name", %query, remaining = visible.len());
    }

    if let Selection::Only(title) = &criteria.selected_category_title {
        visible.retain(|p| p.category.title == *title);
        tracing::trace!(pass = "category", %title, remaining = visible.len());
    }

    visible.into_iter().cloned().collect()
}
