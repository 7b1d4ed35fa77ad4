//! Read-only view model for the filter panel and the product table.
//!
//! These types describe *what* to draw; the terminal renderer in the CLI (or
//! any other front end) decides *how*.

use serde::{Deserialize, Serialize};

use prodcat_catalog::{Category, EnrichedProduct, Sex, User};
use prodcat_core::ProductId;

use crate::criteria::{FilterCriteria, Selection};

/// Column headers of the product table.
pub const TABLE_HEADERS: [&str; 4] = ["ID", "Product", "Category", "User"];

/// Empty-state indicator shown instead of an empty table.
pub const NO_RESULTS_MESSAGE: &str = "No products matching selected criteria";

/// One tab in the user filter row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTab {
    pub label: String,
    pub selection: Selection,
    pub active: bool,
}

/// One button in the category filter row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryButton {
    pub label: String,
    pub selection: Selection,
    pub selected: bool,
}

/// The filter controls, derived from the source collections and the criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPanel {
    pub user_tabs: Vec<UserTab>,
    pub search_value: String,
    pub show_clear_button: bool,
    pub category_buttons: Vec<CategoryButton>,
}

impl FilterPanel {
    pub fn build(users: &[User], categories: &[Category], criteria: &FilterCriteria) -> Self {
        let selected_user = &criteria.selected_user_name;
        let user_tabs = std::iter::once(UserTab {
            label: "All".to_string(),
            selection: Selection::All,
            active: selected_user.is_all(),
        })
        .chain(users.iter().map(|user| UserTab {
            label: user.name.clone(),
            selection: Selection::only(user.name.clone()),
            active: selected_user.is_selected(&user.name),
        }))
        .collect();

        let selected_category = &criteria.selected_category_title;
        let category_buttons = std::iter::once(CategoryButton {
            label: "All".to_string(),
            selection: Selection::All,
            selected: selected_category.is_all(),
        })
        .chain(categories.iter().map(|category| CategoryButton {
            label: category.title.clone(),
            selection: Selection::only(category.title.clone()),
            selected: selected_category.is_selected(&category.title),
        }))
        .collect();

        Self {
            user_tabs,
            search_value: criteria.name_query.clone(),
            show_clear_button: !criteria.name_query.is_empty(),
            category_buttons,
        }
    }
}

/// Color hint for the user cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Link,
    Danger,
}

impl From<Sex> for Tone {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Male => Tone::Link,
            Sex::Female => Tone::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCell {
    pub name: String,
    pub tone: Tone,
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// `None` when the category owner could not be resolved.
    pub user: Option<UserCell>,
}

impl From<&EnrichedProduct> for ProductRow {
    fn from(product: &EnrichedProduct) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: format!("{} - {}", product.category.icon, product.category.title),
            user: product.user.as_ref().map(|user| UserCell {
                name: user.name.clone(),
                tone: user.sex.into(),
            }),
        }
    }
}

/// Table body: rows, or the designed empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProductTable {
    Rows { rows: Vec<ProductRow> },
    Empty { message: String },
}

impl ProductTable {
    pub fn build(visible: &[EnrichedProduct]) -> Self {
        if visible.is_empty() {
            ProductTable::Empty {
                message: NO_RESULTS_MESSAGE.to_string(),
            }
        } else {
            ProductTable::Rows {
                rows: visible.iter().map(ProductRow::from).collect(),
            }
        }
    }

    pub fn headers(&self) -> &'static [&'static str] {
        &TABLE_HEADERS
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ProductTable::Empty { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodcat_catalog::{enrich, Product};

    fn users() -> Vec<User> {
        vec![User::new(1, "Max", Sex::Male), User::new(2, "Eve", Sex::Female)]
    }

    fn categories() -> Vec<Category> {
        vec![
            Category::new(10, "Fruits", "🍎", 1),
            Category::new(20, "Drinks", "🍺", 2),
            Category::new(30, "Lost", "❓", 9),
        ]
    }

    #[test]
    fn default_panel_activates_all_controls() {
        let panel = FilterPanel::build(&users(), &categories(), &FilterCriteria::default());

        let active: Vec<&str> = panel
            .user_tabs
            .iter()
            .filter(|t| t.active)
            .map(|t| t.label.as_str())
            .collect();
        assert_eq!(active, vec!["All"]);
        assert_eq!(panel.user_tabs.len(), 3);

        assert!(panel.category_buttons[0].selected);
        assert!(panel.category_buttons[1..].iter().all(|b| !b.selected));
        assert!(!panel.show_clear_button);
    }

    #[test]
    fn panel_reflects_current_selection() {
        let criteria = FilterCriteria::default()
            .with_user(Selection::only("Eve"))
            .with_name_query("ju")
            .with_category(Selection::only("Drinks"));
        let panel = FilterPanel::build(&users(), &categories(), &criteria);

        let active: Vec<&str> = panel
            .user_tabs
            .iter()
            .filter(|t| t.active)
            .map(|t| t.label.as_str())
            .collect();
        assert_eq!(active, vec!["Eve"]);

        let selected: Vec<&str> = panel
            .category_buttons
            .iter()
            .filter(|b| b.selected)
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(selected, vec!["Drinks"]);

        assert_eq!(panel.search_value, "ju");
        assert!(panel.show_clear_button);
    }

    #[test]
    fn rows_format_category_and_user_tone() {
        let products = vec![
            Product::new(1, "Apple", 10),
            Product::new(2, "Juice", 20),
            Product::new(3, "Sock", 30),
        ];
        let enriched = enrich(&products, &categories(), &users()).unwrap();

        let table = ProductTable::build(&enriched);
        let ProductTable::Rows { rows } = table else {
            panic!("Expected rows");
        };

        assert_eq!(rows[0].category, "🍎 - Fruits");
        assert_eq!(
            rows[0].user,
            Some(UserCell {
                name: "Max".to_string(),
                tone: Tone::Link
            })
        );
        assert_eq!(rows[1].user.as_ref().map(|u| u.tone), Some(Tone::Danger));
        assert_eq!(rows[2].user, None);
    }

    #[test]
    fn empty_visible_list_renders_no_results_message() {
        let table = ProductTable::build(&[]);
        assert!(table.is_empty());
        assert_eq!(
            table,
            ProductTable::Empty {
                message: NO_RESULTS_MESSAGE.to_string()
            }
        );
        assert_eq!(table.headers(), &["ID", "Product", "Category", "User"]);
    }
}
