//! Enrichment: join products to their category and the category's owner.

use serde::{Deserialize, Serialize};

use prodcat_core::entity::find_by_id;
use prodcat_core::{CategoryId, DomainError, DomainResult, Entity, ProductId};

use crate::{Category, Product, User};

/// Denormalized product view record (derived, never persisted).
///
/// `user` is `None` when the category's owner id does not resolve; consumers
/// must handle that case instead of assuming an owner exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
    pub category: Category,
    pub user: Option<User>,
}

impl EnrichedProduct {
    /// Name of the owning user, if any.
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}

impl Entity for EnrichedProduct {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Build one view record per product, preserving input order.
///
/// Fails fast with [`DomainError::MissingCategory`] on the first product whose
/// category id does not resolve. An unresolved owner is not an error: the
/// record gets `user: None`.
pub fn enrich(
    products: &[Product],
    categories: &[Category],
    users: &[User],
) -> DomainResult<Vec<EnrichedProduct>> {
    products
        .iter()
        .map(|product| {
            let category = find_by_id(categories, product.category_id)
                .ok_or_else(|| DomainError::missing_category(product.id, product.category_id))?;

            let user = find_by_id(users, category.owner_id).cloned();
            if user.is_none() {
                tracing::warn!(
                    product_id = %product.id,
                    category_id = %category.id,
                    owner_id = %category.owner_id,
                    "category owner not found; product has no user"
                );
            }

            Ok(EnrichedProduct {
                id: product.id,
                name: product.name.clone(),
                category_id: product.category_id,
                category: category.clone(),
                user,
            })
        })
        .collect()
}
