//! The loaded catalog: source collections plus the enriched product list.

use std::collections::HashSet;

use prodcat_core::{DomainError, DomainResult, Entity};

use crate::{enrich, Category, EnrichedProduct, Product, User};

/// Immutable catalog built once at startup.
///
/// Construction runs enrichment eagerly; the enriched list is then shared by
/// every filter evaluation and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
    enriched: Vec<EnrichedProduct>,
}

impl Catalog {
    pub fn new(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> DomainResult<Self> {
        ensure_unique_ids("user", &users)?;
        ensure_unique_ids("category", &categories)?;
        ensure_unique_ids("product", &products)?;

        let enriched = enrich(&products, &categories, &users)?;
        tracing::info!(
            users = users.len(),
            categories = categories.len(),
            products = enriched.len(),
            "catalog loaded"
        );
        Ok(Self {
            users,
            categories,
            products,
            enriched,
        })
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn enriched(&self) -> &[EnrichedProduct] {
        &self.enriched
    }
}

fn ensure_unique_ids<E: Entity>(kind: &str, items: &[E]) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    match items.iter().map(Entity::id).find(|id| !seen.insert(*id)) {
        Some(id) => Err(DomainError::validation(format!("duplicate {kind} id {id:?}"))),
        None => Ok(()),
    }
}
