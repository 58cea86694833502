pub mod filter;
pub mod seed;
pub mod validation;

use std::collections::HashSet;

use crate::domain::product::{Product, ProductId};
use crate::errors::DomainError;

use self::filter::{filter_products, ProductFilterCriteria};
use self::validation::{validate_criteria, CriteriaValidationFailure};

/// Fixed, ordered product list. Built once at startup and only ever read.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog after checking every record invariant and id uniqueness.
    pub fn new(products: Vec<Product>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(DomainError::DuplicateProductId(product.id));
            }
        }

        Ok(Self { products })
    }

    pub fn seeded() -> Result<Self, DomainError> {
        Self::new(seed::seed_products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == product_id)
    }

    /// Validates `criteria`, then filters. A validation failure short-circuits
    /// before any record is inspected.
    pub fn search(
        &self,
        criteria: &ProductFilterCriteria,
    ) -> Result<Vec<&Product>, CriteriaValidationFailure> {
        validate_criteria(criteria)?;
        Ok(filter_products(&self.products, criteria))
    }
}
