use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::catalog::filter::ProductFilterCriteria;
use crate::domain::product::ProductCategory;

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CriteriaValidationFailure {
    #[error("minimum price {min_price} exceeds maximum price {max_price}")]
    InvalidPriceRange { min_price: Decimal, max_price: Decimal },
    #[error("unknown category `{category}`")]
    InvalidCategory { category: String },
}

impl CriteriaValidationFailure {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPriceRange { .. } => "invalid_price_range",
            Self::InvalidCategory { .. } => "invalid_category",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::InvalidPriceRange { .. } => {
                "Minimum price cannot exceed maximum price".to_string()
            }
            Self::InvalidCategory { .. } => format!(
                "Category must be one of: {}",
                ProductCategory::allowed_values().join(", ")
            ),
        }
    }

    pub fn details(&self) -> Value {
        match self {
            Self::InvalidPriceRange { min_price, max_price } => {
                json!({ "min_price": min_price, "max_price": max_price })
            }
            Self::InvalidCategory { category } => json!({
                "category": category,
                "allowed_categories": ProductCategory::allowed_values(),
            }),
        }
    }
}

/// Rejects criteria combinations that cannot be filtered meaningfully.
///
/// The price range is checked before the category.
pub fn validate_criteria(criteria: &ProductFilterCriteria) -> Result<(), CriteriaValidationFailure> {
    if let (Some(min_price), Some(max_price)) = (criteria.min_price, criteria.max_price) {
        if min_price > max_price {
            return Err(CriteriaValidationFailure::InvalidPriceRange { min_price, max_price });
        }
    }

    if let Some(category) = &criteria.category {
        if category.parse::<ProductCategory>().is_err() {
            return Err(CriteriaValidationFailure::InvalidCategory { category: category.clone() });
        }
    }

    Ok(())
}
