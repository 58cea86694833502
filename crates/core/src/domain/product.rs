use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

pub const MAX_NAME_CHARS: usize = 200;
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Electronics,
    Clothing,
    Home,
    Sports,
    Books,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 5] =
        [Self::Electronics, Self::Clothing, Self::Home, Self::Sports, Self::Books];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Clothing => "clothing",
            Self::Home => "home",
            Self::Sports => "sports",
            Self::Books => "books",
        }
    }

    pub fn allowed_values() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive lookup; `"Electronics"` is not a category.
impl FromStr for ProductCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| format!("unknown product category `{value}`"))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "product_id")]
    pub id: ProductId,
    #[serde(rename = "product_name")]
    pub name: String,
    #[serde(rename = "product_description")]
    pub description: String,
    #[serde(rename = "product_price_usd")]
    pub price: Decimal,
    #[serde(rename = "product_category")]
    pub category: ProductCategory,
    #[serde(rename = "product_in_stock")]
    pub in_stock: bool,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        category: ProductCategory,
        in_stock: bool,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            description: description.into(),
            price,
            category,
            in_stock,
        }
    }

    /// Checks the record invariants enforced when a catalog is built.
    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid = |reason: String| DomainError::InvalidProduct { product_id: self.id, reason };

        if self.id.0 == 0 {
            return Err(invalid("product_id must be positive".to_string()));
        }

        let name_chars = self.name.chars().count();
        if name_chars == 0 || name_chars > MAX_NAME_CHARS {
            return Err(invalid(format!(
                "product_name must be 1..={MAX_NAME_CHARS} characters (got {name_chars})"
            )));
        }

        let description_chars = self.description.chars().count();
        if description_chars == 0 || description_chars > MAX_DESCRIPTION_CHARS {
            return Err(invalid(format!(
                "product_description must be 1..={MAX_DESCRIPTION_CHARS} characters (got {description_chars})"
            )));
        }

        if self.price <= Decimal::ZERO {
            return Err(invalid(format!("product_price_usd must be positive (got {})", self.price)));
        }
        if self.price.scale() != 2 {
            return Err(invalid(format!(
                "product_price_usd must have exactly 2 decimal places (got {})",
                self.price
            )));
        }

        Ok(())
    }
}
