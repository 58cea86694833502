pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;

pub use catalog::filter::{filter_products, ProductFilterCriteria};
pub use catalog::validation::{validate_criteria, CriteriaValidationFailure};
pub use catalog::Catalog;
pub use domain::product::{Product, ProductCategory, ProductId};
pub use errors::{ApplicationError, DomainError, InterfaceError};
