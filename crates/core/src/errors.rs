use serde_json::{json, Value};
use thiserror::Error;

use crate::catalog::validation::CriteriaValidationFailure;
use crate::domain::product::ProductId;

pub const INVALID_QUERY_CODE: &str = "invalid_query_parameters";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("product {product_id} violates catalog invariant: {reason}")]
    InvalidProduct { product_id: ProductId, reason: String },
    #[error("duplicate product id {0} in catalog")]
    DuplicateProductId(ProductId),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Validation(#[from] CriteriaValidationFailure),
    #[error("invalid query parameter `{parameter}`: {message}")]
    InvalidQuery { parameter: String, message: String },
    #[error("configuration failure: {0}")]
    Configuration(String),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum InterfaceError {
    #[error("bad request ({code}): {message}")]
    BadRequest { code: String, message: String, details: Option<Value>, correlation_id: String },
    #[error("internal error: {message}")]
    Internal { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => {
                "The request could not be processed. Check inputs and try again."
            }
            Self::Internal { .. } => "An unexpected internal error occurred.",
        }
    }

    pub fn correlation_id(&self) -> &str {
        match self {
            Self::BadRequest { correlation_id, .. } | Self::Internal { correlation_id, .. } => {
                correlation_id
            }
        }
    }
}

impl ApplicationError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        let correlation_id = correlation_id.into();
        let mut mapped = InterfaceError::from(self);
        match &mut mapped {
            InterfaceError::BadRequest { correlation_id: id, .. }
            | InterfaceError::Internal { correlation_id: id, .. } => *id = correlation_id,
        }
        mapped
    }
}

impl From<ApplicationError> for InterfaceError {
    fn from(value: ApplicationError) -> Self {
        match value {
            ApplicationError::Validation(failure) => Self::BadRequest {
                code: failure.code().to_owned(),
                message: failure.message(),
                details: Some(failure.details()),
                correlation_id: "unassigned".to_owned(),
            },
            ApplicationError::InvalidQuery { parameter, message } => Self::BadRequest {
                code: INVALID_QUERY_CODE.to_owned(),
                message: format!("Query parameter `{parameter}` is invalid"),
                details: Some(json!({ "parameter": parameter, "reason": message })),
                correlation_id: "unassigned".to_owned(),
            },
            ApplicationError::Domain(error) => {
                Self::Internal { message: error.to_string(), correlation_id: "unassigned".to_owned() }
            }
            ApplicationError::Configuration(message) => {
                Self::Internal { message, correlation_id: "unassigned".to_owned() }
            }
        }
    }
}
