//! Product listing endpoint.
//!
//! - `GET /api/products` with optional `min_price`, `max_price`, `category`
//!   and `keyword` query parameters. The `min_price_usd`, `max_price_usd` and
//!   `search_keyword` spellings are accepted as aliases.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use catalog_core::{
    errors::{ApplicationError, InterfaceError},
    Catalog, Product, ProductFilterCriteria,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProductsState {
    catalog: Arc<Catalog>,
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

/// Raw query parameters. Prices stay textual until [`ProductQuery::into_criteria`]
/// so a malformed amount can be reported against its parameter name.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    #[serde(alias = "min_price_usd")]
    pub min_price: Option<String>,
    #[serde(alias = "max_price_usd")]
    pub max_price: Option<String>,
    pub category: Option<String>,
    #[serde(alias = "search_keyword")]
    pub keyword: Option<String>,
}

impl ProductQuery {
    pub fn into_criteria(self) -> Result<ProductFilterCriteria, ApplicationError> {
        Ok(ProductFilterCriteria {
            min_price: parse_price("min_price", self.min_price)?,
            max_price: parse_price("max_price", self.max_price)?,
            category: self.category,
            keyword: self.keyword,
        })
    }
}

fn parse_price(parameter: &str, raw: Option<String>) -> Result<Option<Decimal>, ApplicationError> {
    raw.map(|value| {
        value.trim().parse::<Decimal>().map_err(|error| ApplicationError::InvalidQuery {
            parameter: parameter.to_string(),
            message: format!("`{value}` is not a decimal amount ({error})"),
        })
    })
    .transpose()
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub total_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_code: String,
    pub error_message: String,
    pub error_details: Option<Value>,
    pub timestamp_utc: String,
}

impl ErrorResponse {
    fn new(code: impl Into<String>, message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            error_code: code.into(),
            error_message: message.into(),
            error_details: details,
            timestamp_utc: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug)]
pub struct ApiError(pub InterfaceError);

impl From<InterfaceError> for ApiError {
    fn from(value: InterfaceError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let user_message = self.0.user_message();
        let (status, body) = match self.0 {
            InterfaceError::BadRequest { code, message, details, .. } => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(code, message, details))
            }
            InterfaceError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("internal_error", user_message, None),
            ),
        };

        (status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/api/products", get(list_products))
        .with_state(ProductsState { catalog })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub async fn list_products(
    State(state): State<ProductsState>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let correlation_id = Uuid::new_v4().to_string();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                event_name = "api.products.query_rejected",
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "product query string could not be parsed"
            );
            return Err(ApplicationError::InvalidQuery {
                parameter: "query".to_string(),
                message: rejection.body_text(),
            }
            .into_interface(correlation_id.as_str())
            .into());
        }
    };

    info!(
        event_name = "api.products.request_received",
        correlation_id = %correlation_id,
        endpoint = "/api/products",
        http_method = "GET",
        min_price = ?query.min_price,
        max_price = ?query.max_price,
        category = ?query.category,
        keyword = ?query.keyword,
        "product listing requested"
    );

    let criteria = query.into_criteria().map_err(|error| {
        warn!(
            event_name = "api.products.query_rejected",
            correlation_id = %correlation_id,
            error = %error,
            "product query parameter could not be parsed"
        );
        ApiError::from(error.into_interface(correlation_id.as_str()))
    })?;

    let products: Vec<Product> = match state.catalog.search(&criteria) {
        Ok(matched) => matched.into_iter().cloned().collect(),
        Err(failure) => {
            warn!(
                event_name = "api.products.validation_failed",
                correlation_id = %correlation_id,
                error_code = failure.code(),
                error = %failure,
                "product filter criteria rejected"
            );
            return Err(ApplicationError::from(failure)
                .into_interface(correlation_id.as_str())
                .into());
        }
    };

    info!(
        event_name = "api.products.response_prepared",
        correlation_id = %correlation_id,
        endpoint = "/api/products",
        products_count = products.len(),
        filtered = !criteria.is_empty(),
        "product listing prepared"
    );

    Ok(Json(ProductListResponse { total_count: products.len(), products }))
}
