use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::bootstrap::Application;
use crate::{health, products};

pub fn build(app: &Application) -> Router {
    let router = Router::new().merge(products::router(app.catalog.clone())).merge(health::router());

    if !app.config.cors.enabled {
        return router;
    }

    info!(
        event_name = "system.server.cors_enabled",
        correlation_id = "bootstrap",
        allow_origins = "*",
        allow_methods = "*",
        "cors middleware enabled"
    );
    router.layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
}
