use std::sync::Arc;

use catalog_core::config::AppConfig;
use catalog_core::{Catalog, DomainError};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub catalog: Arc<Catalog>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("catalog seed data is invalid: {0}")]
    Catalog(#[from] DomainError),
}

pub fn bootstrap(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        application_name = %config.application.name,
        application_version = %config.application.version,
        "starting application bootstrap"
    );

    let catalog = Catalog::seeded()?;
    info!(
        event_name = "system.bootstrap.catalog_loaded",
        correlation_id = "bootstrap",
        product_count = catalog.len(),
        "product catalog loaded"
    );

    Ok(Application { config, catalog: Arc::new(catalog) })
}
