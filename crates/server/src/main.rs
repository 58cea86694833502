mod bootstrap;
mod health;
mod products;
mod router;

use std::path::PathBuf;

use anyhow::Result;
use catalog_core::config::{AppConfig, ConfigOverrides, LoadOptions, LogFormat};
use clap::Parser;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(
    name = "catalog-server",
    about = "Product catalog HTTP API",
    long_about = "Serve the in-memory product catalog with price, category and keyword filtering.",
    after_help = "Examples:\n  catalog-server\n  catalog-server --port 9000 --log-format pretty\n  catalog-server --config config/catalog.toml --no-cors"
)]
struct ServerArgs {
    #[arg(long, help = "Path to a TOML config file (must exist when given)")]
    config: Option<PathBuf>,
    #[arg(long, help = "Address to bind, overriding config and environment")]
    bind: Option<String>,
    #[arg(long, help = "Port to listen on, overriding config and environment")]
    port: Option<u16>,
    #[arg(long, help = "Log level: trace|debug|info|warn|error")]
    log_level: Option<String>,
    #[arg(long, value_parser = parse_log_format, help = "Log format: compact|pretty|json")]
    log_format: Option<LogFormat>,
    #[arg(long, help = "Disable the permissive CORS layer")]
    no_cors: bool,
}

impl ServerArgs {
    fn into_load_options(self) -> LoadOptions {
        LoadOptions {
            require_file: self.config.is_some(),
            config_path: self.config,
            overrides: ConfigOverrides {
                bind_address: self.bind,
                port: self.port,
                log_level: self.log_level,
                log_format: self.log_format,
                cors_enabled: self.no_cors.then_some(false),
            },
        }
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    value.parse::<LogFormat>().map_err(|error| error.to_string())
}

fn init_logging(config: &AppConfig) {
    use catalog_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run(ServerArgs::parse()).await
}

async fn run(args: ServerArgs) -> Result<()> {
    // Load config and initialize logging before any other operations
    let config = AppConfig::load(args.into_load_options())?;
    init_logging(&config);

    info!(
        event_name = "system.server.starting",
        correlation_id = "bootstrap",
        application_name = %config.application.name,
        application_version = %config.application.version,
        log_level = %config.logging.level,
        cors_enabled = config.cors.enabled,
        "catalog server starting"
    );

    let app = bootstrap::bootstrap(config)?;
    let address = app.config.listen_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        event_name = "system.server.started",
        correlation_id = "bootstrap",
        bind_address = %address,
        "catalog server listening"
    );

    axum::serve(listener, router::build(&app)).with_graceful_shutdown(wait_for_shutdown()).await?;

    info!(
        event_name = "system.server.stopping",
        correlation_id = "shutdown",
        application_name = %app.config.application.name,
        "catalog server stopping"
    );

    Ok(())
}

async fn wait_for_shutdown() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(
            event_name = "system.server.signal_error",
            correlation_id = "shutdown",
            error = %error,
            "failed to listen for shutdown signal"
        );
    }
}
