//! Launchpad API - AWS Lambda Runtime

use lambda_http::{run, Error};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;
use tracing::info;

use launchpad_app::{body_limit_layer, build_cors_layer, create_app};
use launchpad_common::Config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .without_time() // Lambda adds timestamps
        .init();

    info!("Initializing Launchpad API Lambda");

    let config = Config::from_env().map_err(|e| Error::from(format!("Config error: {}", e)))?;

    let pool = PgPool::connect(&config.database_url)
        .await
        .map_err(|e| Error::from(format!("Database error: {}", e)))?;

    info!("Database connection established");

    let app = create_app(&config, pool)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config.cors_allowed_origins))
        .layer(body_limit_layer(config.max_body_bytes));

    info!("Launchpad API Lambda ready to serve requests");

    run(app).await
}
