use std::error::Error;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use funko_shop_api::api::{create_router, AppState};
use funko_shop_api::config::AppConfig;
use funko_shop_api::infrastructure::database;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables before the filter reads RUST_LOG
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("funko_shop_api=debug,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let pool = database::connect(&config).await?;
    database::migrate(&pool).await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState::postgres(pool, &config.jwt_secret);
    let app = create_router(state, &config.api_endpoint)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    tracing::info!(
        "Server listening on {} (api prefix: {:?})",
        config.bind_addr,
        config.api_endpoint
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
