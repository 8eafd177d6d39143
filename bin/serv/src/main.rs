use std::net::SocketAddr;

use axum::{Router, routing::get};
use pb_api::{
    config::ApiConfig,
    metrics,
    middleware::{cors, rate_limit, request_id},
    state::ApiState,
};
use tower_governor::GovernorLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    pb_api::tracing::init_tracing(config.env);

    // Connect, then ensure the schema and badge catalog are in place
    let pool = pb_db::create_pool(&config.database_url, 10).await?;
    pb_db::ensure_db_and_migrate(&config.database_url, &pool).await?;

    let state = ApiState::new(&config, pool).await?;

    // Prometheus exporter; /metrics carries its own state
    let metrics_handle = metrics::init_metrics()?;
    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = pb_api::router::router()
        .with_state(state)
        .merge(metrics_routes)
        .layer(GovernorLayer::new(rate_limit::general_rate_limit()))
        .layer(axum::middleware::from_fn(metrics::track_metrics))
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(cors::create_cors_layer(config.allowed_origins.clone()))
        .layer(TraceLayer::new_for_http());

    // Start the server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server running on http://{}", config.bind_addr);
    axum::serve(
        listener,
        // Rate limiting keys on the peer IP, which needs connect info
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
