use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use somnus_batch::BatchScorer;
use somnus_instruments::config::ScoringConfig;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ScoringConfig::from_env()?;
    tracing::info!(
        missing_policy = %config.missing_policy,
        reference_hour = config.reference_hour,
        parallel = config.parallel,
        "starting scoring api"
    );

    let state = AppState {
        scorer: BatchScorer::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route("/score", post(routes::scores::score))
        .route("/reorder", post(routes::scores::reorder))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
