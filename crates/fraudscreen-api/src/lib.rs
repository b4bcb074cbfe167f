//! fraudscreen-api
//!
//! HTTP surface of the fraud screening service.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod screening;
pub mod state;

use state::AppState;

/// Build the full router with request logging and permissive CORS.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::home::home))
        .route("/detect_fraud", post(routes::detect::detect_fraud))
        .route("/detect_fraud_batch", post(routes::detect::detect_fraud_batch))
        .route("/upload_transactions", post(routes::detect::upload_transactions))
        .route("/report_fraud", post(routes::report::report_fraud))
        .route("/transactions", get(routes::transactions::list_transactions))
        .route(
            "/transactions/{transaction_id}",
            get(routes::transactions::get_transaction),
        )
        .route("/evaluation_metrics", get(routes::metrics::evaluation_metrics))
        .route("/generate_test_data", get(routes::test_data::generate_test_data))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::request_log::request_log))
                .layer(cors),
        )
        .with_state(state)
}
