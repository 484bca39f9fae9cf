pub mod dto;
pub mod problem;
pub mod routes;
pub mod state;
pub mod trace;

use axum::Router;
use state::AppState;

/// Builds the full HTTP application: client routes plus the operational
/// endpoints, wrapped in trace-id and request-log middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::ready::router())
        .merge(routes::metrics::router())
        .merge(routes::client::router())
        .layer(axum::middleware::from_fn(trace::request_log_middleware))
        .layer(axum::middleware::from_fn(trace::trace_id_middleware))
        .with_state(state)
}
