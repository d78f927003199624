mod compare;
mod health;
mod metrics;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::state::AppState;

pub use compare::compare_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;

pub fn router(state: Arc<AppState>) -> Router {
    crate::metrics::init();

    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/api/compare", post(compare_handler))
        .with_state(state)
}
