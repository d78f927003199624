use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use crate::models::{ComparisonRequest, FeedbackResponse};
use crate::state::AppState;

// Error text from the comparison itself still comes back as 200 feedback
pub async fn compare_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ComparisonRequest>,
) -> Result<Json<FeedbackResponse>, (StatusCode, String)> {
    let feedback = state
        .compare
        .submit(payload)
        .await
        .map_err(|e| (StatusCode::SERVICE_UNAVAILABLE, e.to_string()))?;

    Ok(Json(FeedbackResponse { feedback }))
}
