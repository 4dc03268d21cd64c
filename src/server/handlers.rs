use super::types::{ErrorResponse, HealthResponse, InferRequest, InferResponse};
use crate::model::Model;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn Model>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

pub async fn infer(
    State(state): State<AppState>,
    Json(request): Json<InferRequest>,
) -> Result<Json<InferResponse>, (StatusCode, Json<ErrorResponse>)> {
    if let Err(e) = request.validate() {
        warn!("Rejected infer request: {}", e);
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ));
    }

    info!("Received infer request: {}", request.question);

    Ok(Json(state.model.infer(&request.question)))
}
