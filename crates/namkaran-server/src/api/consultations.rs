//! Consultation handler: form payload in, astrology result out.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Extension, Json,
};
use namkaran_engine::{AstrologyResult, BirthRequest, EngineError};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct ConsultationQuery {
    pub seed: Option<u64>,
}

pub(super) async fn create_consultation(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<ConsultationQuery>, QueryRejection>,
    body: Result<Json<BirthRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<AstrologyResult>>), ApiError> {
    let Query(query) = query.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "validation_error", rejection.body_text())
    })?;
    let Json(request) = body.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "validation_error", rejection.body_text())
    })?;

    let consultation = state
        .engine
        .consult(request, query.seed)
        .await
        .map_err(|e| map_engine_error(req_id.0.clone(), &e))?;

    tracing::debug!(
        request_id = %req_id.0,
        source = ?consultation.trace.source,
        rules = ?consultation.trace.rules,
        "consultation served"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: consultation.result,
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}

fn map_engine_error(request_id: String, error: &EngineError) -> ApiError {
    match error {
        EngineError::InvalidInput(message) => {
            ApiError::new(request_id, "validation_error", message.clone())
        }
        EngineError::SavedResult(_) => {
            tracing::error!(error = %error, "unexpected saved-result error");
            ApiError::new(request_id, "internal_error", "consultation failed")
        }
    }
}
