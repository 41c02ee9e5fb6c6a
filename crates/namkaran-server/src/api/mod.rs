mod consultations;
mod corpus;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use namkaran_engine::Engine;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    corpus_partitions: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

fn consultation_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/consultations",
            post(consultations::create_consultation),
        )
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/corpus", get(corpus::list_partitions));

    Router::new()
        .merge(public_routes)
        .merge(consultation_router(rate_limit))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            corpus_partitions: state.engine.corpus().partitions().len(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

async fn not_found(Extension(req_id): Extension<RequestId>) -> ApiError {
    ApiError::new(req_id.0, "not_found", "no such route")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use namkaran_core::NameCorpus;
    use namkaran_engine::EngineConfig;
    use tower::ServiceExt;

    use super::*;

    pub(super) fn test_app() -> Router {
        test_app_with_limit(100)
    }

    pub(super) fn test_app_with_limit(max_requests: usize) -> Router {
        let corpus = NameCorpus::builtin().expect("builtin corpus");
        let engine = Engine::new(
            Arc::new(corpus),
            EngineConfig {
                compute_delay_ms: 0,
                ..EngineConfig::default()
            },
        );
        build_app(
            AppState {
                engine: Arc::new(engine),
            },
            RateLimitState::new(max_requests, Duration::from_secs(60)),
        )
    }

    pub(super) async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        serde_json::from_slice(&body).expect("json parse")
    }

    #[test]
    fn api_error_validation_error_maps_to_bad_request() {
        let response = ApiError::new("req-1", "validation_error", "invalid input").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_unknown_code_maps_to_internal_error() {
        let response = ApiError::new("req-1", "boom", "unexpected").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn health_reports_corpus_size() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .header("x-request-id", "health-1")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["corpus_partitions"], 12);
        assert_eq!(json["meta"]["request_id"], "health-1");
        assert!(json["meta"]["timestamp"].is_string());
    }

    #[tokio::test]
    async fn unknown_route_is_enveloped_404() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/horoscopes")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "not_found");
    }
}
