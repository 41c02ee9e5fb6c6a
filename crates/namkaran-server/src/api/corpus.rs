use axum::{extract::State, Extension, Json};
use namkaran_core::PartitionSummary;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

pub(super) async fn list_partitions(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<PartitionSummary>>> {
    Json(ApiResponse {
        data: state.engine.corpus().summaries(),
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::super::tests::{body_json, test_app};

    #[tokio::test]
    async fn lists_every_partition() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/corpus")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let rows = json["data"].as_array().expect("data array");
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0]["gender"], "boy");
        assert_eq!(rows[0]["kind"], "category");
        assert_eq!(rows[0]["label"], "Sanskrit/Hindu Names");
        assert_eq!(rows[0]["count"], 26);
    }
}
