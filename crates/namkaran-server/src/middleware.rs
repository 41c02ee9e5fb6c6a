use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::api::ApiError;

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

#[derive(Debug, Clone)]
struct RateLimitWindow {
    started_at: Instant,
    count: usize,
}

/// Fixed-window limiter shared by every consultation route.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    max_requests: usize,
    window: Duration,
    state: Arc<Mutex<RateLimitWindow>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Arc::new(Mutex::new(RateLimitWindow {
                started_at: Instant::now(),
                count: 0,
            })),
        }
    }
}

/// Axum middleware that extracts or generates a request ID.
///
/// If the incoming request has an `x-request-id` header, that value is used.
/// Otherwise a new `UUIDv4` is generated. The ID is:
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert("x-request-id", val);
    }

    res
}

/// Middleware enforcing a fixed request-per-window limit.
pub async fn enforce_rate_limit(
    State(rate_limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    let mut window = rate_limit.state.lock().await;
    let elapsed = window.started_at.elapsed();

    if elapsed >= rate_limit.window {
        window.started_at = Instant::now();
        window.count = 0;
    }

    if window.count >= rate_limit.max_requests {
        drop(window);
        let req_id = req
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_default();
        tracing::warn!(request_id = %req_id, "rate limit exceeded");
        return ApiError::new(req_id, "rate_limited", "rate limit exceeded").into_response();
    }

    window.count += 1;
    drop(window);

    next.run(req).await
}
