//! Middleware stack for the API server
//!
//! Provides logging, request ID generation, rate limiting, and timeouts.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use campus_common::RateLimitConfig;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Apply the base middleware stack to the router
pub fn apply_middleware(router: Router<AppState>) -> Router<AppState> {
    router.layer(
        ServiceBuilder::new()
            // Request ID
            .layer(SetRequestIdLayer::new(
                header::HeaderName::from_static(REQUEST_ID_HEADER),
                MakeRequestUuid,
            ))
            .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
                REQUEST_ID_HEADER,
            )))
            // Tracing
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get(REQUEST_ID_HEADER)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("unknown");

                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id,
                        )
                    })
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            // Timeout (returns 503 Service Unavailable on timeout)
            .layer(TimeoutLayer::with_status_code(
                StatusCode::SERVICE_UNAVAILABLE,
                Duration::from_secs(30),
            )),
    )
}

/// Apply rate limiting to the router
///
/// Uses GlobalKeyExtractor, so the limit applies to the whole deployment
/// rather than per client IP. Health probes are routed around this layer.
pub fn apply_rate_limit(
    router: Router<AppState>,
    rate_limit_config: &RateLimitConfig,
) -> Router<AppState> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(rate_limit_config.requests_per_second.into())
            .burst_size(rate_limit_config.burst)
            .key_extractor(GlobalKeyExtractor)
            .finish()
            .expect("Failed to create rate limiter configuration"),
    );

    router.layer(GovernorLayer {
        config: governor_conf,
    })
}
