use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    middleware::from_fn,
    routing::{delete, get, post, put},
    Router,
};
use service_core::middleware::{
    metrics::metrics_middleware, request_id_middleware,
    security_headers::security_headers_middleware, RequestId,
};
use time::Duration;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
use tracing::Span;

use crate::config::Settings;
use crate::handlers::{
    app::{health_check, index, not_found},
    compliance, contract,
    metrics::metrics,
    negotiation, ocr, risk,
};
use crate::AppState;

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.as_str())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    )
}

pub fn build_router(state: AppState, settings: &Settings) -> Router {
    // Screen state is per session and in-memory only; a restart resets every screen
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(settings.session.secure_cookie)
        .with_expiry(Expiry::OnInactivity(Duration::hours(
            settings.session.inactivity_hours,
        )));

    let upload_limit = DefaultBodyLimit::max(settings.server.max_upload_bytes);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/risk", get(risk::get_state).delete(risk::reset))
        .route("/risk/analyze", post(risk::analyze).layer(upload_limit.clone()))
        .route(
            "/compliance",
            get(compliance::get_state).delete(compliance::reset),
        )
        .route(
            "/compliance/analyze",
            post(compliance::analyze).layer(upload_limit),
        )
        .route("/contracts", get(contract::get_state).delete(contract::reset))
        .route("/contracts/types", get(contract::list_types))
        .route("/contracts/generate", post(contract::generate))
        .route(
            "/negotiation",
            get(negotiation::get_state).delete(negotiation::reset),
        )
        .route("/negotiation/messages", post(negotiation::send_message))
        .route("/negotiation/error", delete(negotiation::clear_error))
        .route("/ocr", get(ocr::get_state).delete(ocr::reset))
        .route("/ocr/text", put(ocr::update_text))
        .route("/ocr/analyze", post(ocr::analyze))
        .fallback(not_found)
        .layer(session_layer)
        .layer(from_fn(metrics_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        // Outermost, so the span and every handler see the request ID
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
