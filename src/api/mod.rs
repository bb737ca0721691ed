//! HTTP API layer / HTTP接口层
//!
//! Shapes the wire contract: validation, CORS, status codes, cache flow.
//! All responses carry permissive CORS headers for GET/OPTIONS so the
//! static frontend can be hosted anywhere.

pub mod search;

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Assemble the service router / 组装服务路由
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/search", get(search::search).options(search::preflight))
        .route(
            "/api/health",
            get(search::health_check).options(search::preflight),
        )
        .fallback(search::fallback)
        .layer(cors)
        .with_state(state)
}
