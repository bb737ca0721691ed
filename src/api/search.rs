//! Dictionary search endpoint / 词典搜索接口
//!
//! GET /search?q=&page=&mode=: validate, consult the response cache,
//! parse + compile + rank, shape the JSON page, then populate the cache
//! off the response path.

use axum::{
    extract::{OriginalUri, Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::SearchError;
use crate::models::{ResultPage, SearchMode};
use crate::search::{self, PAGE_SIZE};
use crate::state::AppState;

/// Maximum query length in characters / 查询最大字符数
const MAX_QUERY_LEN: usize = 50;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    /// Parsed leniently, anything invalid falls back to 1 / 非法值回退为1
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

/// GET /search - ranked dictionary lookup / 词典排序查询
pub async fn search(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<SearchParams>,
) -> Result<Response, SearchError> {
    let query = params.q.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    if query.chars().count() > MAX_QUERY_LEN {
        return Err(SearchError::QueryTooLong);
    }

    let page = params
        .page
        .as_deref()
        .and_then(|p| p.parse::<i64>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1);
    let mode_param = params.mode.unwrap_or_else(|| "en2zh".to_string());
    let mode = SearchMode::from_param(&mode_param);
    // Saturating: a huge page yields a huge offset and an empty tail
    // page, never an overflow / 超大页码得到空页而不是溢出
    let offset = page.saturating_sub(1).saturating_mul(PAGE_SIZE);

    // Key covers query, page and mode together / 缓存键包含查询、页码与模式
    let cache_key = format!("GET {}", uri);
    if let Some(body) = state.cache.get(&cache_key) {
        tracing::debug!("Cache hit: {}", cache_key);
        return Ok(json_response(body));
    }

    let compiled = search::compile(&query, mode.search_column());
    let (results, total) = search::rank(&state.db, &compiled, mode, offset).await?;

    let result_page = ResultPage {
        query,
        results,
        total,
        page,
        mode: mode_param,
    };
    let body = serde_json::to_string(&result_page)
        .map_err(|e| SearchError::QueryExecution(e.to_string()))?;

    // Populate the cache after the response is built; a failed write
    // never reaches the caller / 响应构建后再写缓存，失败不影响调用方
    let cache = state.cache.clone();
    let cached_body = body.clone();
    tokio::spawn(async move {
        cache.put(cache_key, cached_body);
    });

    Ok(json_response(body))
}

/// OPTIONS handler, CORS headers come from the layer / OPTIONS响应
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Unknown path: OPTIONS still answers 200, anything else 404 / 未知路径处理
pub async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// GET /api/health - 健康检查
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "ModDict 服务运行正常",
        "build_time": env!("BUILD_TIME"),
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}

fn json_response(body: String) -> Response {
    (
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
