//! Request error taxonomy / 请求错误分类
//!
//! Client input errors surface as 400 with a user-facing message,
//! storage failures as 500 with diagnostic detail. Nothing here is
//! retried by the service itself; queries are read-only so the client
//! may retry freely.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors a /search request can end in / 搜索请求可能的错误
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Missing or blank `q` parameter / 查询参数缺失或为空
    #[error("查询参数不能为空")]
    EmptyQuery,

    /// `q` longer than 50 characters / 查询超长
    #[error("搜索词长度不能超过50个字符")]
    QueryTooLong,

    /// Storage / index failure, carries the driver message / 存储或索引失败
    #[error("数据库查询失败")]
    QueryExecution(String),
}

impl SearchError {
    pub fn status(&self) -> StatusCode {
        match self {
            SearchError::EmptyQuery | SearchError::QueryTooLong => StatusCode::BAD_REQUEST,
            SearchError::QueryExecution(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for SearchError {
    fn from(e: sqlx::Error) -> Self {
        SearchError::QueryExecution(e.to_string())
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let body = match &self {
            SearchError::QueryExecution(details) => json!({
                "error": self.to_string(),
                "details": details,
            }),
            _ => json!({ "error": self.to_string() }),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(SearchError::EmptyQuery.status(), StatusCode::BAD_REQUEST);
        assert_eq!(SearchError::QueryTooLong.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            SearchError::QueryExecution("no such table".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(SearchError::EmptyQuery.to_string(), "查询参数不能为空");
        assert_eq!(
            SearchError::QueryTooLong.to_string(),
            "搜索词长度不能超过50个字符"
        );
    }
}
