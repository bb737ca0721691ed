//! Shared application state / 共享应用状态
//!
//! Requests are stateless; the response cache is the only state shared
//! across them. The row store is read-only from this service's side.

use crate::cache::ResponseCache;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct AppState {
    /// Dictionary row store + FTS index / 词典行存储与FTS索引
    pub db: SqlitePool,
    /// Response cache / 响应缓存
    pub cache: Arc<dyn ResponseCache>,
}

impl AppState {
    pub fn new(db: SqlitePool, cache: Arc<dyn ResponseCache>) -> Self {
        Self { db, cache }
    }
}
