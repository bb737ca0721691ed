//! Response cache / 响应缓存
//!
//! Caches full serialized /search responses keyed by the request target,
//! so identical lookups skip parsing, compiling and ranking entirely.
//! The cache is injected behind a trait so tests can substitute a
//! recording fake and assert key derivation without a real backend.
//!
//! There is no explicit invalidation; staleness is bounded only by the
//! TTL. The dictionary data changes infrequently and out-of-band.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Sweep expired entries once the map grows past this / 超过该大小时清理过期条目
const SWEEP_THRESHOLD: usize = 4096;

/// Injectable response cache seam / 可注入的响应缓存接口
pub trait ResponseCache: Send + Sync {
    /// Look up a cached response body / 查询缓存的响应体
    fn get(&self, key: &str) -> Option<String>;

    /// Store a response body, fire-and-forget / 存储响应体，不阻塞调用方
    ///
    /// Failures must be swallowed by implementations; a cache write is
    /// never allowed to fail a request.
    fn put(&self, key: String, value: String);

    /// Entry lifetime / 条目有效期
    fn ttl(&self) -> Duration;
}

struct CacheEntry {
    body: String,
    expires_at: Instant,
}

/// In-memory response cache / 内存响应缓存
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Number of live (unexpired) entries / 未过期条目数
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .values()
            .filter(|e| e.expires_at > now)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResponseCache for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;
        if entry.expires_at <= Instant::now() {
            // Expired entries read as misses, removal happens on sweep / 过期条目视为未命中
            return None;
        }
        Some(entry.body.clone())
    }

    fn put(&self, key: String, value: String) {
        let now = Instant::now();
        let mut entries = self.entries.write();
        if entries.len() >= SWEEP_THRESHOLD {
            entries.retain(|_, e| e.expires_at > now);
        }
        entries.insert(
            key,
            CacheEntry {
                body: value,
                expires_at: now + self.ttl,
            },
        );
    }

    fn ttl(&self) -> Duration {
        self.ttl
    }
}
