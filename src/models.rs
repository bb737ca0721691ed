//! Data models for the dictionary search service / 词典搜索服务数据模型

use serde::{Deserialize, Serialize};

/// Search direction / 搜索方向
///
/// `En2zh` looks up English origin names and is translation-primary;
/// `Zh2en` is the inverse. Unrecognized values fall back to `En2zh`
/// silently, matching the behaviour the frontend has always relied on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    En2zh,
    Zh2en,
}

impl SearchMode {
    /// Parse a mode query parameter, unknown values fall back to en2zh / 解析模式参数，未知值回退为 en2zh
    pub fn from_param(s: &str) -> Self {
        match s {
            "zh2en" => SearchMode::Zh2en,
            _ => SearchMode::En2zh,
        }
    }

    /// The FTS column this mode searches on / 该模式所搜索的FTS列
    pub fn search_column(&self) -> &'static str {
        match self {
            SearchMode::En2zh => "origin_name",
            SearchMode::Zh2en => "trans_name",
        }
    }
}

/// A raw dictionary row / 词典原始行
///
/// One (origin_name, trans_name) pair may exist as several rows, one per
/// game version the translation was shipped for.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DictionaryEntry {
    pub trans_name: String,
    pub origin_name: String,
    pub modid: String,
    pub version: String,
    pub key: String,
    pub curseforge: String,
}

/// A deduplicated translation pair / 去重后的翻译词条
///
/// Carries the latest version's metadata plus `frequency`, the count of
/// raw matching rows that collapsed into this pair.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TranslationPair {
    pub trans_name: String,
    pub origin_name: String,
    pub modid: String,
    pub version: String,
    pub key: String,
    pub curseforge: String,
    pub frequency: i64,
}

/// One page of ranked results / 一页排序结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultPage {
    pub query: String,
    pub results: Vec<TranslationPair>,
    /// Distinct pair count across all pages, not raw rows / 全部页面的去重词条总数
    pub total: i64,
    pub page: i64,
    pub mode: String,
}
