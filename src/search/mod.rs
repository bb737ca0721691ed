//! Search module - query parsing and ranking / 搜索模块
//!
//! Architecture principles / 架构原则：
//! - Search module only exposes primitive operations: parse, compile, rank
//! - The HTTP layer controls validation, caching and response shaping
//! - Call direction: api → search (unidirectional) / 调用方向
//!
//! Query features / 查询特性：
//! - Quoted exact phrase, `-word` exclusion, `word*` prefix, `word+` prefix
//!   expansion with bare-word suppression / 短语、排除、前缀语法
//! - 3-tier match weight + frequency aggregation over version-collapsed
//!   translation pairs / 三级权重与词频聚合

pub mod query;
pub mod ranking;

pub use query::{compile, parse, CompiledQuery, SearchIntent};
pub use ranking::{rank, PAGE_SIZE};
