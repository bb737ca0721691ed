//! Ranking engine / 排序引擎
//!
//! Issues the compiled MATCH expression against the dict store and its
//! FTS5 index, applies the 3-tier match weight, collapses rows that
//! differ only by version into one translation pair, aggregates per-pair
//! frequency over the full match set, sorts and paginates.
//!
//! Match weight / 匹配权重：
//! - 3: column value equals the trimmed query, case-insensitive / 完全匹配
//! - 2: index rank 0, best tier in the engine's convention / 最佳排名
//! - 1: any other match / 其他匹配
//!
//! Queries are read-only and idempotent; errors surface once with the
//! driver message and the engine never retries.

use sqlx::SqlitePool;

use super::query::CompiledQuery;
use crate::error::SearchError;
use crate::models::{SearchMode, TranslationPair};

/// Fixed page size / 固定每页条数
pub const PAGE_SIZE: i64 = 50;

/// Ranked page fetch + distinct pair count / 排序分页查询与去重总数
///
/// The two queries are independent and run concurrently; both must
/// complete before the page is assembled. `frequency` counts raw
/// matching rows per pair before the version collapse, so it is stable
/// across pages.
pub async fn rank(
    pool: &SqlitePool,
    compiled: &CompiledQuery,
    mode: SearchMode,
    offset: i64,
) -> Result<(Vec<TranslationPair>, i64), SearchError> {
    let column = mode.search_column();

    // Window-function dedup: rn = 1 keeps the highest-version row per
    // (origin_name, trans_name), rowid breaks version ties / 窗口函数去重
    let results_sql = format!(
        r#"
        WITH ranked_matches AS (
            SELECT
                d.trans_name,
                d.origin_name,
                d.modid,
                d.version,
                d.key,
                d.curseforge,
                CASE
                    WHEN LOWER(d.{column}) = LOWER(?) THEN 3
                    WHEN dict_fts.rank = 0 THEN 2
                    ELSE 1
                END AS match_weight,
                ROW_NUMBER() OVER (
                    PARTITION BY d.origin_name, d.trans_name
                    ORDER BY d.version DESC, d.rowid DESC
                ) AS rn
            FROM dict AS d
            JOIN dict_fts ON d.rowid = dict_fts.rowid
            WHERE dict_fts MATCH ?
        ),
        frequencies AS (
            SELECT origin_name, trans_name, COUNT(*) AS frequency
            FROM ranked_matches
            GROUP BY origin_name, trans_name
        )
        SELECT
            rm.trans_name, rm.origin_name, rm.modid, rm.version, rm.key,
            rm.curseforge, f.frequency
        FROM ranked_matches AS rm
        JOIN frequencies AS f
            ON rm.origin_name = f.origin_name AND rm.trans_name = f.trans_name
        WHERE rm.rn = 1
        ORDER BY rm.match_weight DESC, f.frequency DESC, rm.origin_name
        LIMIT {limit} OFFSET ?
        "#,
        column = column,
        limit = PAGE_SIZE,
    );

    // Total counts distinct pairs, independent of pagination / 总数统计去重词条
    let count_sql = r#"
        SELECT COUNT(*) AS total
        FROM (
            SELECT 1 FROM dict_fts
            WHERE dict_fts MATCH ?
            GROUP BY origin_name, trans_name
        )
    "#;

    let results_fut = sqlx::query_as::<_, TranslationPair>(&results_sql)
        .bind(&compiled.exact_term)
        .bind(&compiled.expression)
        .bind(offset)
        .fetch_all(pool);

    let count_fut = sqlx::query_as::<_, (i64,)>(count_sql)
        .bind(&compiled.expression)
        .fetch_one(pool);

    let (results, (total,)) = tokio::try_join!(results_fut, count_fut).map_err(|e| {
        tracing::warn!("Dictionary query failed: {}", e);
        SearchError::from(e)
    })?;

    Ok((results, total))
}
