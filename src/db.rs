//! Dictionary database access / 词典数据库访问
//!
//! The service treats the dictionary as a read-only row store plus an
//! FTS5 index over the two searchable columns. `init_schema` only
//! bootstraps an empty file so the binary and the test suite can start;
//! real data is ingested out-of-band.

use anyhow::Result;
use sqlx::{
    sqlite::{SqlitePool, SqlitePoolOptions},
    Pool, Sqlite,
};

/// Open the dictionary database with WAL mode / 以WAL模式打开词典数据库
pub async fn connect(database_url: &str) -> Result<Pool<Sqlite>> {
    let db = SqlitePoolOptions::new()
        .max_connections(4)
        .connect(database_url)
        .await?;

    // 启用WAL模式，提高并发性能
    sqlx::query("PRAGMA journal_mode=WAL").execute(&db).await?;

    // 设置busy_timeout，避免锁超时
    sqlx::query("PRAGMA busy_timeout=5000").execute(&db).await?;

    sqlx::query("PRAGMA synchronous=NORMAL").execute(&db).await?;

    tracing::info!("Dictionary database opened (WAL mode)");

    Ok(db)
}

/// Create the dict table and its FTS5 mirror if absent / 表不存在时创建词典表及FTS5镜像
///
/// External-content FTS5 keeps the index rows in lockstep with `dict`
/// via triggers, so out-of-band ingestion only has to touch `dict`.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dict (
            trans_name TEXT NOT NULL,
            origin_name TEXT NOT NULL,
            modid TEXT NOT NULL DEFAULT '',
            version TEXT NOT NULL DEFAULT '',
            key TEXT NOT NULL DEFAULT '',
            curseforge TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE VIRTUAL TABLE IF NOT EXISTS dict_fts USING fts5(
            trans_name,
            origin_name,
            content='dict',
            content_rowid='rowid'
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TRIGGER IF NOT EXISTS dict_ai AFTER INSERT ON dict BEGIN
            INSERT INTO dict_fts(rowid, trans_name, origin_name)
            VALUES (new.rowid, new.trans_name, new.origin_name);
        END
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TRIGGER IF NOT EXISTS dict_ad AFTER DELETE ON dict BEGIN
            INSERT INTO dict_fts(dict_fts, rowid, trans_name, origin_name)
            VALUES ('delete', old.rowid, old.trans_name, old.origin_name);
        END
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TRIGGER IF NOT EXISTS dict_au AFTER UPDATE ON dict BEGIN
            INSERT INTO dict_fts(dict_fts, rowid, trans_name, origin_name)
            VALUES ('delete', old.rowid, old.trans_name, old.origin_name);
            INSERT INTO dict_fts(rowid, trans_name, origin_name)
            VALUES (new.rowid, new.trans_name, new.origin_name);
        END
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
