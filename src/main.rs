use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moddict_backend::api;
use moddict_backend::cache::MemoryCache;
use moddict_backend::config;
use moddict_backend::db;
use moddict_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moddict_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration / 加载配置
    let app_config = config::load_config().map_err(anyhow::Error::msg)?;
    tracing::info!(
        "Server will listen on {}:{}",
        app_config.server.host,
        app_config.server.port
    );

    // Create data directory if not exists / 创建数据目录
    let data_dir = app_config.get_data_dir();
    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)?;
        tracing::info!("Created data directory: {:?}", data_dir);
    }

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| app_config.get_database_url());

    let pool = db::connect(&database_url).await?;

    // Bootstrap dict + FTS mirror on an empty file; ingestion is
    // out-of-band / 空库时建表，数据由外部导入
    db::init_schema(&pool).await?;

    let cache = Arc::new(MemoryCache::new(app_config.get_cache_ttl()));
    tracing::info!(
        "Response cache ready (TTL {}s)",
        app_config.cache.ttl_secs
    );

    let state = Arc::new(AppState::new(pool, cache));

    let app = api::router(state).layer(TraceLayer::new_for_http());

    let bind_addr = app_config.get_bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
