use crate::config::AppConfig;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{error, warn};

use super::seed::seed_database;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
/// 包括存储初始化、数据库迁移和默认数据写入
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let config = AppConfig::get();

    let storage = crate::storage::create_storage(&config.database)
        .await
        .unwrap_or_else(|e| {
            error!("{}", e.format_colored());
            std::process::exit(1);
        });
    warn!("Storage backend initialized and migrations completed");

    // 写入默认数据失败不阻止启动
    if let Err(e) = seed_database(&storage, &config.seed, &config.argon2).await {
        warn!("Database seeding failed: {}", e.format_simple());
    }

    StartupContext { storage }
}
