//! Serve 命令：启动 REST API 服务

use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::api;
use crate::config::{DbConfig, ServerConfig};
use crate::store;

/// 启动 API 服务（阻塞直到进程退出）
pub async fn execute(port: Option<u16>) {
    // 初始化日志（RUST_LOG 控制级别，默认 info）
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server_config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("invalid server config: {err}");
            std::process::exit(1);
        }
    };
    let port = port.unwrap_or(server_config.port);

    let db_config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("invalid database config: {err}");
            std::process::exit(1);
        }
    };

    // 连接池惰性建立，数据库暂时不可用不阻止启动
    let store = match store::connect(&db_config).await {
        Ok(store) => store,
        Err(err) => {
            error!("failed to initialize task store: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = api::start_server(port, store).await {
        error!("API server error: {err}");
        std::process::exit(1);
    }
}
