//! 任务存储层
//!
//! 统一的 `TaskStore` 契约，postgres / mysql 两个后端按编译特性接入，
//! 运行期由 `DB_DRIVER` 在两者之间选择。

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::DbConfig;
use crate::error::{DaytabError, Result};
use crate::model::{NewTask, Task, TaskPatch};

#[cfg(feature = "mysql")]
pub mod mysql;
#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(test)]
pub mod memory;

#[cfg(not(any(feature = "postgres", feature = "mysql")))]
compile_error!("enable at least one database backend feature: `postgres` or `mysql`");

/// 任务存储接口
///
/// 每个方法都是一次独立的数据库往返，调用之间没有事务关联。
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// 连通性检查，仅启动时调用一次，结果只记日志
    async fn probe(&self) -> Result<()>;

    /// 建表（幂等，`CREATE TABLE IF NOT EXISTS`）
    async fn init_schema(&self) -> Result<()>;

    /// 全量任务列表，按 ID 升序（即插入顺序）
    async fn list(&self) -> Result<Vec<Task>>;

    /// 新建任务：存储层分配 ID，completed 恒为 false
    async fn create(&self, new: NewTask) -> Result<Task>;

    /// 按 ID 更新，patch 中的 None 字段保持原值；ID 不存在报 NotFound
    async fn update(&self, id: i64, patch: TaskPatch) -> Result<Task>;

    /// 按 ID 删除；ID 不存在报 NotFound
    async fn delete(&self, id: i64) -> Result<()>;
}

/// 共享存储句柄，注入 API state
pub type SharedStore = Arc<dyn TaskStore>;

/// 数据库驱动类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    #[cfg(feature = "postgres")]
    Postgres,
    #[cfg(feature = "mysql")]
    MySql,
}

impl Driver {
    /// 默认驱动：两个后端都编译时优先 postgres
    #[cfg(feature = "postgres")]
    pub const DEFAULT: Driver = Driver::Postgres;
    #[cfg(all(feature = "mysql", not(feature = "postgres")))]
    pub const DEFAULT: Driver = Driver::MySql;

    /// 从 DB_DRIVER 配置解析
    pub fn from_config(cfg: &DbConfig) -> Result<Self> {
        match cfg.driver.as_deref() {
            None => Ok(Driver::DEFAULT),
            #[cfg(feature = "postgres")]
            Some("postgres" | "postgresql" | "pg") => Ok(Driver::Postgres),
            #[cfg(feature = "mysql")]
            Some("mysql") => Ok(Driver::MySql),
            Some(other) => Err(DaytabError::config(format!(
                "unsupported DB_DRIVER '{other}' (compiled drivers: {})",
                compiled_drivers().join(", ")
            ))),
        }
    }

    /// 日志用显示名称
    pub fn label(&self) -> &'static str {
        match self {
            #[cfg(feature = "postgres")]
            Driver::Postgres => "PostgreSQL",
            #[cfg(feature = "mysql")]
            Driver::MySql => "MySQL",
        }
    }
}

fn compiled_drivers() -> Vec<&'static str> {
    let mut drivers = Vec::new();
    #[cfg(feature = "postgres")]
    drivers.push("postgres");
    #[cfg(feature = "mysql")]
    drivers.push("mysql");
    drivers
}

/// 按配置创建存储
///
/// 连接池是惰性建立的：启动只做一次 probe 并记录结果，数据库不可达
/// 不会让进程退出，后续请求各自报错。
pub async fn connect(cfg: &DbConfig) -> Result<SharedStore> {
    let driver = Driver::from_config(cfg)?;
    let store: SharedStore = match driver {
        #[cfg(feature = "postgres")]
        Driver::Postgres => Arc::new(postgres::PgTaskStore::connect_lazy(cfg)),
        #[cfg(feature = "mysql")]
        Driver::MySql => Arc::new(mysql::MySqlTaskStore::connect_lazy(cfg)),
    };

    match store.probe().await {
        Ok(()) => {
            info!("Connected to {}", driver.label());
            if let Err(err) = store.init_schema().await {
                warn!("schema init failed: {err}");
            }
        }
        Err(err) => warn!("DB connection error: {err}"),
    }

    Ok(store)
}
