//! Daytab 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// Daytab 错误类型
#[derive(Debug, Error)]
pub enum DaytabError {
    /// I/O 错误（终端读写、网络流等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 数据库错误（连接失败、SQL 执行失败）
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    /// HTTP 请求错误（TUI 调用 REST API 失败）
    #[error("HTTP error: {0}")]
    Http(String),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// 资源不存在
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Daytab Result 类型别名
pub type Result<T> = std::result::Result<T, DaytabError>;

impl DaytabError {
    /// 创建 HTTP 错误
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// 创建 NotFound 错误
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
