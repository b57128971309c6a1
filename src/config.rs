//! 环境变量配置
//!
//! 与原部署约定一致：全部配置来自进程环境（`DB_*` / `PORT`），无配置文件。

use std::env;

use crate::error::{DaytabError, Result};

/// HTTP 服务默认端口
pub const DEFAULT_PORT: u16 = 8081;

/// 数据库连接配置（`DB_*` 环境变量）
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    /// 未设置时由驱动决定默认端口（postgres 5432 / mysql 3306）
    pub port: Option<u16>,
    pub user: String,
    pub password: String,
    pub database: String,
    /// DB_DRIVER: "postgres" / "mysql"，仅当两个驱动同时编译时需要
    pub driver: Option<String>,
}

impl DbConfig {
    /// 从环境变量读取，缺省值对应本地开发环境
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env_or("DB_HOST", "localhost"),
            port: parse_env_port("DB_PORT")?,
            user: env_or("DB_USER", "root"),
            password: env_or("DB_PASS", ""),
            database: env_or("DB_NAME", "daytab"),
            driver: env::var("DB_DRIVER").ok().filter(|v| !v.is_empty()),
        })
    }
}

/// HTTP 服务配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: parse_env_port("PORT")?.unwrap_or(DEFAULT_PORT),
        })
    }
}

/// 读取环境变量，空值视为未设置
fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// 解析端口号环境变量，非法值报 Config 错误
fn parse_env_port(key: &str) -> Result<Option<u16>> {
    match env::var(key) {
        Ok(v) if !v.is_empty() => v
            .parse::<u16>()
            .map(Some)
            .map_err(|_| DaytabError::config(format!("{key} must be a port number, got '{v}'"))),
        _ => Ok(None),
    }
}
