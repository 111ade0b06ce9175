//! 书店服务设置

use serde::{Deserialize, Serialize};
use std::fmt;

/// 运行环境
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// 开发环境
    #[default]
    Development,
    /// 生产环境
    Production,
    /// 测试环境
    Test,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        };
        f.write_str(name)
    }
}

/// 图书存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// 进程内存
    Memory,
    /// SQLite 数据库
    Sqlite,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::Sqlite => f.write_str("sqlite"),
        }
    }
}

/// HTTP 服务设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// 监听主机
    pub host: String,
    /// 监听端口
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerSettings {
    /// 监听地址 `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 存储设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// 未设置时按运行环境选择
    pub backend: Option<StorageBackend>,
    /// SQLite 连接地址
    pub database_url: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: None,
            database_url: "sqlite::memory:".to_string(),
        }
    }
}

/// 日志设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// 日志级别：trace、debug、info、warn、error
    pub level: String,
    /// 是否输出 JSON 格式
    pub json: bool,
    /// 是否显示日志目标
    pub show_target: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            show_target: true,
        }
    }
}

/// 书店服务设置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookstoreSettings {
    /// 运行环境
    pub environment: Environment,
    /// HTTP 服务设置
    pub server: ServerSettings,
    /// 存储设置
    pub storage: StorageSettings,
    /// 日志设置
    pub logging: LoggingSettings,
}

impl BookstoreSettings {
    /// 实际使用的存储后端
    ///
    /// 显式配置优先；否则生产环境使用内存存储，其他环境使用 SQLite。
    pub fn storage_backend(&self) -> StorageBackend {
        self.storage.backend.unwrap_or(match self.environment {
            Environment::Production => StorageBackend::Memory,
            Environment::Development | Environment::Test => StorageBackend::Sqlite,
        })
    }
}
