//! 仓储错误类型

use thiserror::Error;

/// 仓储操作错误
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("存储错误: {message}")]
    Storage { message: String },

    #[error("数据库错误: {source}")]
    Database {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl RepositoryError {
    /// 创建存储错误
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// 包装数据库驱动错误
    pub fn database<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Database {
            source: source.into(),
        }
    }
}

/// 仓储操作结果
pub type RepositoryResult<T> = Result<T, RepositoryError>;
