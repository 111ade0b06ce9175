//! 应用层错误类型

use bookstore_domain::RepositoryError;
use thiserror::Error;

/// 用例执行错误
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("仓储操作失败: {source}")]
    Repository {
        #[from]
        source: RepositoryError,
    },
}

/// 用例执行结果
pub type ApplicationResult<T> = Result<T, ApplicationError>;
