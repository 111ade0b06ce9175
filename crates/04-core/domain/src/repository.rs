//! 图书仓储端口

use crate::book::{Book, BookFilter, BookPatch};
use crate::errors::RepositoryResult;
use async_trait::async_trait;

/// 图书仓储
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 全部图书
    async fn find_all(&self) -> RepositoryResult<Vec<Book>>;

    /// 按标识查找
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Book>>;

    /// 保存图书，同一标识的已有记录会被替换
    async fn save(&self, book: Book) -> RepositoryResult<Book>;

    /// 部分更新，图书不存在时返回 `None`
    async fn update(&self, id: &str, patch: BookPatch) -> RepositoryResult<Option<Book>>;

    /// 删除图书，返回是否删除了记录
    async fn delete(&self, id: &str) -> RepositoryResult<bool>;

    /// 按条件查询
    async fn find_by(&self, filter: &BookFilter) -> RepositoryResult<Vec<Book>>;
}
