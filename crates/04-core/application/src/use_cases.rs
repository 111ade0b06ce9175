//! 图书用例

use crate::criteria::SearchCriteria;
use crate::errors::ApplicationResult;
use bookstore_domain::{Book, BookPatch, BookRepository, NewBook};
use di_abstractions::{Dependencies, Injectable};
use infrastructure_common::DependencyResult;
use std::sync::Arc;
use tracing::{debug, info};

/// 为只依赖图书仓储的用例生成构造函数和注入实现
macro_rules! repository_use_case {
    ($name:ident) => {
        impl $name {
            /// 使用给定的图书仓储创建用例
            pub fn new(repository: Arc<dyn BookRepository>) -> Self {
                Self { repository }
            }
        }

        impl Injectable for $name {
            fn inject(dependencies: &mut Dependencies) -> DependencyResult<Self> {
                Ok(Self::new(dependencies.next()?))
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }
    };
}

/// 列出全部图书
pub struct ListBooks {
    repository: Arc<dyn BookRepository>,
}

repository_use_case!(ListBooks);

impl ListBooks {
    /// 返回全部图书
    pub async fn execute(&self) -> ApplicationResult<Vec<Book>> {
        Ok(self.repository.find_all().await?)
    }
}

/// 按标识获取图书
pub struct GetBookById {
    repository: Arc<dyn BookRepository>,
}

repository_use_case!(GetBookById);

impl GetBookById {
    /// 按标识查找图书
    pub async fn execute(&self, id: &str) -> ApplicationResult<Option<Book>> {
        Ok(self.repository.find_by_id(id).await?)
    }
}

/// 创建图书
pub struct CreateBook {
    repository: Arc<dyn BookRepository>,
}

repository_use_case!(CreateBook);

impl CreateBook {
    /// 分配新的 UUID v4 标识并保存
    pub async fn execute(&self, new_book: NewBook) -> ApplicationResult<Book> {
        let book = new_book.into_book(uuid::Uuid::new_v4().to_string());
        let saved = self.repository.save(book).await?;
        info!("创建图书: {} ({})", saved.title, saved.id);
        Ok(saved)
    }
}

/// 更新图书
pub struct UpdateBook {
    repository: Arc<dyn BookRepository>,
}

repository_use_case!(UpdateBook);

impl UpdateBook {
    /// 合并部分更新，图书不存在时返回 `None`
    pub async fn execute(&self, id: &str, patch: BookPatch) -> ApplicationResult<Option<Book>> {
        Ok(self.repository.update(id, patch).await?)
    }
}

/// 删除图书
pub struct DeleteBook {
    repository: Arc<dyn BookRepository>,
}

repository_use_case!(DeleteBook);

impl DeleteBook {
    /// 删除图书，返回是否确实删除
    pub async fn execute(&self, id: &str) -> ApplicationResult<bool> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            info!("删除图书: {}", id);
        }
        Ok(deleted)
    }
}

/// 按条件查询图书
pub struct SearchBooks {
    repository: Arc<dyn BookRepository>,
}

repository_use_case!(SearchBooks);

impl SearchBooks {
    /// 把原始条件转换为查询条件后查询
    pub async fn execute(&self, criteria: SearchCriteria) -> ApplicationResult<Vec<Book>> {
        let filter = criteria.into_filter();
        debug!("查询图书: {:?}", filter);
        Ok(self.repository.find_by(&filter).await?)
    }
}
