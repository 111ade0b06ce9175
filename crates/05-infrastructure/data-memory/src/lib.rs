//! # 内存图书仓储
//!
//! 以 `Vec<Book>` 保存图书，进程退出后数据丢失。

use async_trait::async_trait;
use bookstore_domain::catalog::seed_books;
use bookstore_domain::{Book, BookFilter, BookPatch, BookRepository, RepositoryResult};
use di_abstractions::{Dependencies, Injectable};
use infrastructure_common::DependencyResult;
use parking_lot::RwLock;
use tracing::debug;

/// 内存图书仓储
#[derive(Debug)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    /// 创建带初始目录的仓储
    pub fn new() -> Self {
        Self::with_books(seed_books())
    }

    /// 使用给定图书创建仓储
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    /// 当前图书数量
    pub fn len(&self) -> usize {
        self.books.read().len()
    }

    /// 是否没有图书
    pub fn is_empty(&self) -> bool {
        self.books.read().is_empty()
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Injectable for InMemoryBookRepository {
    fn inject(_dependencies: &mut Dependencies) -> DependencyResult<Self> {
        debug!("创建内存图书仓储");
        Ok(Self::new())
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Book>> {
        Ok(self.books.read().clone())
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Book>> {
        Ok(self.books.read().iter().find(|book| book.id == id).cloned())
    }

    async fn save(&self, book: Book) -> RepositoryResult<Book> {
        let mut books = self.books.write();
        match books.iter_mut().find(|existing| existing.id == book.id) {
            Some(existing) => *existing = book.clone(),
            None => books.push(book.clone()),
        }
        Ok(book)
    }

    async fn update(&self, id: &str, patch: BookPatch) -> RepositoryResult<Option<Book>> {
        let mut books = self.books.write();
        Ok(books.iter_mut().find(|book| book.id == id).map(|book| {
            patch.apply_to(book);
            book.clone()
        }))
    }

    async fn delete(&self, id: &str) -> RepositoryResult<bool> {
        let mut books = self.books.write();
        match books.iter().position(|book| book.id == id) {
            Some(index) => {
                books.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_by(&self, filter: &BookFilter) -> RepositoryResult<Vec<Book>> {
        Ok(self
            .books
            .read()
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect())
    }
}
