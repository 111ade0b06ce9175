//! 用例注册

use crate::tokens;
use crate::use_cases::{CreateBook, DeleteBook, GetBookById, ListBooks, SearchBooks, UpdateBook};
use di_abstractions::DiContainer;
use tracing::debug;

/// 注册六个图书用例，它们都依赖 [`tokens::BOOK_REPOSITORY`]
pub fn register_use_cases<C: DiContainer>(container: &mut C) {
    container.register_with_dependencies::<ListBooks>(tokens::LIST_BOOKS, [tokens::BOOK_REPOSITORY]);
    container.register_with_dependencies::<GetBookById>(
        tokens::GET_BOOK_BY_ID,
        [tokens::BOOK_REPOSITORY],
    );
    container.register_with_dependencies::<CreateBook>(tokens::CREATE_BOOK, [tokens::BOOK_REPOSITORY]);
    container.register_with_dependencies::<UpdateBook>(tokens::UPDATE_BOOK, [tokens::BOOK_REPOSITORY]);
    container.register_with_dependencies::<DeleteBook>(tokens::DELETE_BOOK, [tokens::BOOK_REPOSITORY]);
    container.register_with_dependencies::<SearchBooks>(
        tokens::SEARCH_BOOKS,
        [tokens::BOOK_REPOSITORY],
    );
    debug!("已注册图书用例");
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bookstore_domain::{
        Book, BookFilter, BookPatch, BookRepository, RepositoryResult,
    };
    use di_impl::DiContainerImpl;
    use std::sync::Arc;

    struct EmptyRepository;

    #[async_trait]
    impl BookRepository for EmptyRepository {
        async fn find_all(&self) -> RepositoryResult<Vec<Book>> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _id: &str) -> RepositoryResult<Option<Book>> {
            Ok(None)
        }

        async fn save(&self, book: Book) -> RepositoryResult<Book> {
            Ok(book)
        }

        async fn update(&self, _id: &str, _patch: BookPatch) -> RepositoryResult<Option<Book>> {
            Ok(None)
        }

        async fn delete(&self, _id: &str) -> RepositoryResult<bool> {
            Ok(false)
        }

        async fn find_by(&self, _filter: &BookFilter) -> RepositoryResult<Vec<Book>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_use_cases_share_repository() {
        let mut container = DiContainerImpl::new();
        container.register_factory(tokens::BOOK_REPOSITORY, || {
            Arc::new(EmptyRepository) as Arc<dyn BookRepository>
        });
        register_use_cases(&mut container);

        assert!(container.validate().is_ok());

        let list = container.resolve::<Arc<ListBooks>>(tokens::LIST_BOOKS).unwrap();
        assert!(list.execute().await.unwrap().is_empty());

        for token in [
            tokens::GET_BOOK_BY_ID,
            tokens::CREATE_BOOK,
            tokens::UPDATE_BOOK,
            tokens::DELETE_BOOK,
            tokens::SEARCH_BOOKS,
        ] {
            assert!(container.is_registered(token));
        }
        container
            .resolve::<Arc<SearchBooks>>(tokens::SEARCH_BOOKS)
            .unwrap();

        assert_eq!(container.stats().factory_invocations, 1);
    }
}
