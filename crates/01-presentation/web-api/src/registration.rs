//! 控制器注册

use crate::controller::BookController;
use bookstore_application::tokens;
use di_abstractions::DiContainer;

/// 注册图书控制器，依赖按构造参数顺序声明
pub fn register_controller<C: DiContainer>(container: &mut C) {
    container.register_with_dependencies::<BookController>(
        tokens::BOOK_CONTROLLER,
        [
            tokens::LIST_BOOKS,
            tokens::GET_BOOK_BY_ID,
            tokens::CREATE_BOOK,
            tokens::UPDATE_BOOK,
            tokens::DELETE_BOOK,
            tokens::SEARCH_BOOKS,
        ],
    );
}
