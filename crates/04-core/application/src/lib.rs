//! # Bookstore Application
//!
//! 书店应用层：六个图书用例、服务令牌目录以及用例注册。
//!
//! 每个用例只依赖 `Arc<dyn BookRepository>`，由容器按
//! [`tokens::BOOK_REPOSITORY`] 注入。

pub mod criteria;
pub mod errors;
pub mod registration;
pub mod tokens;
pub mod use_cases;

pub use criteria::SearchCriteria;
pub use errors::*;
pub use registration::register_use_cases;
pub use use_cases::*;
