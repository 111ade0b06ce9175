//! # Bookstore Domain
//!
//! 书店领域层：图书模型、部分更新与查询条件值类型、仓储端口以及初始目录。

pub mod book;
pub mod catalog;
pub mod errors;
pub mod repository;

pub use book::*;
pub use errors::*;
pub use repository::*;
