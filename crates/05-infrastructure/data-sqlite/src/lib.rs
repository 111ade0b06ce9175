//! # SQLite 图书仓储
//!
//! 基于 sqlx 的单表图书存储。表结构在首次访问时创建，表为空时写入初始目录。

mod options;
mod repository;

pub use options::SqliteOptions;
pub use repository::SqliteBookRepository;
