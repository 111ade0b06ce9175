//! SQLite 连接选项

/// SQLite 连接选项，由组合层以工厂形式注册
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteOptions {
    /// 数据库地址，例如 `sqlite::memory:` 或 `sqlite://bookstore.db`
    pub database_url: String,
}

impl SqliteOptions {
    /// 使用给定的连接地址创建选项
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// 内存数据库
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }
}

impl Default for SqliteOptions {
    fn default() -> Self {
        Self::in_memory()
    }
}
