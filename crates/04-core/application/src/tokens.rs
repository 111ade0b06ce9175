//! 服务令牌

/// 图书仓储
pub const BOOK_REPOSITORY: &str = "BookRepository";
/// 列出图书用例
pub const LIST_BOOKS: &str = "ListBooks";
/// 按标识获取图书用例
pub const GET_BOOK_BY_ID: &str = "GetBookById";
/// 创建图书用例
pub const CREATE_BOOK: &str = "CreateBook";
/// 更新图书用例
pub const UPDATE_BOOK: &str = "UpdateBook";
/// 删除图书用例
pub const DELETE_BOOK: &str = "DeleteBook";
/// 查询图书用例
pub const SEARCH_BOOKS: &str = "SearchBooks";
/// 图书控制器
pub const BOOK_CONTROLLER: &str = "BookController";
/// SQLite 连接选项
pub const SQLITE_OPTIONS: &str = "SqliteOptions";
