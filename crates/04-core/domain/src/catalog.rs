//! 初始图书目录

use crate::book::Book;

/// 《Clean Code》的固定标识
pub const CLEAN_CODE_ID: &str = "550e8400-e29b-41d4-a716-446655440000";
/// 《The Pragmatic Programmer》的固定标识
pub const PRAGMATIC_PROGRAMMER_ID: &str = "550e8400-e29b-41d4-a716-446655440001";

/// 新建仓储时写入的两本图书
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new(CLEAN_CODE_ID, "Clean Code", "Robert C. Martin", 30.0),
        Book::new(
            PRAGMATIC_PROGRAMMER_ID,
            "The Pragmatic Programmer",
            "Andrew Hunt",
            25.0,
        ),
    ]
}
