//! SQLite 图书仓储实现

use crate::options::SqliteOptions;
use async_trait::async_trait;
use bookstore_domain::catalog::seed_books;
use bookstore_domain::{
    Book, BookFilter, BookPatch, BookRepository, RepositoryError, RepositoryResult,
};
use di_abstractions::{Dependencies, Injectable};
use infrastructure_common::{DependencyError, DependencyResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{FromRow, QueryBuilder, Sqlite};
use std::str::FromStr;
use tokio::sync::OnceCell;
use tracing::{debug, info};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    price REAL NOT NULL
)
"#;

const SELECT_BOOKS: &str = "SELECT id, title, author, price FROM books";

#[derive(Debug, FromRow)]
struct BookRow {
    id: String,
    title: String,
    author: String,
    price: f64,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: row.id,
            title: row.title,
            author: row.author,
            price: row.price,
        }
    }
}

fn database_error(error: sqlx::Error) -> RepositoryError {
    RepositoryError::database(error)
}

/// SQLite 图书仓储
///
/// 连接池只保留一个永不过期的连接，`sqlite::memory:` 的数据因此在仓储存活期间一直可见。
#[derive(Debug)]
pub struct SqliteBookRepository {
    pool: SqlitePool,
    schema: OnceCell<()>,
}

impl SqliteBookRepository {
    /// 创建仓储，连接在首次查询时建立
    pub fn connect(options: &SqliteOptions) -> RepositoryResult<Self> {
        if !options.database_url.starts_with("sqlite:") {
            return Err(RepositoryError::storage(format!(
                "不支持的数据库地址: {}",
                options.database_url
            )));
        }

        let connect_options = SqliteConnectOptions::from_str(&options.database_url)
            .map_err(database_error)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_lazy_with(connect_options);

        info!("创建 SQLite 图书仓储: {}", options.database_url);
        Ok(Self {
            pool,
            schema: OnceCell::new(),
        })
    }

    /// 关闭连接池
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn ready(&self) -> RepositoryResult<&SqlitePool> {
        self.schema
            .get_or_try_init(|| self.initialize())
            .await?;
        Ok(&self.pool)
    }

    async fn initialize(&self) -> RepositoryResult<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?;

        if count == 0 {
            let seeds = seed_books();
            debug!("写入初始目录: {} 本", seeds.len());
            for book in seeds {
                self.insert_or_replace(&book).await?;
            }
        }

        Ok(())
    }

    async fn insert_or_replace(&self, book: &Book) -> RepositoryResult<()> {
        sqlx::query("INSERT OR REPLACE INTO books (id, title, author, price) VALUES (?, ?, ?, ?)")
            .bind(&book.id)
            .bind(&book.title)
            .bind(&book.author)
            .bind(book.price)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;
        Ok(())
    }
}

impl Injectable for SqliteBookRepository {
    fn inject(dependencies: &mut Dependencies) -> DependencyResult<Self> {
        let options: SqliteOptions = dependencies.next()?;
        Self::connect(&options)
            .map_err(|e| DependencyError::creation_failed(std::any::type_name::<Self>(), e))
    }
}

#[async_trait]
impl BookRepository for SqliteBookRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Book>> {
        let pool = self.ready().await?;
        let rows = sqlx::query_as::<_, BookRow>(&format!("{SELECT_BOOKS} ORDER BY rowid"))
            .fetch_all(pool)
            .await
            .map_err(database_error)?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Book>> {
        let pool = self.ready().await?;
        let row = sqlx::query_as::<_, BookRow>(&format!("{SELECT_BOOKS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(database_error)?;
        Ok(row.map(Book::from))
    }

    async fn save(&self, book: Book) -> RepositoryResult<Book> {
        self.ready().await?;
        self.insert_or_replace(&book).await?;
        Ok(book)
    }

    async fn update(&self, id: &str, patch: BookPatch) -> RepositoryResult<Option<Book>> {
        let Some(mut book) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        patch.apply_to(&mut book);

        sqlx::query("UPDATE books SET title = ?, author = ?, price = ? WHERE id = ?")
            .bind(&book.title)
            .bind(&book.author)
            .bind(book.price)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(Some(book))
    }

    async fn delete(&self, id: &str) -> RepositoryResult<bool> {
        let pool = self.ready().await?;
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await
            .map_err(database_error)?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_by(&self, filter: &BookFilter) -> RepositoryResult<Vec<Book>> {
        let pool = self.ready().await?;

        let mut builder = QueryBuilder::<Sqlite>::new(SELECT_BOOKS);
        builder.push(" WHERE 1=1");
        if let Some(title) = &filter.title {
            builder.push(" AND title LIKE ").push_bind(format!("%{title}%"));
        }
        if let Some(author) = &filter.author {
            builder.push(" AND author LIKE ").push_bind(format!("%{author}%"));
        }
        if let Some(price) = filter.price {
            builder.push(" AND price = ").push_bind(price);
        }
        builder.push(" ORDER BY rowid");

        let rows = builder
            .build_query_as::<BookRow>()
            .fetch_all(pool)
            .await
            .map_err(database_error)?;
        Ok(rows.into_iter().map(Book::from).collect())
    }
}
