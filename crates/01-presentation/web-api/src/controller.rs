//! 图书控制器

use crate::error::{ApiError, ApiResult};
use bookstore_application::{
    CreateBook, DeleteBook, GetBookById, ListBooks, SearchBooks, SearchCriteria, UpdateBook,
};
use bookstore_domain::{Book, BookPatch, NewBook};
use di_abstractions::{Dependencies, Injectable};
use infrastructure_common::DependencyResult;
use serde::Deserialize;
use std::sync::Arc;

/// 请求体中的价格，可以是 JSON 数字或数字字符串
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    /// JSON 数字
    Number(f64),
    /// 字符串形式，例如 `"30"`
    Text(String),
}

impl PriceInput {
    /// 转换为数值，字符串无法完整解析时返回 `None`
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(price) => Some(*price),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// 创建图书请求体，字段缺失时返回 400
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBookRequest {
    /// 标题
    #[serde(default)]
    pub title: Option<String>,
    /// 作者
    #[serde(default)]
    pub author: Option<String>,
    /// 价格
    #[serde(default)]
    pub price: Option<PriceInput>,
}

impl CreateBookRequest {
    /// 标题、作者非空且价格为非零数字时转换为待创建图书
    pub fn validate(self) -> ApiResult<NewBook> {
        let price = self.price.as_ref().and_then(PriceInput::value);
        match (self.title, self.author, price) {
            (Some(title), Some(author), Some(price))
                if !title.is_empty() && !author.is_empty() && price != 0.0 && !price.is_nan() =>
            {
                Ok(NewBook {
                    title,
                    author,
                    price,
                })
            }
            _ => Err(ApiError::MissingFields),
        }
    }
}

/// 图书控制器，持有六个图书用例
pub struct BookController {
    list_books: Arc<ListBooks>,
    get_book_by_id: Arc<GetBookById>,
    create_book: Arc<CreateBook>,
    update_book: Arc<UpdateBook>,
    delete_book: Arc<DeleteBook>,
    search_books: Arc<SearchBooks>,
}

impl BookController {
    /// 创建控制器，参数顺序与依赖令牌一致
    pub fn new(
        list_books: Arc<ListBooks>,
        get_book_by_id: Arc<GetBookById>,
        create_book: Arc<CreateBook>,
        update_book: Arc<UpdateBook>,
        delete_book: Arc<DeleteBook>,
        search_books: Arc<SearchBooks>,
    ) -> Self {
        Self {
            list_books,
            get_book_by_id,
            create_book,
            update_book,
            delete_book,
            search_books,
        }
    }

    /// 列出全部图书
    pub async fn get_all(&self) -> ApiResult<Vec<Book>> {
        self.list_books
            .execute()
            .await
            .map_err(ApiError::internal("getAll"))
    }

    /// 按标识获取图书，不存在时返回 404
    pub async fn get_by_id(&self, id: &str) -> ApiResult<Book> {
        self.get_book_by_id
            .execute(id)
            .await
            .map_err(ApiError::internal("getById"))?
            .ok_or(ApiError::NotFound)
    }

    /// 校验请求体并创建图书
    pub async fn create(&self, request: CreateBookRequest) -> ApiResult<Book> {
        let new_book = request.validate()?;
        self.create_book
            .execute(new_book)
            .await
            .map_err(ApiError::internal("create"))
    }

    /// 部分更新图书，不存在时返回 404
    pub async fn update(&self, id: &str, patch: BookPatch) -> ApiResult<Book> {
        self.update_book
            .execute(id, patch)
            .await
            .map_err(ApiError::internal("update"))?
            .ok_or(ApiError::NotFound)
    }

    /// 删除图书，不存在时返回 404
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        let deleted = self
            .delete_book
            .execute(id)
            .await
            .map_err(ApiError::internal("delete"))?;
        if deleted {
            Ok(())
        } else {
            Err(ApiError::NotFound)
        }
    }

    /// 按条件查询图书
    pub async fn search(&self, criteria: SearchCriteria) -> ApiResult<Vec<Book>> {
        self.search_books
            .execute(criteria)
            .await
            .map_err(ApiError::internal("search"))
    }
}

impl Injectable for BookController {
    fn inject(dependencies: &mut Dependencies) -> DependencyResult<Self> {
        Ok(Self::new(
            dependencies.next()?,
            dependencies.next()?,
            dependencies.next()?,
            dependencies.next()?,
            dependencies.next()?,
            dependencies.next()?,
        ))
    }
}

impl std::fmt::Debug for BookController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookController").finish_non_exhaustive()
    }
}
