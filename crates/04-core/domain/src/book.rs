//! 图书模型

use serde::{Deserialize, Serialize};

/// 图书
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// UUID 字符串标识
    pub id: String,
    /// 标题
    pub title: String,
    /// 作者
    pub author: String,
    /// 价格
    pub price: f64,
}

impl Book {
    /// 用给定字段创建图书
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            price,
        }
    }
}

/// 待创建的图书，尚未分配标识
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    /// 标题
    pub title: String,
    /// 作者
    pub author: String,
    /// 价格
    pub price: f64,
}

impl NewBook {
    /// 使用给定标识生成图书
    pub fn into_book(self, id: impl Into<String>) -> Book {
        Book {
            id: id.into(),
            title: self.title,
            author: self.author,
            price: self.price,
        }
    }
}

/// 图书部分更新
///
/// 仅覆盖设置了的字段，标识永远不会被修改。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPatch {
    /// 新标题
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// 新作者
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// 新价格
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl BookPatch {
    /// 把更新合并到图书上
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(price) = self.price {
            book.price = price;
        }
    }

    /// 是否没有任何字段需要更新
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.price.is_none()
    }
}

/// 图书查询条件
///
/// 标题和作者按不区分大小写的子串匹配，价格按精确值匹配；
/// 未设置的字段匹配所有图书。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    /// 标题子串
    pub title: Option<String>,
    /// 作者子串
    pub author: Option<String>,
    /// 精确价格
    pub price: Option<f64>,
}

impl BookFilter {
    /// 图书是否满足所有已设置的条件
    pub fn matches(&self, book: &Book) -> bool {
        let contains = |haystack: &str, needle: &str| {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        };

        self.title
            .as_deref()
            .map_or(true, |title| contains(&book.title, title))
            && self
                .author
                .as_deref()
                .map_or(true, |author| contains(&book.author, author))
            && self.price.map_or(true, |price| book.price == price)
    }

    /// 是否没有任何条件
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.price.is_none()
    }
}
