//! HTTP 错误映射

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bookstore_application::ApplicationError;
use thiserror::Error;
use tracing::error;

/// 接口错误
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Title, author, and price are required")]
    MissingFields,

    #[error("Book not found")]
    NotFound,

    #[error("{0}")]
    InvalidBody(String),

    #[error("Internal server error")]
    Internal {
        handler: &'static str,
        source: ApplicationError,
    },
}

impl ApiError {
    /// 把用例错误包装为指定处理器的内部错误
    pub fn internal(handler: &'static str) -> impl FnOnce(ApplicationError) -> Self {
        move |source| Self::Internal { handler, source }
    }

    /// 对应的 HTTP 状态码
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal { handler, source } = &self {
            error!("Error in BookController.{}: {}", handler, source);
        }

        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// 接口处理结果
pub type ApiResult<T> = Result<T, ApiError>;
