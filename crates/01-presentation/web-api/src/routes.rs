//! 路由

use crate::controller::{BookController, CreateBookRequest};
use crate::error::{ApiError, ApiResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use bookstore_application::SearchCriteria;
use bookstore_domain::{Book, BookPatch};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 对外暴露的接口
pub const ENDPOINTS: [(&str, &str); 6] = [
    ("GET", "/books"),
    ("GET", "/books/search"),
    ("GET", "/books/:id"),
    ("POST", "/books"),
    ("PUT", "/books/:id"),
    ("DELETE", "/books/:id"),
];

type Controller = State<Arc<BookController>>;

/// 构建图书路由
pub fn router(controller: Arc<BookController>) -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/search", get(search_books))
        .route(
            "/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(controller)
}

async fn list_books(State(controller): Controller) -> ApiResult<Json<Vec<Book>>> {
    controller.get_all().await.map(Json)
}

async fn search_books(
    State(controller): Controller,
    Query(criteria): Query<SearchCriteria>,
) -> ApiResult<Json<Vec<Book>>> {
    controller.search(criteria).await.map(Json)
}

async fn get_book(
    State(controller): Controller,
    Path(id): Path<String>,
) -> ApiResult<Json<Book>> {
    controller.get_by_id(&id).await.map(Json)
}

async fn create_book(
    State(controller): Controller,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    // 无法解析的请求体按字段缺失处理
    let request = payload.map(|Json(request)| request).unwrap_or_default();
    let book = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn update_book(
    State(controller): Controller,
    Path(id): Path<String>,
    payload: Result<Json<BookPatch>, JsonRejection>,
) -> ApiResult<Json<Book>> {
    let Json(patch) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    controller.update(&id, patch).await.map(Json)
}

async fn delete_book(
    State(controller): Controller,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    controller.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
