//! 书店服务端到端 HTTP 场景
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bookstore_application::tokens;
use config_impl::{BookstoreSettings, Environment, StorageBackend};
use di_abstractions::DiContainer;
use infrastructure_composition::Bootstrapper;
use serde_json::{json, Value};
use tower::ServiceExt;

const CLEAN_CODE_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

fn settings(backend: StorageBackend, database_url: &str) -> BookstoreSettings {
    let mut settings = BookstoreSettings::default();
    settings.environment = Environment::Test;
    settings.storage.backend = Some(backend);
    settings.storage.database_url = database_url.to_string();
    settings
}

fn app(settings: BookstoreSettings) -> Router {
    Bootstrapper::new(settings).bootstrap().unwrap().router()
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// 完整的增删改查流程，两种存储后端行为一致
async fn crud_scenario(app: Router) {
    let (status, books) = call(&app, "GET", "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(books.as_array().unwrap().len(), 2);

    let (status, created) = call(
        &app,
        "POST",
        "/books",
        Some(json!({ "title": "Refactoring", "author": "Martin Fowler", "price": 40 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, fetched) = call(&app, "GET", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = call(
        &app,
        "PUT",
        &format!("/books/{id}"),
        Some(json!({ "price": 42.5, "id": "ignored" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["price"], 42.5);
    assert_eq!(updated["title"], "Refactoring");

    let (status, found) = call(&app, "GET", "/books/search?author=fowler", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found.as_array().unwrap().len(), 1);

    let (status, found) = call(&app, "GET", "/books/search?price=30", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found[0]["id"], CLEAN_CODE_ID);

    let (status, body) = call(&app, "DELETE", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = call(&app, "GET", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Book not found" }));

    let (status, body) = call(&app, "DELETE", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Book not found");

    let (status, body) = call(
        &app,
        "POST",
        "/books",
        Some(json!({ "title": "Untitled", "author": "Nobody" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Title, author, and price are required" }));
}

#[tokio::test]
async fn test_memory_backend_scenario() {
    crud_scenario(app(settings(StorageBackend::Memory, ""))).await;
}

#[tokio::test]
async fn test_sqlite_backend_scenario() {
    crud_scenario(app(settings(StorageBackend::Sqlite, "sqlite::memory:"))).await;
}

#[tokio::test]
async fn test_production_defaults_to_memory() {
    let mut settings = BookstoreSettings::default();
    settings.environment = Environment::Production;

    let application = Bootstrapper::new(settings).bootstrap().unwrap();
    assert_eq!(application.settings().storage_backend(), StorageBackend::Memory);
    assert!(!application.container().is_registered(tokens::SQLITE_OPTIONS));
}

#[tokio::test]
async fn test_sqlite_file_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("bookstore.db").display());

    let first = app(settings(StorageBackend::Sqlite, &url));
    let (status, _) = call(
        &first,
        "POST",
        "/books",
        Some(json!({ "title": "Domain-Driven Design", "author": "Eric Evans", "price": 55 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    drop(first);

    let second = app(settings(StorageBackend::Sqlite, &url));
    let (_, books) = call(&second, "GET", "/books/search?author=evans", None).await;
    assert_eq!(books.as_array().unwrap().len(), 1);
}
