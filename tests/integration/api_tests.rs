//! API integration tests

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf_server::{api::create_router, AppConfig, AppState};

fn app() -> Router {
    create_router(AppState::new(AppConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(raw) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(raw.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, value)
}

async fn quantity_of(app: &Router, id: &str) -> i64 {
    let (status, body) = send(app, Method::GET, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    body["quantity"].as_i64().expect("No quantity in response")
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 3);
}

#[tokio::test]
async fn test_list_seeded_books() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/books", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": "1", "title": "In Search of Lost Time", "author": "Marcel Proust", "quantity": 2},
            {"id": "2", "title": "The Great Gatsby", "author": "F. Scott Fitzgerald", "quantity": 5},
            {"id": "3", "title": "War and Peace", "author": "Leo Tolstoy", "quantity": 6}
        ])
    );
}

#[tokio::test]
async fn test_unseeded_catalog_is_empty() {
    let mut config = AppConfig::default();
    config.catalog.seed = false;
    let app = create_router(AppState::new(config));

    let (status, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_and_get_book() {
    let app = app();
    let new_book = json!({"id": "4", "title": "Dubliners", "author": "James Joyce", "quantity": 1});

    let (status, body) = send(&app, Method::POST, "/books", Some(&new_book.to_string())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, new_book);

    let (_, list) = send(&app, Method::GET, "/books", None).await;
    let list = list.as_array().expect("Expected an array");
    assert_eq!(list.len(), 4);
    assert_eq!(list[3], new_book);

    let (status, body) = send(&app, Method::GET, "/books/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, new_book);
}

#[tokio::test]
async fn test_create_without_content_type() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/books")
        .body(Body::from(r#"{"id": "9", "title": "Emma", "author": "Jane Austen", "quantity": 2}"#))
        .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(quantity_of(&app, "9").await, 2);
}

#[tokio::test]
async fn test_create_with_null_fields() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(r#"{"id": "10", "title": null, "quantity": 1}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": "10", "title": "", "author": "", "quantity": 1}));
}

#[tokio::test]
async fn test_create_malformed_body() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/books", Some("{\"id\": ")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (_, list) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(list.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_get_unknown_book() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/books/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "The requested book could not be found."}));
}

#[tokio::test]
async fn test_checkout_decrements() {
    let app = app();
    let (status, body) = send(&app, Method::PATCH, "/checkout?id=2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "2");
    assert_eq!(body["quantity"], 4);
    assert_eq!(quantity_of(&app, "2").await, 4);
}

#[tokio::test]
async fn test_checkout_missing_id() {
    let app = app();
    let (status, body) = send(&app, Method::PATCH, "/checkout", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Missing query parameter id"}));
}

#[tokio::test]
async fn test_checkout_unknown_and_empty_id() {
    let app = app();

    let (status, body) = send(&app, Method::PATCH, "/checkout?id=42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "The requested book could not be found."}));

    let (status, _) = send(&app, Method::PATCH, "/checkout?id=", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_return_missing_and_unknown_id() {
    let app = app();

    let (status, body) = send(&app, Method::PATCH, "/return", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Missing query parameter id"}));

    let (status, body) = send(&app, Method::PATCH, "/return?id=42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Book could not be found"}));
}

#[tokio::test]
async fn test_checkout_until_exhausted_then_return() {
    let app = app();

    for expected in [1, 0] {
        let (status, body) = send(&app, Method::PATCH, "/checkout?id=1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["quantity"], expected);
    }

    let (status, _) = send(&app, Method::PATCH, "/checkout?id=1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(quantity_of(&app, "1").await, 0);

    let (status, body) = send(&app, Method::PATCH, "/return?id=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Book returned successfully"}));
    assert_eq!(quantity_of(&app, "1").await, 1);
}

#[tokio::test]
async fn test_return_has_no_upper_bound() {
    let app = app();

    for _ in 0..3 {
        let (status, _) = send(&app, Method::PATCH, "/return?id=3", None).await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(quantity_of(&app, "3").await, 9);
}

#[tokio::test]
async fn test_openapi_document() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/books"].is_object());
    assert!(body["paths"]["/checkout"]["patch"].is_object());
}
