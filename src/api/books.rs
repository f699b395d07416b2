//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookIdQuery, MessageResponse},
};

use super::{ApiJson, ApiQuery};

fn require_id(query: BookIdQuery) -> AppResult<String> {
    query
        .id
        .ok_or_else(|| AppError::BadRequest("Missing query parameter id".to_string()))
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Every book in the catalog", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    Json(state.services.catalog.list_books().await)
}

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed JSON body", body = MessageResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    ApiJson(book): ApiJson<Book>,
) -> (StatusCode, Json<Book>) {
    let book = state.services.catalog.create_book(book).await;
    (StatusCode::CREATED, Json(book))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(&id).await?;
    Ok(Json(book))
}

/// Check out one copy of a book
#[utoipa::path(
    patch,
    path = "/checkout",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 200, description = "Updated book", body = Book),
        (status = 400, description = "Missing id", body = MessageResponse),
        (status = 404, description = "Book not found or no copies left", body = MessageResponse)
    )
)]
pub async fn checkout_book(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<BookIdQuery>,
) -> AppResult<Json<Book>> {
    let id = require_id(query)?;
    let book = state.services.catalog.checkout_book(&id).await?;
    Ok(Json(book))
}

/// Return one copy of a book
#[utoipa::path(
    patch,
    path = "/return",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 200, description = "Book returned", body = MessageResponse),
        (status = 400, description = "Missing id", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<BookIdQuery>,
) -> AppResult<Json<MessageResponse>> {
    let id = require_id(query)?;
    state.services.catalog.return_book(&id).await?;
    Ok(Json(MessageResponse::new("Book returned successfully")))
}
