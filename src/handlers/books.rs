//! Book handlers: list, read, create, update, delete. Validation always runs before the repository.

use crate::error::AppError;
use crate::model::Book;
use crate::response::{
    book_created, book_deleted, book_ok, books_ok, BookBody, BooksBody, ErrorBody, MessageBody, ValidationEnvelope,
};
use crate::service::BookValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

/// Validate the raw body, then take it apart into a record. Unknown fields are dropped.
fn validated_book(mut body: Value) -> Result<Book, AppError> {
    BookValidator::check(&body)?;
    BookValidator::normalize(&mut body);
    serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))
}

#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses((status = 200, description = "All books", body = BooksBody))
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let books = state.books.list().await?;
    Ok(books_ok(books))
}

#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "The book", body = BookBody),
        (status = 404, description = "No book with this ISBN", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let book = state
        .books
        .get(&isbn)
        .await?
        .ok_or_else(|| AppError::NotFound(isbn))?;
    Ok(book_ok(book))
}

#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = BookBody),
        (status = 400, description = "Body does not match the book schema", body = ValidationEnvelope)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let book = validated_book(body)?;
    let created = state.books.create(&book).await?;
    tracing::info!(isbn = %created.isbn, "book created");
    Ok(book_created(created))
}

#[utoipa::path(
    put,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    request_body = Book,
    responses(
        (status = 200, description = "Book replaced", body = BookBody),
        (status = 400, description = "Body does not match the book schema", body = ValidationEnvelope),
        (status = 404, description = "No book with this ISBN", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let book = validated_book(body)?;
    let updated = state
        .books
        .update(&isbn, &book)
        .await?
        .ok_or_else(|| AppError::NotFound(isbn))?;
    Ok(book_ok(updated))
}

#[utoipa::path(
    delete,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Book deleted", body = MessageBody),
        (status = 404, description = "No book with this ISBN", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.books.delete(&isbn).await? {
        return Err(AppError::NotFound(isbn));
    }
    tracing::info!(isbn = %isbn, "book deleted");
    Ok(book_deleted())
}
