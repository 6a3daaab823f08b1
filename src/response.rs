//! Response bodies: book envelopes and the error formatter.

use crate::model::Book;
use crate::service::Violation;
use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookBody {
    pub book: Book,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BooksBody {
    pub books: Vec<Book>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

pub const BOOK_DELETED: &str = "Book deleted";

pub fn book_created(book: Book) -> (StatusCode, Json<BookBody>) {
    (StatusCode::CREATED, Json(BookBody { book }))
}

pub fn book_ok(book: Book) -> (StatusCode, Json<BookBody>) {
    (StatusCode::OK, Json(BookBody { book }))
}

pub fn books_ok(books: Vec<Book>) -> (StatusCode, Json<BooksBody>) {
    (StatusCode::OK, Json(BooksBody { books }))
}

pub fn book_deleted() -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: BOOK_DELETED.to_string(),
        }),
    )
}

/// 400 body for schema violations. The list is carried twice: under `error` and at the top level.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationEnvelope {
    pub error: ValidationDetail,
    pub message: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationDetail {
    pub message: Vec<String>,
    pub status: u16,
}

impl ValidationEnvelope {
    pub fn new(violations: &[Violation]) -> Self {
        let message: Vec<String> = violations.iter().map(ToString::to_string).collect();
        ValidationEnvelope {
            error: ValidationDetail {
                message: message.clone(),
                status: StatusCode::BAD_REQUEST.as_u16(),
            },
            message,
        }
    }
}

/// Minimal body for every non-validation error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub message: String,
    pub status: u16,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ErrorBody {
            error: ErrorDetail {
                message: message.into(),
                status: status.as_u16(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::FieldType;
    use serde_json::json;

    #[test]
    fn test_validation_envelope_shape() {
        let envelope = ValidationEnvelope::new(&[
            Violation::WrongType { field: "language", expected: FieldType::String },
            Violation::WrongType { field: "pages", expected: FieldType::Integer },
        ]);
        let expected = vec![
            "instance.language is not of a type(s) string",
            "instance.pages is not of a type(s) integer",
        ];
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "error": { "message": expected, "status": 400 },
                "message": expected
            })
        );
    }

    #[test]
    fn test_deleted_message() {
        let (status, Json(body)) = book_deleted();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "message": "Book deleted" }));
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody::new(StatusCode::NOT_FOUND, "Book not found");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "error": { "message": "Book not found", "status": 404 } })
        );
    }
}
