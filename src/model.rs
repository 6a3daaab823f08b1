//! The book record, the only entity served by the API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored book. Every field is required; `isbn` is the caller-supplied key and never changes after create.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Book {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i64,
    pub publisher: String,
    pub title: String,
    pub year: i64,
}
