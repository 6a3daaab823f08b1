//! OpenAPI description of the book API.

use crate::handlers::books;
use crate::model::Book;
use crate::response::{BookBody, BooksBody, ErrorBody, ErrorDetail, MessageBody, ValidationDetail, ValidationEnvelope};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(books::list, books::read, books::create, books::update, books::delete),
    components(schemas(
        Book,
        BookBody,
        BooksBody,
        MessageBody,
        ValidationEnvelope,
        ValidationDetail,
        ErrorBody,
        ErrorDetail
    )),
    tags((name = "books", description = "Book records keyed by ISBN"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_book_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/books"));
        assert!(doc.paths.paths.contains_key("/books/{isbn}"));
        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("Book"));
        assert!(schemas.contains_key("ValidationEnvelope"));
    }
}
