//! PostgreSQL-backed book repository.

use super::BookRepository;
use crate::error::AppError;
use crate::model::Book;
use async_trait::async_trait;
use sqlx::PgPool;

const SELECT_ALL: &str =
    "SELECT isbn, amazon_url, author, language, pages, publisher, title, year FROM books";
const SELECT_ONE: &str =
    "SELECT isbn, amazon_url, author, language, pages, publisher, title, year FROM books WHERE isbn = $1";
const INSERT: &str = "INSERT INTO books (isbn, amazon_url, author, language, pages, publisher, title, year) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
     RETURNING isbn, amazon_url, author, language, pages, publisher, title, year";
const UPDATE: &str = "UPDATE books SET amazon_url = $2, author = $3, language = $4, pages = $5, \
     publisher = $6, title = $7, year = $8 WHERE isbn = $1 \
     RETURNING isbn, amazon_url, author, language, pages, publisher, title, year";
const DELETE: &str = "DELETE FROM books WHERE isbn = $1 RETURNING isbn";

#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn list(&self) -> Result<Vec<Book>, AppError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let books = sqlx::query_as::<_, Book>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    async fn get(&self, isbn: &str) -> Result<Option<Book>, AppError> {
        tracing::debug!(sql = %SELECT_ONE, isbn = %isbn, "query");
        let book = sqlx::query_as::<_, Book>(SELECT_ONE)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    async fn create(&self, book: &Book) -> Result<Book, AppError> {
        tracing::debug!(sql = %INSERT, isbn = %book.isbn, "query");
        let created = sqlx::query_as::<_, Book>(INSERT)
            .bind(&book.isbn)
            .bind(&book.amazon_url)
            .bind(&book.author)
            .bind(&book.language)
            .bind(book.pages)
            .bind(&book.publisher)
            .bind(&book.title)
            .bind(book.year)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn update(&self, isbn: &str, book: &Book) -> Result<Option<Book>, AppError> {
        tracing::debug!(sql = %UPDATE, isbn = %isbn, "query");
        let updated = sqlx::query_as::<_, Book>(UPDATE)
            .bind(isbn)
            .bind(&book.amazon_url)
            .bind(&book.author)
            .bind(&book.language)
            .bind(book.pages)
            .bind(&book.publisher)
            .bind(&book.title)
            .bind(book.year)
            .fetch_optional(&self.pool)
            .await?;
        Ok(updated)
    }

    async fn delete(&self, isbn: &str) -> Result<bool, AppError> {
        tracing::debug!(sql = %DELETE, isbn = %isbn, "query");
        let deleted: Option<(String,)> = sqlx::query_as(DELETE)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?;
        Ok(deleted.is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
