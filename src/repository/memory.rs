//! In-process repository. Keeps insertion order and enforces isbn uniqueness like the table does.

use super::BookRepository;
use crate::error::AppError;
use crate::model::Book;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn list(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.books.read().await.clone())
    }

    async fn get(&self, isbn: &str) -> Result<Option<Book>, AppError> {
        Ok(self.books.read().await.iter().find(|b| b.isbn == isbn).cloned())
    }

    async fn create(&self, book: &Book) -> Result<Book, AppError> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.isbn == book.isbn) {
            return Err(AppError::Store(format!(
                "duplicate key value violates unique constraint on isbn {}",
                book.isbn
            )));
        }
        books.push(book.clone());
        Ok(book.clone())
    }

    async fn update(&self, isbn: &str, book: &Book) -> Result<Option<Book>, AppError> {
        let mut books = self.books.write().await;
        let Some(slot) = books.iter_mut().find(|b| b.isbn == isbn) else {
            return Ok(None);
        };
        *slot = Book {
            isbn: slot.isbn.clone(),
            ..book.clone()
        };
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, isbn: &str) -> Result<bool, AppError> {
        let mut books = self.books.write().await;
        match books.iter().position(|b| b.isbn == isbn) {
            Some(idx) => {
                books.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
