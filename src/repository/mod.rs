//! Book persistence behind one trait so handlers never see the backing store.

mod memory;
mod postgres;

pub use memory::MemoryBookRepository;
pub use postgres::PgBookRepository;

use crate::error::AppError;
use crate::model::Book;
use async_trait::async_trait;

/// CRUD over books keyed by isbn. Every method is a single store round trip.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books in the order the store holds them.
    async fn list(&self) -> Result<Vec<Book>, AppError>;

    async fn get(&self, isbn: &str) -> Result<Option<Book>, AppError>;

    /// Insert a new row. A duplicate isbn surfaces as a store error.
    async fn create(&self, book: &Book) -> Result<Book, AppError>;

    /// Replace every field except the key. The row is located by `isbn`; `book.isbn` is ignored.
    async fn update(&self, isbn: &str, book: &Book) -> Result<Option<Book>, AppError>;

    /// Returns false when no row matched.
    async fn delete(&self, isbn: &str) -> Result<bool, AppError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
