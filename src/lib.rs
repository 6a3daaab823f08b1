//! Books API: validated CRUD over book records stored in PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::Book;
pub use repository::{BookRepository, MemoryBookRepository, PgBookRepository};
pub use response::ValidationEnvelope;
pub use routes::{app, book_routes, common_routes};
pub use service::{BookValidator, Violation, BOOK_FIELDS};
pub use state::AppState;
pub use store::{connect, ensure_books_table, ensure_database_exists};
