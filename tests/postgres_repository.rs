//! PostgreSQL repository tests.
//!
//! These need a disposable database: `DATABASE_URL=postgres://localhost/books_test cargo test -- --ignored`.
//! Each test works on its own isbn prefix so they can share one table.

use books_api::{connect, ensure_books_table, ensure_database_exists, AppError, Book, BookRepository, PgBookRepository, ServerConfig};

async fn repository() -> PgBookRepository {
    let config = ServerConfig::from_env().expect("valid test config");
    ensure_database_exists(&config.database_url).await.expect("database");
    let pool = connect(&config).await.expect("pool");
    ensure_books_table(&pool).await.expect("books table");
    PgBookRepository::new(pool)
}

fn book(isbn: &str) -> Book {
    Book {
        isbn: isbn.into(),
        amazon_url: "http://a.co/abcde".into(),
        author: "Sadie Kat".into(),
        language: "french".into(),
        pages: 999,
        publisher: "Meow Press".into(),
        title: "I Want Kibble".into(),
        year: 2022,
    }
}

async fn clear(repo: &PgBookRepository, prefix: &str) {
    sqlx::query("DELETE FROM books WHERE isbn LIKE $1")
        .bind(format!("{}%", prefix))
        .execute(repo.pool())
        .await
        .expect("cleanup");
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_crud_round_trip() {
    let repo = repository().await;
    clear(&repo, "pg-crud-").await;

    let created = repo.create(&book("pg-crud-1")).await.unwrap();
    assert_eq!(created, book("pg-crud-1"));
    assert_eq!(repo.get("pg-crud-1").await.unwrap(), Some(created));

    let mut changed = book("ignored");
    changed.title = "I Still Want Kibble".into();
    let updated = repo.update("pg-crud-1", &changed).await.unwrap().unwrap();
    assert_eq!(updated.isbn, "pg-crud-1");
    assert_eq!(updated.title, "I Still Want Kibble");

    assert!(repo.delete("pg-crud-1").await.unwrap());
    assert!(!repo.delete("pg-crud-1").await.unwrap());
    assert_eq!(repo.get("pg-crud-1").await.unwrap(), None);
    assert_eq!(repo.update("pg-crud-1", &changed).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_duplicate_isbn_is_db_error() {
    let repo = repository().await;
    clear(&repo, "pg-dup-").await;

    repo.create(&book("pg-dup-1")).await.unwrap();
    let err = repo.create(&book("pg-dup-1")).await.unwrap_err();
    assert!(matches!(err, AppError::Db(_)));
    assert!(repo.ping().await.is_ok());
    clear(&repo, "pg-dup-").await;
}
