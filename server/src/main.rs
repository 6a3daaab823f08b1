//! Books API server: reads config from the environment, opens the store, serves until Ctrl-C.
//!
//! Run from repo root: `cargo run -p books-server`
//! Without PostgreSQL: `BOOKS_STORE=memory cargo run -p books-server`

use books_api::{
    app, connect, ensure_books_table, ensure_database_exists, AppState, MemoryBookRepository, PgBookRepository,
    ServerConfig, StoreKind,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("books_api=info,books_server=info,tower_http=info")
            }),
        )
        .init();

    let (state, pool) = match config.store {
        StoreKind::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = connect(&config).await?;
            ensure_books_table(&pool).await?;
            (AppState::new(PgBookRepository::new(pool.clone())), Some(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            (AppState::new(MemoryBookRepository::new()), None)
        }
    };

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("books api listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state, config.body_limit))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("database pool closed");
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
