//! HTTP handlers.

pub mod books;
