//! Request-side services that run before the store is touched.

mod validation;
pub use validation::{BookValidator, FieldType, Violation, BOOK_FIELDS};
