//! Book schema validation. Produces typed violations; text is rendered only through `Display`.

use crate::error::AppError;
use serde_json::Value;
use std::fmt;

/// Declared JSON type of a schema field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
        }
    }

    /// No coercion: `"999"` is not an integer and `null` matches nothing.
    fn matches(&self, v: &Value) -> bool {
        match self {
            FieldType::String => v.is_string(),
            FieldType::Integer => as_integer(v).is_some(),
        }
    }
}

/// A JSON number with no fractional part that fits in `i64`. `999.0` counts, `2022.5` does not.
fn as_integer(v: &Value) -> Option<i64> {
    if let Some(n) = v.as_i64() {
        return Some(n);
    }
    let f = v.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema fields in the order violations are reported.
pub const BOOK_FIELDS: [(&str, FieldType); 8] = [
    ("author", FieldType::String),
    ("isbn", FieldType::String),
    ("language", FieldType::String),
    ("pages", FieldType::Integer),
    ("publisher", FieldType::String),
    ("title", FieldType::String),
    ("year", FieldType::Integer),
    ("amazon_url", FieldType::String),
];

/// One schema non-conformance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    NotAnObject,
    MissingProperty { field: &'static str },
    WrongType { field: &'static str, expected: FieldType },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NotAnObject => f.write_str("instance is not of a type(s) object"),
            Violation::MissingProperty { field } => write!(f, "instance requires property \"{}\"", field),
            Violation::WrongType { field, expected } => {
                write!(f, "instance.{} is not of a type(s) {}", field, expected)
            }
        }
    }
}

pub struct BookValidator;

impl BookValidator {
    /// Collect every violation of the book schema. Missing properties come first, then type
    /// mismatches, each group in `BOOK_FIELDS` order. Unknown fields are ignored.
    pub fn validate(candidate: &Value) -> Vec<Violation> {
        let Some(obj) = candidate.as_object() else {
            return vec![Violation::NotAnObject];
        };
        let mut violations = Vec::new();
        let mut mistyped = Vec::new();
        for &(field, expected) in BOOK_FIELDS.iter() {
            match obj.get(field) {
                None => violations.push(Violation::MissingProperty { field }),
                Some(v) if !expected.matches(v) => mistyped.push(Violation::WrongType { field, expected }),
                Some(_) => {}
            }
        }
        violations.extend(mistyped);
        violations
    }

    /// Rewrite whole-valued floats in integer fields (`999.0`) as plain integers so the body
    /// deserializes into a [`crate::model::Book`]. Call after a successful check.
    pub fn normalize(candidate: &mut Value) {
        let Some(obj) = candidate.as_object_mut() else {
            return;
        };
        for &(field, expected) in BOOK_FIELDS.iter() {
            if expected != FieldType::Integer {
                continue;
            }
            if let Some(v) = obj.get_mut(field) {
                if let Some(n) = as_integer(v) {
                    *v = Value::from(n);
                }
            }
        }
    }

    /// Same as [`BookValidator::validate`] but as a `Result` for handlers.
    pub fn check(candidate: &Value) -> Result<(), AppError> {
        let violations = Self::validate(candidate);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kibble() -> Value {
        json!({
            "isbn": "12345678",
            "amazon_url": "http://a.co/abcde",
            "author": "Sadie Kat",
            "language": "french",
            "pages": 999,
            "publisher": "Meow Press",
            "title": "I Want Kibble",
            "year": 2022
        })
    }

    fn rendered(v: &Value) -> Vec<String> {
        BookValidator::validate(v).iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_valid_book_has_no_violations() {
        assert!(BookValidator::validate(&kibble()).is_empty());
        assert!(BookValidator::check(&kibble()).is_ok());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut book = kibble();
        book["edition"] = json!("first");
        assert!(BookValidator::validate(&book).is_empty());
    }

    #[test]
    fn test_missing_title() {
        let mut book = kibble();
        book.as_object_mut().unwrap().remove("title");
        assert_eq!(rendered(&book), vec!["instance requires property \"title\""]);
    }

    #[test]
    fn test_wrong_types_are_aggregated_in_field_order() {
        let mut book = kibble();
        book["pages"] = json!("999");
        book["language"] = json!(54);
        assert_eq!(
            rendered(&book),
            vec![
                "instance.language is not of a type(s) string",
                "instance.pages is not of a type(s) integer",
            ]
        );
    }

    #[test]
    fn test_empty_object_reports_every_field_once() {
        let violations = BookValidator::validate(&json!({}));
        assert_eq!(violations.len(), BOOK_FIELDS.len());
        for (v, (field, _)) in violations.iter().zip(BOOK_FIELDS.iter()) {
            assert_eq!(v, &Violation::MissingProperty { field: *field });
        }
    }

    #[test]
    fn test_missing_before_mistyped() {
        let book = json!({
            "isbn": 1,
            "amazon_url": "http://a.co/abcde",
            "language": "french",
            "pages": 10,
            "publisher": "Meow Press",
            "title": "I Want Kibble",
            "year": "2022"
        });
        assert_eq!(
            rendered(&book),
            vec![
                "instance requires property \"author\"",
                "instance.isbn is not of a type(s) string",
                "instance.year is not of a type(s) integer",
            ]
        );
    }

    #[test]
    fn test_null_and_fraction_are_type_violations() {
        let mut book = kibble();
        book["author"] = Value::Null;
        book["year"] = json!(2022.5);
        assert_eq!(
            BookValidator::validate(&book),
            vec![
                Violation::WrongType { field: "author", expected: FieldType::String },
                Violation::WrongType { field: "year", expected: FieldType::Integer },
            ]
        );
    }

    #[test]
    fn test_whole_float_is_an_integer() {
        let mut book = kibble();
        book["pages"] = json!(999.0);
        assert!(BookValidator::validate(&book).is_empty());
    }

    #[test]
    fn test_fractional_year_is_rejected() {
        let mut book = kibble();
        book["year"] = json!(2022.5);
        assert_eq!(rendered(&book), vec!["instance.year is not of a type(s) integer"]);
    }

    #[test]
    fn test_out_of_range_float_is_rejected() {
        let mut book = kibble();
        book["pages"] = json!(1e20);
        assert_eq!(rendered(&book), vec!["instance.pages is not of a type(s) integer"]);
    }

    #[test]
    fn test_normalize_rewrites_whole_floats() {
        let mut book = kibble();
        book["pages"] = json!(999.0);
        book["year"] = json!(2022.0);
        BookValidator::normalize(&mut book);
        assert_eq!(book, kibble());
        let parsed: crate::model::Book = serde_json::from_value(book).unwrap();
        assert_eq!(parsed.pages, 999);
        assert_eq!(parsed.year, 2022);
    }

    #[test]
    fn test_non_object_body() {
        assert_eq!(rendered(&json!([1, 2])), vec!["instance is not of a type(s) object"]);
        assert!(matches!(
            BookValidator::check(&json!("book")),
            Err(AppError::Validation(v)) if v == vec![Violation::NotAnObject]
        ));
    }
}
