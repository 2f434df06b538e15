//! Book (catalog entry) model and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A catalog entry: one title with a total and an available copy count.
///
/// `available_copies` is maintained by the loan ledger and always equals
/// `copies` minus the number of active (unreturned) loans on this book.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    /// Total physical copies owned
    pub copies: i32,
    /// Copies not currently on loan
    pub available_copies: i32,
    pub category: String,
    pub description: String,
    pub date_added: DateTime<Utc>,
}

/// Create book request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: Option<String>,
    #[validate(length(min = 1, message = "ISBN must not be empty"))]
    pub isbn: Option<String>,
    pub copies: Option<i32>,
    /// Defaults to "General" when omitted
    pub category: Option<String>,
    /// Defaults to empty when omitted
    pub description: Option<String>,
}

/// Update book request. Only provided fields are applied; empty strings are
/// ignored except for `description`, which may be cleared explicitly.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub copies: Option<i32>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Book list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct BookListQuery {
    /// Free-text search on title, author, or ISBN (case-insensitive)
    pub q: Option<String>,
    /// Exact category match (case-insensitive)
    pub category: Option<String>,
    /// true: only books with available copies; false: only exhausted ones
    pub available: Option<bool>,
}

/// Advanced search query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct BookSearchQuery {
    /// Free-text search on title, author, ISBN, or description
    pub q: Option<String>,
    /// Exact category match (case-insensitive)
    pub category: Option<String>,
    /// Author substring match (case-insensitive)
    pub author: Option<String>,
    /// true: only books with available copies; false: only exhausted ones
    pub available: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_serializes_with_camel_case_fields() {
        let book = Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: "123".to_string(),
            copies: 2,
            available_copies: 1,
            category: "General".to_string(),
            description: String::new(),
            date_added: Utc::now(),
        };

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["availableCopies"], 1);
        assert!(json.get("dateAdded").is_some());
        assert!(json.get("available_copies").is_none());
    }
}
