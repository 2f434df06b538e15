//! Loan (borrow record) model and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A borrow record tying a book to a borrower.
///
/// `book_title` and `borrower_name` are snapshots taken at borrow time for
/// the historical record; they are not updated if the underlying entities
/// change later.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRecord {
    pub id: i32,
    pub book_id: i32,
    pub borrower_id: i32,
    pub book_title: String,
    pub borrower_name: String,
    pub borrow_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    /// false while the loan is active; flips to true exactly once
    pub returned: bool,
    /// Set at return time, absent before
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<DateTime<Utc>>,
}

/// Create loan (borrow) request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoan {
    pub book_id: Option<i32>,
    pub borrower_id: Option<i32>,
    /// Loan period in days; the configured default applies when omitted
    pub days_to_return: Option<i64>,
}
